//! Telemetry UART receive task
//!
//! The external modem sends the decoded telemetry string one byte at a
//! time; every byte goes straight into the sliding receive window.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use crate::channels::TELEMETRY;

/// Telemetry RX task - feeds received bytes into the sliding window
#[embassy_executor::task]
pub async fn telemetry_rx_task(mut rx: BufferedUartRx) {
    info!("Telemetry RX task started");

    let mut buf = [0u8; 16];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);
                for &byte in &buf[..n] {
                    TELEMETRY.push(byte);
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
