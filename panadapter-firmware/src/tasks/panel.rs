//! Foreground panel task
//!
//! Runs the cooperative loop from `panadapter-core`: spectrum refresh,
//! telemetry readout, link status, switch and encoder polling. One
//! iteration per tick; no step inside an iteration ever waits.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_rp::uart::BufferedUartTx;
use embassy_time::{Duration, Ticker};

use panadapter_core::panel::Panel;
use panadapter_core::traits::{ModeSwitch, TelemetryIndicator, TuningEncoder};

use crate::channels::{SPECTRUM_FRAMES, TELEMETRY};
use crate::controls::{GpioModeSwitch, QuadratureEncoder};
use crate::display::UartDisplay;

/// Loop period in milliseconds; capture blocks arrive slower than this
pub const SERVICE_INTERVAL_MS: u64 = 10;

/// Link presence sensed from the telemetry modem's status pin
struct LinkSense {
    pin: Input<'static>,
}

impl TelemetryIndicator for LinkSense {
    fn is_active(&self) -> bool {
        self.pin.is_high()
    }
}

/// Panel task - the foreground loop
#[embassy_executor::task]
pub async fn panel_task(
    tx: BufferedUartTx,
    mut mode_switch: GpioModeSwitch,
    mut filter_switch: GpioModeSwitch,
    mut vfo: QuadratureEncoder,
    mut rit: QuadratureEncoder,
    link_pin: Input<'static>,
) {
    info!("Panel task started");

    let mut display = UartDisplay::new(tx);
    display.clear();

    let link = LinkSense { pin: link_pin };
    let mut panel = Panel::<2>::new(&SPECTRUM_FRAMES, &TELEMETRY);

    let mut ticker = Ticker::every(Duration::from_millis(SERVICE_INTERVAL_MS));

    loop {
        {
            let switches: &mut [&mut dyn ModeSwitch] =
                &mut [&mut mode_switch, &mut filter_switch];
            let encoders: &mut [&mut dyn TuningEncoder] = &mut [&mut vfo, &mut rit];
            panel.service(&mut display, switches, encoders, &link);
        }
        ticker.next().await;
    }
}
