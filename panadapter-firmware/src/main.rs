//! Panadapter - SDR front panel firmware
//!
//! Main firmware binary for RP2040-based front panels. Three tasks share
//! the work: a capture task publishing spectrum frames, a telemetry RX
//! task accumulating the decoded string, and the foreground panel task
//! driving the display and the user controls.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel as AdcChannel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::{UART0, UART1};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use panadapter_protocol::frame::MAX_FRAME_SIZE;
use panadapter_protocol::TEXT_COLS;

use crate::controls::{GpioModeSwitch, QuadratureEncoder};
use crate::tasks::panel::SERVICE_INTERVAL_MS;

mod channels;
mod controls;
mod display;
mod tasks;

/// Display link baud rate.
///
/// The panel's display writes are blocking, so the link must drain one
/// worst-case render inside a single service tick or the TX ring backs
/// up and `write_all` stalls the whole executor. The assert below keeps
/// the budget honest whenever the baud rate, tick period or frame
/// sizes change.
const DISPLAY_BAUD: u32 = 921_600;

// One spectrum frame plus the telemetry and status rows per tick,
// worst case; 8N1 puts ten bit times on the wire per byte
const WORST_CASE_RENDER_BYTES: usize = MAX_FRAME_SIZE + 2 * (6 + 2 + TEXT_COLS);
const _: () = assert!(
    WORST_CASE_RENDER_BYTES
        <= DISPLAY_BAUD as usize / 10 / 1000 * SERVICE_INTERVAL_MS as usize
);

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    UART1_IRQ => BufferedInterruptHandler<UART1>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

// Static cells for UART buffers (must live forever)
static DISPLAY_TX_BUF: StaticCell<[u8; 512]> = StaticCell::new();
static DISPLAY_RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static TELEM_TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static TELEM_RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Panadapter firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Display unit link on UART0 (TX-only traffic)
    let display_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = DISPLAY_BAUD;
        cfg
    };
    let display_uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, display_config);
    let display_uart = display_uart.into_buffered(
        Irqs,
        DISPLAY_TX_BUF.init([0u8; 512]),
        DISPLAY_RX_BUF.init([0u8; 16]),
    );
    let (display_tx, _display_rx) = display_uart.split();
    info!("Display link UART initialized");

    // Telemetry modem link on UART1
    let telem_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = 115200;
        cfg
    };
    let telem_uart = Uart::new_blocking(p.UART1, p.PIN_4, p.PIN_5, telem_config);
    let telem_uart = telem_uart.into_buffered(
        Irqs,
        TELEM_TX_BUF.init([0u8; 16]),
        TELEM_RX_BUF.init([0u8; 256]),
    );
    let (_telem_tx, telem_rx) = telem_uart.split();
    info!("Telemetry UART initialized");

    // Audio line sampling for the spectrum trace (GPIO26 = ADC0)
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let audio_in = AdcChannel::new_pin(p.PIN_26, Pull::None);
    info!("ADC initialized");

    // Front panel controls
    // Pin assignments are board-specific (reference panel wiring)
    let mode_switch = GpioModeSwitch::new(
        "mode",
        Input::new(p.PIN_10, Pull::Up),
        Input::new(p.PIN_11, Pull::Up),
    );
    let filter_switch = GpioModeSwitch::new(
        "filter",
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
    );
    let vfo = QuadratureEncoder::new(
        "vfo",
        Input::new(p.PIN_14, Pull::Up),
        Input::new(p.PIN_15, Pull::Up),
        100,        // step (Hz)
        14_060_000, // power-on frequency
    );
    let rit = QuadratureEncoder::new(
        "rit",
        Input::new(p.PIN_16, Pull::Up),
        Input::new(p.PIN_17, Pull::Up),
        10,
        0,
    );
    let link_sense = Input::new(p.PIN_18, Pull::Down);
    info!("Controls initialized");

    spawner.spawn(tasks::capture_task(adc, audio_in)).unwrap();
    spawner.spawn(tasks::telemetry_rx_task(telem_rx)).unwrap();
    spawner
        .spawn(tasks::panel_task(
            display_tx,
            mode_switch,
            filter_switch,
            vfo,
            rit,
            link_sense,
        ))
        .unwrap();

    info!("All tasks spawned");
}
