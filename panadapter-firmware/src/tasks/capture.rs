//! Spectrum capture task
//!
//! Reads one block of audio-line samples per cycle and publishes the
//! resulting magnitude frame into the mailbox. The publish is the only
//! obligation toward the panel loop; an unconsumed frame is displaced,
//! never queued.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel, Error as AdcError};
use embassy_time::{Duration, Ticker};

use panadapter_core::spectrum::{MagnitudeFrame, SPECTRUM_BINS};

use crate::channels::SPECTRUM_FRAMES;

/// Midscale of the 12-bit ADC; the audio line is biased to half rail
const ADC_MIDSCALE: i32 = 2048;

/// Capture block period. Twenty traces a second is more than the
/// display usefully shows; free-running would only displace its own
/// frames and burn CPU.
const CAPTURE_INTERVAL_MS: u64 = 50;

/// Capture task - produces magnitude frames for the spectrum trace
#[embassy_executor::task]
pub async fn capture_task(mut adc: Adc<'static, Async>, mut audio_in: Channel<'static>) {
    info!("Capture task started");

    let mut displaced: u32 = 0;
    let mut ticker = Ticker::every(Duration::from_millis(CAPTURE_INTERVAL_MS));

    loop {
        match read_block(&mut adc, &mut audio_in).await {
            Ok(frame) => {
                if SPECTRUM_FRAMES.publish(frame) {
                    displaced = displaced.wrapping_add(1);
                    trace!("panel lagging, frame displaced (total {})", displaced);
                }
            }
            Err(_) => {
                warn!("ADC read error, block dropped");
            }
        }
        ticker.next().await;
    }
}

/// Read one block of samples and rectify them into magnitude bins.
///
/// Boards with the full radio DSP chain publish FFT magnitudes here
/// instead; the bare-board build shows the rectified line level per bin.
async fn read_block(
    adc: &mut Adc<'static, Async>,
    audio_in: &mut Channel<'static>,
) -> Result<MagnitudeFrame, AdcError> {
    let mut bins = [0.0f32; SPECTRUM_BINS];
    for bin in bins.iter_mut() {
        let sample = adc.read(audio_in).await?;
        *bin = (sample as i32 - ADC_MIDSCALE).unsigned_abs() as f32;
    }
    Ok(MagnitudeFrame::new(bins))
}
