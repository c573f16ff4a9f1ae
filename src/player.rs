use core::num::NonZeroU64;

use embassy_time::{Duration, Ticker};

use crate::decoder::{PlaybackError, SampleDecoder};

/// What to do when a stream wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum AtEnd {
    /// Keep playing from the start, forever.
    Loop,
    /// Return after one pass.
    Stop,
}

/// Ticks `decoder` over `data` at `sample_rate_hz` until the stream ends (or
/// forever, for [`AtEnd::Loop`]).
///
/// Dropping the future stops playback where it is; the decoder resumes from
/// there next time unless it is reset.
pub async fn play<D: SampleDecoder>(
    decoder: &mut D,
    data: &[u8],
    sample_rate_hz: NonZeroU64,
    at_end: AtEnd,
) -> Result<(), PlaybackError> {
    let mut sample_ticker = Ticker::every(Duration::from_hz(sample_rate_hz.get()));
    let mut passes: u32 = 0;

    loop {
        // Wait until the next sample's start time
        sample_ticker.next().await;

        if decoder.decode_sample(data)? {
            passes += 1;
            match at_end {
                AtEnd::Stop => return Ok(()),
                AtEnd::Loop => trace!("looping, pass {}", passes),
            }
        }
    }
}
