//! Sample-by-sample BTc playback.
//!
//! Each decoder owns its pins and a [`BitCursor`](crate::cursor::BitCursor)
//! and is meant to be ticked once per sample period, typically from a timer.
//! Independent streams need independent decoders.

pub mod btc10;
pub mod btc16;
pub mod btc17;
pub mod error;

pub use btc10::Btc10Decoder;
pub use btc16::Btc16Decoder;
pub use btc17::Btc17Decoder;
pub use error::PlaybackError;

pub trait SampleDecoder {
    /// Plays the next sample of `data`.
    ///
    /// Returns `Ok(true)` when the stream has wrapped back to its start. The
    /// following call replays `data` from the beginning.
    ///
    /// The cursor and any carried bit advance before the pins are written, so
    /// a call that fails on a pin drops its sample and the next call plays
    /// the one after it.
    fn decode_sample(&mut self, data: &[u8]) -> Result<bool, PlaybackError>;

    /// Rewinds to the start of the stream and clears any carried state.
    fn reset(&mut self);
}
