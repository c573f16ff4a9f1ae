//! BTc ("binary time constant") sound codecs.
//!
//! BTc stores audio at one bit per sample. Played back on a GPIO pin through
//! an RC low-pass filter, each `1` charges the capacitor a little and each `0`
//! discharges it, so the filter voltage follows the original waveform closely
//! enough for speech and sound effects on a microcontroller without a DAC.
//!
//! - [`encoder`] turns unsigned 8-bit PCM into a bitstream.
//! - [`decoder`] plays a bitstream back on one or two pins, one sample per
//!   call.
//! - [`reconstruct`], [`rc`] and [`export`] help preview, size and store the
//!   result.
#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod cursor;
pub mod decoder;
pub mod encoder;
pub mod export;
pub mod pin;
#[cfg(feature = "rp2040")]
pub mod player;
pub mod rc;
pub mod reconstruct;

pub use cursor::{BitCursor, BitOrder};
pub use decoder::{Btc10Decoder, Btc16Decoder, Btc17Decoder, PlaybackError, SampleDecoder};
pub use encoder::{encode, encoded_len, EncodeError, Encoder, Softness};
