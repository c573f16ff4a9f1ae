//! Linear 8-bit PCM to BTc bitstream.

pub mod error;
pub mod quantizer;

use core::num::NonZeroU8;

use dasp::{sample::ToSample, Sample};
pub use error::EncodeError;
use error::OutputTooSmallSnafu;
pub use quantizer::{Btc10Quantizer, Btc17Quantizer, Quantizer};

use crate::cursor::BitOrder;

/// Divisor for the per-sample charge step. Bigger is smoother and slower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Softness(NonZeroU8);

impl Softness {
    pub const BTC4: Softness = Softness::from_const(4);
    pub const BTC8: Softness = Softness::from_const(8);
    pub const BTC16: Softness = Softness::from_const(16);
    pub const BTC21: Softness = Softness::from_const(21);
    pub const BTC32: Softness = Softness::from_const(32);
    pub const BTC48: Softness = Softness::from_const(48);
    pub const BTC64: Softness = Softness::from_const(64);

    pub const DEFAULT: Softness = Softness::BTC21;

    /// `None` for zero.
    pub const fn new(soft: u8) -> Option<Self> {
        match NonZeroU8::new(soft) {
            Some(soft) => Some(Self(soft)),
            None => None,
        }
    }

    const fn from_const(soft: u8) -> Self {
        match NonZeroU8::new(soft) {
            Some(soft) => Self(soft),
            None => panic!("softness must be non-zero"),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl Default for Softness {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<NonZeroU8> for Softness {
    fn from(soft: NonZeroU8) -> Self {
        Self(soft)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Softness {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Softness({})", self.get())
    }
}

/// Bytes needed to hold `samples` one-bit samples.
#[inline]
pub const fn encoded_len(samples: usize) -> usize {
    samples.div_ceil(8)
}

/// Packs quantizer decisions into bytes.
pub struct Encoder<Q: Quantizer = Btc10Quantizer> {
    quantizer: Q,
    order: BitOrder,
}

impl Encoder<Btc10Quantizer> {
    pub fn btc10(soft: Softness, order: BitOrder) -> Self {
        Self::new(Btc10Quantizer::new(soft), order)
    }
}

impl Encoder<Btc17Quantizer> {
    pub fn btc17(soft: Softness, order: BitOrder) -> Self {
        Self::new(Btc17Quantizer::new(soft), order)
    }
}

impl<Q: Quantizer> Encoder<Q> {
    pub fn new(quantizer: Q, order: BitOrder) -> Self {
        Self { quantizer, order }
    }

    pub fn quantizer(&self) -> &Q {
        &self.quantizer
    }

    pub fn order(&self) -> BitOrder {
        self.order
    }

    /// Encodes `input` into `output`, returning the meaningful prefix of
    /// `output`: `encoded_len(input.len())` bytes, the last one possibly
    /// partly filled.
    ///
    /// Every call starts from a freshly reset quantizer. When `output` is too
    /// short the bytes that fit are still written before the error returns.
    pub fn encode<'o>(
        &mut self,
        input: &[u8],
        output: &'o mut [u8],
    ) -> Result<&'o mut [u8], EncodeError> {
        self.encode_iter(input.iter().copied(), output)
    }

    /// Like [`encode`](Self::encode), converting each sample to unsigned 8-bit
    /// first.
    pub fn encode_samples<'o, S>(
        &mut self,
        input: &[S],
        output: &'o mut [u8],
    ) -> Result<&'o mut [u8], EncodeError>
    where
        S: Sample + ToSample<u8>,
    {
        self.encode_iter(input.iter().map(|&s| s.to_sample::<u8>()), output)
    }

    fn encode_iter<'o, I>(
        &mut self,
        samples: I,
        output: &'o mut [u8],
    ) -> Result<&'o mut [u8], EncodeError>
    where
        I: ExactSizeIterator<Item = u8>,
    {
        self.quantizer.reset();

        let needed = encoded_len(samples.len());
        let capacity = output.len();

        for (n, sample) in samples.enumerate() {
            let Some(byte) = output.get_mut(n / 8) else {
                warn!(
                    "BTc output full after {} samples, {} bytes needed",
                    n, needed
                );
                return OutputTooSmallSnafu { needed, capacity }.fail();
            };

            let slot = (n % 8) as u8;
            if slot == 0 {
                *byte = 0;
            }
            if self.quantizer.quantize(sample) {
                *byte |= self.order.bit_mask(slot);
            }
        }

        debug!("BTc encoded into {} bytes", needed);
        Ok(&mut output[..needed])
    }
}

/// One-shot BTc 1.0 encode.
pub fn encode<'o>(
    input: &[u8],
    output: &'o mut [u8],
    soft: Softness,
    order: BitOrder,
) -> Result<&'o mut [u8], EncodeError> {
    Encoder::btc10(soft, order).encode(input, output)
}
