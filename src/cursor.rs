/// Which bit of a byte comes first in stream order.
///
/// Encoder and decoder must agree on this. A mismatch is not detected, the
/// stream just plays back as noise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    #[default]
    MsbFirst,
    LsbFirst,
}

impl BitOrder {
    /// Bit index of the first sample in a byte
    #[inline]
    pub const fn first_bit(self) -> u8 {
        match self {
            BitOrder::MsbFirst => 7,
            BitOrder::LsbFirst => 0,
        }
    }

    /// Mask selecting the `n`th sample (0..8, stream order) of a byte
    #[inline]
    pub const fn bit_mask(self, n: u8) -> u8 {
        match self {
            BitOrder::MsbFirst => 0x80 >> n,
            BitOrder::LsbFirst => 0x01 << n,
        }
    }
}

/// Read position over a packed 1-bit-per-sample buffer.
///
/// The cursor walks one byte past the end of the buffer before wrapping, so a
/// full pass over `len` bytes takes `(len + 1) * 8` reads. That trailing byte
/// reads as zero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitCursor {
    byte_index: usize,
    bit_index: u8,
    order: BitOrder,
}

impl BitCursor {
    pub const fn new(order: BitOrder) -> Self {
        Self {
            byte_index: 0,
            bit_index: order.first_bit(),
            order,
        }
    }

    pub fn reset(&mut self) {
        self.byte_index = 0;
        self.bit_index = self.order.first_bit();
    }

    pub fn byte_index(&self) -> usize {
        self.byte_index
    }

    pub fn bit_index(&self) -> u8 {
        self.bit_index
    }

    pub fn order(&self) -> BitOrder {
        self.order
    }

    /// Reads the bit under the cursor and moves on by one.
    ///
    /// Returns `(bit, finished)`. `finished` is true on the read that wraps the
    /// cursor back to the start of `data`.
    pub fn advance_and_read(&mut self, data: &[u8]) -> (bool, bool) {
        let byte = data.get(self.byte_index).copied().unwrap_or(0);
        let bit = byte & (1 << self.bit_index) != 0;

        let carry = match self.order {
            BitOrder::MsbFirst => match self.bit_index.checked_sub(1) {
                Some(next) => {
                    self.bit_index = next;
                    false
                }
                None => true,
            },
            BitOrder::LsbFirst => {
                self.bit_index += 1;
                self.bit_index > 7
            }
        };

        if !carry {
            return (bit, false);
        }

        self.bit_index = self.order.first_bit();
        self.byte_index += 1;
        if self.byte_index > data.len() {
            self.byte_index = 0;
            return (bit, true);
        }

        (bit, false)
    }
}

impl Default for BitCursor {
    fn default() -> Self {
        Self::new(BitOrder::default())
    }
}
