//! Closed-loop charge models.
//!
//! A quantizer tracks the voltage an RC filter would reach from the bits
//! emitted so far, as an 8-bit level. For every sample it works out where a
//! `1` and a `0` would take that level and emits whichever lands closer.

use super::Softness;

/// Starting level, half of the supply.
pub const LEVEL_CENTER: u8 = 128;

/// Full-scale charge target. One past `u8::MAX`, as in the RC model.
const FULL_SCALE: i16 = 256;

/// 3/4 and 1/4 of the supply: where the BTc 1.7 pin pair pulls the filter
/// when the two pins disagree.
const RAIL_UPPER: i16 = 192;
const RAIL_LOWER: i16 = 64;

/// Maps a full-range sample into the half swing `64..=191` around center.
#[inline]
pub fn scale(sample: u8) -> u8 {
    sample / 2 + 64
}

pub trait Quantizer {
    /// Returns to the start-of-stream level and clears carried bits.
    fn reset(&mut self);

    /// Current modelled level.
    fn level(&self) -> u8;

    /// Levels reached by emitting `1` and `0` next, as `(high, low)`.
    fn candidates(&self) -> (u8, u8);

    /// Moves the model as if `bit` had been emitted, returning the new level.
    fn apply(&mut self, bit: bool) -> u8;

    /// Picks the bit for `sample` and advances the model.
    ///
    /// Ties go to `1`.
    fn quantize(&mut self, sample: u8) -> bool {
        let target = scale(sample);
        let (high, low) = self.candidates();
        let bit = high.abs_diff(target) <= low.abs_diff(target);
        self.apply(bit);
        bit
    }
}

#[inline]
fn step_toward(level: i16, target: i16, soft: Softness) -> u8 {
    let next = level + (target - level) / soft.get() as i16;
    next.clamp(0, u8::MAX as i16) as u8
}

/// Single-pin BTc 1.0 model: charge toward full scale or discharge toward
/// ground by `1/soft` of the remaining distance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Btc10Quantizer {
    soft: Softness,
    level: u8,
}

impl Btc10Quantizer {
    pub const fn new(soft: Softness) -> Self {
        Self {
            soft,
            level: LEVEL_CENTER,
        }
    }

    pub fn softness(&self) -> Softness {
        self.soft
    }
}

impl Quantizer for Btc10Quantizer {
    fn reset(&mut self) {
        self.level = LEVEL_CENTER;
    }

    fn level(&self) -> u8 {
        self.level
    }

    fn candidates(&self) -> (u8, u8) {
        let level = self.level as i16;
        (
            step_toward(level, FULL_SCALE, self.soft),
            step_toward(level, 0, self.soft),
        )
    }

    fn apply(&mut self, bit: bool) -> u8 {
        let (high, low) = self.candidates();
        self.level = if bit { high } else { low };
        self.level
    }
}

/// Two-pin BTc 1.7 model. When the new bit differs from the previous one the
/// pins fight each other and the filter only moves toward the 3/4 or 1/4
/// rail instead of the supply.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Btc17Quantizer {
    soft: Softness,
    level: u8,
    last_bit: bool,
}

impl Btc17Quantizer {
    pub const fn new(soft: Softness) -> Self {
        Self {
            soft,
            level: LEVEL_CENTER,
            last_bit: false,
        }
    }

    pub fn softness(&self) -> Softness {
        self.soft
    }

    pub fn last_bit(&self) -> bool {
        self.last_bit
    }
}

impl Quantizer for Btc17Quantizer {
    fn reset(&mut self) {
        self.level = LEVEL_CENTER;
        self.last_bit = false;
    }

    fn level(&self) -> u8 {
        self.level
    }

    fn candidates(&self) -> (u8, u8) {
        let level = self.level as i16;
        let (high_target, low_target) = if self.last_bit {
            (FULL_SCALE, RAIL_LOWER)
        } else {
            (RAIL_UPPER, 0)
        };
        (
            step_toward(level, high_target, self.soft),
            step_toward(level, low_target, self.soft),
        )
    }

    fn apply(&mut self, bit: bool) -> u8 {
        let (high, low) = self.candidates();
        self.level = if bit { high } else { low };
        self.last_bit = bit;
        self.level
    }
}
