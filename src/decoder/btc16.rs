use super::{PlaybackError, SampleDecoder};
use crate::{
    cursor::{BitCursor, BitOrder},
    pin::{OutputPin, PinState, TriStatePin},
};

/// BTc 1.6/1.5: a primary pin that follows the bitstream, plus a secondary
/// pin that drives whenever a bit repeats the one before it (every bit of a
/// run after the first) and floats when the bit changes.
pub struct Btc16Decoder<P: OutputPin, S: TriStatePin> {
    cursor: BitCursor,
    last_bit: bool,
    primary: P,
    secondary: S,
}

impl<P: OutputPin, S: TriStatePin> Btc16Decoder<P, S> {
    pub fn new(primary: P, secondary: S, order: BitOrder) -> Self {
        Self {
            cursor: BitCursor::new(order),
            last_bit: false,
            primary,
            secondary,
        }
    }

    pub fn cursor(&self) -> &BitCursor {
        &self.cursor
    }

    pub fn last_bit(&self) -> bool {
        self.last_bit
    }

    /// Gives the pins back as `(primary, secondary)`.
    pub fn release(self) -> (P, S) {
        (self.primary, self.secondary)
    }
}

impl<P: OutputPin, S: TriStatePin> SampleDecoder for Btc16Decoder<P, S> {
    fn decode_sample(&mut self, data: &[u8]) -> Result<bool, PlaybackError> {
        let (bit, finished) = self.cursor.advance_and_read(data);
        let state = PinState::from(bit);
        let repeated = bit == self.last_bit;

        self.last_bit = if finished { false } else { bit };
        if finished {
            trace!("BTc 1.6 stream wrapped after {} bytes", data.len());
        }

        self.primary
            .set_state(state)
            .map_err(|_| PlaybackError::PrimaryPin)?;

        // Repeated bit: pull the capacitor harder. Changed bit: let it float.
        let secondary = if repeated {
            self.secondary.drive(state)
        } else {
            self.secondary.float()
        };
        secondary.map_err(|_| PlaybackError::SecondaryPin)?;

        Ok(finished)
    }

    fn reset(&mut self) {
        self.cursor.reset();
        self.last_bit = false;
    }
}
