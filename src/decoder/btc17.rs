use super::{PlaybackError, SampleDecoder};
use crate::{
    cursor::{BitCursor, BitOrder},
    pin::{OutputPin, PinState},
};

/// BTc 1.7: the primary pin carries the current bit and the secondary pin the
/// previous one. Both pins stay outputs.
pub struct Btc17Decoder<P: OutputPin, S: OutputPin> {
    cursor: BitCursor,
    last_bit: bool,
    primary: P,
    secondary: S,
}

impl<P: OutputPin, S: OutputPin> Btc17Decoder<P, S> {
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

impl<P: OutputPin, S: OutputPin> SampleDecoder for Btc17Decoder<P, S> {
    fn decode_sample(&mut self, data: &[u8]) -> Result<bool, PlaybackError> {
        let (bit, finished) = self.cursor.advance_and_read(data);
        let previous = self.last_bit;

        self.last_bit = if finished { false } else { bit };
        if finished {
            trace!("BTc 1.7 stream wrapped after {} bytes", data.len());
        }

        self.primary
            .set_state(PinState::from(bit))
            .map_err(|_| PlaybackError::PrimaryPin)?;
        self.secondary
            .set_state(PinState::from(previous))
            .map_err(|_| PlaybackError::SecondaryPin)?;

        Ok(finished)
    }

    fn reset(&mut self) {
        self.cursor.reset();
        self.last_bit = false;
    }
}
