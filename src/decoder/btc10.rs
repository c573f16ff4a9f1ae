use super::{PlaybackError, SampleDecoder};
use crate::{
    cursor::{BitCursor, BitOrder},
    pin::{OutputPin, PinState},
};

/// BTc 1.0: one pin, driven straight from the bitstream.
pub struct Btc10Decoder<P: OutputPin> {
    cursor: BitCursor,
    pin: P,
}

impl<P: OutputPin> Btc10Decoder<P> {
    pub fn new(pin: P, order: BitOrder) -> Self {
        Self {
            cursor: BitCursor::new(order),
            pin,
        }
    }

    pub fn cursor(&self) -> &BitCursor {
        &self.cursor
    }

    /// Gives the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> SampleDecoder for Btc10Decoder<P> {
    fn decode_sample(&mut self, data: &[u8]) -> Result<bool, PlaybackError> {
        let (bit, finished) = self.cursor.advance_and_read(data);
        if finished {
            trace!("BTc 1.0 stream wrapped after {} bytes", data.len());
        }

        self.pin
            .set_state(PinState::from(bit))
            .map_err(|_| PlaybackError::PrimaryPin)?;
        Ok(finished)
    }

    fn reset(&mut self) {
        self.cursor.reset();
    }
}
