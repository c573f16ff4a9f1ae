//! Turns a bitstream back into 8-bit levels by replaying it through the same
//! charge model that encoded it. Good for previews and for checking how far
//! a stream drifts from its source.

use crate::{
    cursor::{BitCursor, BitOrder},
    encoder::Quantizer,
};

/// Iterator over the levels a model reaches for each bit of `data`.
///
/// Yields exactly `data.len() * 8` levels. The padding byte the playback
/// cursor appends before wrapping is not part of the stream here.
pub struct Levels<'a, Q: Quantizer> {
    data: &'a [u8],
    cursor: BitCursor,
    remaining: usize,
    model: &'a mut Q,
}

impl<'a, Q: Quantizer> Levels<'a, Q> {
    pub fn new(data: &'a [u8], order: BitOrder, model: &'a mut Q) -> Self {
        model.reset();
        Self {
            data,
            cursor: BitCursor::new(order),
            remaining: data.len() * 8,
            model,
        }
    }
}

impl<Q: Quantizer> Iterator for Levels<'_, Q> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let (bit, _) = self.cursor.advance_and_read(self.data);
        Some(self.model.apply(bit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<Q: Quantizer> ExactSizeIterator for Levels<'_, Q> {}

/// Writes one level per bit of `data` into `out`, stopping at whichever runs
/// out first. Returns the number of levels written.
pub fn reconstruct<Q: Quantizer>(
    data: &[u8],
    order: BitOrder,
    model: &mut Q,
    out: &mut [u8],
) -> usize {
    let mut written = 0;
    for (slot, level) in out.iter_mut().zip(Levels::new(data, order, model)) {
        *slot = level;
        written += 1;
    }
    written
}
