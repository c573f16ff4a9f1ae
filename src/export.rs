//! Storage layouts for encoded sounds: C arrays for firmware sources, raw
//! block-aligned images, and the indexed "BotTalk" library image.

use core::fmt::{self, Write};

use snafu::prelude::{ensure, Snafu};

/// Sounds are padded to whole flash blocks of this many bytes.
pub const BLOCK_SIZE: usize = 32;
pub const PAD_FILL: u8 = 0x00;

/// Size of the pointer table at the start of a BotTalk library.
pub const BTL_HEADER_LEN: usize = 1024;
/// Each table entry is a 32-bit pointer.
pub const BTL_MAX_SOUNDS: usize = BTL_HEADER_LEN / 4;

const C_COLUMNS: usize = 8;

#[derive(Debug, Snafu, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExportError {
    #[snafu(display("image needs {needed} bytes, output holds {capacity}"))]
    OutputTooSmall { needed: usize, capacity: usize },
    #[snafu(display("{count} sounds do not fit a 256 entry table"))]
    TooManySounds { count: usize },
}

/// `len` rounded up to a whole number of blocks.
#[inline]
pub const fn padded_len(len: usize) -> usize {
    len.div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

/// Writes `data` as a C array named `<name>_data`, with its length in
/// `<name>_len`. `info` becomes a leading comment when given.
pub fn write_c_array<W: Write>(
    w: &mut W,
    name: &str,
    info: Option<&str>,
    data: &[u8],
) -> fmt::Result {
    if let Some(info) = info {
        writeln!(w, "/*\n{info}*/\n")?;
    }

    writeln!(w, "size_t {name}_len = {}; /* Num. of Bytes */", data.len())?;
    writeln!(w, "const unsigned char {name}_data[] = {{")?;

    for (row, chunk) in data.chunks(C_COLUMNS).enumerate() {
        for (n, byte) in chunk.iter().enumerate() {
            if n > 0 {
                w.write_str(", ")?;
            }
            write!(w, "0x{byte:02X}")?;
        }
        w.write_str(",\n")?;

        let written = (row + 1) * C_COLUMNS;
        if written % BLOCK_SIZE == 0 {
            writeln!(w, "/*---------------- {written:8} ----------------*/")?;
        }
    }

    writeln!(w, "}};")
}

/// Concatenates `sounds` with no header, padding each to a block boundary.
/// Returns the image length.
pub fn write_raw(sounds: &[&[u8]], out: &mut [u8]) -> Result<usize, ExportError> {
    let needed = sounds.iter().map(|s| padded_len(s.len())).sum::<usize>();
    ensure!(
        needed <= out.len(),
        OutputTooSmallSnafu {
            needed,
            capacity: out.len()
        }
    );

    let mut addr = 0;
    for sound in sounds {
        addr += write_padded(sound, &mut out[addr..]);
    }
    debug!("raw image of {} sounds, {} bytes", sounds.len(), addr);
    Ok(addr)
}

/// Builds a BotTalk library: a table of end pointers followed by each sound
/// padded to whole blocks. Returns the image length.
///
/// Entry `k` of the table holds, big-endian, the block index (counted from
/// the end of the table) just past sound `k`. Unused entries stay zero.
pub fn write_btl(sounds: &[&[u8]], out: &mut [u8]) -> Result<usize, ExportError> {
    ensure!(
        sounds.len() <= BTL_MAX_SOUNDS,
        TooManySoundsSnafu {
            count: sounds.len()
        }
    );

    let needed = BTL_HEADER_LEN
        + sounds
            .iter()
            .map(|s| padded_len(s.len()))
            .sum::<usize>();
    ensure!(
        needed <= out.len(),
        OutputTooSmallSnafu {
            needed,
            capacity: out.len()
        }
    );

    out[..BTL_HEADER_LEN].fill(0);

    let mut addr = BTL_HEADER_LEN;
    for (k, sound) in sounds.iter().enumerate() {
        addr += write_padded(sound, &mut out[addr..]);

        let end_block = ((addr - BTL_HEADER_LEN) / BLOCK_SIZE) as u32 & 0x00FF_FFFF;
        out[k * 4..k * 4 + 4].copy_from_slice(&end_block.to_be_bytes());
    }
    debug!("BTL image of {} sounds, {} bytes", sounds.len(), addr);
    Ok(addr)
}

fn write_padded(sound: &[u8], out: &mut [u8]) -> usize {
    let len = padded_len(sound.len());
    out[..sound.len()].copy_from_slice(sound);
    out[sound.len()..len].fill(PAD_FILL);
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_blocks() {
        assert_eq!(padded_len(0), 0);
        assert_eq!(padded_len(1), 32);
        assert_eq!(padded_len(32), 32);
        assert_eq!(padded_len(33), 64);
    }

    #[test]
    fn c_array_layout() {
        let mut s = String::new();
        write_c_array(&mut s, "beep", Some("\tSoft: 21\n"), &[0x01, 0xAB, 0xFF]).unwrap();
        assert_eq!(
            s,
            "/*\n\tSoft: 21\n*/\n\n\
             size_t beep_len = 3; /* Num. of Bytes */\n\
             const unsigned char beep_data[] = {\n\
             0x01, 0xAB, 0xFF,\n\
             };\n"
        );
    }

    #[test]
    fn c_array_marks_every_block() {
        let mut s = String::new();
        write_c_array(&mut s, "x", None, &[0u8; 64]).unwrap();
        assert_eq!(s.matches("----------------*/").count(), 2);
        assert!(s.contains("/*----------------       32 ----------------*/"));
        assert!(s.ends_with("*/\n};\n"));
    }

    #[test]
    fn raw_image_pads_each_sound() {
        let mut out = [0xEE; 96];
        let len = write_raw(&[&[1, 2, 3], &[4; 33]], &mut out).unwrap();
        assert_eq!(len, 96);
        assert_eq!(&out[..4], &[1, 2, 3, PAD_FILL]);
        assert_eq!(out[32], 4);
        assert_eq!(out[64], 4);
        assert_eq!(out[65], PAD_FILL);
    }

    #[test]
    fn raw_image_checks_capacity_first() {
        let mut out = [0xEE; 31];
        assert_eq!(
            write_raw(&[&[1]], &mut out),
            Err(ExportError::OutputTooSmall {
                needed: 32,
                capacity: 31
            })
        );
        assert_eq!(out, [0xEE; 31]);
    }

    #[test]
    fn btl_table_points_past_each_sound() {
        let mut out = [0xEE; BTL_HEADER_LEN + 128];
        let len = write_btl(&[&[7; 10], &[9; 40]], &mut out).unwrap();
        assert_eq!(len, BTL_HEADER_LEN + 96);
        assert_eq!(&out[0..4], &[0, 0, 0, 1]);
        assert_eq!(&out[4..8], &[0, 0, 0, 3]);
        assert!(out[8..BTL_HEADER_LEN].iter().all(|&b| b == 0));
        assert_eq!(out[BTL_HEADER_LEN], 7);
        assert_eq!(out[BTL_HEADER_LEN + 32], 9);
    }

    #[test]
    fn btl_rejects_oversized_tables() {
        let sounds = [&[][..]; BTL_MAX_SOUNDS + 1];
        let mut out = [0; BTL_HEADER_LEN];
        assert_eq!(
            write_btl(&sounds, &mut out),
            Err(ExportError::TooManySounds {
                count: BTL_MAX_SOUNDS + 1
            })
        );
    }
}
