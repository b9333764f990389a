//! The format and version information words and where they live.
//!
//! Both words protect a handful of bits with a short BCH code computed by
//! plain polynomial long division over GF(2). The format word additionally
//! gets a fixed XOR so no mask/level combination produces an all-zero
//! pattern.

use crate::ecl::Ecl;
use crate::mask::Mask;
use crate::matrix::ModuleGrid;
use crate::version::Version;

/// Generator of the BCH(15,5) code protecting the format word.
pub const FORMAT_GENERATOR: u32 = 0b10100110111;

/// Fixed pattern XORed onto the complete 15-bit format word.
pub const FORMAT_MASK: u32 = 0b101010000010010;

/// Generator of the BCH(18,6) code protecting the version word.
pub const VERSION_GENERATOR: u32 = 0b1111100100101;

/// The 15-bit format word: level bits, mask id, 10 check bits, XOR mask.
pub fn format_word(ecl: Ecl, mask: Mask) -> u32 {
    let data = u32::from(ecl.format_bits()) << 3 | u32::from(mask.value());
    let mut rem = data << 10;
    for i in (10..15).rev() {
        if rem & 1 << i != 0 {
            rem ^= FORMAT_GENERATOR << (i - 10);
        }
    }
    (data << 10 | rem) ^ FORMAT_MASK
}

/// The 18-bit version word: version number plus 12 check bits.
pub fn version_word(version: Version) -> u32 {
    let data = u32::from(version.value());
    let mut rem = data << 12;
    for i in (12..18).rev() {
        if rem & 1 << i != 0 {
            rem ^= VERSION_GENERATOR << (i - 12);
        }
    }
    data << 12 | rem
}

/// The two 15-cell runs holding the format word copies, as (row, col) per
/// bit index (bit 0 is the word's least significant bit).
///
/// The first copy wraps around the top-left finder, skipping the timing
/// row and column; the second is split between the bottom-left and
/// top-right finders.
pub(crate) fn format_positions(size: usize) -> ([(usize, usize); 15], [(usize, usize); 15]) {
    let mut first = [(0usize, 0usize); 15];
    for (i, cell) in first.iter_mut().enumerate().take(6) {
        *cell = (i, 8);
    }
    first[6] = (7, 8);
    first[7] = (8, 8);
    first[8] = (8, 7);
    for (i, cell) in first.iter_mut().enumerate().skip(9) {
        *cell = (8, 14 - i);
    }

    let mut second = [(0usize, 0usize); 15];
    for (i, cell) in second.iter_mut().enumerate().take(8) {
        *cell = (8, size - 1 - i);
    }
    for (i, cell) in second.iter_mut().enumerate().skip(8) {
        *cell = (size - 15 + i, 8);
    }
    (first, second)
}

/// The cell pair holding each version word bit: one in the block left of
/// the top-right finder, one in its transpose above the bottom-left finder.
pub(crate) fn version_positions(
    size: usize,
) -> impl Iterator<Item = ((usize, usize), (usize, usize))> {
    (0..18).map(move |i| {
        let long = size - 11 + i % 3;
        let short = i / 3;
        ((short, long), (long, short))
    })
}

/// Writes both format word copies into their reserved cells.
pub(crate) fn draw_format(grid: &mut ModuleGrid, ecl: Ecl, mask: Mask) {
    let word = format_word(ecl, mask);
    let (first, second) = format_positions(grid.size());
    for (i, &(row, col)) in first.iter().enumerate() {
        grid.set_function(row, col, word >> i & 1 != 0);
    }
    for (i, &(row, col)) in second.iter().enumerate() {
        grid.set_function(row, col, word >> i & 1 != 0);
    }
}

/// Writes both version word copies (versions 7 and up only).
pub(crate) fn draw_version(grid: &mut ModuleGrid, version: Version) {
    if version.value() < 7 {
        return;
    }
    let word = version_word(version);
    for (i, ((r1, c1), (r2, c2))) in version_positions(grid.size()).enumerate() {
        let dark = word >> i & 1 != 0;
        grid.set_function(r1, c1, dark);
        grid.set_function(r2, c2, dark);
    }
}

/// Whether (row, col) carries format or version information, the one part
/// of the reserved area that differs between masked candidates.
#[cfg(test)]
pub(crate) fn is_info_cell(size: usize, row: usize, col: usize) -> bool {
    let (first, second) = format_positions(size);
    first.contains(&(row, col))
        || second.contains(&(row, col))
        || (size >= 45
            && version_positions(size).any(|(a, b)| a == (row, col) || b == (row, col)))
}
