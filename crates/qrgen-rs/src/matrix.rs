use crate::format_info;
use crate::mask::Mask;
use crate::tables;
use crate::version::Version;

/// The module grid of a symbol under construction.
///
/// Two parallel planes: `modules` holds the color of every cell, `reserved`
/// marks the cells owned by function patterns and the format/version
/// regions. Together they stand in for the tri-state cell the construction
/// needs (dark, light, still writable) without smuggling a third state into
/// the color plane. A cell is a payload cell iff it is not reserved, and
/// the `reserved` plane never changes after `for_version` returns, so it
/// doubles as the template the masker consults.
///
/// Coordinates are (row, column), row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    modules: Vec<bool>,
    reserved: Vec<bool>,
}

impl ModuleGrid {
    /// Lays out every function pattern and reservation for a version: the
    /// template every symbol of that version starts from.
    ///
    /// Finders with separators, the timing lines, the alignment grid, the
    /// dark module, and light placeholders in the format and version
    /// regions (overwritten once the mask is chosen). Cells reserved here
    /// are exactly the cells payload placement and masking never touch.
    pub fn for_version(version: Version) -> Self {
        let size = version.side_len();
        let mut grid = Self {
            size,
            modules: vec![false; size * size],
            reserved: vec![false; size * size],
        };

        grid.draw_finder(3, 3);
        grid.draw_finder(3, size - 4);
        grid.draw_finder(size - 4, 3);
        grid.draw_timing();
        grid.draw_alignments(version);

        // Dark module, at (4v + 9, 8).
        grid.set_function(size - 8, 8, true);

        grid.reserve_format_regions();
        if version.value() >= 7 {
            grid.reserve_version_regions();
        }
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The color at (row, col): `true` is dark.
    pub fn module(&self, row: usize, col: usize) -> bool {
        self.modules[row * self.size + col]
    }

    /// Whether (row, col) belongs to a function pattern or reserved region.
    pub fn is_reserved(&self, row: usize, col: usize) -> bool {
        self.reserved[row * self.size + col]
    }

    /// Sets a cell's color and claims it for a function pattern.
    pub(crate) fn set_function(&mut self, row: usize, col: usize, dark: bool) {
        self.modules[row * self.size + col] = dark;
        self.reserved[row * self.size + col] = true;
    }

    fn set_payload(&mut self, row: usize, col: usize, dark: bool) {
        self.modules[row * self.size + col] = dark;
    }

    /*---- Function patterns ----*/

    // A finder with its separator is a 9×9 stack of concentric squares
    // around (row, col): dark core out to Chebyshev distance 1, light ring
    // at 2, dark ring at 3, light separator at 4. Cells beyond the edge
    // are clipped.
    fn draw_finder(&mut self, row: usize, col: usize) {
        for dr in -4i32..=4 {
            for dc in -4i32..=4 {
                let r = row as i32 + dr;
                let c = col as i32 + dc;
                if r < 0 || c < 0 || r >= self.size as i32 || c >= self.size as i32 {
                    continue;
                }
                let ring = dr.abs().max(dc.abs());
                self.set_function(r as usize, c as usize, ring != 2 && ring != 4);
            }
        }
    }

    // Alternating lines on row 6 and column 6 between the finder zones,
    // dark on even offsets.
    fn draw_timing(&mut self) {
        for i in 8..self.size - 8 {
            self.set_function(6, i, i % 2 == 0);
            self.set_function(i, 6, i % 2 == 0);
        }
    }

    fn draw_alignments(&mut self, version: Version) {
        let positions = tables::alignment_positions(version);
        for &r in positions {
            for &c in positions {
                let (r, c) = (usize::from(r), usize::from(c));
                if !self.footprint_touches_finder(r, c) {
                    self.draw_alignment(r, c);
                }
            }
        }
    }

    // The three center combinations falling on finder corners are the ones
    // the standard omits. Alignment patterns may sit on the timing lines;
    // the shared cells agree in color, so no test against them is needed.
    fn footprint_touches_finder(&self, row: usize, col: usize) -> bool {
        let near_top = row - 2 <= 7;
        let near_bottom = row + 2 >= self.size - 8;
        let near_left = col - 2 <= 7;
        let near_right = col + 2 >= self.size - 8;
        (near_top && near_left) || (near_top && near_right) || (near_bottom && near_left)
    }

    // 5×5 concentric: dark border, light ring, dark center.
    fn draw_alignment(&mut self, row: usize, col: usize) {
        for dr in -2i32..=2 {
            for dc in -2i32..=2 {
                let ring = dr.abs().max(dc.abs());
                self.set_function(
                    (row as i32 + dr) as usize,
                    (col as i32 + dc) as usize,
                    ring != 1,
                );
            }
        }
    }

    /*---- Reserved regions ----*/

    // Light placeholders at both 15-bit format copies so payload placement
    // walks around them; the real bits land after mask selection.
    fn reserve_format_regions(&mut self) {
        let (first, second) = format_info::format_positions(self.size);
        for (row, col) in first.into_iter().chain(second) {
            self.set_function(row, col, false);
        }
    }

    // The two 6×3 version blocks beside the top-right and bottom-left
    // finders, versions 7 and up.
    fn reserve_version_regions(&mut self) {
        for ((r1, c1), (r2, c2)) in format_info::version_positions(self.size) {
            self.set_function(r1, c1, false);
            self.set_function(r2, c2, false);
        }
    }

    /*---- Payload placement ----*/

    /// Writes the codeword stream into every unreserved cell, in the
    /// standard zig-zag order, and returns how many cells were written.
    ///
    /// Column pairs are walked from the right edge leftward, hopping over
    /// the vertical timing column; strip direction alternates starting
    /// upward, and within a row the right cell precedes the left. When the
    /// stream runs dry the leftover cells take the light remainder bits.
    pub(crate) fn place_codewords(&mut self, stream: &[u8]) -> usize {
        let total_bits = stream.len() * 8;
        let mut written = 0usize;
        let mut right = self.size - 1;
        let mut upward = true;
        loop {
            for step in 0..self.size {
                let row = if upward { self.size - 1 - step } else { step };
                for col in [right, right - 1] {
                    if self.is_reserved(row, col) {
                        continue;
                    }
                    let dark = written < total_bits
                        && stream[written / 8] >> (7 - written % 8) & 1 != 0;
                    self.set_payload(row, col, dark);
                    written += 1;
                }
            }
            upward = !upward;
            if right == 1 {
                break;
            }
            right -= 2;
            if right == 6 {
                // The vertical timing column is not part of any pair.
                right = 5;
            }
        }
        written
    }

    /*---- Masking ----*/

    /// Toggles every unreserved cell the mask condition selects.
    pub(crate) fn apply_mask(&mut self, mask: Mask) {
        for row in 0..self.size {
            for col in 0..self.size {
                if !self.reserved[row * self.size + col] && mask.inverts(row, col) {
                    self.modules[row * self.size + col] ^= true;
                }
            }
        }
    }

    /// The number of dark cells, reserved or not.
    pub(crate) fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        let mut modules = Vec::with_capacity(size * size);
        for row in rows {
            assert_eq!(size, row.len());
            modules.extend(row.iter().map(|&cell| cell != 0));
        }
        Self {
            size,
            modules,
            reserved: vec![false; size * size],
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    // Geometry-derived codeword-area size; cross-checks every pattern and
    // reservation at once.
    fn expected_payload_bits(v: usize) -> usize {
        let mut bits = (16 * v + 128) * v + 64;
        if v >= 2 {
            let numalign = v / 7 + 2;
            bits -= (25 * numalign - 10) * numalign - 55;
            if v >= 7 {
                bits -= 36;
            }
        }
        bits
    }

    #[test]
    fn leave_exactly_the_standard_payload_area_unreserved() {
        for v in 1..=40u8 {
            let grid = ModuleGrid::for_version(Version::new(v));
            let free = (0..grid.size())
                .flat_map(|r| (0..grid.size()).map(move |c| (r, c)))
                .filter(|&(r, c)| !grid.is_reserved(r, c))
                .count();
            assert_eq!(expected_payload_bits(usize::from(v)), free, "version {v}");
        }
    }

    #[test]
    fn draw_the_finder_rings() {
        let grid = ModuleGrid::for_version(Version::new(1));
        assert!(grid.module(0, 0));
        assert!(grid.module(0, 6));
        assert!(grid.module(6, 0));
        assert!(!grid.module(1, 1));
        assert!(grid.module(2, 2));
        // Separator is light but owned.
        assert!(!grid.module(7, 7));
        assert!(grid.is_reserved(7, 7));
        // Same ring structure at the other two corners.
        assert!(grid.module(0, 14));
        assert!(grid.module(14, 0));
        assert!(!grid.is_reserved(9, 9));
    }

    #[test]
    fn alternate_the_timing_lines_starting_dark() {
        let grid = ModuleGrid::for_version(Version::new(2));
        for i in 8..17 {
            assert_eq!(i % 2 == 0, grid.module(6, i));
            assert_eq!(i % 2 == 0, grid.module(i, 6));
            assert!(grid.is_reserved(6, i));
        }
    }

    #[test]
    fn place_one_alignment_pattern_on_version_two() {
        let grid = ModuleGrid::for_version(Version::new(2));
        assert!(grid.module(18, 18));
        assert!(!grid.module(17, 17));
        assert!(grid.module(16, 16));
        assert!(grid.is_reserved(20, 20));
        assert!(!grid.is_reserved(13, 13));
    }

    #[test]
    fn keep_mid_edge_alignments_on_the_timing_line() {
        // Version 7 has centers at 6, 22 and 38; (6, 22) survives because
        // only the three finder corners are omitted.
        let grid = ModuleGrid::for_version(Version::new(7));
        assert!(grid.module(6, 22));
        assert!(grid.is_reserved(6, 22));
        assert!(!grid.module(5, 22));
        assert!(grid.module(6, 20));
    }

    #[test]
    fn pin_the_dark_module() {
        for v in [1u8, 6, 7, 40] {
            let grid = ModuleGrid::for_version(Version::new(v));
            let row = usize::from(v) * 4 + 9;
            assert!(grid.module(row, 8), "version {v}");
            assert!(grid.is_reserved(row, 8), "version {v}");
        }
    }

    #[test]
    fn fill_every_unreserved_cell_when_placing() {
        let version = Version::new(2);
        let mut grid = ModuleGrid::for_version(version);
        // 2-L: 34 data + 10 ECC codewords.
        let stream: Vec<u8> = (0..44).map(|i| (i * 7) as u8).collect();
        let written = grid.place_codewords(&stream);
        assert_eq!(expected_payload_bits(2), written);
        // 359 cells for 352 stream bits: seven remainder bits.
        assert_eq!(written - 7, stream.len() * 8);
    }

    #[test]
    fn start_placement_in_the_bottom_right_corner() {
        let mut grid = ModuleGrid::for_version(Version::new(1));
        let mut stream = vec![0u8; 26];
        stream[0] = 0b1011_0001;
        grid.place_codewords(&stream);
        // First codeword fills the bottom-right 4×2 block, right column
        // before left, walking upward.
        assert!(grid.module(20, 20));
        assert!(!grid.module(20, 19));
        assert!(grid.module(19, 20));
        assert!(grid.module(19, 19));
        assert!(!grid.module(18, 20));
        assert!(!grid.module(18, 19));
        assert!(!grid.module(17, 20));
        assert!(grid.module(17, 19));
    }

    #[test]
    fn undo_a_mask_when_applied_twice() {
        let mut grid = ModuleGrid::for_version(Version::new(3));
        let stream: Vec<u8> = (0..70).map(|i| i as u8).collect();
        grid.place_codewords(&stream);
        let pristine = grid.clone();
        grid.apply_mask(Mask::new(5));
        assert_ne!(pristine, grid);
        grid.apply_mask(Mask::new(5));
        assert_eq!(pristine, grid);
    }
}
