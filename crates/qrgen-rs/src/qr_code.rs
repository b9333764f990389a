use crate::ecl::Ecl;
use crate::error::QrError;
use crate::format_info;
use crate::interleave;
use crate::mask::Mask;
use crate::matrix::ModuleGrid;
use crate::mode::Mode;
use crate::penalty;
use crate::segment::Segment;
use crate::version;
use crate::version::Version;

/// A finished QR Code symbol: an immutable square grid of dark and light
/// modules, together with the parameters that produced it.
///
/// Build one with [`QrCode::encode_text`] for strings,
/// [`QrCode::encode_binary`] for raw bytes, or [`QrCode::encode_segment`]
/// for a hand-made segment (the only way to reach Kanji mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    version: Version,
    ecl: Ecl,
    mode: Mode,
    mask: Mask,
    grid: ModuleGrid,
}

impl QrCode {
    /// Encodes a text string at the given error correction level.
    ///
    /// The most compact mode able to carry the text is chosen, then the
    /// smallest version able to hold it.
    pub fn encode_text(text: &str, ecl: Ecl) -> Result<Self, QrError> {
        Self::encode_segment(Segment::for_text(text)?, ecl)
    }

    /// Encodes arbitrary bytes in byte mode at the given level.
    pub fn encode_binary(data: &[u8], ecl: Ecl) -> Result<Self, QrError> {
        Self::encode_segment(Segment::make_bytes(data), ecl)
    }

    /// Runs the full pipeline for one prepared segment.
    pub fn encode_segment(segment: Segment, ecl: Ecl) -> Result<Self, QrError> {
        let version =
            version::smallest_fitting(segment.mode(), segment.char_count(), segment.data_len(), ecl)?;
        let data = segment.assemble(version, ecl)?;
        let stream = interleave::ecc_and_interleave(&data, version, ecl)?;

        let mut grid = ModuleGrid::for_version(version);
        let written = grid.place_codewords(&stream);
        if written < stream.len() * 8 || written - stream.len() * 8 >= 8 {
            return Err(QrError::InternalInvariantViolated(
                "payload area disagrees with the codeword stream",
            ));
        }

        let (mask, grid) = select_mask(&grid, version, ecl);
        Ok(Self {
            version,
            ecl,
            mode: segment.mode(),
            mask,
            grid,
        })
    }

    /*---- Accessors ----*/

    pub fn version(&self) -> Version {
        self.version
    }

    /// The side length in modules: 4·version + 17.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn ecl(&self) -> Ecl {
        self.ecl
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The mask the penalty scorer selected.
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// The color at (row, col), row 0 at the top: `true` is dark.
    pub fn module(&self, row: usize, col: usize) -> bool {
        self.grid.module(row, col)
    }

    /// The whole symbol as row-major bytes, 1 dark and 0 light.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.size())
            .map(|r| (0..self.size()).map(|c| u8::from(self.module(r, c))).collect())
            .collect()
    }
}

/// Tries all eight masks over the placed grid and keeps the candidate with
/// the lowest penalty score; on a tie the lower mask id stays.
///
/// Each candidate is a copy of the placed grid with the mask applied to
/// the data modules only, plus the matching format word (and, from version
/// 7, the version word) written into the reserved regions, so the score
/// judges exactly what would be emitted.
fn select_mask(placed: &ModuleGrid, version: Version, ecl: Ecl) -> (Mask, ModuleGrid) {
    let mut best_mask = Mask::new(0);
    let mut best_grid = masked_candidate(placed, version, ecl, best_mask);
    let mut best_score = penalty::score(&best_grid);
    for id in 1..8 {
        let mask = Mask::new(id);
        let candidate = masked_candidate(placed, version, ecl, mask);
        let score = penalty::score(&candidate);
        if score < best_score {
            best_mask = mask;
            best_grid = candidate;
            best_score = score;
        }
    }
    (best_mask, best_grid)
}

fn masked_candidate(placed: &ModuleGrid, version: Version, ecl: Ecl, mask: Mask) -> ModuleGrid {
    let mut candidate = placed.clone();
    candidate.apply_mask(mask);
    format_info::draw_format(&mut candidate, ecl, mask);
    format_info::draw_version(&mut candidate, version);
    candidate
}
