use serde::Serialize;

use crate::ecl::Ecl;
use crate::error::QrError;
use crate::mode::Mode;
use crate::tables;

/// A symbol version number between 1 and 40 (inclusive).
///
/// Serializes as the bare number. There is no `Deserialize`: versions are
/// an encoding outcome, and a derived one would sidestep the range check.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize)]
pub struct Version(u8);

impl Version {
    /// The smallest version defined by the standard.
    pub const MIN: Version = Version(1);

    /// The largest version defined by the standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// Panics if the number is outside the range [1, 40].
    pub const fn new(ver: u8) -> Self {
        assert!(
            Version::MIN.0 <= ver && ver <= Version::MAX.0,
            "Version number out of range"
        );
        Self(ver)
    }

    /// Returns the value, which is in the range [1, 40].
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The module count along one side of the symbol: 4·v + 17.
    pub const fn side_len(self) -> usize {
        self.0 as usize * 4 + 17
    }
}

/// Finds the smallest version whose data capacity at `ecl` holds a single
/// segment of `mode` with `char_count` characters and `data_bits` data bits.
///
/// The header is accounted for exactly: 4 indicator bits plus the character
/// count field at the width the candidate version dictates. Versions whose
/// count field cannot even represent `char_count` are skipped.
pub fn smallest_fitting(
    mode: Mode,
    char_count: usize,
    data_bits: usize,
    ecl: Ecl,
) -> Result<Version, QrError> {
    let mut needed = 0usize;
    for v in Version::MIN.value()..=Version::MAX.value() {
        let version = Version::new(v);
        let cci = mode.char_count_bits(version);
        needed = 4 + usize::from(cci) + data_bits;
        let capacity = tables::data_codewords(version, ecl) * 8;
        if char_count >> cci == 0 && needed <= capacity {
            return Ok(version);
        }
    }
    Err(QrError::InputTooLarge(
        needed,
        tables::data_codewords(Version::MAX, ecl) * 8,
    ))
}
