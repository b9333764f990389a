use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QrError;

/// The error correction level in a QR Code symbol.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Ecl {
    /// Tolerates about  7% erroneous codewords.
    Low,
    /// Tolerates about 15% erroneous codewords.
    Medium,
    /// Tolerates about 25% erroneous codewords.
    Quartile,
    /// Tolerates about 30% erroneous codewords.
    High,
}

impl Ecl {
    /// Row index into the capacity tables (in the range 0 to 3).
    pub fn ordinal(self) -> usize {
        use Ecl::*;
        match self {
            Low => 0,
            Medium => 1,
            Quartile => 2,
            High => 3,
        }
    }

    /// The 2-bit code carried in the format information word.
    ///
    /// Not the same as `ordinal()`: the standard assigns L=01, M=00,
    /// Q=11, H=10.
    pub fn format_bits(self) -> u8 {
        use Ecl::*;
        match self {
            Low => 1,
            Medium => 0,
            Quartile => 3,
            High => 2,
        }
    }

    /// The single-letter name used at configuration boundaries.
    pub fn letter(self) -> char {
        use Ecl::*;
        match self {
            Low => 'L',
            Medium => 'M',
            Quartile => 'Q',
            High => 'H',
        }
    }
}

impl Default for Ecl {
    /// The boundary default when no level is requested.
    fn default() -> Self {
        Ecl::Low
    }
}

impl FromStr for Ecl {
    type Err = QrError;

    fn from_str(src: &str) -> Result<Self, QrError> {
        match src.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Ecl::Low),
            "M" => Ok(Ecl::Medium),
            "Q" => Ok(Ecl::Quartile),
            "H" => Ok(Ecl::High),
            _ => Err(QrError::InvalidEcl(src.to_owned())),
        }
    }
}
