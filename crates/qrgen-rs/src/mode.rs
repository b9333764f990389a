use serde::{Deserialize, Serialize};

use crate::ALPHANUMERIC_CHARSET;
use crate::version::Version;

/// The segment mode: how the data bits of a symbol are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
}

impl Mode {
    /// The 4-bit mode indicator emitted at the front of the bit stream.
    pub fn indicator(self) -> u32 {
        use Mode::*;
        match self {
            Numeric => 0b0001,
            Alphanumeric => 0b0010,
            Byte => 0b0100,
            Kanji => 0b1000,
        }
    }

    /// The width of the character count field at the given version.
    ///
    /// The standard defines three version bands: 1–9, 10–26 and 27–40.
    pub fn char_count_bits(self, ver: Version) -> u8 {
        use Mode::*;
        (match self {
            Numeric => [10, 12, 14],
            Alphanumeric => [9, 11, 13],
            Byte => [8, 16, 16],
            Kanji => [8, 10, 12],
        })[usize::from((ver.value() + 7) / 17)]
    }

    /// Picks the most compact mode able to represent `text`.
    ///
    /// Priority is Numeric, then Alphanumeric, then Byte. Membership is
    /// judged on the text as given; lower-case letters are not in the
    /// alphanumeric charset, so mixed-case text falls through to Byte.
    /// Byte accepts any `&str` (its UTF-8 bytes), so the chain never
    /// reaches Kanji, which stays an explicit-segment mode.
    pub fn analyze(text: &str) -> Mode {
        if is_numeric(text) {
            Mode::Numeric
        } else if is_alphanumeric(text) {
            Mode::Alphanumeric
        } else {
            Mode::Byte
        }
    }
}

/// Tests whether every character is a decimal digit.
pub fn is_numeric(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

/// Tests whether every character belongs to the 45-symbol alphanumeric set.
pub fn is_alphanumeric(text: &str) -> bool {
    text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn classify_digits_as_numeric() {
        assert_eq!(Mode::Numeric, Mode::analyze("0123456789"));
        assert_eq!(Mode::Numeric, Mode::analyze(""));
    }

    #[test]
    fn classify_the_charset_as_alphanumeric() {
        assert_eq!(Mode::Alphanumeric, Mode::analyze("HELLO WORLD"));
        assert_eq!(Mode::Alphanumeric, Mode::analyze("A$%*+-./: 0"));
    }

    #[test]
    fn fall_back_to_byte_for_mixed_case() {
        assert_eq!(Mode::Byte, Mode::analyze("https://example.com"));
        assert_eq!(Mode::Byte, Mode::analyze("Hello, world!"));
        assert_eq!(Mode::Byte, Mode::analyze("日本"));
    }

    #[test]
    fn widen_the_count_field_with_the_version() {
        assert_eq!(10, Mode::Numeric.char_count_bits(Version::new(9)));
        assert_eq!(12, Mode::Numeric.char_count_bits(Version::new(10)));
        assert_eq!(14, Mode::Numeric.char_count_bits(Version::new(27)));
        assert_eq!(8, Mode::Byte.char_count_bits(Version::new(1)));
        assert_eq!(16, Mode::Byte.char_count_bits(Version::new(26)));
        assert_eq!(16, Mode::Byte.char_count_bits(Version::new(40)));
        assert_eq!(9, Mode::Alphanumeric.char_count_bits(Version::new(1)));
        assert_eq!(12, Mode::Kanji.char_count_bits(Version::new(40)));
    }

    #[test]
    fn keep_the_standard_indicator_values() {
        assert_eq!(0b0001, Mode::Numeric.indicator());
        assert_eq!(0b0010, Mode::Alphanumeric.indicator());
        assert_eq!(0b0100, Mode::Byte.indicator());
        assert_eq!(0b1000, Mode::Kanji.indicator());
    }
}
