use crate::ALPHANUMERIC_CHARSET;
use crate::bit_buffer::BitBuffer;
use crate::ecl::Ecl;
use crate::error::QrError;
use crate::mode::Mode;
use crate::tables;
use crate::version::Version;

/// A run of payload data encoded under one segment mode.
///
/// `char_count` is the length of the unencoded data in the unit the mode
/// counts: digits, alphanumeric characters, bytes, or Kanji characters.
/// It is what the character count field carries, and is not the same as
/// the bit length of `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    mode: Mode,
    char_count: usize,
    data: BitBuffer,
}

impl Segment {
    /*---- Factory functions, one per mode ----*/

    /// Encodes a string of decimal digits, three per 10-bit group.
    ///
    /// A trailing pair takes 7 bits, a trailing digit 4.
    pub fn make_numeric(text: &str) -> Result<Self, QrError> {
        let mut bb = BitBuffer::with_capacity(text.len() * 10 / 3 + 7);
        let mut group: u32 = 0;
        let mut digits: u8 = 0;
        for b in text.bytes() {
            if !b.is_ascii_digit() {
                return Err(QrError::UnencodableInput);
            }
            group = group * 10 + u32::from(b - b'0');
            digits += 1;
            if digits == 3 {
                bb.append_bits(group, 10);
                group = 0;
                digits = 0;
            }
        }
        if digits > 0 {
            bb.append_bits(group, digits * 3 + 1);
        }
        Ok(Self {
            mode: Mode::Numeric,
            char_count: text.len(),
            data: bb,
        })
    }

    /// Encodes text over the 45-symbol charset, two characters per 11 bits.
    ///
    /// Input is upper-folded first, so `a` and `A` encode identically; a
    /// character outside the charset after folding is an error.
    pub fn make_alphanumeric(text: &str) -> Result<Self, QrError> {
        let folded = text.to_ascii_uppercase();
        let mut bb = BitBuffer::with_capacity(folded.len() * 11 / 2 + 6);
        let mut pair: u32 = 0;
        let mut held: u8 = 0;
        for c in folded.chars() {
            let index = ALPHANUMERIC_CHARSET
                .find(c)
                .ok_or(QrError::UnencodableInput)?;
            pair = pair * 45 + index as u32;
            held += 1;
            if held == 2 {
                bb.append_bits(pair, 11);
                pair = 0;
                held = 0;
            }
        }
        if held > 0 {
            bb.append_bits(pair, 6);
        }
        Ok(Self {
            mode: Mode::Alphanumeric,
            char_count: folded.chars().count(),
            data: bb,
        })
    }

    /// Encodes arbitrary bytes, eight bits apiece.
    pub fn make_bytes(data: &[u8]) -> Self {
        let mut bb = BitBuffer::with_capacity(data.len() * 8);
        for &b in data {
            bb.append_bits(u32::from(b), 8);
        }
        Self {
            mode: Mode::Byte,
            char_count: data.len(),
            data: bb,
        }
    }

    /// Encodes Shift-JIS double-byte characters, 13 bits apiece.
    ///
    /// Accepts the two Shift-JIS double-byte ranges 0x8140–0x9FFC and
    /// 0xE040–0xEBBF. Each pair is rebased (subtract 0x8140 or 0xC140),
    /// then packed as most-significant-byte · 0xC0 + least-significant-byte.
    pub fn make_kanji(shift_jis: &[u8]) -> Result<Self, QrError> {
        if shift_jis.len() % 2 != 0 {
            return Err(QrError::UnencodableInput);
        }
        let mut bb = BitBuffer::with_capacity(shift_jis.len() / 2 * 13);
        for pair in shift_jis.chunks_exact(2) {
            let value = u16::from_be_bytes([pair[0], pair[1]]);
            let rebased = match value {
                0x8140..=0x9FFC => value - 0x8140,
                0xE040..=0xEBBF => value - 0xC140,
                _ => return Err(QrError::UnencodableInput),
            };
            let packed = u32::from(rebased >> 8) * 0xC0 + u32::from(rebased & 0xFF);
            bb.append_bits(packed, 13);
        }
        Ok(Self {
            mode: Mode::Kanji,
            char_count: shift_jis.len() / 2,
            data: bb,
        })
    }

    /// Encodes `text` under the mode `Mode::analyze` picks for it.
    pub fn for_text(text: &str) -> Result<Self, QrError> {
        match Mode::analyze(text) {
            Mode::Numeric => Self::make_numeric(text),
            Mode::Alphanumeric => Self::make_alphanumeric(text),
            _ => Ok(Self::make_bytes(text.as_bytes())),
        }
    }

    /*---- Accessors ----*/

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// The segment's data bit length, excluding the header.
    pub fn data_len(&self) -> usize {
        self.data.len()
    }

    /*---- Bit stream assembly ----*/

    /// Builds the full data codeword sequence for a sized symbol.
    ///
    /// Mode indicator, character count field, data bits, terminator
    /// (at most 4 zero bits, fewer if capacity is tight), zero bits up to
    /// a byte boundary, then alternating 0xEC/0x11 pad codewords. The
    /// result is exactly D(v, ecl) codewords.
    pub(crate) fn assemble(&self, version: Version, ecl: Ecl) -> Result<Vec<u8>, QrError> {
        let capacity_bits = tables::data_codewords(version, ecl) * 8;
        let mut bb = BitBuffer::with_capacity(capacity_bits);
        bb.append_bits(self.mode.indicator(), 4);
        let cci = self.mode.char_count_bits(version);
        if self.char_count >> cci != 0 {
            return Err(QrError::InternalInvariantViolated(
                "character count exceeds its field width",
            ));
        }
        bb.append_bits(self.char_count as u32, cci);
        bb.extend_from(&self.data);
        if bb.len() > capacity_bits {
            return Err(QrError::InternalInvariantViolated(
                "bit stream exceeds the sized symbol's capacity",
            ));
        }

        let terminator = (capacity_bits - bb.len()).min(4);
        bb.append_bits(0, terminator as u8);
        bb.append_bits(0, ((8 - bb.len() % 8) % 8) as u8);
        for &pad in [0xEC, 0x11].iter().cycle() {
            if bb.len() >= capacity_bits {
                break;
            }
            bb.append_bits(pad, 8);
        }
        if bb.len() != capacity_bits {
            return Err(QrError::InternalInvariantViolated(
                "padded stream does not fill the data capacity exactly",
            ));
        }
        Ok(bb.into_bytes())
    }
}

#[cfg(test)]
mod should {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn group_digits_into_ten_seven_and_four_bit_chunks() {
        let seg = Segment::make_numeric("1234567890").unwrap();
        assert_eq!(Mode::Numeric, seg.mode());
        assert_eq!(10, seg.char_count());
        // 123, 456, 789 as three 10-bit groups, 0 as a 4-bit tail.
        assert_eq!(34, seg.data_len());
        let seg = Segment::make_numeric("12").unwrap();
        assert_eq!(7, seg.data_len());
    }

    #[test]
    fn reject_non_digits_in_numeric_mode() {
        assert_eq!(
            Err(QrError::UnencodableInput),
            Segment::make_numeric("12a")
        );
    }

    #[test]
    fn fold_alphanumeric_input_to_upper_case() {
        let lower = Segment::make_alphanumeric("hello world").unwrap();
        let upper = Segment::make_alphanumeric("HELLO WORLD").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(11, upper.char_count());
        // 5 pairs of 11 bits and a 6-bit single.
        assert_eq!(61, upper.data_len());
    }

    #[test]
    fn reject_characters_outside_the_alphanumeric_charset() {
        assert_eq!(
            Err(QrError::UnencodableInput),
            Segment::make_alphanumeric("A,B")
        );
    }

    #[test]
    fn pack_kanji_pairs_into_thirteen_bits() {
        // The standard's worked example: 点 (0x935F) then 茗 (0xE4AA)
        // pack to 0x0D9F and 0x1AAA.
        let seg = Segment::make_kanji(&[0x93, 0x5F, 0xE4, 0xAA]).unwrap();
        assert_eq!(2, seg.char_count());
        assert_eq!(26, seg.data_len());
        let mut expected = BitBuffer::new();
        expected.append_bits(0x0D9F, 13);
        expected.append_bits(0x1AAA, 13);
        let reference = Segment {
            mode: Mode::Kanji,
            char_count: 2,
            data: expected,
        };
        assert_eq!(reference, seg);
    }

    #[test]
    fn reject_bytes_outside_the_shift_jis_ranges() {
        assert_eq!(
            Err(QrError::UnencodableInput),
            Segment::make_kanji(&[0x40, 0x40])
        );
        // Odd length cannot form double-byte characters.
        assert_eq!(Err(QrError::UnencodableInput), Segment::make_kanji(&[0x93]));
    }

    #[test]
    fn assemble_the_textbook_alphanumeric_codewords() {
        let seg = Segment::make_alphanumeric("HELLO WORLD").unwrap();
        let words = seg.assemble(Version::new(1), Ecl::Medium).unwrap();
        assert_eq!(
            vec![32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17],
            words
        );
    }

    #[test]
    fn pad_an_empty_stream_with_alternating_bytes() {
        let seg = Segment::for_text("").unwrap();
        let words = seg.assemble(Version::new(1), Ecl::Low).unwrap();
        assert_eq!(19, words.len());
        // Indicator 0001, ten count bits of zero, four terminator bits,
        // then byte alignment: 0x10 0x00 0x00.
        assert_eq!([0x10, 0x00, 0x00], words[..3]);
        for (i, pair) in words[3..].chunks(2).enumerate() {
            assert_eq!(0xEC, pair[0], "pad byte {}", i);
            if pair.len() == 2 {
                assert_eq!(0x11, pair[1], "pad byte {}", i);
            }
        }
    }

    #[test]
    fn start_the_numeric_stream_with_indicator_and_count() {
        let seg = Segment::make_numeric("1234567890").unwrap();
        let words = seg.assemble(Version::new(1), Ecl::Low).unwrap();
        // 0001 0000001010 ... — indicator then the count field holding 10.
        assert_eq!(0b0001_0000, words[0]);
        assert_eq!(0b0010_1000, words[1] & 0b1111_1000);
    }

    #[test]
    fn shorten_the_terminator_when_capacity_is_tight() {
        // 41 digits is the numeric ceiling of 1-L: 4 + 10 + 137 = 151 bits,
        // so only a single terminator bit fits.
        let text: String = "5".repeat(41);
        let seg = Segment::make_numeric(&text).unwrap();
        let words = seg.assemble(Version::new(1), Ecl::Low).unwrap();
        assert_eq!(19, words.len());
        // No room for 0xEC/0x11 padding: the last byte is the trailing
        // "55" pair (55 in 7 bits) plus the lone terminator bit.
        assert_eq!(0b0110111_0, words[18]);
    }
}
