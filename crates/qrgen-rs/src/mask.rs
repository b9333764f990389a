use serde::Serialize;

/// A data mask pattern number between 0 and 7 (inclusive).
///
/// Serializes as the bare number; like [`crate::Version`] it is an
/// encoding outcome, so no `Deserialize` is derived.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize)]
pub struct Mask(u8);

impl Mask {
    /// Creates a mask object from the given number.
    ///
    /// Panics if the number is outside the range [0, 7].
    pub const fn new(mask: u8) -> Self {
        assert!(mask <= 7, "Mask value out of range");
        Self(mask)
    }

    /// Returns the value, which is in the range [0, 7].
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether this pattern flips the data module at (row, col).
    pub fn inverts(self, row: usize, col: usize) -> bool {
        match self.0 {
            0 => (row + col) % 2 == 0,
            1 => row % 2 == 0,
            2 => col % 3 == 0,
            3 => (row + col) % 3 == 0,
            4 => (row / 2 + col / 3) % 2 == 0,
            5 => row * col % 2 + row * col % 3 == 0,
            6 => (row * col % 2 + row * col % 3) % 2 == 0,
            7 => ((row + col) % 2 + row * col % 3) % 2 == 0,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn checkerboard_with_pattern_zero() {
        let mask = Mask::new(0);
        assert!(mask.inverts(0, 0));
        assert!(!mask.inverts(0, 1));
        assert!(mask.inverts(1, 1));
    }

    #[test]
    fn stripe_rows_with_pattern_one() {
        let mask = Mask::new(1);
        assert!(mask.inverts(0, 5));
        assert!(!mask.inverts(1, 5));
        assert!(mask.inverts(2, 5));
    }

    #[test]
    fn cover_different_cells_with_every_pattern() {
        // Sample a small window and check the eight patterns are mutually
        // distinct there.
        let prints: Vec<Vec<bool>> = (0..8)
            .map(|id| {
                let mask = Mask::new(id);
                (0..6)
                    .flat_map(|r| (0..6).map(move |c| (r, c)))
                    .map(|(r, c)| mask.inverts(r, c))
                    .collect()
            })
            .collect();
        for a in 0..8 {
            for b in a + 1..8 {
                assert_ne!(prints[a], prints[b], "masks {a} and {b} coincide");
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn reject_ids_past_seven() {
        Mask::new(8);
    }
}
