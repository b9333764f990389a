use crate::gf256;

/// Computes the `degree` error correction codewords for one block.
///
/// Classical synthetic division: the remainder of data·x^degree divided by
/// the generator polynomial. The output length is exactly `degree`, leading
/// zeros included.
pub fn ecc_for_block(data: &[u8], degree: usize) -> Vec<u8> {
    let generator = gf256::generator_poly(degree);
    let mut rem = vec![0u8; data.len() + degree];
    rem[..data.len()].copy_from_slice(data);
    for i in 0..data.len() {
        let factor = rem[i];
        if factor != 0 {
            // The leading generator coefficient is 1, so rem[i] would be
            // cancelled exactly; skip it and fold the tail.
            for (j, &g) in generator.iter().enumerate().skip(1) {
                rem[i + j] ^= gf256::mul(g, factor);
            }
        }
    }
    rem.split_off(data.len())
}

#[cfg(test)]
mod should {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn emit_exactly_degree_codewords() {
        assert_eq!(7, ecc_for_block(&[0; 19], 7).len());
        assert_eq!(vec![0u8; 7], ecc_for_block(&[0; 19], 7));
    }

    #[test]
    fn reproduce_the_textbook_medium_level_block() {
        // The worked 1-M example from the standard's companion tutorials:
        // "HELLO WORLD" alphanumeric data codewords and their ten ECC bytes.
        let data = [
            32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
        ];
        let ecc = ecc_for_block(&data, 10);
        assert_eq!(vec![196, 35, 39, 119, 235, 215, 231, 226, 93, 23], ecc);
    }

    #[test]
    fn leave_no_remainder_when_dividing_the_generator_itself() {
        // g(x)·x⁰ is divisible by g(x): encoding the generator's own
        // coefficients must cancel to zero.
        let generator = crate::gf256::generator_poly(10);
        let ecc = ecc_for_block(&generator, 10);
        assert_eq!(vec![0u8; 10], ecc);
    }
}
