use crate::ecl::Ecl;
use crate::error::QrError;
use crate::reed_solomon;
use crate::tables;
use crate::version::Version;

/// Splits the data codewords into blocks, appends Reed-Solomon codewords
/// to each, and interleaves everything into the final transmission order.
///
/// Data codewords are read column-wise across the blocks (blocks from the
/// first, shorter group run out early and simply stop contributing), then
/// the equal-length ECC arrays are read the same way.
pub(crate) fn ecc_and_interleave(
    data: &[u8],
    version: Version,
    ecl: Ecl,
) -> Result<Vec<u8>, QrError> {
    if data.len() != tables::data_codewords(version, ecl) {
        return Err(QrError::InternalInvariantViolated(
            "data codeword count disagrees with the capacity table",
        ));
    }

    let blocks = split_blocks(data, version, ecl);
    let ecc_len = tables::ecc_per_block(version, ecl);
    let ecc_blocks: Vec<Vec<u8>> = blocks
        .iter()
        .map(|block| reed_solomon::ecc_for_block(block, ecc_len))
        .collect();

    let mut out = Vec::with_capacity(data.len() + ecc_len * blocks.len());
    interleave_into(&mut out, &blocks);
    interleave_into(&mut out, &ecc_blocks);

    if out.len() != data.len() + ecc_len * blocks.len() {
        return Err(QrError::InternalInvariantViolated(
            "interleaved stream length disagrees with the block layout",
        ));
    }
    Ok(out)
}

/// Cuts the data sequentially into the per-version block sizes.
fn split_blocks<'a>(data: &'a [u8], version: Version, ecl: Ecl) -> Vec<&'a [u8]> {
    let [(c1, s1), (c2, s2)] = *tables::block_groups(version, ecl);
    let mut blocks = Vec::with_capacity(usize::from(c1) + usize::from(c2));
    let mut rest = data;
    for (count, size) in [(c1, s1), (c2, s2)] {
        for _ in 0..count {
            let (block, tail) = rest.split_at(usize::from(size));
            blocks.push(block);
            rest = tail;
        }
    }
    blocks
}

/// Emits the i-th codeword of every block, for i ascending, skipping
/// blocks that have run out.
fn interleave_into<T: AsRef<[u8]>>(out: &mut Vec<u8>, blocks: &[T]) {
    let longest = blocks.iter().map(|b| b.as_ref().len()).max().unwrap_or(0);
    for i in 0..longest {
        for block in blocks {
            if let Some(&word) = block.as_ref().get(i) {
                out.push(word);
            }
        }
    }
}
