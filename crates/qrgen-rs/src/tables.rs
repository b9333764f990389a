//! The enumerated parameter tables of ISO/IEC 18004.
//!
//! Everything here is copied from the standard, not derived: capacities,
//! block structures and alignment coordinates all contain exceptions that
//! no formula captures. Index 0 of each version axis is padding so the
//! tables can be addressed with the version number directly.

use crate::ecl::Ecl;
use crate::version::Version;

/// Data codewords D(v, ecl) available in a symbol.
pub static DATA_CODEWORDS: [[u16; 41]; 4] = [
    [
        0, 19, 34, 55, 80, 108, 136, 156, 194, 232, 274, 324, 370,
        428, 461, 523, 589, 647, 721, 795, 861, 932, 1006, 1094, 1174, 1276,
        1370, 1468, 1531, 1631, 1735, 1843, 1955, 2071, 2191, 2306, 2434, 2566, 2702,
        2812, 2956,
    ], // Low
    [
        0, 16, 28, 44, 64, 86, 108, 124, 154, 182, 216, 254, 290,
        334, 365, 415, 453, 507, 563, 627, 669, 714, 782, 860, 914, 1000,
        1062, 1128, 1193, 1267, 1373, 1455, 1541, 1631, 1725, 1812, 1914, 1992, 2102,
        2216, 2334,
    ], // Medium
    [
        0, 13, 22, 34, 48, 62, 76, 88, 110, 132, 154, 180, 206,
        244, 261, 295, 325, 367, 397, 445, 485, 512, 568, 614, 664, 718,
        754, 808, 871, 911, 985, 1033, 1115, 1171, 1231, 1286, 1354, 1426, 1502,
        1582, 1666,
    ], // Quartile
    [
        0, 9, 16, 26, 36, 46, 60, 66, 86, 100, 122, 140, 158,
        180, 197, 223, 253, 283, 313, 341, 385, 406, 442, 464, 514, 538,
        596, 628, 661, 701, 745, 793, 845, 901, 961, 986, 1054, 1096, 1142,
        1222, 1276,
    ], // High
];

/// Error correction codewords appended to every block of a symbol.
pub static ECC_PER_BLOCK: [[u8; 41]; 4] = [
    [
        0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28,
        28, 28, 28, 30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
        30,
    ], // Low
    [
        0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26,
        26, 26, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
        28,
    ], // Medium
    [
        0, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26,
        30, 28, 30, 30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
        30,
    ], // Quartile
    [
        0, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26,
        28, 30, 24, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
        30,
    ], // High
];

/// Block structure as (count, data codewords per block) groups.
///
/// Blocks are filled in group order; a `(0, 0)` second group means the
/// version splits evenly. The group sums always equal `DATA_CODEWORDS`.
pub static BLOCK_GROUPS: [[[(u8, u8); 2]; 41]; 4] = [
    [
        [(0, 0), (0, 0)], [(1, 19), (0, 0)], [(1, 34), (0, 0)],
        [(1, 55), (0, 0)], [(1, 80), (0, 0)], [(1, 108), (0, 0)],
        [(2, 68), (0, 0)], [(2, 78), (0, 0)], [(2, 97), (0, 0)],
        [(2, 116), (0, 0)], [(2, 68), (2, 69)], [(4, 81), (0, 0)],
        [(2, 92), (2, 93)], [(4, 107), (0, 0)], [(3, 115), (1, 116)],
        [(5, 87), (1, 88)], [(5, 98), (1, 99)], [(1, 107), (5, 108)],
        [(5, 120), (1, 121)], [(3, 113), (4, 114)], [(3, 107), (5, 108)],
        [(4, 116), (4, 117)], [(2, 111), (7, 112)], [(4, 121), (5, 122)],
        [(6, 117), (4, 118)], [(8, 106), (4, 107)], [(10, 114), (2, 115)],
        [(8, 122), (4, 123)], [(3, 117), (10, 118)], [(7, 116), (7, 117)],
        [(5, 115), (10, 116)], [(13, 115), (3, 116)], [(17, 115), (0, 0)],
        [(17, 115), (1, 116)], [(13, 115), (6, 116)], [(12, 121), (7, 122)],
        [(6, 121), (14, 122)], [(17, 122), (4, 123)], [(4, 122), (18, 123)],
        [(20, 117), (4, 118)], [(19, 118), (6, 119)],
    ], // Low
    [
        [(0, 0), (0, 0)], [(1, 16), (0, 0)], [(1, 28), (0, 0)],
        [(1, 44), (0, 0)], [(2, 32), (0, 0)], [(2, 43), (0, 0)],
        [(4, 27), (0, 0)], [(4, 31), (0, 0)], [(2, 38), (2, 39)],
        [(3, 36), (2, 37)], [(4, 43), (1, 44)], [(1, 50), (4, 51)],
        [(6, 36), (2, 37)], [(8, 37), (1, 38)], [(4, 40), (5, 41)],
        [(5, 41), (5, 42)], [(7, 45), (3, 46)], [(10, 46), (1, 47)],
        [(9, 43), (4, 44)], [(3, 44), (11, 45)], [(3, 41), (13, 42)],
        [(17, 42), (0, 0)], [(17, 46), (0, 0)], [(4, 47), (14, 48)],
        [(6, 45), (14, 46)], [(8, 47), (13, 48)], [(19, 46), (4, 47)],
        [(22, 45), (3, 46)], [(3, 45), (23, 46)], [(21, 45), (7, 46)],
        [(19, 47), (10, 48)], [(2, 46), (29, 47)], [(10, 46), (23, 47)],
        [(14, 46), (21, 47)], [(14, 46), (23, 47)], [(12, 47), (26, 48)],
        [(6, 47), (34, 48)], [(29, 46), (14, 47)], [(13, 46), (32, 47)],
        [(40, 47), (7, 48)], [(18, 47), (31, 48)],
    ], // Medium
    [
        [(0, 0), (0, 0)], [(1, 13), (0, 0)], [(1, 22), (0, 0)],
        [(2, 17), (0, 0)], [(2, 24), (0, 0)], [(2, 15), (2, 16)],
        [(4, 19), (0, 0)], [(2, 14), (4, 15)], [(4, 18), (2, 19)],
        [(4, 16), (4, 17)], [(6, 19), (2, 20)], [(4, 22), (4, 23)],
        [(4, 20), (6, 21)], [(8, 20), (4, 21)], [(11, 16), (5, 17)],
        [(5, 24), (7, 25)], [(15, 19), (2, 20)], [(1, 22), (15, 23)],
        [(17, 22), (1, 23)], [(17, 21), (4, 22)], [(15, 24), (5, 25)],
        [(17, 22), (6, 23)], [(7, 24), (16, 25)], [(11, 24), (14, 25)],
        [(11, 24), (16, 25)], [(7, 24), (22, 25)], [(28, 22), (6, 23)],
        [(8, 23), (26, 24)], [(4, 24), (31, 25)], [(1, 23), (37, 24)],
        [(15, 24), (25, 25)], [(42, 24), (1, 25)], [(10, 24), (35, 25)],
        [(29, 24), (19, 25)], [(44, 24), (7, 25)], [(39, 24), (14, 25)],
        [(46, 24), (10, 25)], [(49, 24), (10, 25)], [(48, 24), (14, 25)],
        [(43, 24), (22, 25)], [(34, 24), (34, 25)],
    ], // Quartile
    [
        [(0, 0), (0, 0)], [(1, 9), (0, 0)], [(1, 16), (0, 0)],
        [(2, 13), (0, 0)], [(4, 9), (0, 0)], [(2, 11), (2, 12)],
        [(4, 15), (0, 0)], [(4, 13), (1, 14)], [(4, 14), (2, 15)],
        [(4, 12), (4, 13)], [(6, 15), (2, 16)], [(3, 12), (8, 13)],
        [(7, 14), (4, 15)], [(12, 11), (4, 12)], [(11, 12), (5, 13)],
        [(11, 12), (7, 13)], [(3, 15), (13, 16)], [(2, 14), (17, 15)],
        [(2, 14), (19, 15)], [(9, 13), (16, 14)], [(15, 15), (10, 16)],
        [(19, 16), (6, 17)], [(34, 13), (0, 0)], [(16, 15), (14, 16)],
        [(30, 16), (2, 17)], [(22, 15), (13, 16)], [(33, 16), (4, 17)],
        [(12, 15), (28, 16)], [(11, 15), (31, 16)], [(19, 15), (26, 16)],
        [(23, 15), (25, 16)], [(23, 15), (28, 16)], [(19, 15), (35, 16)],
        [(11, 15), (46, 16)], [(59, 16), (1, 17)], [(22, 15), (41, 16)],
        [(2, 15), (64, 16)], [(24, 15), (46, 16)], [(42, 15), (32, 16)],
        [(10, 15), (67, 16)], [(20, 15), (61, 16)],
    ], // High
];

/// Alignment pattern center coordinates, used on both axes.
pub static ALIGNMENT_POSITIONS: [&[u8]; 41] = [
    &[],
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

/// D(v, ecl): the number of 8-bit data codewords the symbol holds.
pub fn data_codewords(ver: Version, ecl: Ecl) -> usize {
    usize::from(DATA_CODEWORDS[ecl.ordinal()][usize::from(ver.value())])
}

/// Error correction codewords per block (identical for every block).
pub fn ecc_per_block(ver: Version, ecl: Ecl) -> usize {
    usize::from(ECC_PER_BLOCK[ecl.ordinal()][usize::from(ver.value())])
}

/// The block layout groups for a symbol.
pub fn block_groups(ver: Version, ecl: Ecl) -> &'static [(u8, u8); 2] {
    &BLOCK_GROUPS[ecl.ordinal()][usize::from(ver.value())]
}

/// The total number of blocks.
pub fn block_count(ver: Version, ecl: Ecl) -> usize {
    let [(c1, _), (c2, _)] = *block_groups(ver, ecl);
    usize::from(c1) + usize::from(c2)
}

/// Alignment pattern center coordinates for a version.
pub fn alignment_positions(ver: Version) -> &'static [u8] {
    ALIGNMENT_POSITIONS[usize::from(ver.value())]
}
