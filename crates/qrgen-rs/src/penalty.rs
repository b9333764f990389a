//! The mask evaluation score. Lower is better.
//!
//! Four rules from the standard: long same-color runs, solid 2×2 blocks,
//! accidental finder lookalikes, and overall dark/light imbalance.

use crate::matrix::ModuleGrid;

const BLOCK_PENALTY: u32 = 3;
const FINDER_PENALTY: u32 = 40;
const BALANCE_PENALTY: u32 = 10;

/// A finder lookalike: the 1:1:3:1:1 core with four light modules on one
/// side, as seen along a row or column.
const FINDER_AFTER: &[bool] = &[
    false, false, false, false, true, false, true, true, true, false, true,
];
const FINDER_BEFORE: &[bool] = &[
    true, false, true, true, true, false, true, false, false, false, false,
];

pub(crate) fn score(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    let row = |r: usize| (0..size).map(move |c| grid.module(r, c));
    let col = |c: usize| (0..size).map(move |r| grid.module(r, c));

    let mut total = 0;
    for line in 0..size {
        total += run_penalty(row(line)) + run_penalty(col(line));
        total += finder_penalty(row(line)) + finder_penalty(col(line));
    }
    total += block_penalty(grid);
    total += balance_penalty(grid);
    total
}

// Every run of 5 or more like-colored modules scores its length minus 2.
fn run_penalty(line: impl Iterator<Item = bool>) -> u32 {
    let mut total = 0;
    let mut run_color = None;
    let mut run_len = 0u32;
    for module in line {
        if Some(module) == run_color {
            run_len += 1;
        } else {
            if run_len >= 5 {
                total += run_len - 2;
            }
            run_color = Some(module);
            run_len = 1;
        }
    }
    if run_len >= 5 {
        total += run_len - 2;
    }
    total
}

// Each 11-module window matching a flanked finder core scores 40. A core
// flanked on both sides matches both orientations and scores twice, one
// occurrence per side.
fn finder_penalty(line: impl Iterator<Item = bool>) -> u32 {
    let cells: Vec<bool> = line.collect();
    let mut total = 0;
    for window in cells.windows(11) {
        if window == FINDER_AFTER || window == FINDER_BEFORE {
            total += FINDER_PENALTY;
        }
    }
    total
}

// Each solid 2×2 block scores 3; overlapping blocks all count.
fn block_penalty(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    let mut total = 0;
    for r in 0..size - 1 {
        for c in 0..size - 1 {
            let color = grid.module(r, c);
            if color == grid.module(r, c + 1)
                && color == grid.module(r + 1, c)
                && color == grid.module(r + 1, c + 1)
            {
                total += BLOCK_PENALTY;
            }
        }
    }
    total
}

// Ten points per full five percent the dark share strays from one half.
// ⌊|dark·100/total − 50| / 5⌋ reduces to |20·dark − 10·total| / total in
// integers.
fn balance_penalty(grid: &ModuleGrid) -> u32 {
    let total = grid.size() * grid.size();
    let dark = grid.dark_count();
    let deviation = (20 * dark as i64 - 10 * total as i64).unsigned_abs() as usize / total;
    deviation as u32 * BALANCE_PENALTY
}
