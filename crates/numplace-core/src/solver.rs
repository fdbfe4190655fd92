//! Randomized backtracking solver.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Grid, SIZE};
use crate::rules;

/// Fill every empty cell of `grid` in place so that the result satisfies
/// row/column/box uniqueness. Returns `false` — with the grid restored to
/// its input state — when no completion exists.
///
/// Candidates are tried in a uniformly shuffled order drawn from `rng`, so
/// repeated calls on the same partial grid may produce different
/// completions. On an all-empty grid this always succeeds.
pub fn solve<R: Rng>(grid: &mut Grid, rng: &mut R) -> bool {
    debug!("solving grid with {} empty cells", grid.empty_count());
    solve_recursive(grid, rng)
}

fn solve_recursive<R: Rng>(grid: &mut Grid, rng: &mut R) -> bool {
    // First empty cell in row-major order; a filled grid is a solution.
    let Some((row, col)) = first_empty(grid) else {
        return true;
    };

    let mut candidates: [u8; SIZE] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    candidates.shuffle(rng);

    for &value in &candidates {
        if rules::is_placeable(grid, row, col, value) {
            grid.set(row, col, value);
            if solve_recursive(grid, rng) {
                return true;
            }
            // Undo before trying the next candidate.
            grid.set(row, col, 0);
        }
    }
    false
}

fn first_empty(grid: &Grid) -> Option<(usize, usize)> {
    for row in 0..SIZE {
        for col in 0..SIZE {
            if grid.get(row, col) == 0 {
                return Some((row, col));
            }
        }
    }
    None
}
