//! Row/column/box uniqueness checks.
//!
//! One predicate serves two call sites: the solver asks whether a value
//! *could* go into a cell before committing it, and the play session asks
//! whether a value *already* committed duplicates a peer. Both are the same
//! self-excluding scan over the cell's row, column, and 3x3 box.

use crate::grid::{Grid, BOX, SIZE};

/// True iff some *other* cell in the row, column, or box of `(row, col)`
/// holds `value`. The cell under test is excluded by coordinate equality,
/// so a cell may be probed while still holding its own prior value.
pub fn conflicts(grid: &Grid, row: usize, col: usize, value: u8) -> bool {
    for i in 0..SIZE {
        if i != col && grid.get(row, i) == value {
            return true;
        }
        if i != row && grid.get(i, col) == value {
            return true;
        }
    }
    let (box_row, box_col) = box_origin(row, col);
    for r in box_row..box_row + BOX {
        for c in box_col..box_col + BOX {
            if (r != row || c != col) && grid.get(r, c) == value {
                return true;
            }
        }
    }
    false
}

/// Pre-commit gate: can `value` be placed at `(row, col)` without breaking
/// uniqueness?
pub fn is_placeable(grid: &Grid, row: usize, col: usize, value: u8) -> bool {
    !conflicts(grid, row, col, value)
}

/// Post-commit classification: does the value currently stored at
/// `(row, col)` duplicate a peer? Empty cells never conflict.
pub fn has_conflict(grid: &Grid, row: usize, col: usize) -> bool {
    match grid.get(row, col) {
        0 => false,
        value => conflicts(grid, row, col, value),
    }
}

/// Origin of the 3x3 box containing `(row, col)`.
pub fn box_origin(row: usize, col: usize) -> (usize, usize) {
    (row - row % BOX, col - col % BOX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_row_column_and_box_duplicates() {
        let mut grid = Grid::empty();
        grid.set(0, 0, 5);

        // Same row, same column, same box.
        assert!(!is_placeable(&grid, 0, 8, 5));
        assert!(!is_placeable(&grid, 8, 0, 5));
        assert!(!is_placeable(&grid, 1, 1, 5));

        // Unrelated cell or different value is fine.
        assert!(is_placeable(&grid, 4, 4, 5));
        assert!(is_placeable(&grid, 0, 8, 6));
    }

    #[test]
    fn cell_under_test_is_excluded() {
        let mut grid = Grid::empty();
        grid.set(3, 3, 7);

        // Probing the occupied cell with its own value sees no conflict.
        assert!(is_placeable(&grid, 3, 3, 7));
        assert!(!has_conflict(&grid, 3, 3));
    }

    #[test]
    fn committed_duplicate_is_flagged() {
        let mut grid = Grid::empty();
        grid.set(2, 1, 4);
        grid.set(2, 6, 4);

        assert!(has_conflict(&grid, 2, 1));
        assert!(has_conflict(&grid, 2, 6));
        assert!(!has_conflict(&grid, 2, 0)); // empty cell
    }

    #[test]
    fn checks_are_idempotent() {
        let mut grid = Grid::empty();
        grid.set(6, 6, 9);
        for _ in 0..3 {
            assert!(!is_placeable(&grid, 8, 8, 9));
            assert!(!has_conflict(&grid, 6, 6));
        }
    }

    #[test]
    fn box_origin_snaps_to_multiples_of_three() {
        assert_eq!(box_origin(0, 0), (0, 0));
        assert_eq!(box_origin(4, 7), (3, 6));
        assert_eq!(box_origin(8, 2), (6, 0));
    }
}
