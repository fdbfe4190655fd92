//! State of a puzzle being played: the frozen original, the live grid the
//! player edits, and a per-cell conflict mask.

use std::fmt;

use crate::grid::{Grid, SIZE};
use crate::rules;

/// Why a move was rejected. Rejected moves leave the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Row, column, or value outside `1..=9`.
    OutOfRange,
    /// The target cell is a given from the original puzzle.
    FixedCell,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => {
                write!(f, "row, column, and value must be between 1 and 9")
            }
            Self::FixedCell => write!(f, "that cell is fixed"),
        }
    }
}

impl std::error::Error for MoveError {}

/// What a renderer should show for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// No value yet.
    Empty,
    /// A given from the original puzzle; never flagged.
    Given,
    /// A player-entered value with no current conflict.
    Player,
    /// A player-entered value duplicating a peer.
    PlayerError,
}

/// A game in progress.
pub struct PlaySession {
    original: Grid,
    current: Grid,
    errors: [[bool; SIZE]; SIZE],
}

impl PlaySession {
    /// Start a session from a freshly generated puzzle. The puzzle is
    /// snapshotted as the immutable original; its non-empty cells become
    /// the givens.
    pub fn new(puzzle: Grid) -> Self {
        Self {
            original: puzzle.clone(),
            current: puzzle,
            errors: [[false; SIZE]; SIZE],
        }
    }

    /// The grid as the player has filled it so far.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// The puzzle as generated, before any player edit.
    pub fn original(&self) -> &Grid {
        &self.original
    }

    /// Per-cell conflict flags, 0-indexed.
    pub fn errors(&self) -> &[[bool; SIZE]; SIZE] {
        &self.errors
    }

    /// True iff every cell is filled. Derived by scanning, not stored.
    pub fn is_complete(&self) -> bool {
        self.current.is_complete()
    }

    /// Apply a player move with 1-indexed coordinates and value.
    ///
    /// On success the value is written and only the written cell's
    /// conflict flag is recomputed; the returned bool is that flag. Out of
    /// range input and writes to givens are rejected without mutating
    /// anything.
    pub fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        value: u8,
    ) -> Result<bool, MoveError> {
        if !(1..=SIZE).contains(&row)
            || !(1..=SIZE).contains(&col)
            || !(1..=SIZE as u8).contains(&value)
        {
            return Err(MoveError::OutOfRange);
        }
        let (row, col) = (row - 1, col - 1);

        if self.original.get(row, col) != 0 {
            return Err(MoveError::FixedCell);
        }

        self.current.set(row, col, value);
        let conflict = rules::has_conflict(&self.current, row, col);
        self.errors[row][col] = conflict;
        Ok(conflict)
    }

    /// Render classification for one cell, 0-indexed.
    pub fn cell_view(&self, row: usize, col: usize) -> CellView {
        if self.current.get(row, col) == 0 {
            CellView::Empty
        } else if self.original.get(row, col) != 0 {
            CellView::Given
        } else if self.errors[row][col] {
            CellView::PlayerError
        } else {
            CellView::Player
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Difficulty, Generator};
    use crate::solver;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session_with_given_at_0_0() -> PlaySession {
        let mut puzzle = Grid::empty();
        puzzle.set(0, 0, 5);
        PlaySession::new(puzzle)
    }

    #[test]
    fn rejects_out_of_range_input() {
        let mut session = session_with_given_at_0_0();
        for (row, col, value) in [(0, 1, 1), (10, 1, 1), (1, 0, 1), (1, 10, 1), (2, 2, 0), (2, 2, 10)]
        {
            assert_eq!(session.apply_move(row, col, value), Err(MoveError::OutOfRange));
        }
        assert_eq!(session.current(), session.original());
    }

    #[test]
    fn rejects_writes_to_givens_without_mutation() {
        let mut session = session_with_given_at_0_0();
        for value in 1..=9 {
            assert_eq!(session.apply_move(1, 1, value), Err(MoveError::FixedCell));
        }
        assert_eq!(session.current().get(0, 0), 5);
        assert!(!session.errors()[0][0]);
    }

    #[test]
    fn conflict_flag_is_recomputed_per_write() {
        let mut session = session_with_given_at_0_0();

        // 5 in the same row as the given 5: flagged.
        assert_eq!(session.apply_move(1, 5, 5), Ok(true));
        assert!(session.errors()[0][4]);

        // Overwrite with a non-conflicting value: flag clears.
        assert_eq!(session.apply_move(1, 5, 7), Ok(false));
        assert!(!session.errors()[0][4]);
    }

    #[test]
    fn other_cells_flags_persist_untouched() {
        let mut session = session_with_given_at_0_0();
        assert_eq!(session.apply_move(1, 5, 5), Ok(true));

        // A later move elsewhere leaves the stale flag alone, even though
        // it shares a column with the flagged cell.
        assert_eq!(session.apply_move(5, 5, 5), Ok(true));
        assert!(session.errors()[0][4]);
        assert!(session.errors()[4][4]);
    }

    #[test]
    fn cell_views_cover_all_four_states() {
        let mut session = session_with_given_at_0_0();
        assert_eq!(session.cell_view(0, 0), CellView::Given);
        assert_eq!(session.cell_view(8, 8), CellView::Empty);

        session.apply_move(1, 2, 5).unwrap();
        assert_eq!(session.cell_view(0, 1), CellView::PlayerError);

        session.apply_move(1, 2, 6).unwrap();
        assert_eq!(session.cell_view(0, 1), CellView::Player);
    }

    #[test]
    fn completion_is_derived_from_the_grid() {
        let mut solved = Grid::empty();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(solver::solve(&mut solved, &mut rng));

        let mut puzzle = solved.clone();
        puzzle.set(4, 4, 0);
        let mut session = PlaySession::new(puzzle);
        assert!(!session.is_complete());

        session.apply_move(5, 5, solved.get(4, 4)).unwrap();
        assert!(session.is_complete());
    }

    #[test]
    fn easy_game_walkthrough() {
        let mut generator = Generator::with_seed(21);
        let puzzle = generator.generate(Difficulty::Easy);
        assert_eq!(puzzle.empty_count(), 40);

        let mut session = PlaySession::new(puzzle);

        // First blank cell, in row-major order, whose row already holds a
        // placed value to duplicate.
        let (row, col, duplicate) = (0..SIZE)
            .flat_map(|r| (0..SIZE).map(move |c| (r, c)))
            .filter(|&(r, c)| session.current().get(r, c) == 0)
            .find_map(|(r, c)| {
                (0..SIZE)
                    .map(|i| session.current().get(r, i))
                    .find(|&v| v != 0)
                    .map(|v| (r, c, v))
            })
            .unwrap();
        assert_eq!(session.apply_move(row + 1, col + 1, duplicate), Ok(true));
        assert!(!session.is_complete());
        assert!(session.errors()[row][col]);

        // Overwrite with the value a completion of the original puzzle
        // puts there; the flag clears.
        let mut completion = session.original().clone();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(solver::solve(&mut completion, &mut rng));
        let correct = completion.get(row, col);
        assert_eq!(session.apply_move(row + 1, col + 1, correct), Ok(false));
        assert!(!session.errors()[row][col]);
    }
}
