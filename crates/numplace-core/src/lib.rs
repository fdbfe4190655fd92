//! Core engine for a 9x9 number-placement puzzle.
//!
//! The crate is split along the lifecycle of a puzzle: [`grid`] holds the
//! cell container, [`rules`] decides row/column/box uniqueness, [`solver`]
//! fills grids by randomized backtracking, [`generator`] turns a solved grid
//! into a playable puzzle, and [`session`] tracks a game in progress.
//!
//! No I/O lives here; rendering and input belong to the front-end.

pub mod generator;
pub mod grid;
pub mod rules;
pub mod session;
pub mod solver;

pub use generator::{Difficulty, Generator};
pub use grid::{Grid, ParseGridError, SIZE};
pub use session::{CellView, MoveError, PlaySession};
