use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::grid::{Grid, SIZE};
use crate::solver;

/// Difficulty level of a puzzle, a proxy for how many cells are blanked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of cells cleared from a complete solution.
    pub fn blank_count(&self) -> usize {
        match self {
            Difficulty::Easy => 40,
            Difficulty::Medium => 55,
            Difficulty::Hard => 65,
        }
    }

    /// Map a numeric menu level (1..=3) to a difficulty. Anything out of
    /// range falls back to Medium.
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            3 => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    /// All levels, in menu order.
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "easy" => Ok(Difficulty::Easy),
            "2" | "medium" => Ok(Difficulty::Medium),
            "3" | "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Unrecognized difficulty name or level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError(String);

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty {:?} (expected easy, medium, or hard)", self.0)
    }
}

impl std::error::Error for ParseDifficultyError {}

/// Puzzle generator owning its random source.
///
/// One generator carries one RNG for its whole lifetime; there is no
/// per-call reseeding, and a fixed seed reproduces the same puzzles.
pub struct Generator {
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed, for reproducible puzzles.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce a playable puzzle: a random complete solution with
    /// `difficulty.blank_count()` cells cleared.
    ///
    /// The puzzle is solvable by construction (the solution it was carved
    /// from is a completion), but uniqueness of that solution is not
    /// checked.
    pub fn generate(&mut self, difficulty: Difficulty) -> Grid {
        let mut grid = loop {
            let mut candidate = Grid::empty();
            if solver::solve(&mut candidate, &mut self.rng) {
                break candidate;
            }
        };

        let mut remaining = difficulty.blank_count();
        while remaining > 0 {
            let row = self.rng.gen_range(0..SIZE);
            let col = self.rng.gen_range(0..SIZE);
            if grid.get(row, col) != 0 {
                grid.set(row, col, 0);
                remaining -= 1;
            }
        }

        debug!(
            "generated {difficulty} puzzle with {} blanks",
            grid.empty_count()
        );
        grid
    }
}
