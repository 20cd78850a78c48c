//! Sudoku puzzle engine: board model, backtracking solver, and the puzzle
//! provider boundary.
//!
//! A [`Puzzle`] owns three independent snapshots of one fetched grid — the
//! original (which cells are givens), the user's working board, and the
//! lazily solved solution board. Providers implementing [`PuzzleProvider`]
//! supply the initial grid; [`LocalProvider`] serves bundled samples and
//! [`RemoteProvider`] speaks the sugoku HTTP API through an injected
//! [`Transport`].
//!
//! ## Example
//!
//! ```
//! use sugoku_core::{Grid, Puzzle};
//!
//! let grid = Grid::from_string(
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//! )
//! .unwrap();
//! let mut puzzle = Puzzle::new(grid);
//!
//! // Edits only touch the working board; givens are protected.
//! assert!(puzzle.fill_cell(0, 2, 4));
//! assert!(!puzzle.fill_cell(0, 0, 9));
//!
//! // The solution is computed on demand, once.
//! let solved = puzzle.solved_board().unwrap();
//! assert_eq!(solved.rows()[0], [5, 3, 4, 6, 7, 8, 9, 1, 2]);
//! ```

mod errors;
mod grid;
mod provider;
mod puzzle;
mod rules;
mod solver;

pub use errors::{GridError, InvalidEdit, ProviderError, UnsolvablePuzzle};
pub use grid::{Grid, EMPTY, SIZE};
pub use provider::{
    Difficulty, LocalProvider, PuzzleProvider, RemoteProvider, Transport, DEFAULT_BASE_URL,
};
pub use puzzle::Puzzle;
pub use rules::placement_allowed;
pub use solver::Solver;
