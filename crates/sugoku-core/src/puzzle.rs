//! Puzzle state: the three board snapshots and the edit operations.

use crate::errors::{InvalidEdit, ProviderError, UnsolvablePuzzle};
use crate::grid::{Grid, EMPTY, SIZE};
use crate::provider::{Difficulty, PuzzleProvider};
use crate::solver::Solver;

/// A single puzzle instance.
///
/// Owns three independent snapshots of the fetched grid:
///
/// - the *original* board, immutable after construction, which decides which
///   cells are givens;
/// - the *working* board, the user's in-progress attempt, mutated only
///   through [`Puzzle::fill_cell`] and [`Puzzle::empty_cell`];
/// - the *solution* board, filled lazily by the solver on the first
///   [`Puzzle::solved_board`] call and never re-solved afterwards.
///
/// Each board is a deep copy; mutating one never affects another. Mutating
/// operations take `&mut self`, so a `Puzzle` is single-writer by
/// construction; share it across threads only behind external
/// synchronization.
#[derive(Debug, Clone)]
pub struct Puzzle {
    original: Grid,
    working: Grid,
    solution: Grid,
}

impl Puzzle {
    /// Create a puzzle from a well-formed grid.
    ///
    /// `Grid` constructors validate shape and digit range, so a malformed
    /// provider payload is rejected before it can reach this point.
    pub fn new(grid: Grid) -> Self {
        Self {
            working: grid.clone(),
            solution: grid.clone(),
            original: grid,
        }
    }

    /// Fetch a fresh grid of the requested difficulty from `provider` and
    /// build a puzzle from it. Provider failures propagate unchanged; the
    /// puzzle performs no retries.
    pub fn from_provider(
        provider: &dyn PuzzleProvider,
        difficulty: Difficulty,
    ) -> Result<Self, ProviderError> {
        Ok(Self::new(provider.fetch_puzzle(difficulty)?))
    }

    /// The board as received from the provider.
    pub fn original_board(&self) -> &Grid {
        &self.original
    }

    /// The user's current working board.
    pub fn board(&self) -> &Grid {
        &self.working
    }

    /// The solved board.
    ///
    /// Runs the backtracking solver on the first call (a blocking, CPU-bound
    /// search); once the solution board is solved, later calls return it
    /// unchanged without searching again. Fails with [`UnsolvablePuzzle`] if
    /// the search is exhausted, leaving the solution board untouched.
    pub fn solved_board(&mut self) -> Result<&Grid, UnsolvablePuzzle> {
        if !self.solution.is_solved() {
            let solver = Solver::new();
            if !solver.solve_in_place(&mut self.solution) {
                return Err(UnsolvablePuzzle);
            }
        }
        Ok(&self.solution)
    }

    /// Write `digit` into the empty working cell at `(row, col)`.
    ///
    /// Succeeds only if the indices are in 0..9, the working cell is
    /// currently empty, and `digit` is 1-9. On failure the working board is
    /// left unchanged. See [`Puzzle::try_fill_cell`] for the reason.
    ///
    /// Deliberately does not check the Sudoku placement rule: the user may
    /// commit a digit that conflicts with other cells and discover the
    /// mistake later. Only the solver's search is rule-checked.
    pub fn fill_cell(&mut self, row: usize, col: usize, digit: u8) -> bool {
        self.try_fill_cell(row, col, digit).is_ok()
    }

    /// Strict variant of [`Puzzle::fill_cell`] reporting why an edit was
    /// rejected.
    pub fn try_fill_cell(&mut self, row: usize, col: usize, digit: u8) -> Result<(), InvalidEdit> {
        if row >= SIZE || col >= SIZE {
            return Err(InvalidEdit::OutOfBounds { row, col });
        }
        if !(1..=9).contains(&digit) {
            return Err(InvalidEdit::DigitOutOfRange(digit));
        }
        if self.working.get(row, col) != EMPTY {
            return Err(InvalidEdit::CellOccupied { row, col });
        }
        self.working.set(row, col, digit);
        Ok(())
    }

    /// Reset the working cell at `(row, col)` to empty.
    ///
    /// Succeeds only if the indices are in 0..9 and the cell is not a given
    /// (empty in the original board). Givens can never be cleared. Clearing
    /// an already-empty free cell succeeds and is a no-op.
    pub fn empty_cell(&mut self, row: usize, col: usize) -> bool {
        self.try_empty_cell(row, col).is_ok()
    }

    /// Strict variant of [`Puzzle::empty_cell`] reporting why an edit was
    /// rejected.
    pub fn try_empty_cell(&mut self, row: usize, col: usize) -> Result<(), InvalidEdit> {
        if row >= SIZE || col >= SIZE {
            return Err(InvalidEdit::OutOfBounds { row, col });
        }
        if self.original.get(row, col) != EMPTY {
            return Err(InvalidEdit::GivenCell { row, col });
        }
        self.working.set(row, col, EMPTY);
        Ok(())
    }

    /// True iff every working cell holds a digit.
    ///
    /// Fullness only: a board filled with rule-breaking digits still reports
    /// complete. Compare against [`Puzzle::solved_board`] or use
    /// [`Grid::is_solved`] on [`Puzzle::board`] to check correctness.
    pub fn is_complete(&self) -> bool {
        self.working.is_complete()
    }
}
