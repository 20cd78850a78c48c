//! Typed errors for grid construction, the provider boundary, solving,
//! and the strict edit operations.

/// A grid failed validation while being constructed or parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The input did not have exactly 9 rows.
    #[error("expected 9 rows, found {0}")]
    WrongRowCount(usize),
    /// A row did not have exactly 9 cells.
    #[error("row {row} has {len} cells, expected 9")]
    WrongRowLength {
        /// Row index of the offending row.
        row: usize,
        /// Number of cells found in that row.
        len: usize,
    },
    /// A cell held a value outside 0..=9.
    #[error("cell ({row}, {col}) holds {value}, cells must be digits 0-9")]
    CellOutOfRange {
        /// Row index of the offending cell.
        row: usize,
        /// Column index of the offending cell.
        col: usize,
        /// The out-of-range value.
        value: u8,
    },
    /// A compact puzzle string was not exactly 81 characters.
    #[error("puzzle string should have length 81, found {0}")]
    WrongLength(usize),
    /// A compact puzzle string contained a character other than 0-9 or '.'.
    #[error("invalid character {ch:?} at index {index} in puzzle string")]
    InvalidCharacter {
        /// Byte index of the offending character.
        index: usize,
        /// The offending character.
        ch: char,
    },
}

/// The puzzle provider failed to deliver a usable grid.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider returned a grid that is not a well-formed 9x9 digit grid.
    #[error("provider returned a malformed grid: {0}")]
    MalformedGrid(#[from] GridError),
    /// The provider response body could not be decoded.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The provider answered with an error.
    #[error("server error: {0}")]
    Server(String),
}

/// The solver exhausted its search without finding a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("puzzle has no solution")]
pub struct UnsolvablePuzzle;

/// A strict edit operation was rejected. The bool-returning edit operations
/// collapse these to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEdit {
    /// Row or column index outside 0..9.
    #[error("cell ({row}, {col}) is out of bounds")]
    OutOfBounds {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        col: usize,
    },
    /// Digit outside 1..=9.
    #[error("digit {0} is outside 1-9")]
    DigitOutOfRange(u8),
    /// Target cell already holds a digit; it must be emptied first.
    #[error("cell ({row}, {col}) is already filled")]
    CellOccupied {
        /// Row index of the occupied cell.
        row: usize,
        /// Column index of the occupied cell.
        col: usize,
    },
    /// Target cell is a given from the original puzzle and can never be
    /// cleared.
    #[error("cell ({row}, {col}) is a given")]
    GivenCell {
        /// Row index of the given cell.
        row: usize,
        /// Column index of the given cell.
        col: usize,
    },
}
