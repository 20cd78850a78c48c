//! The 9x9 board value type.

use crate::errors::GridError;
use serde::{Deserialize, Serialize};

/// Sentinel value for an empty cell.
pub const EMPTY: u8 = 0;

/// Side length of the board and of every row, column, and digit range.
pub const SIZE: usize = 9;

/// Side length of a box.
const BOX: usize = 3;

/// A 9x9 Sudoku grid. Cells hold digits 1-9, or [`EMPTY`] (0).
///
/// `Grid` is a plain value type: cloning it always produces an independent
/// deep copy, so two grids never share cell storage. Constructors validate
/// their input, which makes a `Grid` well-formed by construction — a cell can
/// never hold a value outside 0..=9 and the dimensions are always 9x9.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; SIZE]; SIZE],
}

impl Grid {
    /// Create a grid from a fixed 9x9 cell array, validating the digit range.
    pub fn from_cells(cells: [[u8; SIZE]; SIZE]) -> Result<Self, GridError> {
        for (row, row_cells) in cells.iter().enumerate() {
            for (col, &value) in row_cells.iter().enumerate() {
                if value > 9 {
                    return Err(GridError::CellOutOfRange { row, col, value });
                }
            }
        }
        Ok(Self { cells })
    }

    /// Create a grid from row vectors, the shape puzzle providers deliver.
    ///
    /// Validates that there are exactly 9 rows of exactly 9 cells each and
    /// that every cell is a digit 0-9.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        if rows.len() != SIZE {
            return Err(GridError::WrongRowCount(rows.len()));
        }
        let mut cells = [[EMPTY; SIZE]; SIZE];
        for (row, row_values) in rows.iter().enumerate() {
            if row_values.len() != SIZE {
                return Err(GridError::WrongRowLength {
                    row,
                    len: row_values.len(),
                });
            }
            for (col, &value) in row_values.iter().enumerate() {
                if value > 9 {
                    return Err(GridError::CellOutOfRange { row, col, value });
                }
                cells[row][col] = value;
            }
        }
        Ok(Self { cells })
    }

    /// Parse a grid from the compact 81-character line format, row-major.
    /// `'0'` and `'.'` both mean an empty cell.
    pub fn from_string(s: &str) -> Result<Self, GridError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != SIZE * SIZE {
            return Err(GridError::WrongLength(chars.len()));
        }
        let mut cells = [[EMPTY; SIZE]; SIZE];
        for (index, &ch) in chars.iter().enumerate() {
            let value = match ch {
                '.' => EMPTY,
                '0'..='9' => ch as u8 - b'0',
                _ => return Err(GridError::InvalidCharacter { index, ch }),
            };
            cells[index / SIZE][index % SIZE] = value;
        }
        Ok(Self { cells })
    }

    /// Render the grid in the compact 81-character line format.
    pub fn to_string_compact(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&v| char::from(b'0' + v))
            .collect()
    }

    /// Value at `(row, col)`. Panics if an index is outside 0..9.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Set the cell at `(row, col)` to `value`.
    ///
    /// Caller contract: indices in 0..9 (panics otherwise) and `value` in
    /// 0..=9 (debug-asserted). Edits that respect puzzle semantics belong on
    /// [`Puzzle`](crate::Puzzle); this is the raw cell store.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        debug_assert!(value <= 9, "cell values must be digits 0-9");
        self.cells[row][col] = value;
    }

    /// The raw cells, row-major.
    pub fn rows(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    /// Position of the first empty cell in row-major order, if any.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col] == EMPTY {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == EMPTY).count()
    }

    /// Number of filled cells.
    pub fn given_count(&self) -> usize {
        SIZE * SIZE - self.empty_count()
    }

    /// True iff no cell is empty. This checks fullness only, not whether the
    /// contents respect the Sudoku rules; see [`Grid::is_solved`] for that.
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// True iff the grid is a solved Sudoku: no empty cell, and every row,
    /// column, and 3x3 box contains each digit 1-9 exactly once.
    pub fn is_solved(&self) -> bool {
        for i in 0..SIZE {
            if !Self::house_solved((0..SIZE).map(|col| self.cells[i][col])) {
                return false;
            }
            if !Self::house_solved((0..SIZE).map(|row| self.cells[row][i])) {
                return false;
            }
            let (box_row, box_col) = (i / BOX * BOX, i % BOX * BOX);
            if !Self::house_solved(
                (0..SIZE).map(|j| self.cells[box_row + j / BOX][box_col + j % BOX]),
            ) {
                return false;
            }
        }
        true
    }

    // A house (row, column, or box) is solved when each digit 1-9 appears
    // exactly once, which for nine cells is the same as all digits present.
    fn house_solved(values: impl Iterator<Item = u8>) -> bool {
        let mut seen = [false; SIZE + 1];
        for value in values {
            if value == EMPTY || seen[value as usize] {
                return false;
            }
            seen[value as usize] = true;
        }
        true
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, row_cells) in self.cells.iter().enumerate() {
            if row > 0 && row % BOX == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (col, &value) in row_cells.iter().enumerate() {
                if col > 0 {
                    write!(f, "{}", if col % BOX == 0 { " | " } else { " " })?;
                }
                if value == EMPTY {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const CLASSIC_SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_from_string_roundtrip() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        assert_eq!(grid.to_string_compact(), CLASSIC);
        assert_eq!(grid.get(0, 0), 5);
        assert_eq!(grid.get(0, 2), EMPTY);
        assert_eq!(grid.given_count(), 30);
    }

    #[test]
    fn test_from_string_accepts_dots() {
        let dotted: String = CLASSIC.chars().map(|c| if c == '0' { '.' } else { c }).collect();
        assert_eq!(Grid::from_string(&dotted).unwrap(), Grid::from_string(CLASSIC).unwrap());
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        assert_eq!(Grid::from_string("123"), Err(GridError::WrongLength(3)));
        let mut s = CLASSIC.to_string();
        s.replace_range(4..5, "x");
        assert_eq!(
            Grid::from_string(&s),
            Err(GridError::InvalidCharacter { index: 4, ch: 'x' })
        );
    }

    #[test]
    fn test_from_rows_validates_shape() {
        let rows = vec![vec![0u8; 9]; 8];
        assert_eq!(Grid::from_rows(&rows), Err(GridError::WrongRowCount(8)));

        let mut rows = vec![vec![0u8; 9]; 9];
        rows[3] = vec![0u8; 10];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::WrongRowLength { row: 3, len: 10 })
        );

        let mut rows = vec![vec![0u8; 9]; 9];
        rows[2][7] = 12;
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::CellOutOfRange { row: 2, col: 7, value: 12 })
        );
    }

    #[test]
    fn test_from_rows_valid() {
        let rows: Vec<Vec<u8>> = Grid::from_string(CLASSIC)
            .unwrap()
            .rows()
            .iter()
            .map(|r| r.to_vec())
            .collect();
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.to_string_compact(), CLASSIC);
    }

    #[test]
    fn test_is_complete_is_fullness_only() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        assert!(!grid.is_complete());

        // Filled with a rule-breaking pattern: complete but not solved.
        let all_ones = Grid::from_cells([[1; 9]; 9]).unwrap();
        assert!(all_ones.is_complete());
        assert!(!all_ones.is_solved());
    }

    #[test]
    fn test_is_solved() {
        let solved = Grid::from_string(CLASSIC_SOLVED).unwrap();
        assert!(solved.is_solved());

        // One swapped pair breaks the row and column constraints.
        let mut broken = solved.clone();
        let (a, b) = (broken.get(0, 0), broken.get(0, 1));
        broken.set(0, 0, b);
        broken.set(0, 1, a);
        assert!(broken.is_complete());
        assert!(!broken.is_solved());
    }

    #[test]
    fn test_clone_is_deep() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let mut copy = grid.clone();
        copy.set(0, 2, 4);
        assert_eq!(grid.get(0, 2), EMPTY);
        assert_eq!(copy.get(0, 2), 4);
    }

    #[test]
    fn test_first_empty_row_major() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        assert_eq!(grid.first_empty(), Some((0, 2)));

        let solved = Grid::from_string(CLASSIC_SOLVED).unwrap();
        assert_eq!(solved.first_empty(), None);
    }
}
