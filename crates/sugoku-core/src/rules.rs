//! The placement rule: may a candidate digit go into a cell?

use crate::grid::{Grid, SIZE};

/// True iff placing `digit` at `(row, col)` would not repeat the digit in the
/// cell's row, column, or 3x3 box.
///
/// Pure read-only predicate. Caller contract: `row` and `col` in 0..9, `digit`
/// in 1..=9, and the cell itself still empty — the scan covers the full row,
/// column, and box including the tested position, so a pre-filled candidate
/// would conflict with itself.
pub fn placement_allowed(grid: &Grid, row: usize, col: usize, digit: u8) -> bool {
    for i in 0..SIZE {
        if grid.get(row, i) == digit || grid.get(i, col) == digit {
            return false;
        }
    }

    let box_row = row / 3 * 3;
    let box_col = col / 3 * 3;
    for r in box_row..box_row + 3 {
        for c in box_col..box_col + 3 {
            if grid.get(r, c) == digit {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_row_conflict() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        // Row 0 already holds 5, 3, 7.
        assert!(!placement_allowed(&grid, 0, 2, 5));
        assert!(!placement_allowed(&grid, 0, 2, 7));
    }

    #[test]
    fn test_column_conflict() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        // Column 0 already holds 5, 6, 8, 4, 7.
        assert!(!placement_allowed(&grid, 2, 0, 4));
        assert!(!placement_allowed(&grid, 8, 0, 6));
    }

    #[test]
    fn test_box_conflict() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        // Top-left box holds 5, 3, 6, 9, 8; 9 sits at (2, 1), sharing
        // neither row nor column with (0, 2).
        assert!(!placement_allowed(&grid, 0, 2, 9));
    }

    #[test]
    fn test_legal_placement() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        // 4 is the solution digit for (0, 2); 1 and 2 are also non-conflicting.
        assert!(placement_allowed(&grid, 0, 2, 4));
        assert!(placement_allowed(&grid, 0, 2, 1));
        assert!(placement_allowed(&grid, 0, 2, 2));
    }

    #[test]
    fn test_empty_grid_allows_everything() {
        let grid = Grid::from_cells([[0; 9]; 9]).unwrap();
        for digit in 1..=9 {
            assert!(placement_allowed(&grid, 4, 4, digit));
        }
    }
}
