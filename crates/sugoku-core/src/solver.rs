//! Backtracking solver.

use crate::grid::{Grid, EMPTY};
use crate::rules::placement_allowed;

/// Depth-first backtracking solver.
///
/// The search is deterministic: it fills the first empty cell in row-major
/// order, trying candidates 1 through 9 in ascending order, so a given grid
/// always yields the same (lexicographically first) solution. For a puzzle
/// with a unique solution that is the canonical solution.
///
/// Solving is CPU-bound and blocks the calling thread until the search
/// succeeds or is exhausted; worst case is exponential in the number of empty
/// cells, though well-formed puzzles resolve quickly. There is no internal
/// cancellation or timeout.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the solved grid if one exists.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if self.solve_in_place(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Solve `grid` in place. Returns true and leaves the grid fully filled
    /// on success; returns false and leaves the grid as it was passed in when
    /// the search space is exhausted without a solution.
    pub fn solve_in_place(&self, grid: &mut Grid) -> bool {
        solve_recursive(grid)
    }
}

// The grid always reflects exactly the committed partial assignment: a
// candidate is placed before recursing and reset to EMPTY when the branch
// fails, so a false return has restored every cell below the failure point.
fn solve_recursive(grid: &mut Grid) -> bool {
    let (row, col) = match grid.first_empty() {
        Some(pos) => pos,
        None => return true,
    };

    for digit in 1..=9 {
        if placement_allowed(grid, row, col, digit) {
            grid.set(row, col, digit);
            if solve_recursive(grid) {
                return true;
            }
            grid.set(row, col, EMPTY);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const CLASSIC_SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_solve_classic() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let solver = Solver::new();
        let solution = solver.solve(&grid).unwrap();

        assert!(solution.is_solved());
        assert_eq!(solution.to_string_compact(), CLASSIC_SOLVED);
        assert_eq!(solution.rows()[0], [5, 3, 4, 6, 7, 8, 9, 1, 2]);
    }

    #[test]
    fn test_solve_preserves_givens() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let solution = Solver::new().solve(&grid).unwrap();

        for row in 0..9 {
            for col in 0..9 {
                let given = grid.get(row, col);
                if given != EMPTY {
                    assert_eq!(solution.get(row, col), given);
                }
            }
        }
    }

    #[test]
    fn test_solve_in_place() {
        let mut grid = Grid::from_string(CLASSIC).unwrap();
        assert!(Solver::new().solve_in_place(&mut grid));
        assert!(grid.is_solved());
    }

    #[test]
    fn test_solve_is_deterministic() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let solver = Solver::new();
        assert_eq!(solver.solve(&grid), solver.solve(&grid));
    }

    #[test]
    fn test_already_solved_grid() {
        let solved = Grid::from_string(CLASSIC_SOLVED).unwrap();
        let result = Solver::new().solve(&solved).unwrap();
        assert_eq!(result, solved);
    }

    #[test]
    fn test_unsolvable_restores_grid() {
        // Near-complete grid with a contradiction: (0, 2) is the only empty
        // cell and its row forces a 4, but (1, 2) was changed to 4.
        let mut grid = Grid::from_string(CLASSIC_SOLVED).unwrap();
        grid.set(0, 2, EMPTY);
        grid.set(1, 2, 4);

        let before = grid.clone();
        assert!(!Solver::new().solve_in_place(&mut grid));
        assert_eq!(grid, before);
        assert!(Solver::new().solve(&before).is_none());
    }

    #[test]
    fn test_empty_grid_has_canonical_first_solution() {
        let mut grid = Grid::from_cells([[0; 9]; 9]).unwrap();
        assert!(Solver::new().solve_in_place(&mut grid));
        assert!(grid.is_solved());
        // Ascending candidate order fills the first row 1 through 9.
        assert_eq!(grid.rows()[0], [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }
}
