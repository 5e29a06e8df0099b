//! This module contains the validity checks for Sudoku grids.
//!
//! All functions here are pure: they inspect a [Grid] without mutating any
//! cell value or candidate set. A grid is valid if none of its 27 groups (9
//! rows, 9 columns, 9 blocks) contains a duplicate value; empty cells never
//! conflict. A grid is solved if it is both full and valid.

use crate::{Cell, Grid};
use crate::error::SudokuResult;
use crate::util::ValueSet;

fn group_is_valid(cells: &[&Cell]) -> bool {
    let mut seen = ValueSet::new();

    for cell in cells {
        let value = cell.value();

        if value != 0 && !seen.insert(value).unwrap() {
            return false;
        }
    }

    true
}

/// Indicates whether the given grid is free of conflicts, i.e. no row,
/// column, or block contains the same value twice. A partially filled grid
/// is valid as long as the values already present do not clash; in
/// particular, a fully empty grid is valid.
pub fn is_valid(grid: &Grid) -> bool {
    grid.rows().all(|group| group_is_valid(&group)) &&
        grid.columns().all(|group| group_is_valid(&group)) &&
        grid.blocks().all(|group| group_is_valid(&group))
}

/// Indicates whether the given grid is solved, that is, every cell is
/// assigned a value and [is_valid] holds.
pub fn is_solved(grid: &Grid) -> bool {
    grid.is_full() && is_valid(grid)
}

/// Indicates whether the cell at the given index is free of conflicts, i.e.
/// none of the three groups containing it has a duplicate value. This is
/// cheaper than [is_valid] when only one cell has changed, e.g. to give
/// feedback on a single move of the player.
///
/// # Arguments
///
/// * `grid`: The grid containing the checked cell.
/// * `index`: The position of the checked cell in row-major order. Must be
/// in the range `[0, 81[`.
///
/// # Errors
///
/// If `index` is not in the specified range. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn is_valid_cell(grid: &Grid, index: usize) -> SudokuResult<bool> {
    let cell = grid.get(index)?;

    Ok(group_is_valid(&grid.row(cell.row())?) &&
        group_is_valid(&grid.column(cell.column())?) &&
        group_is_valid(&grid.block(cell.block())?))
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::error::SudokuError;

    fn grid_with(assignments: &[(usize, u8)]) -> Grid {
        let mut grid = Grid::new();

        for &(index, value) in assignments {
            grid.set(index, value).unwrap();
        }

        grid
    }

    #[test]
    fn empty_grid_is_valid_but_not_solved() {
        let grid = Grid::new();

        assert!(is_valid(&grid));
        assert!(!is_solved(&grid));
    }

    #[test]
    fn duplicate_in_row_is_invalid() {
        let grid = grid_with(&[(0, 5), (7, 5)]);

        assert!(!is_valid(&grid));
    }

    #[test]
    fn duplicate_in_column_is_invalid() {
        let grid = grid_with(&[(3, 2), (66, 2)]);

        assert!(!is_valid(&grid));
    }

    #[test]
    fn duplicate_in_block_is_invalid() {
        // Indices 30 and 40 are both in the center block, but in different
        // rows and columns.
        let grid = grid_with(&[(30, 9), (40, 9)]);

        assert!(!is_valid(&grid));
    }

    #[test]
    fn conflict_free_partial_grid_is_valid() {
        let grid = grid_with(&[(0, 1), (1, 2), (9, 3), (40, 1), (80, 1)]);

        assert!(is_valid(&grid));
        assert!(!is_solved(&grid));
    }

    #[test]
    fn full_valid_grid_is_solved() {
        let code = "\
            534678912\
            672195348\
            198342567\
            859761423\
            426853791\
            713924856\
            961537284\
            287419635\
            345286179";
        let grid = Grid::parse(code).unwrap();

        assert!(is_valid(&grid));
        assert!(is_solved(&grid));
    }

    #[test]
    fn full_invalid_grid_is_not_solved() {
        let code = "\
            534678912\
            672195348\
            198342567\
            859761423\
            426853791\
            713924856\
            961537284\
            287419635\
            345286171";
        let grid = Grid::parse(code).unwrap();

        assert!(!is_valid(&grid));
        assert!(!is_solved(&grid));
    }

    #[test]
    fn single_cell_check_reports_local_conflicts() {
        let grid = grid_with(&[(0, 5), (7, 5), (40, 3)]);

        assert!(!is_valid_cell(&grid, 0).unwrap());
        assert!(!is_valid_cell(&grid, 7).unwrap());
        assert!(is_valid_cell(&grid, 40).unwrap());
        assert_eq!(Err(SudokuError::OutOfBounds),
            is_valid_cell(&grid, 81));
    }

    #[test]
    fn validity_checks_do_not_mutate() {
        let grid = grid_with(&[(0, 5), (7, 5), (12, 3)]);
        let before = grid.clone();

        is_valid(&grid);
        is_solved(&grid);
        is_valid_cell(&grid, 0).unwrap();

        assert_eq!(before, grid);
    }
}
