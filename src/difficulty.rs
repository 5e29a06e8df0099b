//! This module contains the difficulty levels and the masking pass which
//! turns a full grid into a playable puzzle.
//!
//! A [Masker] does not remove values from the grid; it only marks cells as
//! hidden, so the true solution stays available for checking. Which cells
//! stay visible is decided uniformly at random, the difficulty only fixes
//! *how many* of them there are. Note that no attempt is made to guarantee
//! that the visible cells determine the solution uniquely; callers that
//! need this property can check the masked puzzle with
//! [BacktrackingSolver::assess](crate::solver::BacktrackingSolver::assess)
//! and re-mask if necessary.

use crate::{Grid, CELL_COUNT};
use crate::error::{SudokuError, SudokuResult};
use crate::generator::shuffle;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

/// An enumeration of the difficulty levels of a puzzle, ordered from
/// easiest to hardest. Harder levels reveal fewer cells to the player.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq,
    PartialOrd, Serialize)]
pub enum Difficulty {

    /// No difficulty has been decided yet. A grid starts out at this level,
    /// and masking at it is an error: the engine never guesses a
    /// difficulty on behalf of the caller.
    Null,

    /// All cells are visible. This level is meant for verifying the engine
    /// itself, not for real play.
    Test,

    /// The easiest playable level.
    Easy,

    /// The default level for casual play.
    Medium,

    /// A level for experienced players.
    Hard,

    /// A level for very experienced players.
    Expert,

    /// The hardest level, for specially crafted puzzles.
    Purposed
}

impl Difficulty {

    /// Gets the number of cells that remain visible when a grid is masked
    /// at this difficulty, or `None` for [Difficulty::Null], at which
    /// masking is not permitted.
    pub fn revealed_cells(self) -> Option<usize> {
        match self {
            Difficulty::Null => None,
            Difficulty::Test => Some(81),
            Difficulty::Easy => Some(40),
            Difficulty::Medium => Some(34),
            Difficulty::Hard => Some(28),
            Difficulty::Expert => Some(24),
            Difficulty::Purposed => Some(22)
        }
    }
}

impl Default for Difficulty {
    fn default() -> Difficulty {
        Difficulty::Null
    }
}

/// A masker applies the difficulty mask to a [Grid]: it decides, per cell,
/// whether the cell is hidden from the player. A random number generator
/// chooses which cells stay visible. For most cases, sensible defaults are
/// provided by [Masker::new_default].
///
/// The usual entry point is [Grid::set_difficulty], which constructs a
/// masker internally; a masker is only used directly when the choice of
/// random number generator matters, e.g. for reproducible puzzles.
pub struct Masker<R: Rng> {
    rng: R
}

impl Masker<ThreadRng> {

    /// Creates a new masker that uses a [ThreadRng] to choose the visible
    /// cells.
    pub fn new_default() -> Masker<ThreadRng> {
        Masker::new(rand::thread_rng())
    }
}

impl<R: Rng> Masker<R> {

    /// Creates a new masker that uses the given random number generator to
    /// choose the visible cells.
    pub fn new(rng: R) -> Masker<R> {
        Masker {
            rng
        }
    }

    /// Stores the given difficulty on the grid and recomputes the hidden
    /// flag of every cell: a uniformly chosen set of cells of the
    /// difficulty-specific cardinality stays visible, all others are
    /// hidden. Running this again, also at the same difficulty, chooses a
    /// fresh reveal set.
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid to mask.
    /// * `difficulty`: The difficulty level deciding how many cells stay
    /// visible.
    ///
    /// # Errors
    ///
    /// If `difficulty` is [Difficulty::Null]. In that case,
    /// `SudokuError::DifficultyRequired` is returned and the grid remains
    /// unchanged.
    pub fn mask(&mut self, grid: &mut Grid, difficulty: Difficulty)
            -> SudokuResult<()> {
        let revealed = difficulty.revealed_cells()
            .ok_or(SudokuError::DifficultyRequired)?;
        let order = shuffle(&mut self.rng, 0..CELL_COUNT);
        let mut visible = [false; CELL_COUNT];

        for &index in order.iter().take(revealed) {
            visible[index] = true;
        }

        for index in 0..CELL_COUNT {
            grid.set_hidden(index, !visible[index]).unwrap();
        }

        grid.difficulty = difficulty;
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::generator::Generator;

    use rand::SeedableRng;

    use rand_chacha::ChaCha8Rng;

    fn playable_levels() -> Vec<Difficulty> {
        vec![
            Difficulty::Test,
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
            Difficulty::Purposed
        ]
    }

    fn count_visible(grid: &Grid) -> usize {
        grid.to_displayed_values().iter()
            .filter(|&&value| value != 0)
            .count()
    }

    #[test]
    fn levels_are_ordered_by_hardness() {
        let levels = playable_levels();

        for pair in levels.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].revealed_cells().unwrap() >=
                pair[1].revealed_cells().unwrap());
        }

        assert!(Difficulty::Null < Difficulty::Test);
        assert_eq!(None, Difficulty::Null.revealed_cells());
    }

    #[test]
    fn masking_reveals_configured_count() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(7));
        let grid = generator.generate();

        for level in playable_levels() {
            let mut masked = grid.clone();
            masked.set_difficulty(level).unwrap();

            assert_eq!(level.revealed_cells().unwrap(),
                count_visible(&masked),
                "Wrong reveal count for {:?}.", level);
            assert_eq!(level, masked.difficulty());
        }
    }

    #[test]
    fn test_level_hides_nothing() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(7));
        let mut grid = generator.generate();
        grid.set_difficulty(Difficulty::Test).unwrap();

        for cell in grid.cells() {
            assert!(!cell.is_hidden());
            assert_eq!(cell.value(), cell.displayed_value());
        }

        assert_eq!(grid.to_values(), grid.to_displayed_values());
    }

    #[test]
    fn masking_at_null_is_rejected() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(7));
        let mut grid = generator.generate();
        let before = grid.clone();

        assert_eq!(Err(SudokuError::DifficultyRequired),
            grid.set_difficulty(Difficulty::Null));
        assert_eq!(before, grid);
    }

    #[test]
    fn masking_keeps_true_values() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(7));
        let mut grid = generator.generate();
        let values_before = grid.to_values();
        grid.set_difficulty(Difficulty::Expert).unwrap();

        assert_eq!(values_before, grid.to_values());
        assert!(grid.is_solved());
    }

    #[test]
    fn remasking_recomputes_reveal_set() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(7));
        let mut grid = generator.generate();

        grid.set_difficulty_with(Difficulty::Hard,
            ChaCha8Rng::seed_from_u64(1)).unwrap();
        let first: Vec<bool> =
            grid.cells().iter().map(|cell| cell.is_hidden()).collect();

        grid.set_difficulty_with(Difficulty::Hard,
            ChaCha8Rng::seed_from_u64(2)).unwrap();
        let second: Vec<bool> =
            grid.cells().iter().map(|cell| cell.is_hidden()).collect();

        assert_eq!(28, count_visible(&grid));
        assert_ne!(first, second);
    }

    #[test]
    fn same_seed_masks_same_cells() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(7));
        let grid = generator.generate();

        let mut first = grid.clone();
        first.set_difficulty_with(Difficulty::Medium,
            ChaCha8Rng::seed_from_u64(5)).unwrap();

        let mut second = grid.clone();
        second.set_difficulty_with(Difficulty::Medium,
            ChaCha8Rng::seed_from_u64(5)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn difficulty_serde_round_trip() {
        let json = serde_json::to_string(&Difficulty::Expert).unwrap();

        assert_eq!("\"Expert\"", json);
        assert_eq!(Difficulty::Expert,
            serde_json::from_str::<Difficulty>(&json).unwrap());
    }
}
