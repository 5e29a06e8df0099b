//! This module contains the logic for generating random Sudoku grids.
//!
//! Generation of a playable puzzle is done by first generating a full grid
//! with a [Generator] and then hiding some cells by setting a difficulty,
//! which applies the [Masker](crate::difficulty::Masker).

use crate::Grid;
use crate::error::{SudokuError, SudokuResult};
use crate::solver;
use crate::util::ValueSet;
use crate::validator;

use rand::Rng;
use rand::rngs::ThreadRng;

/// Shuffles the values yielded by the given iterator into a uniformly
/// random permutation.
pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();

    for i in 1..vec.len() {
        let j = rng.gen_range(0..=i);
        vec.swap(i, j);
    }

    vec
}

/// A generator randomly generates a full [Grid], that is, a grid with no
/// missing values. It uses a random number generator to decide the content.
/// For most cases, sensible defaults are provided by
/// [Generator::new_default].
///
/// The generator runs the same backtracking search as the
/// [BacktrackingSolver](crate::solver::BacktrackingSolver), but tries the
/// candidates of each cell in a shuffled order. Without that shuffling,
/// every run would emit the same canonical grid.
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random values.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random values.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Fills the given [Grid] with random values that cause no conflict and
    /// match all values already present. If that is not possible, an error
    /// is returned.
    ///
    /// If no error is returned, it is guaranteed that [Grid::is_solved] on
    /// `grid` returns `true` after this operation. Otherwise, the grid
    /// remains unchanged.
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid to fill with random values.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unsolvable` If there is no set of values that can be
    /// entered into the empty cells without a conflict.
    pub fn fill(&mut self, grid: &mut Grid) -> SudokuResult<()> {
        if !validator::is_valid(grid) {
            return Err(SudokuError::Unsolvable);
        }

        let rng = &mut self.rng;
        let mut order =
            |candidates: ValueSet| shuffle(rng, candidates.iter());
        let mut found = solver::enumerate(grid, &mut order, 1);

        match found.pop() {
            Some(solution) => {
                *grid = solution;
                Ok(())
            },
            None => Err(SudokuError::Unsolvable)
        }
    }

    /// Generates a new random [Grid] with all 81 cells assigned. It is
    /// guaranteed that [Grid::is_solved] on the result returns `true`. Two
    /// calls yield independently random grids.
    pub fn generate(&mut self) -> Grid {
        let mut grid = Grid::new();

        // An empty grid always admits at least one completion.
        self.fill(&mut grid).unwrap();
        grid
    }
}
