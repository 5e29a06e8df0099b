//! This module contains the logic for solving Sudoku grids.
//!
//! Most importantly, this module contains the [BacktrackingSolver], which
//! completes a grid with some cells pre-filled. The underlying recursive
//! search is shared with the [Generator](crate::generator::Generator); the
//! two differ only in the [CandidateOrder] they use, so the algorithm is
//! implemented exactly once.

use crate::{Grid, CELL_COUNT};
use crate::error::{SudokuError, SudokuResult};
use crate::util::ValueSet;
use crate::validator;

/// A trait for types which decide the order in which the candidate values of
/// a cell are tried by the backtracking search. The solver uses [Ascending]
/// to make the found solution deterministic, while the generator shuffles
/// the candidates to obtain a random grid.
///
/// It is blanket-implemented for all types implementing
/// `FnMut(ValueSet) -> Vec<u8>`.
pub trait CandidateOrder {

    /// Arranges the values of the given candidate set into the order in
    /// which they shall be tried. Implementations must return a permutation
    /// of exactly the values in `candidates`: adding values would break the
    /// validity of the search, dropping values would make it incomplete.
    fn arrange(&mut self, candidates: ValueSet) -> Vec<u8>;
}

/// A [CandidateOrder] which tries candidate values in ascending numeric
/// order. With this order, the backtracking search is fully deterministic.
pub struct Ascending;

impl CandidateOrder for Ascending {
    fn arrange(&mut self, candidates: ValueSet) -> Vec<u8> {
        candidates.iter().collect()
    }
}

impl<F: FnMut(ValueSet) -> Vec<u8>> CandidateOrder for F {
    fn arrange(&mut self, candidates: ValueSet) -> Vec<u8> {
        self(candidates)
    }
}

fn enumerate_rec(grid: &mut Grid, index: usize,
        order: &mut impl CandidateOrder, limit: usize,
        found: &mut Vec<Grid>) {
    if found.len() == limit {
        return;
    }

    if index == CELL_COUNT {
        found.push(grid.clone());
        return;
    }

    if !grid.get(index).unwrap().is_empty() {
        enumerate_rec(grid, index + 1, order, limit, found);
        return;
    }

    let candidates = grid.get(index).unwrap().candidates();

    for value in order.arrange(candidates) {
        grid.set(index, value).unwrap();
        enumerate_rec(grid, index + 1, order, limit, found);
        grid.clear(index).unwrap();

        if found.len() == limit {
            return;
        }
    }
}

/// The backtracking search shared by solver and generator. Walks the cells
/// in ascending index order, assigns candidates in the order given by
/// `order`, and recurses; a cell that is assigned at entry is a frozen clue
/// and is never touched. Completions are collected into the returned vector
/// until `limit` of them have been found. The grid is restored to its input
/// state before this function returns.
pub(crate) fn enumerate(grid: &mut Grid, order: &mut impl CandidateOrder,
        limit: usize) -> Vec<Grid> {
    let mut found = Vec::new();
    enumerate_rec(grid, 0, order, limit, &mut found);
    found
}

/// An enumeration of the different ways a grid can be solvable, as
/// classified by [BacktrackingSolver::assess].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solvability {

    /// Indicates that the grid is not solvable at all.
    Impossible,

    /// Indicates that the grid has a unique solution, which is wrapped in
    /// this instance.
    Unique(Grid),

    /// Indicates that the grid has more than one solution.
    Ambiguous
}

/// A solver which completes Sudoku grids by recursively testing all
/// candidate values for each empty cell, in ascending order. This means two
/// things:
///
/// * Its worst-case runtime is exponential, i.e. it may be slow on grids
/// with very few clues.
/// * It finds a solution whenever one exists, and it finds the same
/// solution every time for a given input, which makes it usable for
/// verification and checking of submitted grids.
pub struct BacktrackingSolver;

impl BacktrackingSolver {

    /// Attempts to complete the given grid without changing any cell that is
    /// already assigned. The input grid itself is not mutated; the first
    /// solution found is returned as a new grid. Because candidates are
    /// tried in ascending order, the result is deterministic.
    ///
    /// # Errors
    ///
    /// If the search exhausts all branches without completing the grid, or
    /// the given clues already conflict. In that case,
    /// `SudokuError::Unsolvable` is returned. Note that this is not a
    /// distinguishable "no solution" versus "multiple solutions" signal; a
    /// grid with multiple solutions simply yields the first one found. Use
    /// [BacktrackingSolver::assess] to distinguish the two.
    pub fn solve(&self, grid: &Grid) -> SudokuResult<Grid> {
        if !validator::is_valid(grid) {
            return Err(SudokuError::Unsolvable);
        }

        let mut work = grid.clone();
        let mut found = enumerate(&mut work, &mut Ascending, 1);
        found.pop().ok_or(SudokuError::Unsolvable)
    }

    /// Classifies the solvability of the given grid by continuing the
    /// search past the first solution until a second one is found or the
    /// search space is exhausted. Callers that require puzzles with exactly
    /// one solution can check for [Solvability::Unique] after masking. The
    /// input grid is not mutated.
    pub fn assess(&self, grid: &Grid) -> Solvability {
        if !validator::is_valid(grid) {
            return Solvability::Impossible;
        }

        let mut work = grid.clone();
        let mut found = enumerate(&mut work, &mut Ascending, 2);

        match found.len() {
            0 => Solvability::Impossible,
            1 => Solvability::Unique(found.pop().unwrap()),
            _ => Solvability::Ambiguous
        }
    }
}
