//! This module contains the error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An enumeration of the errors that can be raised by the engine. All of them
/// are returned as values to the immediate caller; the engine itself never
/// logs, retries, or swallows an error.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that an input list or string from which a grid was to be
    /// constructed does not have exactly one entry per cell. The input is
    /// rejected as a whole, it is never truncated or padded.
    MalformedGrid {

        /// The number of entries a well-formed input has, i.e. the number of
        /// cells in a grid.
        expected_length: usize,

        /// The number of entries the rejected input actually had.
        actual_length: usize
    },

    /// Indicates that a value outside the range permitted for a cell (0 to
    /// clear, 1 to 9 to assign) was provided, or that an input contained a
    /// character which is not a digit.
    InvalidValue,

    /// Indicates that a cell index outside the grid (greater than or equal to
    /// the number of cells) was provided.
    OutOfBounds,

    /// Indicates that a grid was asked to apply its difficulty mask while no
    /// difficulty was set. Callers must decide on a difficulty explicitly,
    /// the engine never guesses one.
    DifficultyRequired,

    /// Indicates that a grid admits no completion, i.e. the backtracking
    /// search exhausted all branches without filling every cell. This is an
    /// expected outcome of solving, not a fault.
    Unsolvable
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::MalformedGrid { expected_length, actual_length } =>
                write!(f, "malformed grid: expected {} cells, got {}",
                    expected_length, actual_length),
            SudokuError::InvalidValue =>
                write!(f, "invalid cell value"),
            SudokuError::OutOfBounds =>
                write!(f, "cell index out of bounds"),
            SudokuError::DifficultyRequired =>
                write!(f, "no difficulty set"),
            SudokuError::Unsolvable =>
                write!(f, "grid has no solution")
        }
    }
}

impl Error for SudokuError { }

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;
