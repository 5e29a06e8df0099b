// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements the grid engine of a Sudoku game: the 9x9 puzzle
//! representation and everything with algorithmic depth around it. It
//! supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking validity of partially and fully filled grids according to
//! standard rules
//! * Solving grids using a backtracking algorithm
//! * Generating random full grids
//! * Masking cells according to a difficulty level to obtain a playable
//! puzzle
//!
//! The engine is deliberately free of persistence, network, and session
//! concerns; it receives plain cell values and returns plain cell values.
//!
//! # Parsing and printing grids
//!
//! A grid is encoded as 81 digit characters in row-major order, where `'0'`
//! denotes an empty cell. See [Grid::parse] for details.
//!
//! ```
//! use sudoku_engine::Grid;
//!
//! let code: String = std::iter::repeat('0').take(81).collect();
//! let grid = Grid::parse(&code).unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! [Grid::is_valid] checks that no row, column, or block contains a
//! duplicate value. Empty cells never cause a conflict, so a partially
//! filled grid is valid as long as the digits already present do not clash.
//! [Grid::is_solved] additionally requires every cell to be filled.
//!
//! ```
//! use sudoku_engine::Grid;
//!
//! let mut grid = Grid::new();
//! assert!(grid.is_valid());
//! assert!(!grid.is_solved());
//!
//! // Two fives in the first row.
//! grid.set(0, 5).unwrap();
//! grid.set(8, 5).unwrap();
//! assert!(!grid.is_valid());
//! ```
//!
//! # Solving grids
//!
//! The [BacktrackingSolver](solver::BacktrackingSolver) completes a grid
//! with some cells pre-filled, never changing the given clues. Its candidate
//! order is ascending, so the solution it finds is deterministic.
//!
//! # Generating puzzles
//!
//! A full grid is produced by a [Generator](generator::Generator), which
//! runs the same backtracking search with a shuffled candidate order. The
//! puzzle shown to a player is then derived by setting a difficulty, which
//! hides all but a difficulty-specific number of cells:
//!
//! ```
//! use sudoku_engine::difficulty::Difficulty;
//! use sudoku_engine::generator::Generator;
//!
//! let mut generator = Generator::new_default();
//! let mut grid = generator.generate();
//! assert!(grid.is_solved());
//!
//! grid.set_difficulty(Difficulty::Hard).unwrap();
//! let visible = grid.to_displayed_values().iter()
//!     .filter(|&&value| value != 0)
//!     .count();
//! assert_eq!(28, visible);
//! ```

pub mod difficulty;
pub mod error;
pub mod generator;
pub mod solver;
pub mod util;
pub mod validator;

#[cfg(test)]
mod random_tests;

use crate::difficulty::{Difficulty, Masker};
use crate::error::{SudokuError, SudokuResult};
use crate::util::ValueSet;

use rand::Rng;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of cells along one axis of a grid, which is also the number of
/// rows, columns, and blocks as well as the highest cell value.
pub const SIZE: usize = 9;

/// The number of cells along one axis of a block.
pub const BLOCK_SIZE: usize = 3;

/// The total number of cells in a grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

pub(crate) fn row_of(index: usize) -> usize {
    index / SIZE
}

pub(crate) fn column_of(index: usize) -> usize {
    index % SIZE
}

pub(crate) fn block_of(index: usize) -> usize {
    (row_of(index) / BLOCK_SIZE) * BLOCK_SIZE + column_of(index) / BLOCK_SIZE
}

pub(crate) fn row_indices(row: usize) -> [usize; SIZE] {
    let mut indices = [0; SIZE];

    for (column, index) in indices.iter_mut().enumerate() {
        *index = row * SIZE + column;
    }

    indices
}

pub(crate) fn column_indices(column: usize) -> [usize; SIZE] {
    let mut indices = [0; SIZE];

    for (row, index) in indices.iter_mut().enumerate() {
        *index = row * SIZE + column;
    }

    indices
}

pub(crate) fn block_indices(block: usize) -> [usize; SIZE] {
    let base_row = (block / BLOCK_SIZE) * BLOCK_SIZE;
    let base_column = (block % BLOCK_SIZE) * BLOCK_SIZE;
    let mut indices = [0; SIZE];

    for (i, index) in indices.iter_mut().enumerate() {
        let row = base_row + i / BLOCK_SIZE;
        let column = base_column + i % BLOCK_SIZE;
        *index = row * SIZE + column;
    }

    indices
}

/// Computes the indices of all cells that share a row, column, or block with
/// the cell at the given index, excluding the cell itself. Every cell has
/// exactly 20 peers.
pub(crate) fn peer_indices(index: usize) -> Vec<usize> {
    let mut peers = Vec::with_capacity(20);
    let groups = [
        row_indices(row_of(index)),
        column_indices(column_of(index)),
        block_indices(block_of(index))
    ];

    for group in groups.iter() {
        for &peer in group.iter() {
            if peer != index && !peers.contains(&peer) {
                peers.push(peer);
            }
        }
    }

    peers
}

/// A single square of a Sudoku grid. A cell knows its fixed position (index
/// in row-major order, from which row, column, and block are derived), its
/// current value (0 meaning unassigned), whether it is hidden from the
/// player, and the set of candidate values still available to it.
///
/// Cells are owned exclusively by their [Grid] and are only handed out by
/// reference; all mutation goes through the grid, which keeps the candidate
/// sets of a cell and its peers consistent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    index: usize,
    value: u8,
    hidden: bool,
    candidates: ValueSet
}

impl Cell {
    fn new(index: usize) -> Cell {
        Cell {
            index,
            value: 0,
            hidden: false,
            candidates: ValueSet::all()
        }
    }

    /// Gets the position of this cell in row-major order, in the range
    /// `[0, 81[`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Gets the row (y-coordinate) of this cell, in the range `[0, 9[`.
    pub fn row(&self) -> usize {
        row_of(self.index)
    }

    /// Gets the column (x-coordinate) of this cell, in the range `[0, 9[`.
    pub fn column(&self) -> usize {
        column_of(self.index)
    }

    /// Gets the index of the 3x3 block containing this cell, in the range
    /// `[0, 9[`. Blocks are numbered in row-major order, i.e. block 0 is in
    /// the top-left corner and block 2 in the top-right corner.
    pub fn block(&self) -> usize {
        block_of(self.index)
    }

    /// Gets the value of this cell, in the range `[0, 9]`, where 0 means the
    /// cell is unassigned.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Gets the value of this cell as observable by the player: 0 if the
    /// cell is hidden, its true value otherwise.
    pub fn displayed_value(&self) -> u8 {
        if self.hidden {
            0
        }
        else {
            self.value
        }
    }

    /// Indicates whether this cell is unassigned.
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Indicates whether this cell is hidden from the player.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Gets the set of values that can still be assigned to this cell
    /// without conflicting with a peer. For an assigned cell, this set is
    /// empty.
    pub fn candidates(&self) -> ValueSet {
        self.candidates
    }

    /// Gets the values that can still be assigned to this cell in ascending
    /// order. This is the candidate pool the solver draws from.
    pub fn available_values(&self) -> Vec<u8> {
        self.candidates.iter().collect()
    }
}

/// A Sudoku grid of 81 [Cell]s, organized in 9 rows, 9 columns, and 9 3x3
/// blocks. Each cell may or may not be assigned a value from 1 to 9, and may
/// be hidden from the player by the difficulty mask.
///
/// A grid can be constructed empty, from a flat list of 81 values, or from a
/// code of 81 digit characters; [Grid::to_values] and [Grid::to_code] are
/// the exact inverses of these constructors. The serde representation of a
/// grid is its code, so only cell values are carried; difficulty and
/// visibility are transient play state that callers track separately.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct Grid {
    cells: Vec<Cell>,
    difficulty: Difficulty
}

fn to_char(value: u8) -> char {
    if value == 0 {
        ' '
    }
    else {
        (b'0' + value) as char
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, y: usize) -> String {
    line('║', '║', '│',
        |x| to_char(grid.cells[y * SIZE + x].displayed_value()), ' ', '║',
        true)
}

impl Display for Grid {

    /// Renders the grid as a box-drawing diagram of the displayed values,
    /// i.e. hidden cells are rendered as blanks.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> String {
        grid.to_code()
    }
}

impl TryFrom<String> for Grid {
    type Error = SudokuError;

    fn try_from(code: String) -> SudokuResult<Grid> {
        Grid::parse(&code)
    }
}

impl Grid {

    /// Creates a new, empty grid. All cells are unassigned, visible, and
    /// have all nine values as candidates; no difficulty is set.
    pub fn new() -> Grid {
        Grid {
            cells: (0..CELL_COUNT).map(Cell::new).collect(),
            difficulty: Difficulty::Null
        }
    }

    /// Creates a grid from a flat list of exactly 81 values in row-major
    /// order, where 0 denotes an empty cell.
    ///
    /// # Errors
    ///
    /// * `SudokuError::MalformedGrid` If `values` does not contain exactly
    /// 81 entries. The input is never truncated or padded.
    /// * `SudokuError::InvalidValue` If any entry is greater than 9.
    pub fn from_values(values: &[u8]) -> SudokuResult<Grid> {
        if values.len() != CELL_COUNT {
            return Err(SudokuError::MalformedGrid {
                expected_length: CELL_COUNT,
                actual_length: values.len()
            });
        }

        if values.iter().any(|&value| value > 9) {
            return Err(SudokuError::InvalidValue);
        }

        let mut grid = Grid::new();

        for (index, &value) in values.iter().enumerate() {
            grid.cells[index].value = value;
        }

        for index in 0..CELL_COUNT {
            grid.refresh_candidates(index);
        }

        Ok(grid)
    }

    /// Parses a code of exactly 81 digit characters (`'0'` to `'9'`) in
    /// row-major order, where `'0'` denotes an empty cell. There are no
    /// separators; the code is the exact output format of [Grid::to_code].
    ///
    /// # Errors
    ///
    /// * `SudokuError::MalformedGrid` If `code` does not contain exactly 81
    /// characters.
    /// * `SudokuError::InvalidValue` If any character is not a digit.
    pub fn parse(code: &str) -> SudokuResult<Grid> {
        let chars: Vec<char> = code.chars().collect();

        if chars.len() != CELL_COUNT {
            return Err(SudokuError::MalformedGrid {
                expected_length: CELL_COUNT,
                actual_length: chars.len()
            });
        }

        let mut values = Vec::with_capacity(CELL_COUNT);

        for c in chars {
            match c.to_digit(10) {
                Some(digit) => values.push(digit as u8),
                None => return Err(SudokuError::InvalidValue)
            }
        }

        Grid::from_values(&values)
    }

    /// Converts the grid into the flat list of its 81 true cell values in
    /// row-major order, with 0 for empty cells. This is the exact inverse of
    /// [Grid::from_values].
    pub fn to_values(&self) -> Vec<u8> {
        self.cells.iter().map(Cell::value).collect()
    }

    /// Converts the grid into the flat list of its 81 displayed cell values
    /// in row-major order. Hidden cells contribute 0 regardless of their
    /// true value.
    pub fn to_displayed_values(&self) -> Vec<u8> {
        self.cells.iter().map(Cell::displayed_value).collect()
    }

    /// Converts the grid into its canonical code of 81 digit characters in a
    /// way that is consistent with [Grid::parse]. That is, a grid that is
    /// converted to a code and parsed again will have the same values.
    ///
    /// ```
    /// use sudoku_engine::Grid;
    ///
    /// let mut grid = Grid::new();
    /// grid.set(0, 4).unwrap();
    /// grid.set(80, 5).unwrap();
    ///
    /// let code = grid.to_code();
    /// assert_eq!(81, code.len());
    /// assert_eq!(grid, Grid::parse(&code).unwrap());
    /// ```
    pub fn to_code(&self) -> String {
        self.cells.iter().map(|cell| (b'0' + cell.value) as char).collect()
    }

    /// Gets a reference to the cell at the specified index.
    ///
    /// # Arguments
    ///
    /// * `index`: The position of the desired cell in row-major order. Must
    /// be in the range `[0, 81[`.
    ///
    /// # Errors
    ///
    /// If `index` is not in the specified range. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn get(&self, index: usize) -> SudokuResult<&Cell> {
        self.cells.get(index).ok_or(SudokuError::OutOfBounds)
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// row-major order, where rows are together.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Sets the value of the cell at the specified index. Assigning 0 clears
    /// the cell. The candidate sets of the cell and all of its peers are
    /// re-derived afterwards, so the grid-wide candidate invariant holds
    /// unconditionally.
    ///
    /// Note that this method does *not* check whether the assignment causes
    /// a conflict; an invalid grid can be represented and detected with
    /// [Grid::is_valid].
    ///
    /// # Arguments
    ///
    /// * `index`: The position of the assigned cell in row-major order. Must
    /// be in the range `[0, 81[`.
    /// * `value`: The value to assign to the specified cell. Must be in the
    /// range `[0, 9]`, where 0 clears the cell.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If `index` is not in the specified
    /// range.
    /// * `SudokuError::InvalidValue` If `value` is not in the specified
    /// range.
    pub fn set(&mut self, index: usize, value: u8) -> SudokuResult<()> {
        if index >= CELL_COUNT {
            return Err(SudokuError::OutOfBounds);
        }

        if value > 9 {
            return Err(SudokuError::InvalidValue);
        }

        self.cells[index].value = value;
        self.refresh_candidates(index);

        for peer in peer_indices(index) {
            self.refresh_candidates(peer);
        }

        Ok(())
    }

    /// Clears the value of the cell at the specified index, that is, if it
    /// contains a value, that value is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `index`: The position of the cleared cell in row-major order. Must
    /// be in the range `[0, 81[`.
    ///
    /// # Errors
    ///
    /// If `index` is not in the specified range. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn clear(&mut self, index: usize) -> SudokuResult<()> {
        self.set(index, 0)
    }

    /// Sets or removes the hidden flag of the cell at the specified index. A
    /// hidden cell displays as 0 regardless of its true value. This is
    /// normally driven by the difficulty mask, but is also available to
    /// callers that reveal single cells, e.g. as a hint.
    ///
    /// # Arguments
    ///
    /// * `index`: The position of the cell in row-major order. Must be in
    /// the range `[0, 81[`.
    /// * `hidden`: Whether the cell shall be hidden.
    ///
    /// # Errors
    ///
    /// If `index` is not in the specified range. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn set_hidden(&mut self, index: usize, hidden: bool)
            -> SudokuResult<()> {
        if index >= CELL_COUNT {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index].hidden = hidden;
        Ok(())
    }

    /// Recomputes the candidate set of the cell at the given index from the
    /// values of its peers. An assigned cell has no candidates.
    fn refresh_candidates(&mut self, index: usize) {
        let candidates = if self.cells[index].value != 0 {
            ValueSet::new()
        }
        else {
            let mut used = ValueSet::new();

            for peer in peer_indices(index) {
                let value = self.cells[peer].value;

                if value != 0 {
                    used.insert(value).unwrap();
                }
            }

            ValueSet::all() - used
        };

        self.cells[index].candidates = candidates;
    }

    /// Gets the 9 cells of the specified row, in ascending column order.
    ///
    /// # Errors
    ///
    /// If `row` is not in the range `[0, 9[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn row(&self, row: usize) -> SudokuResult<Vec<&Cell>> {
        if row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        Ok(row_indices(row).iter().map(|&index| &self.cells[index]).collect())
    }

    /// Gets the 9 cells of the specified column, in ascending row order.
    ///
    /// # Errors
    ///
    /// If `column` is not in the range `[0, 9[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn column(&self, column: usize) -> SudokuResult<Vec<&Cell>> {
        if column >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        Ok(column_indices(column).iter()
            .map(|&index| &self.cells[index])
            .collect())
    }

    /// Gets the 9 cells of the specified block, in row-major order within
    /// the block. Blocks are numbered in row-major order.
    ///
    /// # Errors
    ///
    /// If `block` is not in the range `[0, 9[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn block(&self, block: usize) -> SudokuResult<Vec<&Cell>> {
        if block >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        Ok(block_indices(block).iter()
            .map(|&index| &self.cells[index])
            .collect())
    }

    /// Gets the 9 rows of the grid in ascending order. See [Grid::row].
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Cell>> {
        (0..SIZE).map(move |row| self.row(row).unwrap())
    }

    /// Gets the 9 columns of the grid in ascending order. See
    /// [Grid::column].
    pub fn columns(&self) -> impl Iterator<Item = Vec<&Cell>> {
        (0..SIZE).map(move |column| self.column(column).unwrap())
    }

    /// Gets the 9 blocks of the grid in row-major order. See [Grid::block].
    pub fn blocks(&self) -> impl Iterator<Item = Vec<&Cell>> {
        (0..SIZE).map(move |block| self.block(block).unwrap())
    }

    /// Gets the difficulty of this grid. This is [Difficulty::Null] until
    /// [Grid::set_difficulty] is called.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Stores the given difficulty on this grid and runs the masking pass,
    /// which hides all cells except a difficulty-specific number of visible
    /// ones chosen uniformly at random. Calling this again recomputes the
    /// reveal set from scratch.
    ///
    /// # Errors
    ///
    /// If `difficulty` is [Difficulty::Null]. In that case,
    /// `SudokuError::DifficultyRequired` is returned and the grid remains
    /// unchanged.
    pub fn set_difficulty(&mut self, difficulty: Difficulty)
            -> SudokuResult<()> {
        self.set_difficulty_with(difficulty, rand::thread_rng())
    }

    /// Same as [Grid::set_difficulty], but uses the given random number
    /// generator to choose the visible cells.
    pub fn set_difficulty_with(&mut self, difficulty: Difficulty,
            rng: impl Rng) -> SudokuResult<()> {
        Masker::new(rng).mask(self, difficulty)
    }

    /// Counts the number of clues given by this grid, i.e. the number of
    /// assigned cells. While on average puzzles with fewer clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is assigned a
    /// value. In this case, [Grid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Indicates whether this grid is empty, i.e. no cell is assigned a
    /// value. In this case, [Grid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Indicates whether the values of this grid are free of conflicts, i.e.
    /// no row, column, or block contains a duplicate. Empty cells are
    /// permitted, so a partially filled grid without conflicts is valid.
    /// See [validator::is_valid].
    pub fn is_valid(&self) -> bool {
        validator::is_valid(self)
    }

    /// Indicates whether this grid is solved, i.e. full and valid. See
    /// [validator::is_solved].
    pub fn is_solved(&self) -> bool {
        validator::is_solved(self)
    }
}
