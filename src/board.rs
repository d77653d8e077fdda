//! Board state representation and basic operations
//!
//! The board is a row-major grid of [`Cell`]s over an N-by-N playing field.
//! Win detection is incremental: each placement updates the moving player's
//! [`Sentinel`] counters, so [`Board::status`] is O(1) except for the
//! bounded early-draw scan described there.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sentinel::Sentinel;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Terminal status of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Draw,
    Won(Player),
}

impl Status {
    /// Whether the game has been decided (won or drawn).
    pub fn is_terminal(self) -> bool {
        self != Status::InProgress
    }
}

/// An N-by-N Tic-Tac-Toe board with incremental win detection.
///
/// The board exclusively owns its grid and one [`Sentinel`] per player;
/// sentinel state is only ever mutated through [`Board::place`]. Cells are
/// write-once: there is no undo, and `filled_count` only grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    dimension: usize,
    cells: Vec<Cell>,
    filled: usize,
    x_sentinel: Sentinel,
    o_sentinel: Sentinel,
}

impl Board {
    pub const DEFAULT_DIMENSION: usize = 3;

    /// Create an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if `dimension` is zero.
    pub fn new(dimension: usize) -> crate::Result<Self> {
        if dimension < 1 {
            return Err(crate::Error::InvalidConfiguration {
                message: "board dimension must be greater than 0".to_string(),
            });
        }

        Ok(Board {
            dimension,
            cells: vec![Cell::Empty; dimension * dimension],
            filled: 0,
            x_sentinel: Sentinel::new(dimension),
            o_sentinel: Sentinel::new(dimension),
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cells (`dimension` squared).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.filled
    }

    /// Read access to the grid in row-major order, for rendering.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert `(row, col)` into an absolute position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinates`] if either coordinate is
    /// outside `[0, dimension)`.
    pub fn to_position(&self, row: usize, col: usize) -> crate::Result<usize> {
        if row < self.dimension && col < self.dimension {
            Ok(row * self.dimension + col)
        } else {
            Err(crate::Error::InvalidCoordinates {
                row,
                col,
                dimension: self.dimension,
            })
        }
    }

    /// Convert an absolute position into `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if the position is outside
    /// `[0, dimension * dimension)`.
    pub fn to_coordinates(&self, position: usize) -> crate::Result<(usize, usize)> {
        if position < self.cells.len() {
            Ok((position / self.dimension, position % self.dimension))
        } else {
            Err(crate::Error::InvalidPosition {
                position,
                cells: self.cells.len(),
            })
        }
    }

    /// Get the cell at an absolute position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] on an out-of-range position.
    pub fn get(&self, position: usize) -> crate::Result<Cell> {
        let (row, col) = self.to_coordinates(position)?;
        Ok(self.at(row, col))
    }

    /// Get the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinates`] on out-of-range input.
    pub fn get_at(&self, row: usize, col: usize) -> crate::Result<Cell> {
        let position = self.to_position(row, col)?;
        Ok(self.cells[position])
    }

    /// Infallible cell read for loops already bounded to the grid.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    pub fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.dimension + col]
    }

    /// Whether a move can be made at `position`.
    ///
    /// This is a non-raising probe: an out-of-range position is simply not
    /// a legal move.
    pub fn is_legal_move(&self, position: usize) -> bool {
        position < self.cells.len() && self.cells[position] == Cell::Empty
    }

    /// Whether a move can be made at `(row, col)`.
    ///
    /// Out-of-range coordinates report `false` rather than an error, since
    /// neighbor scans in the scoring code routinely probe off the grid.
    pub fn is_legal_move_at(&self, row: usize, col: usize) -> bool {
        row < self.dimension && col < self.dimension && self.at(row, col) == Cell::Empty
    }

    /// All empty positions in ascending order.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a piece for `player` at an absolute position.
    ///
    /// On success the cell is written, the fill counter incremented, and the
    /// mover's sentinel updated. This is the only path that mutates sentinel
    /// state. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] on an out-of-range position
    /// and [`crate::Error::IllegalMove`] if the cell is occupied.
    pub fn place(&mut self, position: usize, player: Player) -> crate::Result<()> {
        let (row, col) = self.to_coordinates(position)?;
        self.place_at(row, col, player)
    }

    /// Place a piece for `player` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinates`] on out-of-range input
    /// and [`crate::Error::IllegalMove`] if the cell is occupied.
    pub fn place_at(&mut self, row: usize, col: usize, player: Player) -> crate::Result<()> {
        let position = self.to_position(row, col)?;
        if self.cells[position] != Cell::Empty {
            return Err(crate::Error::IllegalMove { position });
        }

        self.cells[position] = player.to_cell();
        self.filled += 1;
        match player {
            Player::X => self.x_sentinel.record(row, col),
            Player::O => self.o_sentinel.record(row, col),
        }
        Ok(())
    }

    /// Whether no further moves can be made.
    pub fn is_full(&self) -> bool {
        self.filled == self.cells.len()
    }

    fn sentinel(&self, player: Player) -> &Sentinel {
        match player {
            Player::X => &self.x_sentinel,
            Player::O => &self.o_sentinel,
        }
    }

    /// How far `player` has progressed in `row`, or `None` if the opponent
    /// already occupies the row and it can no longer be won.
    pub fn row_potential(&self, row: usize, player: Player) -> Option<usize> {
        if self.sentinel(player.opponent()).row_count(row) == 0 {
            Some(self.sentinel(player).row_count(row))
        } else {
            None
        }
    }

    /// How far `player` has progressed in `col`, or `None` if the column is
    /// dead for them.
    pub fn column_potential(&self, col: usize, player: Player) -> Option<usize> {
        if self.sentinel(player.opponent()).col_count(col) == 0 {
            Some(self.sentinel(player).col_count(col))
        } else {
            None
        }
    }

    /// Progress on the descending diagonal (`row == col`), or `None` if it
    /// is dead for `player`.
    pub fn descending_potential(&self, player: Player) -> Option<usize> {
        if self.sentinel(player.opponent()).descending_count() == 0 {
            Some(self.sentinel(player).descending_count())
        } else {
            None
        }
    }

    /// Progress on the ascending diagonal (`row + col == dimension - 1`),
    /// or `None` if it is dead for `player`.
    pub fn ascending_potential(&self, player: Player) -> Option<usize> {
        if self.sentinel(player.opponent()).ascending_count() == 0 {
            Some(self.sentinel(player).ascending_count())
        } else {
            None
        }
    }

    /// Terminal status of the board.
    ///
    /// Beyond the sentinel checks and the board-full draw, this detects
    /// unavoidable draws early: once `filled_count >= 2 * dimension`, if
    /// every row, column and diagonal is dead for both players the game is
    /// reported drawn even though empty cells remain. The threshold is the
    /// point below which some line is always still open.
    pub fn status(&self) -> Status {
        if self.x_sentinel.is_winner() {
            return Status::Won(Player::X);
        }
        if self.o_sentinel.is_winner() {
            return Status::Won(Player::O);
        }
        if self.is_full() {
            return Status::Draw;
        }

        if self.filled >= 2 * self.dimension {
            for player in [Player::X, Player::O] {
                for index in 0..self.dimension {
                    if self.row_potential(index, player).is_some()
                        || self.column_potential(index, player).is_some()
                    {
                        return Status::InProgress;
                    }
                }
                if self.descending_potential(player).is_some()
                    || self.ascending_potential(player).is_some()
                {
                    return Status::InProgress;
                }
            }
            return Status::Draw;
        }

        Status::InProgress
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            dimension: Self::DEFAULT_DIMENSION,
            cells: vec![Cell::Empty; Self::DEFAULT_DIMENSION * Self::DEFAULT_DIMENSION],
            filled: 0,
            x_sentinel: Sentinel::new(Self::DEFAULT_DIMENSION),
            o_sentinel: Sentinel::new(Self::DEFAULT_DIMENSION),
        }
    }
}

impl fmt::Display for Board {
    /// Pretty-print the board, labelling empty cells with their position so
    /// a player can pick a move by number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dimension {
            let mut line = String::new();
            for col in 0..self.dimension {
                let position = row * self.dimension + col;
                match self.cells[position] {
                    Cell::Empty => line.push_str(&format!("{position:03} | ")),
                    cell => line.push_str(&format!(" {}  | ", cell.to_char())),
                }
            }
            line.truncate(line.len().saturating_sub(2));
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
