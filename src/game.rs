//! High-level game management

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Status};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// A game in progress, with its move history.
///
/// Each game owns a fresh [`Board`]; nothing persists across games except
/// tallies the driver keeps in a [`MatchTally`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new game on an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if `dimension` is zero.
    pub fn new(dimension: usize) -> crate::Result<Self> {
        Ok(Game {
            board: Board::new(dimension)?,
            moves: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn status(&self) -> Status {
        self.board.status()
    }

    /// Play a move and return the resulting status.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game is already decided,
    /// otherwise propagates the board's placement errors. A failed play
    /// records nothing.
    pub fn play(&mut self, position: usize, player: Player) -> crate::Result<Status> {
        if self.board.status().is_terminal() {
            return Err(crate::Error::GameOver);
        }

        self.board.place(position, player)?;
        self.moves.push(Move { position, player });
        Ok(self.board.status())
    }

    /// Serialize the game record to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if encoding fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a game record from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] on malformed input.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Win/loss/draw counts across replays.
///
/// Owned by the driver loop and threaded through it explicitly; there is no
/// global tally state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game. An `InProgress` status records nothing.
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Won(Player::X) => self.x_wins += 1,
            Status::Won(Player::O) => self.o_wins += 1,
            Status::Draw => self.draws += 1,
            Status::InProgress => {}
        }
    }

    pub fn games_played(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}
