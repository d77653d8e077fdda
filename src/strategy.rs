//! Move selection: forced wins, forced blocks, then strategy fallback

use clap::ValueEnum;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Player},
    heuristics,
};

/// How the selector picks a move when no win or block is forced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
pub enum Strategy {
    /// Greedy single-ply heuristic scoring
    #[default]
    Heuristic,
    /// Uniformly random legal move
    Random,
}

/// Find a move that completes a line for `player`, if one exists.
///
/// Lines are examined rows first (ascending index), then columns, then the
/// descending diagonal, then the ascending diagonal; within a qualifying
/// line the lowest-index empty cell is returned. This first-found order is
/// a contract: when several winning completions exist simultaneously,
/// callers rely on exactly this one being chosen.
pub fn find_immediate_win(board: &Board, player: Player) -> Option<usize> {
    let dimension = board.dimension();

    for row in 0..dimension {
        if board.row_potential(row, player) == Some(dimension - 1) {
            for col in 0..dimension {
                if board.is_legal_move_at(row, col) {
                    return Some(row * dimension + col);
                }
            }
        }
    }

    for col in 0..dimension {
        if board.column_potential(col, player) == Some(dimension - 1) {
            for row in 0..dimension {
                if board.is_legal_move_at(row, col) {
                    return Some(row * dimension + col);
                }
            }
        }
    }

    if board.descending_potential(player) == Some(dimension - 1) {
        for index in 0..dimension {
            if board.is_legal_move_at(index, index) {
                return Some(index * dimension + index);
            }
        }
    }

    if board.ascending_potential(player) == Some(dimension - 1) {
        for index in 0..dimension {
            let row = dimension - 1 - index;
            if board.is_legal_move_at(row, index) {
                return Some(row * dimension + index);
            }
        }
    }

    None
}

/// Picks the next move for a player.
///
/// Owns the RNG backing the [`Strategy::Random`] mode so that games are
/// reproducible under an explicit seed.
#[derive(Debug)]
pub struct MoveSelector {
    strategy: Strategy,
    rng: StdRng,
}

impl MoveSelector {
    /// Create a selector seeded from entropy.
    pub fn new(strategy: Strategy) -> Self {
        Self::with_seed(strategy, rand::random::<u64>())
    }

    /// Create a selector with a fixed seed for reproducible games.
    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        MoveSelector {
            strategy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Choose the next move for `player`.
    ///
    /// Takes an immediate win when one exists, otherwise blocks the
    /// opponent's immediate win, otherwise falls back to the configured
    /// strategy. Both forced checks use the identical scan; they differ
    /// only in whose potential is queried.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoLegalMove`] if the board is full.
    pub fn select(&mut self, board: &Board, player: Player) -> crate::Result<usize> {
        if board.is_full() {
            return Err(crate::Error::NoLegalMove);
        }

        if let Some(position) = find_immediate_win(board, player) {
            return Ok(position);
        }

        if let Some(position) = find_immediate_win(board, player.opponent()) {
            return Ok(position);
        }

        match self.strategy {
            Strategy::Heuristic => Ok(heuristics::best_position(board, player)),
            Strategy::Random => board
                .empty_positions()
                .choose(&mut self.rng)
                .copied()
                .ok_or(crate::Error::NoLegalMove),
        }
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}
