//! Per-player line counters for O(1) win detection
//!
//! A [`Sentinel`] tracks one player's presence in every row, every column,
//! and both diagonals. Each placed piece updates four counters at most, so
//! deciding "did this move win?" never requires rescanning the grid.

use serde::{Deserialize, Serialize};

/// Running line counts for a single player.
///
/// A `Board` owns one sentinel per player and is the only mutator: every
/// successful placement by that player calls [`Sentinel::record`] exactly
/// once. Counters never decrease; there is no undo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentinel {
    dimension: usize,
    row_counts: Vec<usize>,
    col_counts: Vec<usize>,
    descending: usize,
    ascending: usize,
    winner: bool,
}

impl Sentinel {
    pub fn new(dimension: usize) -> Self {
        Sentinel {
            dimension,
            row_counts: vec![0; dimension],
            col_counts: vec![0; dimension],
            descending: 0,
            ascending: 0,
            winner: false,
        }
    }

    /// Record a move at `(row, col)`.
    ///
    /// Increments the row and column counters, the descending diagonal
    /// counter when `row == col`, and the ascending diagonal counter when
    /// `row + col == dimension - 1`. The winner flag latches once any
    /// counter reaches `dimension` and never clears afterwards.
    ///
    /// The coordinates are not validated; callers index within bounds.
    pub fn record(&mut self, row: usize, col: usize) {
        self.row_counts[row] += 1;
        self.col_counts[col] += 1;
        if row == col {
            self.descending += 1;
        }
        if row + col == self.dimension - 1 {
            self.ascending += 1;
        }

        self.winner = self.winner
            || self.row_counts[row] == self.dimension
            || self.col_counts[col] == self.dimension
            || self.descending == self.dimension
            || self.ascending == self.dimension;
    }

    /// Whether this player has completed a full line.
    pub fn is_winner(&self) -> bool {
        self.winner
    }

    pub fn row_count(&self, row: usize) -> usize {
        self.row_counts[row]
    }

    pub fn col_count(&self, col: usize) -> usize {
        self.col_counts[col]
    }

    pub fn descending_count(&self) -> usize {
        self.descending
    }

    pub fn ascending_count(&self) -> usize {
        self.ascending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_winning_line_trips_the_flag() {
        let win_map: [[(usize, usize); 3]; 8] = [
            [(0, 0), (0, 1), (0, 2)],
            [(1, 0), (1, 1), (1, 2)],
            [(2, 0), (2, 1), (2, 2)],
            [(0, 0), (1, 0), (2, 0)],
            [(0, 1), (1, 1), (2, 1)],
            [(0, 2), (1, 2), (2, 2)],
            [(0, 0), (1, 1), (2, 2)],
            [(0, 2), (1, 1), (2, 0)],
        ];

        for combo in win_map {
            let mut sentinel = Sentinel::new(3);
            for (row, col) in combo {
                assert!(!sentinel.is_winner());
                sentinel.record(row, col);
            }
            assert!(sentinel.is_winner(), "line {combo:?} should win");
        }
    }

    #[test]
    fn test_scattered_moves_do_not_win() {
        let mut sentinel = Sentinel::new(3);
        sentinel.record(0, 0);
        sentinel.record(1, 2);
        sentinel.record(2, 1);
        assert!(!sentinel.is_winner());
    }

    #[test]
    fn test_diagonal_counters() {
        let mut sentinel = Sentinel::new(3);
        sentinel.record(1, 1);
        // The center sits on both diagonals.
        assert_eq!(sentinel.descending_count(), 1);
        assert_eq!(sentinel.ascending_count(), 1);

        sentinel.record(0, 2);
        assert_eq!(sentinel.descending_count(), 1);
        assert_eq!(sentinel.ascending_count(), 2);
    }

    #[test]
    fn test_winner_flag_latches() {
        let mut sentinel = Sentinel::new(3);
        sentinel.record(0, 0);
        sentinel.record(0, 1);
        sentinel.record(0, 2);
        assert!(sentinel.is_winner());

        // Further moves touch losing counters but must not clear the flag.
        sentinel.record(2, 1);
        assert!(sentinel.is_winner());
    }

    #[test]
    fn test_dimension_one_wins_immediately() {
        let mut sentinel = Sentinel::new(1);
        sentinel.record(0, 0);
        assert!(sentinel.is_winner());
    }
}
