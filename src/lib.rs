//! Heuristic Tic-Tac-Toe engine for N-by-N boards
//!
//! This crate provides:
//! - A board with O(1) incremental win detection via per-player sentinels
//! - A deterministic single-ply move selector (forced win, forced block,
//!   then additive heuristic scoring) with a random-play fallback mode
//! - Game records with history, JSON import/export and match tallies
//! - Console prompting helpers for the interactive driver
//!
//! There is deliberately no lookahead: the selector is greedy by design.

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod heuristics;
pub mod sentinel;
pub mod strategy;

pub use board::{Board, Cell, Player, Status};
pub use error::{Error, Result};
pub use game::{Game, MatchTally, Move};
pub use sentinel::Sentinel;
pub use strategy::{MoveSelector, Strategy, find_immediate_win};
