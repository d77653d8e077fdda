//! Console interaction helpers
//!
//! Prompting and re-prompting for the interactive driver. All reads go
//! through generic `BufRead`/`Write` handles so the loops are testable with
//! in-memory buffers. Invalid input re-prompts in a plain loop; end of
//! input ends the session (`None`).

use std::io::{BufRead, Write};

use crate::board::{Board, Player, Status};

pub const WELCOME: &str = "Welcome to Tic-Tac-Toe.";
pub const PROMPT_DIMENSION: &str = "Please enter the dimensions of the board: ";
pub const PROMPT_MOVE: &str =
    "Please make your move selection by entering a number corresponding to the place on the board: ";
pub const PROMPT_PLAY_AGAIN: &str = "Would you like to play again (y/n): ";

/// Smallest board the interactive driver will offer. The library itself
/// accepts 1x1 boards, but they make for a short game.
pub const MIN_DIMENSION: usize = 2;

fn read_line(input: &mut impl BufRead) -> crate::Result<Option<String>> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line).map_err(|source| crate::Error::Io {
        operation: "read user input".to_string(),
        source,
    })?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn write_prompt(output: &mut impl Write, prompt: &str) -> crate::Result<()> {
    write!(output, "{prompt}").map_err(|source| crate::Error::Io {
        operation: "write prompt".to_string(),
        source,
    })?;
    output.flush().map_err(|source| crate::Error::Io {
        operation: "flush prompt".to_string(),
        source,
    })
}

/// Prompt for a board dimension until the user supplies an integer of at
/// least [`MIN_DIMENSION`]. Returns `None` on end of input.
pub fn read_dimension(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> crate::Result<Option<usize>> {
    loop {
        write_prompt(output, PROMPT_DIMENSION)?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(dimension) if dimension >= MIN_DIMENSION => return Ok(Some(dimension)),
            _ => continue,
        }
    }
}

/// Prompt for a move until the user supplies a legal position on `board`.
/// Returns `None` on end of input.
pub fn read_move(
    board: &Board,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> crate::Result<Option<usize>> {
    loop {
        write_prompt(output, PROMPT_MOVE)?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(position) if board.is_legal_move(position) => return Ok(Some(position)),
            _ => continue,
        }
    }
}

/// Ask whether to play another game; only `y` or `n` are accepted.
/// Returns `None` on end of input.
pub fn read_play_again(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> crate::Result<Option<bool>> {
    loop {
        write_prompt(output, PROMPT_PLAY_AGAIN)?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.to_lowercase().as_str() {
            "y" => return Ok(Some(true)),
            "n" => return Ok(Some(false)),
            _ => continue,
        }
    }
}

/// Announcement for the human player's move.
pub fn your_move_line(position: usize) -> String {
    format!("You have put an X in position {position:03}.")
}

/// Announcement for the engine's move.
pub fn engine_move_line(position: usize) -> String {
    format!("I will put an O in position {position:03}.")
}

/// Closing line for a finished game.
pub fn winner_line(status: Status) -> &'static str {
    match status {
        Status::Won(Player::X) => "You have beaten my poor AI!",
        Status::Won(Player::O) => "I have beaten you with my poor AI!",
        _ => "It was a draw!",
    }
}

/// Session summary across all games played.
pub fn summary_line(x_wins: usize, o_wins: usize, draws: usize) -> String {
    format!("X Wins: {x_wins}, O Wins: {o_wins}, Draws: {draws}")
}
