//! Additive position-scoring heuristics
//!
//! Single-ply greedy scoring: every empty cell gets the sum of four
//! independent sub-scores and the best-scoring cell is played. There is no
//! lookahead; forced wins and blocks are handled before scoring by the
//! strategy layer.
//!
//! The weights follow Philip S. Tellis's heuristic Tic-Tac-Toe player,
//! adapted to the sentinel-backed board.

use crate::board::{Board, Cell, Player};

/// Bonus for taking the exact center of an odd-dimension board.
pub const CENTER: u32 = 16;
/// Bonus for taking a corner-adjacent anchor cell.
pub const CORNER: u32 = 4;
/// Bonus added to a live axis with at least one friendly piece on it.
pub const LINE: u32 = 10;
/// Weight per occupied neighboring cell.
pub const LOCALITY: u32 = 14;

/// Center bonus: the exact center index `dimension^2 / 2` of an
/// odd-dimension board.
pub fn center_value(board: &Board, position: usize) -> u32 {
    if board.dimension() % 2 == 1
        && position == board.cell_count() / 2
        && board.is_legal_move(position)
    {
        CENTER
    } else {
        0
    }
}

/// Corner bonus: positions whose index is a multiple of `dimension - 1`,
/// excluding the center. Inapplicable on a 1x1 board.
pub fn corner_value(board: &Board, position: usize) -> u32 {
    let dimension = board.dimension();
    if dimension > 1
        && board.is_legal_move(position)
        && position % (dimension - 1) == 0
        && position != board.cell_count() / 2
    {
        CORNER
    } else {
        0
    }
}

/// Sum the proximity of the player's other pieces along one axis.
///
/// `cells` yields the axis in order together with each cell's index along
/// it; `skip` is the candidate cell's own index on the axis. Closer pieces
/// count more: each contributes `dimension - distance`.
fn proximity_sum(
    board: &Board,
    player: Player,
    skip: usize,
    cells: impl Iterator<Item = (usize, Cell)>,
) -> u32 {
    let dimension = board.dimension();
    let mut value = 0;
    for (index, cell) in cells {
        if index == skip {
            continue;
        }
        if cell == player.to_cell() {
            value += (dimension - index.abs_diff(skip)) as u32;
        }
    }
    value
}

/// Apply the live-axis bonus: a dead axis is forced to zero, a live axis
/// with no friendly presence stays zero, and anything else earns `LINE` on
/// top of its proximity sum.
fn axis_value(alive: bool, proximity: u32) -> u32 {
    if alive && proximity > 0 {
        proximity + LINE
    } else {
        0
    }
}

fn row_value(board: &Board, row: usize, col: usize, player: Player) -> u32 {
    let alive = board.row_potential(row, player).is_some();
    let proximity = proximity_sum(
        board,
        player,
        col,
        (0..board.dimension()).map(|c| (c, board.at(row, c))),
    );
    axis_value(alive, proximity)
}

fn column_value(board: &Board, row: usize, col: usize, player: Player) -> u32 {
    let alive = board.column_potential(col, player).is_some();
    let proximity = proximity_sum(
        board,
        player,
        row,
        (0..board.dimension()).map(|r| (r, board.at(r, col))),
    );
    axis_value(alive, proximity)
}

fn diagonal_value(board: &Board, row: usize, col: usize, player: Player) -> u32 {
    let dimension = board.dimension();
    let mut value = 0;

    // Descending diagonal, for cells with row == col.
    if row == col {
        let alive = board.descending_potential(player).is_some();
        let proximity = proximity_sum(
            board,
            player,
            row,
            (0..dimension).map(|i| (i, board.at(i, i))),
        );
        value += axis_value(alive, proximity);
    }

    // Ascending diagonal, for cells with row + col == dimension - 1. The
    // center of an odd board lies on both and scores both.
    if row + col == dimension - 1 {
        let alive = board.ascending_potential(player).is_some();
        let proximity = proximity_sum(
            board,
            player,
            row,
            (0..dimension).map(|i| (i, board.at(i, dimension - 1 - i))),
        );
        value += axis_value(alive, proximity);
    }

    value
}

/// Consolidated row, column and diagonal score for a candidate cell.
pub fn line_value(board: &Board, position: usize, player: Player) -> u32 {
    if !board.is_legal_move(position) {
        return 0;
    }
    // In range: is_legal_move already bounds-checked the position.
    let row = position / board.dimension();
    let col = position % board.dimension();

    row_value(board, row, col, player)
        + column_value(board, row, col, player)
        + diagonal_value(board, row, col, player)
}

/// Locality score: `LOCALITY` per occupied cell in the candidate's Moore
/// neighborhood. Off-board neighbors are skipped.
pub fn locality_value(board: &Board, position: usize) -> u32 {
    if !board.is_legal_move(position) {
        return 0;
    }
    let dimension = board.dimension() as isize;
    let row = (position as isize) / dimension;
    let col = (position as isize) % dimension;

    let mut value = 0;
    for row_offset in -1..=1 {
        for col_offset in -1..=1 {
            if row_offset == 0 && col_offset == 0 {
                continue;
            }
            let neighbor_row = row + row_offset;
            let neighbor_col = col + col_offset;
            if neighbor_row < 0
                || neighbor_col < 0
                || neighbor_row >= dimension
                || neighbor_col >= dimension
            {
                continue;
            }
            if board.at(neighbor_row as usize, neighbor_col as usize) != Cell::Empty {
                value += LOCALITY;
            }
        }
    }
    value
}

/// Composite score for playing `position` as `player`.
pub fn score(board: &Board, position: usize, player: Player) -> u32 {
    center_value(board, position)
        + corner_value(board, position)
        + line_value(board, position, player)
        + locality_value(board, position)
}

/// Pick the best-scoring legal position.
///
/// Scans positions in ascending order and keeps the running maximum under a
/// `>=` comparison, so equal scores resolve to the highest-index candidate.
/// That is the opposite tie-break from the win-forcing scan and is part of
/// the selection contract.
pub fn best_position(board: &Board, player: Player) -> usize {
    let mut best_position = 0;
    let mut best_value = 0;
    for position in 0..board.cell_count() {
        if !board.is_legal_move(position) {
            continue;
        }
        let value = score(board, position, player);
        if value >= best_value {
            best_value = value;
            best_position = position;
        }
    }
    best_position
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board3() -> Board {
        Board::new(3).unwrap()
    }

    #[test]
    fn test_center_value() {
        let board = board3();
        for position in 0..9 {
            let expected = if position == 4 { CENTER } else { 0 };
            assert_eq!(center_value(&board, position), expected);
        }
    }

    #[test]
    fn test_center_value_taken() {
        let mut board = board3();
        board.place(4, Player::X).unwrap();
        assert_eq!(center_value(&board, 4), 0);
    }

    #[test]
    fn test_center_value_even_dimension() {
        let board = Board::new(4).unwrap();
        for position in 0..16 {
            assert_eq!(center_value(&board, position), 0);
        }
    }

    #[test]
    fn test_corner_value() {
        let board = board3();
        for position in 0..9 {
            let expected = if [0, 2, 6, 8].contains(&position) {
                CORNER
            } else {
                0
            };
            assert_eq!(corner_value(&board, position), expected);
        }
    }

    #[test]
    fn test_row_proximity() {
        let mut board = board3();
        assert_eq!(line_value(&board, 1, Player::X), 0);

        board.place(0, Player::X).unwrap();
        board.place(2, Player::X).unwrap();

        // Row 0 is dead for O.
        assert_eq!(row_value(&board, 0, 1, Player::O), 0);
        // X gets (3 - 1) + (3 - 1) plus the live-line bonus.
        assert_eq!(row_value(&board, 0, 1, Player::X), 4 + LINE);
    }

    #[test]
    fn test_column_proximity() {
        let mut board = board3();
        board.place(0, Player::X).unwrap();
        board.place(6, Player::X).unwrap();

        assert_eq!(column_value(&board, 1, 0, Player::O), 0);
        assert_eq!(column_value(&board, 1, 0, Player::X), 4 + LINE);
    }

    #[test]
    fn test_diagonal_proximity_center() {
        let mut board = board3();
        board.place(0, Player::X).unwrap();
        board.place(2, Player::X).unwrap();

        // The center sees X at distance 1 on each diagonal; both diagonals
        // are live with a friendly piece, so each earns the line bonus.
        assert_eq!(diagonal_value(&board, 1, 1, Player::X), (2 + LINE) * 2);

        // Both diagonals are dead for O.
        assert_eq!(diagonal_value(&board, 1, 1, Player::O), 0);
    }

    #[test]
    fn test_diagonal_off_diagonal_cell_scores_zero() {
        let mut board = board3();
        board.place(0, Player::X).unwrap();
        assert_eq!(diagonal_value(&board, 0, 1, Player::X), 0);
    }

    #[test]
    fn test_diagonal_dead_axis_forced_to_zero() {
        let mut board = board3();
        board.place(0, Player::X).unwrap(); // descending diagonal dead for O
        board.place(4, Player::O).unwrap();

        // Position 8 lies only on the descending diagonal; O sits there but
        // the axis is dead, so the proximity sum is discarded entirely.
        assert_eq!(diagonal_value(&board, 2, 2, Player::O), 0);
    }

    #[test]
    fn test_locality_value() {
        let mut board = board3();
        assert_eq!(locality_value(&board, 1), 0);

        board.place(0, Player::X).unwrap();
        board.place(2, Player::X).unwrap();

        // Two occupied neighbors, regardless of which side owns them.
        assert_eq!(locality_value(&board, 1), LOCALITY * 2);

        // Corner cell 8 has no occupied neighbors.
        assert_eq!(locality_value(&board, 8), 0);
    }

    #[test]
    fn test_locality_skips_off_board_neighbors() {
        let mut board = board3();
        board.place(1, Player::O).unwrap();
        // Corner cell 0 probes five off-board neighbors without panicking.
        assert_eq!(locality_value(&board, 0), LOCALITY);
    }

    #[test]
    fn test_score_is_nonzero_next_to_opponent_pieces() {
        let mut board = board3();
        board.place(0, Player::X).unwrap();
        board.place(2, Player::X).unwrap();

        // Cell 1 for O: row dead, column empty, but locality alone makes
        // the move visible to the scorer.
        assert!(score(&board, 1, Player::O) > 0);
    }

    #[test]
    fn test_best_position_prefers_center_on_empty_board() {
        let board = board3();
        assert_eq!(best_position(&board, Player::X), 4);
    }

    #[test]
    fn test_best_position_tie_break_is_highest_index() {
        let mut board = board3();
        board.place(4, Player::X).unwrap();

        // All four corners tie (corner bonus + one occupied neighbor, all
        // of O's lines through the center are dead). Equal scores overwrite
        // the running best, so the last corner wins the tie.
        let corner_score = score(&board, 0, Player::O);
        assert_eq!(corner_score, CORNER + LOCALITY);
        assert_eq!(score(&board, 8, Player::O), corner_score);
        assert_eq!(best_position(&board, Player::O), 8);
    }
}
