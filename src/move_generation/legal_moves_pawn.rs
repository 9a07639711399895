use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::{Color, Move};

/// Pawn legality: forward one to an empty square, forward two from the start
/// row through an empty intermediate, or a diagonal step onto an occupied
/// enemy square. Same-color destinations were already rejected upstream.
pub fn pawn_move_is_legal(board: &Board, color: Color, mv: Move) -> bool {
    let direction = color.pawn_direction();
    let row_delta = mv.to.row - mv.from.row;
    let col_delta = mv.to.col - mv.from.col;
    let destination_occupied = board.is_occupied(mv.to);

    if col_delta == 0 && row_delta == direction && !destination_occupied {
        return true;
    }

    if col_delta == 0
        && row_delta == 2 * direction
        && mv.from.row == pawn_start_row(color)
        && !destination_occupied
        && !board.is_occupied(mv.from.offset(direction, 0))
    {
        return true;
    }

    col_delta.abs() == 1 && row_delta == direction && destination_occupied
}
