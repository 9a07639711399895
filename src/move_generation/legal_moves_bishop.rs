use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_generation::legal_move_checks::path_is_clear;

/// Bishop legality: equal absolute row and column deltas with a clear path.
pub fn bishop_move_is_legal(board: &Board, mv: Move) -> bool {
    if (mv.to.row - mv.from.row).abs() != (mv.to.col - mv.from.col).abs() {
        return false;
    }
    path_is_clear(board, mv.from, mv.to)
}
