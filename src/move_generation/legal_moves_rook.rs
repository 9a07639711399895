use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_generation::legal_move_checks::path_is_clear;

/// Rook legality: same rank or same file with a clear path between the
/// endpoints.
pub fn rook_move_is_legal(board: &Board, mv: Move) -> bool {
    if mv.from.row != mv.to.row && mv.from.col != mv.to.col {
        return false;
    }
    path_is_clear(board, mv.from, mv.to)
}
