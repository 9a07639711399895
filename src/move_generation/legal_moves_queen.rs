use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_generation::legal_moves_bishop::bishop_move_is_legal;
use crate::move_generation::legal_moves_rook::rook_move_is_legal;

/// Queen legality: the union of the rook and bishop patterns.
pub fn queen_move_is_legal(board: &Board, mv: Move) -> bool {
    rook_move_is_legal(board, mv) || bishop_move_is_legal(board, mv)
}
