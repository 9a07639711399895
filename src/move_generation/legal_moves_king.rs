use crate::game_state::chess_types::Move;

/// King legality: one step in any direction. There is no castling in this
/// variant.
pub fn king_move_is_legal(mv: Move) -> bool {
    (mv.to.row - mv.from.row).abs() <= 1 && (mv.to.col - mv.from.col).abs() <= 1
}
