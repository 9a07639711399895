use crate::game_state::chess_types::Move;

/// Knight legality: absolute deltas of {2, 1} in either order. Jumps ignore
/// every intermediate square.
pub fn knight_move_is_legal(mv: Move) -> bool {
    let row_delta = (mv.to.row - mv.from.row).abs();
    let col_delta = (mv.to.col - mv.from.col).abs();
    (row_delta == 2 && col_delta == 1) || (row_delta == 1 && col_delta == 2)
}
