//! Top-level move legality dispatch.
//!
//! Applies the checks common to every piece (bounds, occupied source, no-op,
//! same-color destination) and then delegates to the per-piece predicates.
//! An illegal move is a plain `false`; nothing here mutates the board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, PieceKind, Square};
use crate::move_generation::legal_moves_bishop::bishop_move_is_legal;
use crate::move_generation::legal_moves_king::king_move_is_legal;
use crate::move_generation::legal_moves_knight::knight_move_is_legal;
use crate::move_generation::legal_moves_pawn::pawn_move_is_legal;
use crate::move_generation::legal_moves_queen::queen_move_is_legal;
use crate::move_generation::legal_moves_rook::rook_move_is_legal;

pub fn is_legal_move(board: &Board, mv: Move) -> bool {
    if !mv.from.on_board() || !mv.to.on_board() {
        return false;
    }

    let Some(piece) = board.piece_at(mv.from) else {
        return false;
    };

    if mv.from == mv.to {
        return false;
    }

    if let Some(target) = board.piece_at(mv.to) {
        if target.color == piece.color {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => pawn_move_is_legal(board, piece.color, mv),
        PieceKind::Knight => knight_move_is_legal(mv),
        PieceKind::Bishop => bishop_move_is_legal(board, mv),
        PieceKind::Rook => rook_move_is_legal(board, mv),
        PieceKind::Queen => queen_move_is_legal(board, mv),
        PieceKind::King => king_move_is_legal(mv),
    }
}

/// Walk unit steps from `from` toward `to`, exclusive of both endpoints, and
/// fail on any occupied intermediate square. Assumes the endpoints share a
/// rank, file, or diagonal.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let row_step = (to.row - from.row).signum();
    let col_step = (to.col - from.col).signum();

    let mut current = from.offset(row_step, col_step);
    while current != to {
        if board.is_occupied(current) {
            return false;
        }
        current = current.offset(row_step, col_step);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::{board_from_layout, starting_board};

    fn mv(from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> Move {
        Move::new(Square::new(from_row, from_col), Square::new(to_row, to_col))
    }

    #[test]
    fn empty_source_is_illegal() {
        let board = starting_board();
        assert!(!is_legal_move(&board, mv(3, 3, 4, 3)));
    }

    #[test]
    fn no_op_move_is_illegal() {
        let board = starting_board();
        assert!(!is_legal_move(&board, mv(7, 0, 7, 0)));
    }

    #[test]
    fn own_piece_on_destination_is_illegal() {
        let board = starting_board();
        // Light rook onto light pawn.
        assert!(!is_legal_move(&board, mv(7, 0, 6, 0)));
    }

    #[test]
    fn out_of_bounds_destination_is_illegal() {
        let board = starting_board();
        assert!(!is_legal_move(&board, mv(7, 1, 9, 2)));
    }

    #[test]
    fn path_is_clear_ignores_both_endpoints() {
        let board = board_from_layout([
            "r...k...", "........", "........", "........", "........", "........", "........",
            "R...K...",
        ])
        .unwrap();

        // Occupied endpoints, empty middle.
        assert!(path_is_clear(&board, Square::new(7, 0), Square::new(0, 0)));
        assert!(path_is_clear(&board, Square::new(7, 0), Square::new(7, 4)));
    }

    #[test]
    fn path_is_clear_fails_on_a_blocker() {
        let board = board_from_layout([
            "r.n.k...", "........", "........", "........", "........", "........", "........",
            "........",
        ])
        .unwrap();

        assert!(!path_is_clear(&board, Square::new(0, 0), Square::new(0, 4)));
    }
}
