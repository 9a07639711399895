//! Full legal move enumeration.
//!
//! Scans every source square of the given color against every destination
//! square through `is_legal_move`. Also answers the destination-hint query
//! an interface layer needs to highlight where a selected piece may go.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, Square};
use crate::move_generation::legal_move_checks::is_legal_move;

/// All legal moves for `color`, in row-major source then destination order.
pub fn generate_moves_for(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for from_row in 0..8 {
        for from_col in 0..8 {
            let from = Square::new(from_row, from_col);
            let Some(piece) = board.piece_at(from) else {
                continue;
            };
            if piece.color != color {
                continue;
            }

            for to_row in 0..8 {
                for to_col in 0..8 {
                    let mv = Move::new(from, Square::new(to_row, to_col));
                    if is_legal_move(board, mv) {
                        moves.push(mv);
                    }
                }
            }
        }
    }

    moves
}

/// Legal destination squares for the piece on `from`, empty when the square
/// is empty.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut destinations = Vec::new();

    if board.piece_at(from).is_none() {
        return destinations;
    }

    for to_row in 0..8 {
        for to_col in 0..8 {
            let to = Square::new(to_row, to_col);
            if is_legal_move(board, Move::new(from, to)) {
                destinations.push(to);
            }
        }
    }

    destinations
}

/// Whether `color` has at least one legal move. Bails out on the first hit
/// instead of materializing the full move list.
pub fn has_any_move(board: &Board, color: Color) -> bool {
    for from_row in 0..8 {
        for from_col in 0..8 {
            let from = Square::new(from_row, from_col);
            match board.piece_at(from) {
                Some(piece) if piece.color == color => {}
                _ => continue,
            }

            for to_row in 0..8 {
                for to_col in 0..8 {
                    if is_legal_move(board, Move::new(from, Square::new(to_row, to_col))) {
                        return true;
                    }
                }
            }
        }
    }

    false
}
