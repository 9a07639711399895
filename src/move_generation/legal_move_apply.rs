//! Reversible move application for search simulation.
//!
//! `simulate_move` mutates the live board in place (displacement capture,
//! automatic queen promotion, volley sweep) and returns an `UndoState` that
//! `restore_move` consumes to put every piece back, including the remotely
//! swept ones. The pair must be the identity on the board; the search leans
//! on that along every path, pruned branches included.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::{Move, Piece, PieceKind};
use crate::game_state::undo_state::UndoState;
use crate::threats::threat_sweep::find_threats;

/// Apply `mv` to `board`. The caller is responsible for having checked
/// legality; an empty source square is a programming error here.
pub fn simulate_move(board: &mut Board, mv: Move) -> UndoState {
    let moved_piece = board
        .take(mv.from)
        .expect("simulate_move requires a piece on the source square");
    let displaced_piece = board.piece_at(mv.to);

    let promoted = moved_piece.kind == PieceKind::Pawn
        && mv.to.row == promotion_row(moved_piece.color);
    let landed_piece = if promoted {
        Piece::new(PieceKind::Queen, moved_piece.color)
    } else {
        moved_piece
    };
    board.set(mv.to, Some(landed_piece));

    // The sweep pattern belongs to the piece as it moved: a freshly promoted
    // queen still sweeps as a pawn this turn.
    let threat_squares = find_threats(board, moved_piece, mv.to);
    let mut swept = Vec::with_capacity(threat_squares.len());
    for square in threat_squares {
        if let Some(victim) = board.take(square) {
            swept.push((square, victim));
        }
    }

    UndoState {
        mv,
        moved_piece,
        displaced_piece,
        swept,
        promoted,
    }
}

/// Reverse one `simulate_move`. Consumes the undo record; applying it twice
/// would corrupt the board.
pub fn restore_move(board: &mut Board, undo: UndoState) {
    for (square, victim) in undo.swept {
        board.set(square, Some(victim));
    }

    board.set(undo.mv.to, undo.displaced_piece);
    // `moved_piece` is the pre-promotion token, so this also undoes
    // promotion.
    board.set(undo.mv.from, Some(undo.moved_piece));
}
