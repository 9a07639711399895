//! The volley sweep: the variant's signature rule.
//!
//! After a piece lands it eliminates every opposing piece its movement
//! pattern reaches from the new square. The sweep is evaluated exactly once
//! per landing; eliminations never trigger further sweeps. Note that a pawn
//! that just promoted still sweeps with the pawn pattern, because the sweep
//! belongs to the piece as it moved.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::threats::sliding_threats::{ray_threats, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::threats::step_threats::{
    offset_threats, pawn_diagonal_threats, KING_STEPS, KNIGHT_JUMPS,
};

/// Squares holding opposing pieces that `piece`, having landed on `at`,
/// eliminates by its movement pattern.
pub fn find_threats(board: &Board, piece: Piece, at: Square) -> Vec<Square> {
    let mut threats = Vec::new();

    match piece.kind {
        PieceKind::Rook => {
            ray_threats(board, piece.color, at, &ROOK_DIRECTIONS, &mut threats);
        }
        PieceKind::Bishop => {
            ray_threats(board, piece.color, at, &BISHOP_DIRECTIONS, &mut threats);
        }
        PieceKind::Queen => {
            ray_threats(board, piece.color, at, &ROOK_DIRECTIONS, &mut threats);
            ray_threats(board, piece.color, at, &BISHOP_DIRECTIONS, &mut threats);
        }
        PieceKind::Knight => {
            offset_threats(board, piece.color, at, &KNIGHT_JUMPS, &mut threats);
        }
        PieceKind::King => {
            offset_threats(board, piece.color, at, &KING_STEPS, &mut threats);
        }
        PieceKind::Pawn => {
            pawn_diagonal_threats(board, piece.color, at, &mut threats);
        }
    }

    threats
}
