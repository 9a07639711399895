//! Pluggable static position evaluation.
//!
//! Search delegates leaf scoring to the `BoardScorer` trait so heuristics
//! can be swapped without touching search code. Scores are Dark-positive by
//! convention: the maximizing side of the minimax is always Dark.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_start_row, piece_value, CENTRAL_SQUARES};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

pub trait BoardScorer: Send + Sync {
    /// Static score of the position, positive when Dark is ahead.
    fn score(&self, board: &Board) -> i32;
}

/// The variant's baseline heuristic: material scaled by ten, a small bonus
/// for holding the four central squares, and a per-rank bonus for advanced
/// pawns.
#[derive(Debug, Clone, Copy, Default)]
pub struct VolleyScorer;

impl VolleyScorer {
    const MATERIAL_SCALE: i32 = 10;
    const CENTER_BONUS: i32 = 2;

    #[inline]
    fn piece_score(square: Square, piece: Piece) -> i32 {
        let mut score = piece_value(piece.kind) as i32 * Self::MATERIAL_SCALE;

        if CENTRAL_SQUARES.contains(&square) {
            score += Self::CENTER_BONUS;
        }

        if piece.kind == PieceKind::Pawn {
            score += Self::pawn_advancement(square, piece.color);
        }

        score
    }

    /// Ranks a pawn has advanced from its start row, one point per rank.
    #[inline]
    fn pawn_advancement(square: Square, color: Color) -> i32 {
        let advanced = (square.row - pawn_start_row(color)) * color.pawn_direction();
        i32::from(advanced.max(0))
    }
}

impl BoardScorer for VolleyScorer {
    fn score(&self, board: &Board) -> i32 {
        let mut total = 0i32;

        for (square, piece) in board.pieces() {
            let value = Self::piece_score(square, piece);
            match piece.color {
                Color::Dark => total += value,
                Color::Light => total -= value,
            }
        }

        total
    }
}
