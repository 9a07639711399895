//! Fixed-offset threat probes for the non-sliding pieces.
//!
//! Knight jumps and king steps are checked independently with no blocking.
//! The pawn probes only its two forward diagonals; this is a fixed pattern
//! sweep, not a reachability check, so it ignores whether the square could
//! have been captured on as a move.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Record `square` as a threat if it holds an enemy of `attacker_color`.
#[inline]
pub fn probe_threat(
    board: &Board,
    attacker_color: Color,
    square: Square,
    threats: &mut Vec<Square>,
) {
    if let Some(target) = board.piece_at(square) {
        if target.color != attacker_color {
            threats.push(square);
        }
    }
}

/// Probe each of `offsets` relative to `from`.
pub fn offset_threats(
    board: &Board,
    attacker_color: Color,
    from: Square,
    offsets: &[(i8, i8)],
    threats: &mut Vec<Square>,
) {
    for &(row_delta, col_delta) in offsets {
        probe_threat(board, attacker_color, from.offset(row_delta, col_delta), threats);
    }
}

/// Probe the two forward diagonals of a pawn of `attacker_color`.
pub fn pawn_diagonal_threats(
    board: &Board,
    attacker_color: Color,
    from: Square,
    threats: &mut Vec<Square>,
) {
    let direction = attacker_color.pawn_direction();
    probe_threat(board, attacker_color, from.offset(direction, -1), threats);
    probe_threat(board, attacker_color, from.offset(direction, 1), threats);
}
