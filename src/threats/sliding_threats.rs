//! Ray-cast threat probes for the sliding pieces.
//!
//! Each ray stops at the first occupied square: an enemy there is a threat,
//! an own piece blocks silently. Either way nothing behind the blocker is
//! ever reached.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Push onto `threats` the first enemy piece along each of `directions`
/// starting from (but excluding) `from`.
pub fn ray_threats(
    board: &Board,
    attacker_color: Color,
    from: Square,
    directions: &[(i8, i8)],
    threats: &mut Vec<Square>,
) {
    for &(row_step, col_step) in directions {
        let mut current = from.offset(row_step, col_step);
        while current.on_board() {
            if let Some(target) = board.piece_at(current) {
                if target.color != attacker_color {
                    threats.push(current);
                }
                break;
            }
            current = current.offset(row_step, col_step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::board_from_layout;

    #[test]
    fn ray_stops_at_the_first_piece_regardless_of_color() {
        let board = board_from_layout([
            "R.n.k...", "........", "........", "........", "........", "........", "........",
            "........",
        ])
        .unwrap();

        let mut threats = Vec::new();
        ray_threats(
            &board,
            Color::Light,
            Square::new(0, 0),
            &ROOK_DIRECTIONS,
            &mut threats,
        );

        // The knight on (0,2) is hit; the king behind it is shielded.
        assert_eq!(threats, vec![Square::new(0, 2)]);
    }

    #[test]
    fn own_piece_blocks_without_becoming_a_threat() {
        let board = board_from_layout([
            "R.N.k...", "........", "........", "........", "........", "........", "........",
            "........",
        ])
        .unwrap();

        let mut threats = Vec::new();
        ray_threats(
            &board,
            Color::Light,
            Square::new(0, 0),
            &ROOK_DIRECTIONS,
            &mut threats,
        );

        assert!(threats.is_empty());
    }
}
