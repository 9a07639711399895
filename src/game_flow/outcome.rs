//! Terminal outcome detection.
//!
//! A game ends when one color has no pieces left, or on the bishop draw:
//! exactly two pieces remain, both bishops of opposite colors standing on
//! opposite square shades. The shade requirement is deliberate variant
//! behavior and is reproduced as documented. Win is checked first and is
//! terminal before the draw rule is considered.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Outcome, PieceKind};

pub fn detect_outcome(board: &Board) -> Outcome {
    if board.count_pieces(Color::Light) == 0 {
        return Outcome::Win(Color::Dark);
    }
    if board.count_pieces(Color::Dark) == 0 {
        return Outcome::Win(Color::Light);
    }

    let remaining: Vec<_> = board.pieces().collect();
    if let [(first_sq, first), (second_sq, second)] = remaining.as_slice() {
        if first.kind == PieceKind::Bishop
            && second.kind == PieceKind::Bishop
            && first.color != second.color
            && first_sq.shade() != second_sq.shade()
        {
            return Outcome::Draw;
        }
    }

    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::{board_from_layout, starting_board};

    #[test]
    fn eliminating_every_dark_piece_wins_for_light() {
        let board = board_from_layout([
            "........", "........", "........", "........", "........", "........", "....P...",
            "....K...",
        ])
        .unwrap();

        assert_eq!(detect_outcome(&board), Outcome::Win(Color::Light));
    }

    #[test]
    fn empty_light_side_wins_for_dark() {
        let board = board_from_layout([
            "....k...", "........", "........", "........", "........", "........", "........",
            "........",
        ])
        .unwrap();

        assert_eq!(detect_outcome(&board), Outcome::Win(Color::Dark));
    }

    #[test]
    fn opposite_shade_bishops_draw() {
        // (0,0) is shade 0, (0,1) is shade 1.
        let board = board_from_layout([
            "bB......", "........", "........", "........", "........", "........", "........",
            "........",
        ])
        .unwrap();

        assert_eq!(detect_outcome(&board), Outcome::Draw);
    }

    #[test]
    fn same_shade_bishops_do_not_draw() {
        // (0,0) and (1,1) share shade 0.
        let board = board_from_layout([
            "b.......", ".B......", "........", "........", "........", "........", "........",
            "........",
        ])
        .unwrap();

        assert_eq!(detect_outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn same_color_bishop_pair_is_not_a_draw() {
        let board = board_from_layout([
            "B.......", ".B......", "........", "........", "........", "........", "........",
            "........",
        ])
        .unwrap();

        // One side has zero pieces, so the win rule fires before any draw
        // consideration.
        assert_eq!(detect_outcome(&board), Outcome::Win(Color::Light));
    }

    #[test]
    fn three_pieces_never_draw() {
        let board = board_from_layout([
            "bB......", "....p...", "........", "........", "........", "........", "........",
            "........",
        ])
        .unwrap();

        assert_eq!(detect_outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn full_board_is_in_progress() {
        assert_eq!(detect_outcome(&starting_board()), Outcome::InProgress);
    }
}
