//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the grid for debugging, tests,
//! and diagnostics in text environments.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// Render the board to a Unicode string for terminal output. Rank 8 (row 0)
/// is printed first, matching the conventional diagram orientation.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8 {
        let rank_char = char::from(b'8' - row as u8);
        out.push(rank_char);
        out.push(' ');

        for col in 0..8 {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::starting_board;

    #[test]
    fn rendered_start_position_has_dark_back_rank_on_top() {
        let rendered = render_board(&starting_board());
        let mut lines = rendered.lines();

        assert_eq!(lines.next(), Some("  a b c d e f g h"));
        assert_eq!(lines.next(), Some("8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8"));
    }
}
