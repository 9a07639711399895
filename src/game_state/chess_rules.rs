//! Canonical rule constants for the volley variant.
//!
//! This module stores the static rule literals: piece values used for
//! capture scoring and search, the starting layout, pawn ranks, and the
//! central squares rewarded by the evaluator. It also hosts the ASCII board
//! parser used to set up positions in tests and diagnostics.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// Capture value of each piece kind. The king is an ordinary piece worth 4;
/// it is eliminated like anything else and gets no special treatment.
#[inline]
pub const fn piece_value(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 4,
    }
}

/// Starting layout, row 0 at the top (Dark's back rank).
pub const STARTING_LAYOUT: [&str; 8] = [
    "rnbqkbnr",
    "pppppppp",
    "........",
    "........",
    "........",
    "........",
    "PPPPPPPP",
    "RNBQKBNR",
];

/// Row a pawn of `color` starts on; a double step is only legal from here.
#[inline]
pub const fn pawn_start_row(color: Color) -> i8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

/// Farthest row for a pawn of `color`; reaching it promotes to a queen.
#[inline]
pub const fn promotion_row(color: Color) -> i8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

/// The four central squares, each worth a small evaluation bonus.
pub const CENTRAL_SQUARES: [Square; 4] = [
    Square::new(3, 3),
    Square::new(3, 4),
    Square::new(4, 3),
    Square::new(4, 4),
];

/// Parse a single layout character. Uppercase is Light, lowercase is Dark,
/// `.` is an empty square.
pub fn piece_from_char(ch: char) -> Result<Option<Piece>, String> {
    if ch == '.' {
        return Ok(None);
    }

    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        other => return Err(format!("Invalid piece character: {other}")),
    };

    Ok(Some(Piece::new(kind, color)))
}

/// Build a board from eight 8-character rows, row 0 first.
pub fn board_from_layout(rows: [&str; 8]) -> Result<Board, String> {
    let mut board = Board::empty();

    for (row, line) in rows.iter().enumerate() {
        if line.chars().count() != 8 {
            return Err(format!("Layout row {row} is not 8 squares: {line:?}"));
        }
        for (col, ch) in line.chars().enumerate() {
            let square = Square::new(row as i8, col as i8);
            board.set(square, piece_from_char(ch)?);
        }
    }

    Ok(board)
}

/// The standard starting board for a new game.
pub fn starting_board() -> Board {
    board_from_layout(STARTING_LAYOUT).expect("starting layout should always parse")
}
