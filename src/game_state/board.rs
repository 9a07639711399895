//! The 8×8 mailbox board.
//!
//! `Board` is pure data: an ordered grid of optional piece tokens with O(1)
//! accessors. All rule behavior (legality, threats, scoring) lives in the
//! modules that operate on it. Equality is field-for-field, which is what the
//! simulate/restore identity tests rely on.

use crate::game_state::chess_types::{Color, Piece, Square};

pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Piece on `square`, or `None` when the square is empty or off the
    /// board. Out-of-bounds queries are a defined no-piece answer, not an
    /// error.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.on_board() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Write `piece` to an on-board square.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        debug_assert!(square.on_board(), "set out of bounds: {square:?}");
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    /// Remove and return the piece on an on-board square.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        debug_assert!(square.on_board(), "take out of bounds: {square:?}");
        self.squares[square.row as usize][square.col as usize].take()
    }

    /// Iterate every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, rank)| {
            rank.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Square::new(row as i8, col as i8), piece))
            })
        })
    }

    #[inline]
    pub fn count_pieces(&self, color: Color) -> usize {
        self.pieces().filter(|(_, piece)| piece.color == color).count()
    }
}
