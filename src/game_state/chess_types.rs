//! Core value types shared across the engine: colors, piece kinds, squares,
//! moves, and game outcomes. Everything here is `Copy` and cheap to pass
//! around; behavior lives in the modules that consume these types.

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta a pawn of this color advances by. Light starts on the
    /// bottom rows and moves toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// A colored piece token as stored on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// A board coordinate. `row 0` is the Dark back rank (rank 8), `row 7` the
/// Light back rank (rank 1). Signed so that offset arithmetic can wander off
/// the board and be caught by `on_board` instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn on_board(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    #[inline]
    pub const fn offset(self, row_delta: i8, col_delta: i8) -> Self {
        Self {
            row: self.row + row_delta,
            col: self.col + col_delta,
        }
    }

    /// Checkerboard shade of this square, `(row + col) % 2`. Used by the
    /// insufficient-material draw rule.
    #[inline]
    pub const fn shade(self) -> u8 {
        ((self.row + self.col) % 2) as u8
    }
}

/// A move request from one square to another. Not validated by construction;
/// legality is decided by `move_generation::legal_move_checks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Terminal state of a game. There is no check or checkmate in this variant;
/// a game ends when one color runs out of pieces or the bishop draw holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Color),
    Draw,
}

impl Outcome {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
