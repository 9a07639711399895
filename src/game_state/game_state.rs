//! Central game state for the volley variant.
//!
//! `GameState` composes the board with turn, selection, capture scoring, and
//! terminal-outcome bookkeeping. The `settling` flag is the single-writer
//! lock: while a move is mid-settlement no new move may be submitted, and
//! doing so is a programming error rather than a recoverable rejection.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::starting_board;
use crate::game_state::chess_types::{Color, Outcome, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,

    /// UI-facing selection; cleared whenever a move executes.
    pub selected_square: Option<Square>,

    /// Cumulative value of pieces each color has eliminated, indexed by
    /// `Color::index()` of the capturing side.
    pub captured_value: [u32; 2],

    pub outcome: Outcome,

    /// True while a submitted move is still settling through its phases.
    pub settling: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    pub fn new_game() -> Self {
        Self {
            board: starting_board(),
            side_to_move: Color::Light,
            selected_square: None,
            captured_value: [0, 0],
            outcome: Outcome::InProgress,
            settling: false,
        }
    }

    /// Reset to the starting position. Tournament tallies live elsewhere and
    /// are untouched by this.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn score(&self, color: Color) -> u32 {
        self.captured_value[color.index()]
    }

    /// Credit `value` to the side that eliminated a piece of `victim_color`.
    #[inline]
    pub fn credit_capture(&mut self, victim_color: Color, value: u32) {
        self.captured_value[victim_color.opposite().index()] += value;
    }
}
