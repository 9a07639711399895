//! In-process game session controller.
//!
//! Owns the game state, the tournament tally, and the per-color opponent
//! configuration, and exposes the surface an interface layer consumes:
//! square selection, move submission, destination hints, computer turns, and
//! game/tournament resets. Presentation (rendering, animation pacing,
//! modals) lives entirely outside this crate.

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_flow::move_executor::{execute_move, MoveRejected, TurnReport};
use crate::game_state::chess_types::{Color, Move, Outcome, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::tournament::{TallySide, TournamentTally};
use crate::move_generation::legal_move_generator::legal_destinations;

/// Who controls one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    Human,
    Computer { depth: u8 },
}

pub struct GameController {
    state: GameState,
    tally: TournamentTally,
    opponents: [Opponent; 2],
    engine: MinimaxEngine,
}

impl GameController {
    pub fn new(light: Opponent, dark: Opponent) -> Self {
        Self {
            state: GameState::new_game(),
            tally: TournamentTally::new(),
            opponents: [light, dark],
            engine: MinimaxEngine::default(),
        }
    }

    /// The default matchup: a human playing Light against the computer.
    pub fn human_versus_computer(depth: u8) -> Self {
        Self::new(Opponent::Human, Opponent::Computer { depth })
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn tally(&self) -> TournamentTally {
        self.tally
    }

    #[inline]
    pub fn opponent_for(&self, color: Color) -> Opponent {
        self.opponents[color.index()]
    }

    pub fn set_opponent(&mut self, color: Color, opponent: Opponent) {
        self.opponents[color.index()] = opponent;
    }

    /// Start a fresh game. The tournament tally survives; only
    /// `reset_tournament` clears it.
    pub fn new_game(&mut self) {
        self.state.reset();
        self.engine.new_game();
    }

    pub fn reset_tournament(&mut self) {
        self.tally.reset();
    }

    /// Select a square holding a piece of the side to move. Returns whether
    /// a selection was made; selecting is refused on a computer's turn.
    pub fn select_square(&mut self, square: Square) -> bool {
        if self.state.outcome.is_terminal() || self.state.settling {
            return false;
        }
        if matches!(self.opponent_for(self.state.side_to_move), Opponent::Computer { .. }) {
            return false;
        }

        match self.state.board.piece_at(square) {
            Some(piece) if piece.color == self.state.side_to_move => {
                self.state.selected_square = Some(square);
                true
            }
            _ => {
                self.state.selected_square = None;
                false
            }
        }
    }

    /// Destination hints for the piece on `from`.
    pub fn destinations_from(&self, from: Square) -> Vec<Square> {
        legal_destinations(&self.state.board, from)
    }

    /// Execute `mv` for the side to move, updating the tournament tally on a
    /// win. Illegal and post-game requests are value rejections.
    pub fn submit_move(&mut self, mv: Move) -> Result<TurnReport, MoveRejected> {
        let report = execute_move(&mut self.state, mv)?;

        if let Outcome::Win(winner) = report.outcome {
            let side = match self.opponent_for(winner) {
                Opponent::Computer { .. } => TallySide::Computer,
                Opponent::Human => TallySide::Player,
            };
            self.tally.record_win(side);
        }

        Ok(report)
    }

    /// If the game is live and a computer controls the side to move, let it
    /// pick and play one move. `Ok(None)` means no computer turn was due.
    pub fn run_computer_turn_if_due(&mut self) -> Result<Option<TurnReport>, String> {
        if self.state.outcome.is_terminal() || self.state.settling {
            return Ok(None);
        }

        let Opponent::Computer { depth } = self.opponent_for(self.state.side_to_move) else {
            return Ok(None);
        };

        let params = GoParams { depth: Some(depth) };
        let output = self.engine.choose_move(&self.state, &params)?;
        let Some(mv) = output.best_move else {
            return Ok(None);
        };

        let report = self.submit_move(mv).map_err(|e| e.to_string())?;
        Ok(Some(report))
    }
}
