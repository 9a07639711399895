//! One full turn, settled in discrete phases.
//!
//! `MoveSettler` stages the externally observable timing of a turn: the
//! displacement happens when the settler is created, then the caller polls
//! `step` to stage the volley threats, eliminate them, and finish with the
//! outcome check and stalemate-skip. A presentation layer inserts its pauses
//! between steps; the engine holds no timers and `execute_move` drives the
//! same phases synchronously for tests and computer turns.
//!
//! While a settler is alive the state is `settling` and submitting another
//! move is a programming error, not a rejection.

use std::error::Error;
use std::fmt;

use crate::game_flow::outcome::detect_outcome;
use crate::game_state::chess_rules::{piece_value, promotion_row};
use crate::game_state::chess_types::{Color, Move, Outcome, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_legal_move;
use crate::move_generation::legal_move_generator::has_any_move;
use crate::threats::threat_sweep::find_threats;

/// Why a move request was turned away. No state is mutated in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejected {
    /// The move fails the legality rules for its piece.
    Illegal,
    /// The game already has a terminal outcome; reset before moving again.
    Finished,
}

impl fmt::Display for MoveRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejected::Illegal => write!(f, "move is not legal for the piece"),
            MoveRejected::Finished => write!(f, "game is already over"),
        }
    }
}

impl Error for MoveRejected {}

/// Everything that happened while one accepted move settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub mv: Move,
    pub moved_piece: Piece,
    pub displaced_capture: Option<Piece>,
    pub promoted: bool,
    pub swept: Vec<(Square, Piece)>,
    pub outcome: Outcome,
    /// True when the incoming side had no legal moves and the turn returned
    /// to the mover.
    pub turn_skipped: bool,
    pub side_to_move: Color,
}

/// One observable settling phase, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettleStep {
    /// The squares the landed piece threatens, before anything is removed.
    ThreatsStaged(Vec<Square>),
    /// The threatened pieces have been eliminated.
    ThreatsResolved(Vec<(Square, Piece)>),
    /// Outcome checked, turn settled; the engine accepts input again.
    Settled(TurnReport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Staging,
    Eliminating,
    Finishing,
    Done,
}

/// Phase machine for a single accepted move.
#[derive(Debug)]
pub struct MoveSettler {
    mv: Move,
    moved_piece: Piece,
    displaced_capture: Option<Piece>,
    promoted: bool,
    staged_threats: Vec<Square>,
    swept: Vec<(Square, Piece)>,
    phase: Phase,
}

impl MoveSettler {
    /// Validate and begin settling `mv`: displacement capture, relocation,
    /// promotion, and the turn flip all happen here. The volley threats are
    /// computed but not yet resolved.
    pub fn begin(state: &mut GameState, mv: Move) -> Result<Self, MoveRejected> {
        assert!(
            !state.settling,
            "move submitted while a previous move is still settling"
        );

        if state.outcome.is_terminal() {
            return Err(MoveRejected::Finished);
        }
        if !is_legal_move(&state.board, mv) {
            return Err(MoveRejected::Illegal);
        }

        let moved_piece = state
            .board
            .take(mv.from)
            .expect("legal move always has a source piece");

        let displaced_capture = state.board.piece_at(mv.to);
        if let Some(victim) = displaced_capture {
            state.credit_capture(victim.color, piece_value(victim.kind));
        }

        let promoted = moved_piece.kind == PieceKind::Pawn
            && mv.to.row == promotion_row(moved_piece.color);
        let landed_piece = if promoted {
            Piece::new(PieceKind::Queen, moved_piece.color)
        } else {
            moved_piece
        };
        state.board.set(mv.to, Some(landed_piece));

        state.selected_square = None;
        // The turn flips before threat resolution; sweep credit still goes
        // to the mover.
        state.side_to_move = state.side_to_move.opposite();
        state.settling = true;

        let staged_threats = find_threats(&state.board, moved_piece, mv.to);
        let phase = if staged_threats.is_empty() {
            Phase::Finishing
        } else {
            Phase::Staging
        };

        Ok(Self {
            mv,
            moved_piece,
            displaced_capture,
            promoted,
            staged_threats,
            swept: Vec::new(),
            phase,
        })
    }

    /// Advance one phase. Returns `None` once the turn has settled.
    pub fn step(&mut self, state: &mut GameState) -> Option<SettleStep> {
        match self.phase {
            Phase::Staging => {
                self.phase = Phase::Eliminating;
                Some(SettleStep::ThreatsStaged(self.staged_threats.clone()))
            }
            Phase::Eliminating => {
                for &square in &self.staged_threats {
                    if let Some(victim) = state.board.take(square) {
                        state.credit_capture(victim.color, piece_value(victim.kind));
                        self.swept.push((square, victim));
                    }
                }
                self.phase = Phase::Finishing;
                Some(SettleStep::ThreatsResolved(self.swept.clone()))
            }
            Phase::Finishing => {
                let report = self.finish(state);
                self.phase = Phase::Done;
                Some(SettleStep::Settled(report))
            }
            Phase::Done => None,
        }
    }

    fn finish(&mut self, state: &mut GameState) -> TurnReport {
        let mut outcome = detect_outcome(&state.board);
        let mut turn_skipped = false;

        if !outcome.is_terminal() && !has_any_move(&state.board, state.side_to_move) {
            if has_any_move(&state.board, state.side_to_move.opposite()) {
                // Stalemate-skip: the stuck side forfeits its turn.
                state.side_to_move = state.side_to_move.opposite();
                turn_skipped = true;
            } else {
                outcome = Outcome::Draw;
            }
        }

        state.outcome = outcome;
        state.settling = false;

        TurnReport {
            mv: self.mv,
            moved_piece: self.moved_piece,
            displaced_capture: self.displaced_capture,
            promoted: self.promoted,
            swept: std::mem::take(&mut self.swept),
            outcome,
            turn_skipped,
            side_to_move: state.side_to_move,
        }
    }
}

/// Drive every settle phase synchronously and return the final report.
pub fn execute_move(state: &mut GameState, mv: Move) -> Result<TurnReport, MoveRejected> {
    let mut settler = MoveSettler::begin(state, mv)?;

    loop {
        match settler.step(state) {
            Some(SettleStep::Settled(report)) => return Ok(report),
            Some(_) => continue,
            None => unreachable!("settler yielded no report before finishing"),
        }
    }
}
