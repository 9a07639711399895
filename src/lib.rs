//! Crate root module declarations for the Volley Chess engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! threat resolution, game flow, search, engines, and utility helpers) so
//! binaries, tests, and external tooling can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod tournament;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
}

pub mod threats {
    pub mod sliding_threats;
    pub mod step_threats;
    pub mod threat_sweep;
}

pub mod game_flow {
    pub mod game_controller;
    pub mod move_executor;
    pub mod outcome;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
