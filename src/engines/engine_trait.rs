//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different opponent
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Search depth override; engines fall back to their configured depth.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<crate::game_state::chess_types::Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
