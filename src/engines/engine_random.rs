//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_moves_for;

pub struct RandomEngine;

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "VolleyChess Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let legal_moves = generate_moves_for(&game_state.board, game_state.side_to_move);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            out.best_move = None;
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}
