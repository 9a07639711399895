//! Fixed-depth minimax engine.
//!
//! Wraps the core alpha-beta search with a configured default depth and the
//! baseline volley scorer. The stronger default difficulty for computer
//! opponents.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::VolleyScorer;
use crate::search::minimax::{best_move, SearchConfig};

pub struct MinimaxEngine {
    default_depth: u8,
    scorer: VolleyScorer,
}

impl MinimaxEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth,
            scorer: VolleyScorer,
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().depth)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "VolleyChess Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        // Honor explicit depth limits first; otherwise fall back to the
        // configured difficulty depth for this engine instance.
        let depth = params.depth.unwrap_or(self.default_depth).max(1);

        // The search mutates and restores its board in place, so it runs on
        // a scratch copy of the live position.
        let mut scratch = game_state.board.clone();
        let result = best_move(
            &mut scratch,
            game_state.side_to_move,
            &self.scorer,
            SearchConfig { depth },
        );

        let mut out = EngineOutput::default();
        out.best_move = result.best_move;
        out.info_lines.push(format!(
            "info string minimax_engine depth {} score {} nodes {}",
            depth, result.best_score, result.nodes
        ));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::board_from_layout;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::legal_move_checks::is_legal_move;

    #[test]
    fn minimax_engine_proposes_a_legal_move() {
        let state = GameState::new_game();
        let out = MinimaxEngine::new(2)
            .choose_move(&state, &GoParams::default())
            .unwrap();
        let mv = out.best_move.expect("opening position has moves");
        assert!(is_legal_move(&state.board, mv));
    }

    #[test]
    fn depth_param_overrides_the_configured_default() {
        let state = GameState::new_game();
        let out = MinimaxEngine::new(4)
            .choose_move(&state, &GoParams { depth: Some(1) })
            .unwrap();
        assert!(out.info_lines[0].contains("depth 1"));
    }

    #[test]
    fn engine_reports_no_move_for_a_stuck_side() {
        let mut state = GameState::new_game();
        state.board = board_from_layout([
            "........", "........", "........", "p.......", "P.......", "........", "........",
            "........",
        ])
        .unwrap();
        state.side_to_move = Color::Dark;

        let out = MinimaxEngine::new(2)
            .choose_move(&state, &GoParams::default())
            .unwrap();
        assert_eq!(out.best_move, None);
    }
}
