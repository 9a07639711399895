//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search mutates the live board through `simulate_move` and pairs every
//! simulation with exactly one `restore_move` on every exit path, pruned
//! branches included; an unbalanced pair would corrupt the rest of the tree.
//! Dark is the maximizing side, Light the minimizing side. Moves are ordered
//! captures-first by displaced-piece value to tighten the alpha-beta window
//! early; ordering affects speed only, never the chosen line's value.

use rand::prelude::IndexedRandom;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::piece_value;
use crate::game_state::chess_types::{Color, Move};
use crate::move_generation::legal_move_apply::{restore_move, simulate_move};
use crate::move_generation::legal_move_generator::generate_moves_for;
use crate::search::board_scoring::BoardScorer;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

/// Legal moves for `color`, captures first by descending victim value. The
/// sort is stable, so non-captures keep their scan order and ties keep the
/// first candidate.
fn ordered_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = generate_moves_for(board, color);
    moves.sort_by_key(|mv| {
        std::cmp::Reverse(board.piece_at(mv.to).map_or(0, |victim| piece_value(victim.kind)))
    });
    moves
}

/// Pick the best move for `color` at the configured depth. Returns `None`
/// only when `color` has no legal move at all.
pub fn best_move<S: BoardScorer>(
    board: &mut Board,
    color: Color,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let moves = ordered_moves(board, color);
    if moves.is_empty() || config.depth == 0 {
        return SearchResult {
            best_move: None,
            best_score: scorer.score(board),
            nodes: 1,
        };
    }

    let mut nodes = 0u64;
    let mut alpha = i32::MIN;
    let mut beta = i32::MAX;
    let mut best = None;
    let mut best_score = match color {
        Color::Dark => i32::MIN,
        Color::Light => i32::MAX,
    };

    for &mv in &moves {
        let undo = simulate_move(board, mv);
        let score = minimax(
            board,
            color.opposite(),
            config.depth - 1,
            alpha,
            beta,
            scorer,
            &mut nodes,
        );
        restore_move(board, undo);

        match color {
            Color::Dark => {
                if score > best_score {
                    best_score = score;
                    best = Some(mv);
                }
                alpha = alpha.max(best_score);
            }
            Color::Light => {
                if score < best_score {
                    best_score = score;
                    best = Some(mv);
                }
                beta = beta.min(best_score);
            }
        }
    }

    // Defensive fallback: with legal moves on the board the loop always
    // selects one, but never return nothing when a uniform pick exists.
    if best.is_none() {
        let mut rng = rand::rng();
        best = moves.as_slice().choose(&mut rng).copied();
    }

    SearchResult {
        best_move: best,
        best_score,
        nodes,
    }
}

fn minimax<S: BoardScorer>(
    board: &mut Board,
    side: Color,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    scorer: &S,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return scorer.score(board);
    }

    let moves = ordered_moves(board, side);
    if moves.is_empty() {
        return scorer.score(board);
    }

    match side {
        Color::Dark => {
            let mut value = i32::MIN;
            for mv in moves {
                let undo = simulate_move(board, mv);
                let score = minimax(board, side.opposite(), depth - 1, alpha, beta, scorer, nodes);
                restore_move(board, undo);

                value = value.max(score);
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        }
        Color::Light => {
            let mut value = i32::MAX;
            for mv in moves {
                let undo = simulate_move(board, mv);
                let score = minimax(board, side.opposite(), depth - 1, alpha, beta, scorer, nodes);
                restore_move(board, undo);

                value = value.min(score);
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::{board_from_layout, starting_board};
    use crate::game_state::chess_types::Square;
    use crate::move_generation::legal_move_checks::is_legal_move;
    use crate::search::board_scoring::VolleyScorer;

    #[test]
    fn search_returns_a_legal_move_and_leaves_the_board_intact() {
        let mut board = starting_board();
        let before = board.clone();

        for color in [Color::Light, Color::Dark] {
            let result = best_move(&mut board, color, &VolleyScorer, SearchConfig { depth: 3 });
            let chosen = result.best_move.expect("opening position has moves");
            assert!(is_legal_move(&board, chosen));
            assert_eq!(board, before, "search must restore every simulation");
            assert!(result.nodes > 0);
        }
    }

    #[test]
    fn dark_finds_the_volley_that_clears_the_last_light_piece() {
        // Sliding to (0,4) sweeps the lone light king on (4,4) down the
        // e-file; it is the first such move in capture-ordered iteration and
        // later equal sweeps must not displace it.
        let mut board = board_from_layout([
            "r.......", "........", "........", "........", "....K...", "........", "........",
            "........",
        ])
        .unwrap();

        let result = best_move(&mut board, Color::Dark, &VolleyScorer, SearchConfig { depth: 1 });
        assert_eq!(
            result.best_move,
            Some(Move::new(Square::new(0, 0), Square::new(0, 4)))
        );
    }

    #[test]
    fn light_minimizes_the_same_way_dark_maximizes() {
        let mut board = board_from_layout([
            "....k...", "........", "........", "........", "........", "........", "........",
            "R.......",
        ])
        .unwrap();

        // Mirrored position: the light rook sweeps the dark king from (0,0).
        let result = best_move(&mut board, Color::Light, &VolleyScorer, SearchConfig { depth: 1 });
        assert_eq!(
            result.best_move,
            Some(Move::new(Square::new(7, 0), Square::new(0, 0)))
        );
    }

    #[test]
    fn depth_zero_reports_the_static_score_without_a_move() {
        let mut board = starting_board();
        let result = best_move(&mut board, Color::Dark, &VolleyScorer, SearchConfig { depth: 0 });
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, VolleyScorer.score(&board));
    }

    #[test]
    fn stuck_side_gets_no_move_and_a_static_score() {
        let mut board = board_from_layout([
            "........", "........", "........", "p.......", "P.......", "........", "........",
            "........",
        ])
        .unwrap();

        let result = best_move(&mut board, Color::Dark, &VolleyScorer, SearchConfig { depth: 3 });
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn move_ordering_puts_the_biggest_capture_first() {
        // The dark rook can take either the queen on (0,4) or the pawn on
        // (4,0); the queen capture must come first.
        let board = board_from_layout([
            "r...Q...", "........", "........", "........", "P.......", "........", "........",
            "........",
        ])
        .unwrap();

        let moves = ordered_moves(&board, Color::Dark);
        assert_eq!(
            moves[0],
            Move::new(Square::new(0, 0), Square::new(0, 4))
        );
        assert_eq!(
            moves[1],
            Move::new(Square::new(0, 0), Square::new(4, 0))
        );
    }

    #[test]
    fn pruned_branches_also_restore_the_board() {
        // An asymmetric tactical middle: enough captures on both sides to
        // force alpha-beta cutoffs at depth 3.
        let board = board_from_layout([
            "r..qk...", ".pp.....", "...n....", "....P...", "..B...b.", "........", "PP...N..",
            "R..QK...",
        ])
        .unwrap();

        let mut scratch = board.clone();
        let result = best_move(&mut scratch, Color::Light, &VolleyScorer, SearchConfig { depth: 3 });
        assert!(result.best_move.is_some());
        assert_eq!(scratch, board);
    }
}
