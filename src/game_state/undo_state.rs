use crate::game_state::chess_types::{Move, Piece, Square};

/// Single undo record for `simulate_move` / `restore_move`.
///
/// Captures everything needed to reverse one simulated move: the piece that
/// moved (as it was before any promotion), the piece displaced from the
/// destination, and every piece removed by the threat sweep. Created at
/// simulation time and consumed exactly once by the matching restore.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: Move,
    pub moved_piece: Piece,
    pub displaced_piece: Option<Piece>,
    pub swept: Vec<(Square, Piece)>,
    pub promoted: bool,
}
