//! Move selection on top of the exact solver

use crate::moves::{legal_moves, Move};
use crate::score::score;
use crate::solver::Solver;
use crate::state::State;
use crate::GameError;

/// Picks the best scoring move for the side to move of `state`.
///
/// Every candidate successor is resolved exactly, negated into the mover's
/// perspective and ranked by `score`: fastest win first, then the draw, then
/// the most drawn out loss. Ties keep the earliest candidate in generation
/// order, so selection is deterministic. A terminal state fails with
/// `NoLegalMoves`.
pub fn choose_move(solver: &mut Solver, state: &State) -> Result<Move, GameError> {
    let mut best: Option<(Move, i32)> = None;
    for (candidate, successor) in legal_moves(state)? {
        let scored = score(solver.resolve(&successor).negated());
        match best {
            Some((_, top)) if scored <= top => {}
            _ => best = Some((candidate, scored)),
        }
    }

    // legal_moves never returns an empty list for a non-terminal state
    match best {
        Some((candidate, _)) => Ok(candidate),
        None => Err(GameError::NoLegalMoves),
    }
}
