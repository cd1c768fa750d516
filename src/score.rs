use static_assertions::*;

use crate::solver::Resolved;
use crate::CANONICAL_STATES;

/// Base score of a forced win; faster wins score closer to it
pub const WIN_BASE: i32 = 1000;

/// Base score of a forced loss; longer resistance scores further above it
pub const LOSS_BASE: i32 = -1000;

/// Bonus per ply that a forced loss can be delayed
pub const SURVIVAL_WEIGHT: i32 = 1;

// distances never exceed the canonical state count, which keeps the win band
// strictly positive and the loss band strictly negative with the draw at 0
const_assert!(SURVIVAL_WEIGHT > 0);
const_assert!(WIN_BASE - CANONICAL_STATES as i32 > 0);
const_assert!(LOSS_BASE + SURVIVAL_WEIGHT * (CANONICAL_STATES as i32) < 0);

/// Maps a resolved value to the scalar used to rank candidate moves.
///
/// `value` must already be relative to the player being scored; successor
/// values need `negated()` first, since they are relative to the opponent.
/// Wins score `WIN_BASE - distance`, losses `LOSS_BASE + SURVIVAL_WEIGHT *
/// distance` and repetition draws 0, so every win outranks the draw and the
/// draw outranks every loss.
pub fn score(value: Resolved) -> i32 {
    match value {
        Resolved::Win(distance) => WIN_BASE - distance as i32,
        Resolved::Loss(distance) => LOSS_BASE + SURVIVAL_WEIGHT * distance as i32,
        Resolved::Draw => 0,
    }
}
