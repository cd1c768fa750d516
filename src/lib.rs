//! A perfect agent for playing or analysing the hand game 'Chopsticks'
//!
//! The tap/split move graph of this game is small but cyclic, so the agent
//! resolves positions with a memoized graph search that handles repetition
//! explicitly instead of a plain game tree search. Forced losses are scored
//! with a survival incentive, so the agent resists as long as possible even
//! in lost positions.
//!
//! # Basic Usage
//!
//! ```
//! use chopsticks_ai::{choose_move, legal_moves, Solver, State};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let start = State::default();
//! let mut solver = Solver::new();
//!
//! let best = choose_move(&mut solver, &start)?;
//! assert!(legal_moves(&start)?.iter().any(|(candidate, _)| *candidate == best));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
use thiserror::Error;

pub use anyhow;

pub mod state;

pub mod moves;

pub mod memo_table;

pub mod score;

pub mod solver;

pub mod theory_table;

pub mod policy;


pub use moves::{legal_moves, successors, Move};
pub use policy::choose_move;
pub use score::score;
pub use solver::{Resolved, Solver};
pub use state::{Player, State};
pub use theory_table::TheoryTable;

/// Hand values live in `0..MODULUS`; taps wrap around this modulus and a
/// hand that wraps to 0 is dead
pub const MODULUS: u8 = 5;

/// The number of distinct packed state keys: four hand digits and the side
/// to move
pub const KEY_SPACE: usize = {
    let modulus = MODULUS as usize;
    modulus * modulus * modulus * modulus * 2
};

/// The number of canonical states (hand pairs sorted ascending). An optimal
/// forced line never revisits a canonical state, so this also bounds every
/// win/loss distance
pub const CANONICAL_STATES: usize = {
    let pairs = (MODULUS as usize * (MODULUS as usize + 1)) / 2;
    pairs * pairs * 2
};

// ensure that packed state keys fit the u16 records of the theory table format
const_assert!(KEY_SPACE <= 1 << 16);

/// Errors surfaced by state construction, move application and move selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A hand value out of range, a winner query on an unfinished game, or a
    /// move applied to a state that does not admit it
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// Move generation or selection was requested on a finished game
    #[error("no legal moves: the game is already over")]
    NoLegalMoves,
}
