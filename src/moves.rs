use std::fmt;

use crate::state::State;
use crate::{GameError, MODULUS};

/// A legal transition, identified by hand values rather than hand slots.
///
/// Once hand pairs are canonical the two hands of a player are
/// interchangeable, so naming values instead of slots collapses symmetric
/// duplicates: tapping with either of two equal hands is the same move.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Move {
    /// A live mover hand showing `attacker` taps an opponent hand showing
    /// `target`, which becomes `(target + attacker) % MODULUS`
    Tap { attacker: u8, target: u8 },
    /// The mover redistributes their hand sum into the pair `(low, high)`
    Split { low: u8, high: u8 },
}

impl Move {
    /// Validates the move against `state` and applies it.
    ///
    /// Returns the canonical successor with the turn passed to the opponent.
    /// Moves the state does not admit fail with `InvalidState`.
    pub fn apply(&self, state: &State) -> Result<State, GameError> {
        let mover = state.to_move();
        let mine = sorted(state.pair(mover));
        let theirs = sorted(state.pair(mover.opponent()));

        match *self {
            Move::Tap { attacker, target } => {
                if attacker == 0 || !mine.contains(&attacker) {
                    return Err(GameError::InvalidState(format!(
                        "no live attacking hand showing {}",
                        attacker
                    )));
                }
                if target == 0 || !theirs.contains(&target) {
                    return Err(GameError::InvalidState(format!(
                        "no live target hand showing {}",
                        target
                    )));
                }
                let mut hit = theirs;
                // replace one occurrence of the target value
                let slot = if hit[0] == target { 0 } else { 1 };
                hit[slot] = (target + attacker) % MODULUS;
                Ok(succeed(state, mine, hit))
            }
            Move::Split { low, high } => {
                let (low, high) = if low <= high { (low, high) } else { (high, low) };
                if high >= MODULUS {
                    return Err(GameError::InvalidState(format!(
                        "split value {} out of range 0..{}",
                        high, MODULUS
                    )));
                }
                if low + high != mine[0] + mine[1] {
                    return Err(GameError::InvalidState(format!(
                        "split ({}, {}) does not preserve the hand sum {}",
                        low,
                        high,
                        mine[0] + mine[1]
                    )));
                }
                if [low, high] == mine {
                    return Err(GameError::InvalidState(
                        "split must change the hand pair".into(),
                    ));
                }
                Ok(succeed(state, [low, high], theirs))
            }
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Move::Tap { attacker, target } => write!(f, "tap {} on {}", attacker, target),
            Move::Split { low, high } => write!(f, "split to {}-{}", low, high),
        }
    }
}

/// Every transition available to the side to move, paired with its canonical
/// resulting state.
///
/// The ordering is stable: taps before splits, taps by ascending
/// (attacker, target) values, splits by ascending low hand. Terminal states
/// have no successors.
pub fn successors(state: &State) -> Vec<(Move, State)> {
    if state.is_terminal() {
        return Vec::new();
    }
    let mover = state.to_move();
    let mine = sorted(state.pair(mover));
    let theirs = sorted(state.pair(mover.opponent()));

    let mut moves = Vec::new();

    // taps: every live attacking value against every live target value
    for (i, &attacker) in mine.iter().enumerate() {
        if attacker == 0 || (i == 1 && mine[1] == mine[0]) {
            continue;
        }
        for (j, &target) in theirs.iter().enumerate() {
            if target == 0 || (j == 1 && theirs[1] == theirs[0]) {
                continue;
            }
            let mut hit = theirs;
            hit[j] = (target + attacker) % MODULUS;
            moves.push((Move::Tap { attacker, target }, succeed(state, mine, hit)));
        }
    }

    // splits: every redistribution of the hand sum that changes the pair,
    // revivals of a dead hand and voluntary kills included
    let sum = mine[0] + mine[1];
    for low in 0..=sum / 2 {
        let high = sum - low;
        if high >= MODULUS || [low, high] == mine {
            continue;
        }
        moves.push((Move::Split { low, high }, succeed(state, [low, high], theirs)));
    }

    moves
}

/// Like `successors`, but a terminal state fails with `NoLegalMoves`.
///
/// A non-terminal state always admits at least one tap, so the returned
/// list is never empty.
pub fn legal_moves(state: &State) -> Result<Vec<(Move, State)>, GameError> {
    if state.is_terminal() {
        return Err(GameError::NoLegalMoves);
    }
    Ok(successors(state))
}

fn succeed(state: &State, mover_pair: [u8; 2], opponent_pair: [u8; 2]) -> State {
    let mover = state.to_move();
    let mut hands = [[0; 2]; 2];
    hands[mover.index()] = sorted(mover_pair);
    hands[mover.opponent().index()] = sorted(opponent_pair);
    State::from_parts(mover.opponent(), hands)
}

fn sorted(mut pair: [u8; 2]) -> [u8; 2] {
    pair.sort_unstable();
    pair
}
