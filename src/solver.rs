//! An agent to solve positions of the game of Chopsticks

use crate::{memo_table::*, moves::*, state::*, theory_table::*, KEY_SPACE};

use std::cmp::Ordering;

/// The exact value of a position, relative to its side to move
///
/// Distances count plies until the forced end of the game under optimal play
/// by both sides. `Draw` means best play repeats a position of the line
/// being searched; its value depends on that line, which is why draws are
/// never memoized.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Resolved {
    /// The mover forces a win in this many plies
    Win(u16),
    /// The mover loses in this many plies against optimal resistance
    Loss(u16),
    /// Best play repeats a position on the current line
    Draw,
}

impl Resolved {
    /// The same outcome seen by the mover one ply earlier: the opponent's
    /// win is our loss one ply further out, and vice versa
    pub fn negated(self) -> Self {
        match self {
            Resolved::Win(distance) => Resolved::Loss(distance + 1),
            Resolved::Loss(distance) => Resolved::Win(distance + 1),
            Resolved::Draw => Resolved::Draw,
        }
    }

    /// Plies until the forced end of the game, `None` for draws
    pub fn distance(self) -> Option<u16> {
        match self {
            Resolved::Win(distance) | Resolved::Loss(distance) => Some(distance),
            Resolved::Draw => None,
        }
    }

    pub fn is_decisive(self) -> bool {
        !matches!(self, Resolved::Draw)
    }
}

// mover preference: any win beats the draw, the draw beats any loss, faster
// wins and slower losses rank higher; max over successor values then picks
// the best outcome, and the order agrees with `score` by construction
impl Ord for Resolved {
    fn cmp(&self, other: &Self) -> Ordering {
        use Resolved::*;
        match (*self, *other) {
            (Win(a), Win(b)) => b.cmp(&a),
            (Loss(a), Loss(b)) => a.cmp(&b),
            (Draw, Draw) => Ordering::Equal,
            (Win(_), _) | (Draw, Loss(_)) => Ordering::Greater,
            (_, Win(_)) | (Loss(_), Draw) => Ordering::Less,
        }
    }
}

impl PartialOrd for Resolved {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An agent to resolve Chopsticks positions exactly
///
/// # Notes
/// Taps and splits can revisit earlier positions, so the game forms a cyclic
/// graph rather than a tree and a plain game tree search would recurse
/// forever. This agent keeps a path-local set of in-progress positions next
/// to its memo table: meeting an in-progress position again reads as a draw
/// by repetition for the active line only, while finalized wins and losses
/// are memoized globally and never change.
///
/// # Position Values
/// A position resolves to a win or loss for its side to move together with
/// the ply distance until the forced end of the game, or to a draw when best
/// play repeats the active line. Draws are path-dependent, so only decisive
/// values enter the memo table.
#[derive(Clone)]
pub struct Solver {
    memo: MemoTable,
    in_progress: Vec<bool>,
    theory: Option<TheoryTable>,

    /// The number of positions visited by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` with an empty memo table
    pub fn new() -> Self {
        Self {
            memo: MemoTable::new(),
            in_progress: vec![false; KEY_SPACE],
            theory: None,
            node_count: 0,
        }
    }

    /// Adds a theory table to an existing `Solver`; classified positions
    /// then short-circuit the search
    pub fn with_theory_table(mut self, theory: TheoryTable) -> Self {
        self.theory = Some(theory);
        self
    }

    /// Read access to the finalized values resolved so far
    pub fn memo(&self) -> &MemoTable {
        &self.memo
    }

    /// Discards all finalized values. They are a pure function of the
    /// position and can be rebuilt at will.
    pub fn reset(&mut self) {
        self.memo.reset();
        self.node_count = 0;
    }

    /// Resolves the exact value of `state` for its side to move
    pub fn resolve(&mut self, state: &State) -> Resolved {
        debug_assert!(self.in_progress.iter().all(|flag| !flag));
        self.negamax(state.canonicalize())
    }

    fn negamax(&mut self, state: State) -> Resolved {
        debug_assert!(state.is_canonical());
        self.node_count += 1;

        if state.is_terminal() {
            // relative to the mover: both own hands dead is a loss,
            // otherwise the opponent was just finished off
            return if state.pair(state.to_move()) == [0, 0] {
                Resolved::Loss(0)
            } else {
                Resolved::Win(0)
            };
        }

        let key = state.key();
        if let Some(value) = self.memo.get(key) {
            return value;
        }
        // theory entries are finalized solver results, adopt them as-is
        if let Some(value) = self.theory.as_ref().and_then(|theory| theory.get(key)) {
            self.memo.set(key, value);
            return value;
        }
        if self.in_progress[key] {
            // the position repeats on the active line: a draw for this
            // line only, not a fact about the position itself
            return Resolved::Draw;
        }

        self.in_progress[key] = true;
        let mut best: Option<Resolved> = None;
        for (_, successor) in successors(&state) {
            let value = self.negamax(successor).negated();
            best = Some(match best {
                Some(current) => current.max(value),
                None => value,
            });
        }
        self.in_progress[key] = false;

        // a non-terminal state always has at least one tap; a moveless
        // state would simply count as lost on the spot
        let resolved = best.unwrap_or(Resolved::Loss(0));
        if resolved.is_decisive() {
            self.memo.set(key, resolved);
        }
        resolved
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
