use std::fmt;

use anyhow::{anyhow, Result};

use crate::{GameError, MODULUS};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Player::One => "player one",
            Player::Two => "player two",
        })
    }
}

/// A game position: the side to move plus both players' hand pairs.
///
/// Hand values are in `0..MODULUS` and a hand showing 0 is dead. The two
/// hands of a player are interchangeable, so `canonicalize` sorts each pair
/// ascending and equivalent positions then compare equal and share a key.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct State {
    to_move: Player,
    hands: [[u8; 2]; 2],
}

impl State {
    pub fn new(to_move: Player, first: (u8, u8), second: (u8, u8)) -> Result<Self, GameError> {
        let hands = [[first.0, first.1], [second.0, second.1]];
        for &hand in hands.iter().flatten() {
            if hand >= MODULUS {
                return Err(GameError::InvalidState(format!(
                    "hand value {} out of range 0..{}",
                    hand, MODULUS
                )));
            }
        }
        Ok(Self { to_move, hands })
    }

    /// Parses `"ab|cd"` hand notation: player one's hands before the bar,
    /// player two's after
    pub fn from_hands<S: AsRef<str>>(hands: S, to_move: Player) -> Result<Self> {
        let text = hands.as_ref();
        let mut pairs = [[0u8; 2]; 2];

        let mut sides = text.split('|');
        for pair in pairs.iter_mut() {
            let side = sides
                .next()
                .ok_or_else(|| anyhow!("expected two hand pairs separated by '|' in '{}'", text))?;
            let mut digits = side.chars();
            for value in pair.iter_mut() {
                match digits.next().and_then(|digit| digit.to_digit(10)) {
                    Some(digit) if (digit as u8) < MODULUS => *value = digit as u8,
                    _ => return Err(anyhow!("could not parse '{}' as a hand pair", side)),
                }
            }
            if digits.next().is_some() {
                return Err(anyhow!("could not parse '{}' as a hand pair", side));
            }
        }
        if sides.next().is_some() {
            return Err(anyhow!("expected two hand pairs separated by '|' in '{}'", text));
        }

        Ok(Self {
            to_move,
            hands: pairs,
        })
    }

    // successor construction, values are already validated
    pub(crate) fn from_parts(to_move: Player, hands: [[u8; 2]; 2]) -> Self {
        Self { to_move, hands }
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn hands(&self, player: Player) -> (u8, u8) {
        let pair = self.hands[player.index()];
        (pair[0], pair[1])
    }

    pub(crate) fn pair(&self, player: Player) -> [u8; 2] {
        self.hands[player.index()]
    }

    /// Returns the equivalent state with each hand pair sorted ascending
    pub fn canonicalize(&self) -> Self {
        let mut canonical = *self;
        for pair in canonical.hands.iter_mut() {
            pair.sort_unstable();
        }
        canonical
    }

    pub fn is_canonical(&self) -> bool {
        self.hands.iter().all(|pair| pair[0] <= pair[1])
    }

    /// The game is over once either player has lost both hands
    pub fn is_terminal(&self) -> bool {
        self.hands.iter().any(|pair| *pair == [0, 0])
    }

    /// The player still holding a live hand. Only defined for terminal
    /// states; the mover's hands are checked first, so the degenerate
    /// all-dead position counts against the side to move.
    pub fn winner(&self) -> Result<Player, GameError> {
        if !self.is_terminal() {
            return Err(GameError::InvalidState(
                "winner is undefined while both players have live hands".into(),
            ));
        }
        if self.pair(self.to_move) == [0, 0] {
            Ok(self.to_move.opponent())
        } else {
            Ok(self.to_move)
        }
    }

    // key for the memo and theory tables, injective over all states
    pub fn key(&self) -> usize {
        let mut key = 0;
        for &hand in self.hands.iter().flatten() {
            key = key * MODULUS as usize + hand as usize;
        }
        key * 2 + self.to_move.index()
    }
}

impl Default for State {
    fn default() -> Self {
        // both players open with one finger on each hand
        Self {
            to_move: Player::One,
            hands: [[1, 1], [1, 1]],
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}|{}{} ({} to move)",
            self.hands[0][0], self.hands[0][1], self.hands[1][0], self.hands[1][1], self.to_move
        )
    }
}
