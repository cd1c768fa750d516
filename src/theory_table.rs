use anyhow::{anyhow, Result};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::solver::{Resolved, Solver};
use crate::state::{Player, State};
use crate::{CANONICAL_STATES, KEY_SPACE, MODULUS};

/// Conventional location of the theory table image
pub const THEORY_PATH: &str = "theory_table.bin";

/// The precomputed classification of every decisive position
///
/// Generated by exhausting the solver over the whole canonical state space,
/// so lookups agree with a live search by construction. Positions whose best
/// play is a repetition draw are deliberately absent: their value depends on
/// the line that reaches them, and lookups fall back to live resolution.
#[derive(Clone)]
pub struct TheoryTable {
    entries: Vec<Option<Resolved>>,
    stored: usize,
}

impl TheoryTable {
    /// Resolves every canonical state and records the decisive results
    pub fn generate() -> Self {
        let mut solver = Solver::new();
        let mut table = Self {
            entries: vec![None; KEY_SPACE],
            stored: 0,
        };

        let mut draws = 0usize;
        for state in canonical_states() {
            let value = solver.resolve(&state);
            if value.is_decisive() {
                table.entries[state.key()] = Some(value);
                table.stored += 1;
            } else {
                draws += 1;
            }
        }

        log::info!(
            "theory table generated: {} decisive, {} drawn by repetition, {} positions visited",
            table.stored,
            draws,
            solver.node_count
        );
        table
    }

    /// The classification for a packed state key, if the position is decisive
    pub fn get(&self, key: usize) -> Option<Resolved> {
        self.entries[key]
    }

    /// The classification of `state`, if it is decisive
    pub fn classify(&self, state: &State) -> Option<Resolved> {
        self.get(state.canonicalize().key())
    }

    /// The number of decisive positions held
    pub fn len(&self) -> usize {
        self.stored
    }

    pub fn is_empty(&self) -> bool {
        self.stored == 0
    }

    /// Writes the table image: a big-endian entry count, then one
    /// `(key, value)` record per decisive position with wins coded as
    /// `distance + 1` and losses as `-(distance + 1)`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = BufWriter::new(File::create(path.as_ref())?);

        file.write_u32::<BigEndian>(self.stored as u32)?;
        for (key, entry) in self.entries.iter().enumerate() {
            let coded = match entry {
                Some(Resolved::Win(distance)) => *distance as i16 + 1,
                Some(Resolved::Loss(distance)) => -(*distance as i16 + 1),
                _ => continue,
            };
            file.write_u16::<BigEndian>(key as u16)?;
            file.write_i16::<BigEndian>(coded)?;
        }

        log::info!("theory table saved ({} entries)", self.stored);
        Ok(())
    }

    /// Reads a table image produced by `save`, validating keys and value
    /// coding along the way
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = BufReader::new(File::open(path.as_ref())?);

        let stored = file.read_u32::<BigEndian>()? as usize;
        if stored > CANONICAL_STATES {
            return Err(anyhow!("corrupt theory table: {} entries claimed", stored));
        }

        let mut table = Self {
            entries: vec![None; KEY_SPACE],
            stored: 0,
        };
        for _ in 0..stored {
            let key = file.read_u16::<BigEndian>()? as usize;
            let coded = file.read_i16::<BigEndian>()? as i32;

            if key >= KEY_SPACE {
                return Err(anyhow!("corrupt theory table: key {} out of range", key));
            }
            if table.entries[key].is_some() {
                return Err(anyhow!("corrupt theory table: duplicate key {}", key));
            }
            let distance = coded.abs() - 1;
            if coded == 0 || distance > CANONICAL_STATES as i32 {
                return Err(anyhow!(
                    "corrupt theory table: bad value {} for key {}",
                    coded,
                    key
                ));
            }
            let value = if coded > 0 {
                Resolved::Win(distance as u16)
            } else {
                Resolved::Loss(distance as u16)
            };
            table.entries[key] = Some(value);
            table.stored += 1;
        }

        log::info!("theory table loaded ({} entries)", table.stored);
        Ok(table)
    }
}

/// Every canonical state: both hand pairs sorted ascending, both sides to move
pub fn canonical_states() -> Vec<State> {
    let mut states = Vec::with_capacity(CANONICAL_STATES);
    for &player in [Player::One, Player::Two].iter() {
        for a in 0..MODULUS {
            for b in a..MODULUS {
                for c in 0..MODULUS {
                    for d in c..MODULUS {
                        states.push(State::from_parts(player, [[a, b], [c, d]]));
                    }
                }
            }
        }
    }
    states
}
