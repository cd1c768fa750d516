use crate::solver::Resolved;
use crate::KEY_SPACE;

// The packed key space is tiny, so every state owns a dedicated slot: no
// hashing, no eviction, no collisions. Draws are path-dependent and are
// never stored, so a present entry is always a finalized win or loss.
#[derive(Clone)]
pub struct MemoTable {
    entries: Vec<Option<Resolved>>,
    stored: usize,
}

impl MemoTable {
    pub fn new() -> Self {
        Self {
            entries: vec![None; KEY_SPACE],
            stored: 0,
        }
    }

    pub fn get(&self, key: usize) -> Option<Resolved> {
        self.entries[key]
    }

    pub fn set(&mut self, key: usize, value: Resolved) {
        debug_assert!(
            value.is_decisive(),
            "draw values are path-dependent and must not be memoized"
        );
        debug_assert!(
            self.entries[key].is_none() || self.entries[key] == Some(value),
            "memo entry for key {} finalized twice",
            key
        );
        if self.entries[key].is_none() {
            self.entries[key] = Some(value);
            self.stored += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.stored
    }

    pub fn is_empty(&self) -> bool {
        self.stored == 0
    }

    pub fn reset(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = None;
        }
        self.stored = 0;
    }
}

impl Default for MemoTable {
    fn default() -> Self {
        Self::new()
    }
}
