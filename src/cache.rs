#![cfg(feature = "std")]

//! Memoised solutions keyed by puzzle configuration.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::common::Path;
use crate::moves::MoveSet;
use crate::search::Puzzle;

type Key = (i32, i32, MoveSet);

/// Thread-safe map from `(missionaries, cannibals, moves)` to the search
/// outcome, negative results included.
#[derive(Default)]
pub struct SolutionCache {
    entries: Mutex<HashMap<Key, Option<Path>>>,
}

impl SolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached outcome for `puzzle`, running the search on a miss. The search
    /// runs without holding the lock; if two callers race on the same key the
    /// first insert wins and both see the same result.
    pub fn get_or_solve(&self, puzzle: &Puzzle) -> Option<Path> {
        let key = (puzzle.missionaries(), puzzle.cannibals(), puzzle.moves().clone());
        if let Some(hit) = self.entries.lock().unwrap().get(&key) {
            log::trace!("cache hit for {}M/{}C", key.0, key.1);
            return hit.clone();
        }
        let outcome = puzzle.solve();
        self.entries
            .lock()
            .unwrap()
            .entry(key)
            .or_insert(outcome)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
