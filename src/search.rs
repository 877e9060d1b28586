//! Breadth-first search over legal states.
//!
//! All search state lives inside a single call, so a [`Puzzle`] can be
//! shared and solved from several threads at once.

use alloc::collections::{BTreeMap, VecDeque};
use alloc::vec::Vec;

use crate::common::{ConfigError, Path};
use crate::config::{CLASSIC_CANNIBALS, CLASSIC_MISSIONARIES};
use crate::moves::{Move, MoveSet};
use crate::state::State;

/// Counters collected during one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States removed from the frontier.
    pub expanded: usize,
    /// States pushed onto the frontier, start included.
    pub enqueued: usize,
}

/// Immutable puzzle configuration: populations, move set, start and goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    missionaries: i32,
    cannibals: i32,
    moves: MoveSet,
    start: State,
    goal: State,
}

impl Puzzle {
    pub fn new(missionaries: i32, cannibals: i32, moves: MoveSet) -> Result<Self, ConfigError> {
        if missionaries < 0 || cannibals < 0 {
            return Err(ConfigError::NegativePopulation);
        }
        Ok(Self::build(missionaries, cannibals, moves))
    }

    /// Callers guarantee non-negative populations.
    fn build(missionaries: i32, cannibals: i32, moves: MoveSet) -> Self {
        Self {
            missionaries,
            cannibals,
            moves,
            start: State::start(missionaries, cannibals),
            goal: State::goal(),
        }
    }

    /// Puzzle with the two-seat boat.
    pub fn classic(missionaries: i32, cannibals: i32) -> Result<Self, ConfigError> {
        Self::new(missionaries, cannibals, MoveSet::classic())
    }

    pub fn missionaries(&self) -> i32 {
        self.missionaries
    }

    pub fn cannibals(&self) -> i32 {
        self.cannibals
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn start(&self) -> State {
        self.start
    }

    pub fn goal(&self) -> State {
        self.goal
    }

    pub fn is_valid(&self, state: &State) -> bool {
        state.is_valid(self.missionaries, self.cannibals)
    }

    /// Everyone has left the starting bank. With nobody to ferry the start
    /// state already qualifies, whichever bank the boat is on.
    pub fn is_goal(&self, state: &State) -> bool {
        *state == self.goal || (state.missionaries == 0 && state.cannibals == 0)
    }

    /// Legal states one crossing away, in move set order.
    pub fn successors(&self, state: &State) -> Vec<State> {
        self.moves
            .iter()
            .filter_map(|mv| mv.apply(state))
            .filter(|next| self.is_valid(next))
            .collect()
    }

    /// Shortest path from start to goal, or `None` when the goal is
    /// unreachable.
    pub fn solve(&self) -> Option<Path> {
        self.solve_with_stats().0
    }

    /// Like [`Puzzle::solve`], also returning search counters.
    pub fn solve_with_stats(&self) -> (Option<Path>, SearchStats) {
        let mut stats = SearchStats::default();
        // Maps every discovered state to the state it was reached from.
        let mut parent: BTreeMap<State, Option<State>> = BTreeMap::new();
        let mut frontier: VecDeque<State> = VecDeque::new();

        parent.insert(self.start, None);
        frontier.push_back(self.start);
        stats.enqueued += 1;

        while let Some(state) = frontier.pop_front() {
            stats.expanded += 1;
            if self.is_goal(&state) {
                let path = rebuild_path(&parent, state);
                log::debug!(
                    "solved {}M/{}C in {} crossings ({} expanded, {} enqueued)",
                    self.missionaries,
                    self.cannibals,
                    path.len(),
                    stats.expanded,
                    stats.enqueued
                );
                return (Some(path), stats);
            }
            for mv in self.moves.iter() {
                let Some(next) = mv.apply(&state) else {
                    continue;
                };
                if parent.contains_key(&next) || !self.is_valid(&next) {
                    continue;
                }
                parent.insert(next, Some(state));
                frontier.push_back(next);
                stats.enqueued += 1;
            }
        }

        log::debug!(
            "no solution for {}M/{}C ({} states explored)",
            self.missionaries,
            self.cannibals,
            stats.expanded
        );
        (None, stats)
    }

    /// Check that `path` is a legal walk from the start state to the goal
    /// where each step is one load from the move set.
    pub fn verify_path(&self, path: &[State]) -> bool {
        let mut prev = self.start;
        for state in path {
            if !self.is_valid(state) || self.moves.find(&prev, state).is_none() {
                return false;
            }
            prev = *state;
        }
        self.is_goal(&prev)
    }

    /// Loads used by each crossing of `path`, or `None` if a step is not a
    /// single move.
    pub fn loads(&self, path: &[State]) -> Option<Vec<Move>> {
        let mut prev = self.start;
        let mut out = Vec::with_capacity(path.len());
        for state in path {
            out.push(self.moves.find(&prev, state)?);
            prev = *state;
        }
        Some(out)
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::build(CLASSIC_MISSIONARIES, CLASSIC_CANNIBALS, MoveSet::classic())
    }
}

fn rebuild_path(parent: &BTreeMap<State, Option<State>>, end: State) -> Path {
    let mut path = Vec::new();
    let mut cur = end;
    // The start state has no parent and is left out.
    while let Some(Some(prev)) = parent.get(&cur) {
        path.push(cur);
        cur = *prev;
    }
    path.reverse();
    path
}

/// Solve the puzzle for `missionaries` and `cannibals` with the classic
/// two-seat boat. Negative populations have no solution.
pub fn solve(missionaries: i32, cannibals: i32) -> Option<Path> {
    Puzzle::classic(missionaries, cannibals).ok()?.solve()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successors_of_classic_start() {
        let puzzle = Puzzle::default();
        let next: Vec<_> = puzzle
            .successors(&puzzle.start())
            .iter()
            .map(State::triple)
            .collect();
        // Sending missionaries first leaves the rest outnumbered at home.
        assert_eq!(next, alloc::vec![(3, 2, 0), (3, 1, 0), (2, 2, 0)]);
    }

    #[test]
    fn stats_count_start() {
        let (path, stats) = Puzzle::classic(0, 0).unwrap().solve_with_stats();
        assert_eq!(path, Some(Vec::new()));
        assert_eq!(stats, SearchStats { expanded: 1, enqueued: 1 });
    }

    #[test]
    fn default_is_classic() {
        assert_eq!(Puzzle::default(), Puzzle::classic(3, 3).unwrap());
        assert_eq!(Puzzle::default().start().triple(), (3, 3, 1));
    }

    #[test]
    fn oversized_load_is_skipped() {
        let moves = MoveSet::new(alloc::vec![
            Move::new(1, 0),
            Move::new(2, 0),
            Move::new(i32::MAX, 0),
        ])
        .unwrap();
        let puzzle = Puzzle::new(2, 0, moves).unwrap();
        // Expanding (1, 0, 0) adds i32::MAX to the start bank.
        let path = puzzle.solve().unwrap();
        assert_eq!(path, alloc::vec![State::goal()]);
        assert!(puzzle.verify_path(&path));
    }
}
