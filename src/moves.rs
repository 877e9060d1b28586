//! Boat loads and their application to a state.

use alloc::vec::Vec;
use core::fmt;

use crate::common::ConfigError;
use crate::config::{CLASSIC_MOVES, MAX_CAPACITY};
use crate::state::{BoatSide, State};

/// People carried in a single crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub missionaries: i32,
    pub cannibals: i32,
}

impl Move {
    pub const fn new(missionaries: i32, cannibals: i32) -> Self {
        Self {
            missionaries,
            cannibals,
        }
    }

    /// Number of occupants, saturating at `i32::MAX`.
    pub const fn size(&self) -> i32 {
        self.missionaries.saturating_add(self.cannibals)
    }

    /// Move the load away from the bank holding the boat and flip the boat.
    /// The result may be out of range; legality is checked separately.
    /// `None` only when the counts overflow `i32`, which no legal state can
    /// reach.
    pub fn apply(&self, state: &State) -> Option<State> {
        let (missionaries, cannibals) = match state.boat {
            BoatSide::Start => (
                state.missionaries.checked_sub(self.missionaries)?,
                state.cannibals.checked_sub(self.cannibals)?,
            ),
            BoatSide::Destination => (
                state.missionaries.checked_add(self.missionaries)?,
                state.cannibals.checked_add(self.cannibals)?,
            ),
        };
        Some(State::new(missionaries, cannibals, state.boat.other()))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}M {}C", self.missionaries, self.cannibals)
    }
}

/// Free-function form of [`Move::apply`].
pub fn apply_move(state: &State, mv: &Move) -> Option<State> {
    mv.apply(state)
}

/// Ordered, non-empty list of allowed loads. Order decides which of several
/// equally short solutions the search returns.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MoveSet {
    moves: Vec<Move>,
}

impl MoveSet {
    /// Accept an explicit list of loads, keeping its order.
    pub fn new(moves: Vec<Move>) -> Result<Self, ConfigError> {
        if moves.is_empty() {
            return Err(ConfigError::EmptyMoveSet);
        }
        for mv in moves.iter() {
            if mv.missionaries < 0 || mv.cannibals < 0 {
                return Err(ConfigError::NegativePopulation);
            }
            if mv.size() == 0 {
                return Err(ConfigError::EmptyLoad);
            }
        }
        Ok(Self { moves })
    }

    /// The five loads of the two-seat boat.
    pub fn classic() -> Self {
        Self {
            moves: CLASSIC_MOVES.to_vec(),
        }
    }

    /// Every non-empty load fitting in a boat of `capacity` seats: pure
    /// missionary loads, then pure cannibal loads, then mixed loads.
    pub fn for_capacity(capacity: u32) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if capacity > MAX_CAPACITY {
            return Err(ConfigError::CapacityTooLarge);
        }
        let k = i32::try_from(capacity).map_err(|_| ConfigError::CapacityTooLarge)?;
        let mut moves = Vec::new();
        for m in 1..=k {
            moves.push(Move::new(m, 0));
        }
        for c in 1..=k {
            moves.push(Move::new(0, c));
        }
        for m in 1..k {
            for c in 1..=(k - m) {
                moves.push(Move::new(m, c));
            }
        }
        Ok(Self { moves })
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Largest load in the set.
    pub fn capacity(&self) -> i32 {
        self.moves.iter().map(Move::size).max().unwrap_or(0)
    }

    /// The load that turns `from` into `to`, if any.
    pub fn find(&self, from: &State, to: &State) -> Option<Move> {
        self.moves.iter().copied().find(|mv| mv.apply(from) == Some(*to))
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        Self::classic()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = core::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_flips_boat_both_ways() {
        let s = State::from_triple(3, 3, 1);
        let mv = Move::new(1, 1);
        let t = mv.apply(&s).unwrap();
        assert_eq!(t.triple(), (2, 2, 0));
        assert_eq!(mv.apply(&t), Some(s));
    }

    #[test]
    fn capacity_one() {
        let set = MoveSet::for_capacity(1).unwrap();
        assert_eq!(set.as_slice(), &[Move::new(1, 0), Move::new(0, 1)]);
    }

    #[test]
    fn rejects_bad_sets() {
        assert_eq!(MoveSet::new(Vec::new()), Err(ConfigError::EmptyMoveSet));
        assert_eq!(
            MoveSet::new(alloc::vec![Move::new(1, 0), Move::new(0, 0)]),
            Err(ConfigError::EmptyLoad)
        );
        assert_eq!(
            MoveSet::new(alloc::vec![Move::new(-1, 2)]),
            Err(ConfigError::NegativePopulation)
        );
        assert_eq!(MoveSet::for_capacity(0), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn capacity_is_bounded() {
        assert_eq!(
            MoveSet::for_capacity(u32::MAX),
            Err(ConfigError::CapacityTooLarge)
        );
        assert_eq!(
            MoveSet::for_capacity(i32::MAX as u32 + 1),
            Err(ConfigError::CapacityTooLarge)
        );
        assert_eq!(
            MoveSet::for_capacity(MAX_CAPACITY + 1),
            Err(ConfigError::CapacityTooLarge)
        );
        let widest = MoveSet::for_capacity(MAX_CAPACITY).unwrap();
        assert!(!widest.is_empty());
        assert_eq!(widest.capacity(), MAX_CAPACITY as i32);
    }

    #[test]
    fn apply_overflow_is_none() {
        let huge = Move::new(i32::MAX, 0);
        assert_eq!(huge.apply(&State::from_triple(-1, 0, 1)), None);
        assert_eq!(huge.apply(&State::from_triple(1, 0, 0)), None);
        assert_eq!(
            Move::new(0, 1).apply(&State::from_triple(0, i32::MIN, 1)),
            None
        );
    }
}
