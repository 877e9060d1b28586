//! Puzzle state and the legality predicate.

use core::fmt;

/// Which bank currently holds the boat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BoatSide {
    /// The bank everyone starts on.
    Start,
    /// The bank everyone must reach.
    Destination,
}

impl BoatSide {
    /// Encoded flag: 1 on the starting bank, 0 on the destination bank.
    pub const fn flag(self) -> u8 {
        match self {
            BoatSide::Start => 1,
            BoatSide::Destination => 0,
        }
    }

    /// Decode a flag; any non-zero value means the starting bank.
    pub const fn from_flag(flag: u8) -> Self {
        if flag == 0 {
            BoatSide::Destination
        } else {
            BoatSide::Start
        }
    }

    /// The opposite bank.
    pub const fn other(self) -> Self {
        match self {
            BoatSide::Start => BoatSide::Destination,
            BoatSide::Destination => BoatSide::Start,
        }
    }
}

/// Headcount on one bank. Widened so the difference of any two `i32`
/// counts fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BankCount {
    pub missionaries: i64,
    pub cannibals: i64,
}

impl BankCount {
    /// A bank is safe when it has no missionaries or at least as many
    /// missionaries as cannibals.
    pub fn is_safe(&self) -> bool {
        self.missionaries == 0 || self.cannibals <= self.missionaries
    }

    fn in_range(&self, missionaries: i32, cannibals: i32) -> bool {
        (0..=i64::from(missionaries)).contains(&self.missionaries)
            && (0..=i64::from(cannibals)).contains(&self.cannibals)
    }
}

/// Both banks of a state, derived from the totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Banks {
    pub start: BankCount,
    pub destination: BankCount,
}

/// Position of the puzzle: who is still on the starting bank and where the
/// boat is. Counts are signed so out-of-range candidates can be represented
/// and rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub missionaries: i32,
    pub cannibals: i32,
    pub boat: BoatSide,
}

impl State {
    pub const fn new(missionaries: i32, cannibals: i32, boat: BoatSide) -> Self {
        Self {
            missionaries,
            cannibals,
            boat,
        }
    }

    /// Build a state from the `(m, c, flag)` triple encoding.
    pub const fn from_triple(missionaries: i32, cannibals: i32, flag: u8) -> Self {
        Self::new(missionaries, cannibals, BoatSide::from_flag(flag))
    }

    /// The `(m, c, flag)` triple encoding of this state.
    pub const fn triple(&self) -> (i32, i32, u8) {
        (self.missionaries, self.cannibals, self.boat.flag())
    }

    /// Everyone on the starting bank with the boat.
    pub const fn start(missionaries: i32, cannibals: i32) -> Self {
        Self::new(missionaries, cannibals, BoatSide::Start)
    }

    /// Everyone across, boat included.
    pub const fn goal() -> Self {
        Self::new(0, 0, BoatSide::Destination)
    }

    /// Split the totals across both banks.
    pub fn banks(&self, missionaries: i32, cannibals: i32) -> Banks {
        Banks {
            start: BankCount {
                missionaries: i64::from(self.missionaries),
                cannibals: i64::from(self.cannibals),
            },
            destination: BankCount {
                missionaries: i64::from(missionaries) - i64::from(self.missionaries),
                cannibals: i64::from(cannibals) - i64::from(self.cannibals),
            },
        }
    }

    /// Legality against the given totals: both banks in range and neither
    /// bank has missionaries outnumbered. Total on every input.
    pub fn is_valid(&self, missionaries: i32, cannibals: i32) -> bool {
        let banks = self.banks(missionaries, cannibals);
        if !banks.start.in_range(missionaries, cannibals)
            || !banks.destination.in_range(missionaries, cannibals)
        {
            return false;
        }
        banks.start.is_safe() && banks.destination.is_safe()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, c, b) = self.triple();
        write!(f, "({}, {}, {})", m, c, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_missionaries_bank_is_always_safe() {
        // Three cannibals alone on the start bank, three missionaries across.
        assert!(State::from_triple(0, 3, 1).is_valid(3, 3));
    }

    #[test]
    fn out_of_range_is_invalid() {
        assert!(!State::from_triple(-1, 2, 0).is_valid(3, 3));
        assert!(!State::from_triple(4, 2, 0).is_valid(3, 3));
        assert!(!State::from_triple(3, 4, 1).is_valid(3, 3));
    }

    #[test]
    fn flag_roundtrip() {
        assert_eq!(BoatSide::from_flag(BoatSide::Start.flag()), BoatSide::Start);
        assert_eq!(
            BoatSide::from_flag(BoatSide::Destination.flag()),
            BoatSide::Destination
        );
        assert_eq!(BoatSide::Start.other(), BoatSide::Destination);
    }
}
