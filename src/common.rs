//! Common types for the solver: configuration errors and the path alias.

use alloc::vec::Vec;

use crate::state::State;

/// Ordered states visited by a solution, excluding the start state and
/// ending with the goal.
pub type Path = Vec<State>;

/// Errors returned when building a puzzle configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The move set contains no loads.
    EmptyMoveSet,
    /// A load carries nobody across.
    EmptyLoad,
    /// A population or load count is below zero.
    NegativePopulation,
    /// A boat that seats nobody.
    ZeroCapacity,
    /// A boat wider than `MAX_CAPACITY`.
    CapacityTooLarge,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyMoveSet => write!(f, "Move set must contain at least one load"),
            ConfigError::EmptyLoad => write!(f, "Boat load must carry at least one person"),
            ConfigError::NegativePopulation => write!(f, "Counts must not be negative"),
            ConfigError::ZeroCapacity => write!(f, "Boat capacity must be at least one"),
            ConfigError::CapacityTooLarge => {
                write!(f, "Boat capacity must not exceed {}", crate::config::MAX_CAPACITY)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
