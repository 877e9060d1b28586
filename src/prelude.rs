//! Commonly used types and utilities for ease of import.

pub use crate::{solve, BoatSide, ConfigError, Move, MoveSet, Path, Puzzle, State};

#[cfg(feature = "std")]
pub use crate::{init_logging, play, Renderer, SolutionCache, TextRenderer};
