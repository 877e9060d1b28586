#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
#[cfg(feature = "std")]
pub mod cache;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
mod moves;
#[cfg(feature = "std")]
pub mod render;
mod search;
mod state;
pub mod prelude;

#[cfg(feature = "std")]
pub use cache::SolutionCache;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use moves::*;
#[cfg(feature = "std")]
pub use render::{play, Renderer, TextRenderer};
pub use search::*;
pub use state::*;
