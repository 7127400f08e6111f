//! Turn-based combat: participants, actions, and the turn loop.

pub mod engine;
pub mod types;

pub use engine::*;
pub use types::*;
