//! Stand-alone narrative encounters resolved outside combat.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
