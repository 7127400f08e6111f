//! Error types for the encounter and combat engine.

use thiserror::Error;

/// Errors surfaced to the session driver.
///
/// Capacity overflows and resource underflows are not errors; they resolve
/// to non-error outcomes (item left behind, counters clamped at zero).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no item at slot {index} (inventory holds {len})")]
    AbsentIndex { index: usize, len: usize },

    #[error("combat-only action requested outside an active combat")]
    MissingCombatContext,
}
