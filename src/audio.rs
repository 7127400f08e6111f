//! Audio cue hook for level-up and reward events.
//!
//! The engine calls these on notable transitions; state changes are identical
//! whether or not a real notifier is wired, so every method defaults to a
//! no-op and `Silent` can stand in anywhere a cue is required.

pub trait AudioCue {
    /// A reward was granted (item, candies, victory spoils).
    fn reward(&self) {}

    /// Something went wrong for the player (failed guess, trap).
    fn failure(&self) {}

    /// The player gained at least one level.
    fn level_up(&self) {}
}

/// Cue that does nothing. Used in tests and headless runs.
pub struct Silent;

impl AudioCue for Silent {}
