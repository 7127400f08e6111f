//! Input abstraction between the engine and its frontend.
//!
//! The engine never parses raw text. Whatever drives it (the console
//! frontend in `main.rs`, a scripted run in the tests) implements
//! [`InputProvider`] and hands back already-validated discrete choices.

use crate::character::Player;
use crate::combat::types::{CombatAction, Enemy};
use crate::encounters::types::GhostChoice;
use crate::items::Item;
use std::collections::VecDeque;

pub trait InputProvider {
    /// Picks the next combat action. `player` and `enemy` are provided so a
    /// frontend can show the current standing before asking.
    fn combat_action(&mut self, player: &Player, enemy: &Enemy) -> CombatAction;

    /// Picks an inventory slot, or `None` to cancel. Returning an
    /// out-of-range index is allowed; the engine treats it as a cancel.
    fn inventory_slot(&mut self, items: &[Item]) -> Option<usize>;

    /// Answers the mirror puzzle given the scrambled letters.
    fn puzzle_guess(&mut self, scrambled: &str) -> String;

    /// Risk the pumpkin path, or decline.
    fn take_risk(&mut self) -> bool;

    /// Picks one of the offered ghost choices. The offered set is decided by
    /// the caller; combat-coupled choices are only offered inside combat.
    fn ghost_choice(&mut self, offered: &[GhostChoice]) -> GhostChoice;
}

/// One pre-recorded answer for [`ScriptedInput`].
#[derive(Debug, Clone)]
pub enum ScriptedStep {
    Action(CombatAction),
    Slot(Option<usize>),
    Guess(String),
    Risk(bool),
    Ghost(GhostChoice),
}

/// Deterministic provider that replays a pre-recorded script. Used by the
/// integration tests; panics on a step mismatch or an exhausted script,
/// which in a test is the right failure mode.
pub struct ScriptedInput {
    steps: VecDeque<ScriptedStep>,
}

impl ScriptedInput {
    pub fn new(steps: Vec<ScriptedStep>) -> Self {
        Self {
            steps: steps.into(),
        }
    }

    fn next(&mut self, expected: &str) -> ScriptedStep {
        self.steps
            .pop_front()
            .unwrap_or_else(|| panic!("scripted input exhausted, expected {expected}"))
    }
}

impl InputProvider for ScriptedInput {
    fn combat_action(&mut self, _player: &Player, _enemy: &Enemy) -> CombatAction {
        match self.next("a combat action") {
            ScriptedStep::Action(action) => action,
            other => panic!("expected a combat action, script had {other:?}"),
        }
    }

    fn inventory_slot(&mut self, _items: &[Item]) -> Option<usize> {
        match self.next("an inventory slot") {
            ScriptedStep::Slot(slot) => slot,
            other => panic!("expected an inventory slot, script had {other:?}"),
        }
    }

    fn puzzle_guess(&mut self, _scrambled: &str) -> String {
        match self.next("a puzzle guess") {
            ScriptedStep::Guess(guess) => guess,
            other => panic!("expected a puzzle guess, script had {other:?}"),
        }
    }

    fn take_risk(&mut self) -> bool {
        match self.next("a risk decision") {
            ScriptedStep::Risk(risk) => risk,
            other => panic!("expected a risk decision, script had {other:?}"),
        }
    }

    fn ghost_choice(&mut self, _offered: &[GhostChoice]) -> GhostChoice {
        match self.next("a ghost choice") {
            ScriptedStep::Ghost(choice) => choice,
            other => panic!("expected a ghost choice, script had {other:?}"),
        }
    }
}
