//! The combat turn loop.
//!
//! A combat starts Active with a freshly spawned enemy and runs one player
//! action per turn until it reaches Victory, Defeat, or Fled. The engine
//! mutates the player in place, reports every delta as a [`CombatEvent`],
//! and leaves all narration and end-of-run handling to the caller.
//!
//! [`run_combat`] drives a whole fight; [`resolve_turn`] is exported on its
//! own so an interactive frontend can narrate between turns.

use crate::audio::AudioCue;
use crate::character::Player;
use crate::combat::types::{CombatAction, CombatEvent, CombatOutcome, CombatResult, Enemy};
use crate::constants::{
    ATTACK_ROLL_MAX, COUNTER_ROLL_MAX, FLEE_SCARE_CHANCE, FLEE_SUCCESS_CHANCE, VICTORY_CANDY_MAX,
    VICTORY_CANDY_MIN,
};
use crate::input::InputProvider;
use crate::items::apply_item;
use rand::Rng;

/// Runs a combat to completion: asks the provider for one action per turn
/// and resolves it until a terminal state is reached.
pub fn run_combat(
    player: &mut Player,
    enemy: &mut Enemy,
    input: &mut impl InputProvider,
    cue: &impl AudioCue,
    rng: &mut impl Rng,
) -> CombatResult {
    let mut events = Vec::new();
    loop {
        let action = input.combat_action(player, enemy);
        let (turn_events, outcome) = resolve_turn(player, enemy, action, input, cue, rng);
        events.extend(turn_events);
        if let Some(outcome) = outcome {
            return CombatResult { outcome, events };
        }
    }
}

/// Resolves a single combat turn. Returns the turn's delta events plus the
/// terminal outcome, or `None` while the combat stays Active.
///
/// - **Attack**: `attack_power() + roll(0..=3)` damage; no retaliation on an
///   attack turn. An enemy at or below 0 HP ends the combat in Victory on
///   that same turn.
/// - **Use item**: an empty inventory is a no-op turn; a cancelled or
///   invalid selection consumes nothing; a valid slot consumes the item and
///   applies all of its effects.
/// - **Flee**: 50% success ends the combat in Fled with no further effects.
///   On failure the enemy counter-attacks for `attack + roll(0..=2)`, with
///   an independent 20% chance of +1 scare; a player at 0 HP is Defeat.
///
/// Victory awards the enemy's XP (one combined level-up notification via the
/// cue, however many levels were crossed) and 1-3 bonus candies.
pub fn resolve_turn(
    player: &mut Player,
    enemy: &mut Enemy,
    action: CombatAction,
    input: &mut impl InputProvider,
    cue: &impl AudioCue,
    rng: &mut impl Rng,
) -> (Vec<CombatEvent>, Option<CombatOutcome>) {
    let mut events = Vec::new();

    match action {
        CombatAction::Attack => {
            let damage = player.attack_power() + rng.gen_range(0..=ATTACK_ROLL_MAX);
            enemy.take_damage(damage);
            events.push(CombatEvent::PlayerAttack { damage });

            if enemy.is_dead() {
                let leveled_up = player.gain_xp(enemy.xp_reward);
                if leveled_up {
                    cue.level_up();
                }
                let candies_gained = rng.gen_range(VICTORY_CANDY_MIN..=VICTORY_CANDY_MAX);
                player.candies += candies_gained;
                cue.reward();
                events.push(CombatEvent::EnemyDefeated {
                    xp_gained: enemy.xp_reward,
                    leveled_up,
                    new_level: player.level,
                    candies_gained,
                });
                return (events, Some(CombatOutcome::Victory));
            }
        }
        CombatAction::UseItem => {
            if player.inventory.is_empty() {
                events.push(CombatEvent::InventoryEmpty);
                return (events, None);
            }
            match input.inventory_slot(&player.inventory) {
                Some(index) => match apply_item(player, index) {
                    Ok(report) => events.push(CombatEvent::ItemUsed(report)),
                    Err(_) => events.push(CombatEvent::UseCancelled),
                },
                None => events.push(CombatEvent::UseCancelled),
            }
        }
        CombatAction::Flee => {
            if rng.gen_bool(FLEE_SUCCESS_CHANCE) {
                events.push(CombatEvent::FleeSucceeded);
                return (events, Some(CombatOutcome::Fled));
            }

            let counter = enemy.attack + rng.gen_range(0..=COUNTER_ROLL_MAX);
            let damage_taken = player.take_damage(counter);
            let scared = rng.gen_bool(FLEE_SCARE_CHANCE);
            if scared {
                player.scare_meter += 1;
            }
            events.push(CombatEvent::FleeFailed {
                damage_taken,
                scared,
            });

            if player.is_dead() {
                events.push(CombatEvent::PlayerDefeated);
                return (events, Some(CombatOutcome::Defeat));
            }
        }
    }

    (events, None)
}
