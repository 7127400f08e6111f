//! Encounter resolution.
//!
//! Each encounter is a function of the player and the random source: it
//! mutates the player, never touches an enemy, and reports every state
//! change as an [`EncounterEvent`].

use crate::audio::AudioCue;
use crate::character::Player;
use crate::constants::{
    DOOR_ITEM_CHANCE, DOOR_NOTHING_CHANCE, DOOR_TRAP_SCARE, GHOST_FLEE_POWER_MAX,
    GHOST_FLEE_POWER_MIN, GHOST_OFFER_CANDY_MAX, GHOST_OFFER_CANDY_MIN, PATH_CANDY_MAX,
    PATH_CANDY_MIN, PATH_DAMAGE_MAX, PATH_DAMAGE_MIN, PATH_FAIL_SCARE, PATH_SUCCESS_CHANCE,
    PUZZLE_CANDY_REWARD, PUZZLE_FAIL_SCARE, PUZZLE_SECRET,
};
use crate::encounters::types::{EncounterEvent, EncounterKind, EncounterResult, GhostChoice};
use crate::error::GameError;
use crate::input::InputProvider;
use crate::items::{night_runes, random_item};
use rand::seq::SliceRandom;
use rand::Rng;

/// Ghost choices a narrative encounter may offer. `Talk` is combat-coupled
/// and excluded here; see [`GhostChoice::requires_combat`].
pub const GHOST_NARRATIVE_CHOICES: [GhostChoice; 2] = [GhostChoice::Offer, GhostChoice::Flee];

/// Resolves one encounter of the given kind.
pub fn resolve_encounter(
    kind: EncounterKind,
    player: &mut Player,
    input: &mut impl InputProvider,
    cue: &impl AudioCue,
    rng: &mut impl Rng,
) -> Result<EncounterResult, GameError> {
    match kind {
        EncounterKind::Door => Ok(door_event(player, rng)),
        EncounterKind::Puzzle => Ok(mirror_puzzle(player, input, cue, rng)),
        EncounterKind::Path => Ok(pumpkin_path(player, input, cue, rng)),
        EncounterKind::Ghost => ghost_encounter(player, input, rng),
    }
}

/// Trick-or-treat door: 50% nothing, 30% a catalog item, 20% a trap worth
/// +2 scare and no HP.
fn door_event(player: &mut Player, rng: &mut impl Rng) -> EncounterResult {
    let roll: f64 = rng.gen();
    if roll < DOOR_NOTHING_CHANCE {
        EncounterResult::resolved(vec![EncounterEvent::NothingFound])
    } else if roll < DOOR_NOTHING_CHANCE + DOOR_ITEM_CHANCE {
        let item = random_item(rng);
        // A full inventory leaves the item behind; the door still counts.
        let stored = player.add_item(item.clone());
        EncounterResult::resolved(vec![EncounterEvent::ItemFound { item, stored }])
    } else {
        player.scare_meter += DOOR_TRAP_SCARE;
        EncounterResult::resolved(vec![EncounterEvent::Trapped {
            scare_gained: DOOR_TRAP_SCARE,
        }])
    }
}

/// The haunted mirror scrambles its secret with a fresh fair permutation
/// each time, so repeat visits never show the same anagram twice in a
/// predictable way. Matching is case-insensitive on the exact word.
fn mirror_puzzle(
    player: &mut Player,
    input: &mut impl InputProvider,
    cue: &impl AudioCue,
    rng: &mut impl Rng,
) -> EncounterResult {
    let mut letters: Vec<char> = PUZZLE_SECRET.chars().collect();
    letters.shuffle(rng);
    let scrambled: String = letters.into_iter().collect();

    let guess = input.puzzle_guess(&scrambled);
    if guess.trim().eq_ignore_ascii_case(PUZZLE_SECRET) {
        player.candies += PUZZLE_CANDY_REWARD;
        let item = night_runes();
        let stored = player.add_item(item.clone());
        cue.reward();
        EncounterResult::resolved(vec![EncounterEvent::PuzzleSolved {
            candies_gained: PUZZLE_CANDY_REWARD,
            item,
            stored,
        }])
    } else {
        player.scare_meter += PUZZLE_FAIL_SCARE;
        cue.failure();
        EncounterResult::unresolved(vec![EncounterEvent::PuzzleFailed {
            scare_gained: PUZZLE_FAIL_SCARE,
        }])
    }
}

/// The pumpkin path: declining is always safe; risking is a coin flip
/// between 2–4 candies and 1–4 HP lost plus a scare. Losing HP here never
/// declares death; the driver checks the player afterwards.
fn pumpkin_path(
    player: &mut Player,
    input: &mut impl InputProvider,
    cue: &impl AudioCue,
    rng: &mut impl Rng,
) -> EncounterResult {
    if !input.take_risk() {
        return EncounterResult::resolved(vec![EncounterEvent::PathDeclined]);
    }

    if rng.gen::<f64>() < PATH_SUCCESS_CHANCE {
        let candies_gained = rng.gen_range(PATH_CANDY_MIN..=PATH_CANDY_MAX);
        player.candies += candies_gained;
        cue.reward();
        EncounterResult::resolved(vec![EncounterEvent::CandyStash { candies_gained }])
    } else {
        let rolled = rng.gen_range(PATH_DAMAGE_MIN..=PATH_DAMAGE_MAX);
        let hp_lost = player.take_damage(rolled);
        player.scare_meter += PATH_FAIL_SCARE;
        EncounterResult::resolved(vec![EncounterEvent::HiddenRamp {
            hp_lost,
            scare_gained: PATH_FAIL_SCARE,
        }])
    }
}

/// The whispering ghost. Offer trades candies (clamped at zero), Flee
/// drains equipped power (the owning component of attack power, never the
/// derived total). Talk provokes an attack and needs an active combat; a
/// provider answering Talk here is a caller contract violation, rejected
/// rather than resolved against an adversary that does not exist.
fn ghost_encounter(
    player: &mut Player,
    input: &mut impl InputProvider,
    rng: &mut impl Rng,
) -> Result<EncounterResult, GameError> {
    match input.ghost_choice(&GHOST_NARRATIVE_CHOICES) {
        GhostChoice::Talk => Err(GameError::MissingCombatContext),
        GhostChoice::Offer => {
            let demanded = rng.gen_range(GHOST_OFFER_CANDY_MIN..=GHOST_OFFER_CANDY_MAX);
            let candies_lost = player.lose_candies(demanded);
            Ok(EncounterResult::resolved(vec![
                EncounterEvent::CandiesOffered { candies_lost },
            ]))
        }
        GhostChoice::Flee => {
            let drained = rng.gen_range(GHOST_FLEE_POWER_MIN..=GHOST_FLEE_POWER_MAX);
            let power_lost = player.drain_power(drained);
            Ok(EncounterResult::resolved(vec![
                EncounterEvent::PowerDrained { power_lost },
            ]))
        }
    }
}
