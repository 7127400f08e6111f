//! Item-use resolution.
//!
//! Using an item consumes its inventory slot and fires every nonzero effect
//! it carries in the same use: healing, permanent attack power, and special
//! tags are cumulative, not mutually exclusive.

use crate::character::Player;
use crate::constants::{CALM_SCARE_REDUCTION, CANDY_BOOST_AMOUNT};
use crate::error::GameError;
use crate::items::types::{Item, SpecialTag};

/// Per-effect deltas from consuming a single item. Amounts are what actually
/// happened (a heal near the HP cap reports the clamped value), so the
/// presentation layer can narrate without re-deriving state.
#[derive(Debug, Clone)]
pub struct ItemUseReport {
    /// The consumed item.
    pub item: Item,
    pub hp_restored: u32,
    pub power_gained: u32,
    pub candies_gained: u32,
    pub scare_reduced: u32,
}

/// Consumes the item at `index` and applies its effects.
///
/// An out-of-range index is an [`GameError::AbsentIndex`] and leaves the
/// inventory untouched.
pub fn apply_item(player: &mut Player, index: usize) -> Result<ItemUseReport, GameError> {
    let len = player.inventory.len();
    let item = player
        .remove_item(index)
        .ok_or(GameError::AbsentIndex { index, len })?;
    Ok(apply_item_effects(item, player))
}

/// Applies every nonzero effect of an already-removed item.
pub fn apply_item_effects(item: Item, player: &mut Player) -> ItemUseReport {
    let mut hp_restored = 0;
    let mut power_gained = 0;
    let mut candies_gained = 0;
    let mut scare_reduced = 0;

    if item.heal > 0 {
        hp_restored = player.heal(item.heal);
    }
    if item.power > 0 {
        player.equipped_power += item.power;
        power_gained = item.power;
    }
    match item.special {
        Some(SpecialTag::CandyBoost) => {
            player.candies += CANDY_BOOST_AMOUNT;
            candies_gained = CANDY_BOOST_AMOUNT;
        }
        Some(SpecialTag::Calm) => {
            scare_reduced = player.calm_down(CALM_SCARE_REDUCTION);
        }
        None => {}
    }

    ItemUseReport {
        item,
        hp_restored,
        power_gained,
        candies_gained,
        scare_reduced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_item_consumes_the_slot() {
        let mut player = Player::new("Tester".to_string());
        player.hp = 10;
        player.add_item(Item::healing("Moon Potion", "", 10));

        let report = apply_item(&mut player, 0).unwrap();
        assert_eq!(report.hp_restored, 10);
        assert_eq!(player.hp, 20);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_apply_item_absent_index() {
        let mut player = Player::new("Tester".to_string());
        player.add_item(Item::healing("Moon Potion", "", 10));

        let err = apply_item(&mut player, 3).unwrap_err();
        assert_eq!(err, GameError::AbsentIndex { index: 3, len: 1 });
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn test_heal_report_uses_actual_amount() {
        let mut player = Player::new("Tester".to_string());
        player.hp = 28;
        let report = apply_item_effects(Item::healing("Moon Potion", "", 10), &mut player);
        assert_eq!(report.hp_restored, 2);
        assert_eq!(player.hp, 30);
    }

    #[test]
    fn test_power_item_raises_equipped_power_permanently() {
        let mut player = Player::new("Tester".to_string());
        let report = apply_item_effects(Item::new("Night Runes", "", 0, 2, None), &mut player);
        assert_eq!(report.power_gained, 2);
        assert_eq!(player.equipped_power, 2);
        assert_eq!(player.attack_power(), 7);
    }

    #[test]
    fn test_candy_boost_tag() {
        let mut player = Player::new("Tester".to_string());
        let candy = Item::new("Magic Candy", "", 0, 0, Some(SpecialTag::CandyBoost));
        let report = apply_item_effects(candy, &mut player);
        assert_eq!(report.candies_gained, 2);
        assert_eq!(player.candies, 2);
    }

    #[test]
    fn test_calm_tag_floors_at_zero() {
        let mut player = Player::new("Tester".to_string());
        let candle = Item::new("Old Candle", "", 0, 0, Some(SpecialTag::Calm));
        let report = apply_item_effects(candle, &mut player);
        assert_eq!(report.scare_reduced, 0);
        assert_eq!(player.scare_meter, 0);
    }

    #[test]
    fn test_combined_effects_all_fire_in_one_use() {
        let mut player = Player::new("Tester".to_string());
        player.hp = 1;
        player.scare_meter = 3;
        let relic = Item::new(
            "Harvest Relic",
            "",
            5,
            1,
            Some(SpecialTag::Calm),
        );

        let report = apply_item_effects(relic, &mut player);
        assert_eq!(report.hp_restored, 5);
        assert_eq!(report.power_gained, 1);
        assert_eq!(report.scare_reduced, 1);
        assert_eq!(player.hp, 6);
        assert_eq!(player.equipped_power, 1);
        assert_eq!(player.scare_meter, 2);
    }
}
