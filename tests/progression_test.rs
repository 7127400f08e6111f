//! Integration test: player progression invariants.
//!
//! Covers the leveling loop, heal clamping, inventory capacity, and the
//! non-negative resource counters across mixed event sequences.

use hallow::constants::{INVENTORY_CAPACITY, XP_PER_LEVEL};
use hallow::items::Item;
use hallow::Player;

#[test]
fn test_heal_returns_actual_restored_hp() {
    let mut player = Player::new("Hero".to_string());
    player.hp = 22;

    // min(x, max_hp - hp_before) for every request size
    assert_eq!(player.heal(3), 3);
    assert_eq!(player.heal(100), 5);
    assert_eq!(player.heal(1), 0);
    assert_eq!(player.hp, player.max_hp);
}

#[test]
fn test_heal_never_exceeds_max_hp() {
    for start in [0, 1, 15, 29, 30] {
        for amount in [0, 1, 6, 30, 1000] {
            let mut player = Player::new("Hero".to_string());
            player.hp = start;
            player.heal(amount);
            assert!(player.hp <= player.max_hp);
        }
    }
}

#[test]
fn test_gain_xp_35_from_fresh_player_reaches_level_3() {
    let mut player = Player::new("Hero".to_string());
    assert!(player.gain_xp(35));

    // 10 spent on level 2, 20 on level 3, 5 residual: the subtraction must
    // repeat per threshold, not cap at one level per call.
    assert_eq!(player.level, 3);
    assert_eq!(player.xp, 5);
}

#[test]
fn test_xp_residual_stays_below_threshold_for_any_reward() {
    let mut player = Player::new("Hero".to_string());
    for reward in [1, 9, 10, 11, 35, 100, 999, 12345] {
        player.gain_xp(reward);
        assert!(
            player.xp < XP_PER_LEVEL * player.level,
            "xp {} must stay below threshold {} at level {}",
            player.xp,
            XP_PER_LEVEL * player.level,
            player.level
        );
    }
}

#[test]
fn test_level_up_grants_stats_and_full_heal() {
    let mut player = Player::new("Hero".to_string());
    player.hp = 3;
    player.gain_xp(10);

    assert_eq!(player.level, 2);
    assert_eq!(player.max_hp, 36);
    assert_eq!(player.base_attack, 6);
    assert_eq!(player.hp, 36);
}

#[test]
fn test_inventory_capacity_is_seven() {
    let mut player = Player::new("Hero".to_string());
    for i in 0..INVENTORY_CAPACITY {
        assert!(player.add_item(Item::healing(&format!("Potion {i}"), "", 1)));
    }

    let snapshot = player.inventory.clone();
    assert!(!player.add_item(Item::healing("Overflow", "", 1)));
    assert_eq!(player.inventory, snapshot);
}

#[test]
fn test_inventory_preserves_insertion_order() {
    let mut player = Player::new("Hero".to_string());
    let names = ["Moon Potion", "Bone Dagger", "Old Candle"];
    for name in names {
        player.add_item(Item::healing(name, "", 1));
    }
    let stored: Vec<&str> = player.inventory.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(stored, names);
}
