use crate::items::ItemUseReport;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A combat participant. Enemies are created fresh per encounter from the
/// catalog below and live only as long as the fight; they are never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    /// May go negative from overkill damage; dead at `hp <= 0`.
    pub hp: i32,
    /// Base damage per retaliation.
    pub attack: u32,
    pub xp_reward: u32,
    pub flavor_text: String,
}

impl Enemy {
    pub fn new(name: &str, hp: i32, attack: u32, xp_reward: u32, flavor_text: &str) -> Self {
        Self {
            name: name.to_string(),
            hp,
            attack,
            xp_reward,
            flavor_text: flavor_text.to_string(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp -= amount as i32;
    }
}

/// Returns the regular enemy roster of the mansion.
pub fn all_enemies() -> Vec<Enemy> {
    vec![
        Enemy::new(
            "Shadow Cat",
            12,
            3,
            3,
            "a cat whose eyes glow like embers",
        ),
        Enemy::new(
            "Wandering Witch",
            30,
            5,
            5,
            "a witch shrieking over her potions",
        ),
        Enemy::new(
            "Reeking Specter",
            20,
            8,
            15,
            "a specter that smells worse than rotten cheese",
        ),
        Enemy::new(
            "Cadaverous Knight",
            50,
            10,
            20,
            "the strongest knight in the realm, ready to cut down anyone",
        ),
    ]
}

/// The final boss guarding the amulet.
pub fn shadow_king() -> Enemy {
    Enemy::new(
        "King of Shadows",
        45,
        9,
        20,
        "the Dark Lord of the mansion",
    )
}

/// Spawns a random regular enemy from the roster.
pub fn random_enemy(rng: &mut impl Rng) -> Enemy {
    let roster = all_enemies();
    let index = rng.gen_range(0..roster.len());
    roster[index].clone()
}

/// One player action per combat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    UseItem,
    Flee,
}

/// Terminal state of a finished combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// Enemy brought to 0 HP or below.
    Victory,
    /// Player brought to 0 HP.
    Defeat,
    /// Player disengaged successfully.
    Fled,
}

/// A delta produced by one combat turn. The presentation layer narrates from
/// these; the engine never prints.
#[derive(Debug, Clone)]
pub enum CombatEvent {
    /// Player attacked; full damage dealt (enemy HP may go negative).
    PlayerAttack { damage: u32 },
    /// Enemy defeated, with the spoils of victory.
    EnemyDefeated {
        xp_gained: u32,
        leveled_up: bool,
        new_level: u32,
        candies_gained: u32,
    },
    /// Use-item turn with nothing to use; no progress consumed.
    InventoryEmpty,
    /// Item selection cancelled or invalid; nothing consumed.
    UseCancelled,
    /// An item was consumed and its effects applied.
    ItemUsed(ItemUseReport),
    FleeSucceeded,
    /// Flee failed; enemy counter-attacked. `damage_taken` is the HP the
    /// player actually lost; `scared` marks the independent scare roll.
    FleeFailed { damage_taken: u32, scared: bool },
    PlayerDefeated,
}

/// Outcome plus the full turn-by-turn delta log of a combat.
#[derive(Debug, Clone)]
pub struct CombatResult {
    pub outcome: CombatOutcome,
    pub events: Vec<CombatEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_enemy_dead_at_zero_or_below() {
        let mut enemy = Enemy::new("Shadow Cat", 12, 3, 3, "");
        enemy.take_damage(12);
        assert!(enemy.is_dead());

        let mut overkill = Enemy::new("Shadow Cat", 12, 3, 3, "");
        overkill.take_damage(20);
        assert_eq!(overkill.hp, -8);
        assert!(overkill.is_dead());
    }

    #[test]
    fn test_roster_has_boss_tier_entry() {
        let boss = shadow_king();
        let strongest_regular_xp = all_enemies().iter().map(|e| e.xp_reward).max().unwrap();
        assert!(boss.xp_reward >= strongest_regular_xp);
    }

    #[test]
    fn test_random_enemy_spawns_fresh_from_roster() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let roster = all_enemies();
        for _ in 0..10 {
            let enemy = random_enemy(&mut rng);
            assert!(roster.iter().any(|e| e.name == enemy.name && e.hp == enemy.hp));
        }
    }
}
