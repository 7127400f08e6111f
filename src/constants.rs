// Starting player stats
pub const BASE_MAX_HP: u32 = 30;
pub const BASE_ATTACK: u32 = 5;

// Experience and progression constants
pub const XP_PER_LEVEL: u32 = 10; // level-up threshold is XP_PER_LEVEL * level
pub const LEVEL_UP_HP_BONUS: u32 = 6;
pub const LEVEL_UP_ATTACK_BONUS: u32 = 1;

// Inventory constants
pub const INVENTORY_CAPACITY: usize = 7;
pub const CANDY_BOOST_AMOUNT: u32 = 2;
pub const CALM_SCARE_REDUCTION: u32 = 1;

// Door event (trick-or-treat) constants
pub const DOOR_NOTHING_CHANCE: f64 = 0.5;
pub const DOOR_ITEM_CHANCE: f64 = 0.3; // rolls in [0.5, 0.8) find an item
pub const DOOR_TRAP_SCARE: u32 = 2;

// Puzzle event (haunted mirror) constants
pub const PUZZLE_SECRET: &str = "SPOOKY";
pub const PUZZLE_CANDY_REWARD: u32 = 4;
pub const PUZZLE_ITEM_POWER: u32 = 2;
pub const PUZZLE_FAIL_SCARE: u32 = 1;

// Path event (pumpkin path) constants
pub const PATH_SUCCESS_CHANCE: f64 = 0.5;
pub const PATH_CANDY_MIN: u32 = 2;
pub const PATH_CANDY_MAX: u32 = 4;
pub const PATH_DAMAGE_MIN: u32 = 1;
pub const PATH_DAMAGE_MAX: u32 = 4;
pub const PATH_FAIL_SCARE: u32 = 1;

// Ghost event constants
pub const GHOST_OFFER_CANDY_MIN: u32 = 1;
pub const GHOST_OFFER_CANDY_MAX: u32 = 4;
pub const GHOST_FLEE_POWER_MIN: u32 = 1;
pub const GHOST_FLEE_POWER_MAX: u32 = 5;

// Combat constants
pub const ATTACK_ROLL_MAX: u32 = 3; // player damage bonus roll is 0..=3
pub const COUNTER_ROLL_MAX: u32 = 2; // enemy counter bonus roll is 0..=2
pub const FLEE_SUCCESS_CHANCE: f64 = 0.5;
pub const FLEE_SCARE_CHANCE: f64 = 0.2;
pub const VICTORY_CANDY_MIN: u32 = 1;
pub const VICTORY_CANDY_MAX: u32 = 3;

// Save system constants
pub const SAVE_FILE_NAME: &str = "save.json";
