//! Saving and loading session progress.
//!
//! The on-disk format is a JSON document with an explicit schema: every
//! field is named and typed, missing fields fall back to their defaults
//! individually, and the loader re-establishes the player invariants rather
//! than trusting the file. A missing or unreadable save is the defined
//! "no prior save" condition, never a fatal error.

use crate::character::Player;
use crate::constants::{
    BASE_ATTACK, BASE_MAX_HP, INVENTORY_CAPACITY, SAVE_FILE_NAME, XP_PER_LEVEL,
};
use crate::items::Item;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// On-disk mirror of [`Player`]. Field-by-field `#[serde(default)]` keeps a
/// partially written or hand-edited save loadable; `restore` repairs
/// whatever the defaults cannot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_max_hp")]
    pub max_hp: u32,
    #[serde(default = "default_max_hp")]
    pub hp: u32,
    #[serde(default = "default_base_attack")]
    pub base_attack: u32,
    #[serde(default)]
    pub equipped_power: u32,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub inventory: Vec<Item>,
    #[serde(default)]
    pub candies: u32,
    #[serde(default)]
    pub scare_meter: u32,
}

fn default_max_hp() -> u32 {
    BASE_MAX_HP
}

fn default_base_attack() -> u32 {
    BASE_ATTACK
}

fn default_level() -> u32 {
    1
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self::from_player(&Player::new(String::new()))
    }
}

impl PlayerRecord {
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            max_hp: player.max_hp,
            hp: player.hp,
            base_attack: player.base_attack,
            equipped_power: player.equipped_power,
            level: player.level,
            xp: player.xp,
            inventory: player.inventory.clone(),
            candies: player.candies,
            scare_meter: player.scare_meter,
        }
    }

    /// Rebuilds a [`Player`], re-establishing every invariant the file may
    /// have lost: hp capped at max_hp, level at least 1, at most seven
    /// inventory slots, and xp renormalized through the level-up rule.
    pub fn restore(mut self) -> Player {
        if self.level == 0 {
            warn!("save held level 0, repairing to 1");
            self.level = 1;
        }
        if self.max_hp == 0 {
            warn!("save held 0 max HP, repairing to baseline");
            self.max_hp = BASE_MAX_HP;
        }
        if self.hp > self.max_hp {
            warn!(hp = self.hp, max_hp = self.max_hp, "save held hp over cap, clamping");
            self.hp = self.max_hp;
        }
        if self.inventory.len() > INVENTORY_CAPACITY {
            warn!(len = self.inventory.len(), "save held an oversized inventory, truncating");
            self.inventory.truncate(INVENTORY_CAPACITY);
        }

        let mut player = Player {
            name: self.name,
            max_hp: self.max_hp,
            hp: self.hp,
            base_attack: self.base_attack,
            equipped_power: self.equipped_power,
            level: self.level,
            xp: self.xp,
            inventory: self.inventory,
            candies: self.candies,
            scare_meter: self.scare_meter,
        };
        if player.xp >= XP_PER_LEVEL * player.level {
            warn!(xp = player.xp, level = player.level, "save held unnormalized xp, releveling");
            player.gain_xp(0);
        }
        player
    }
}

/// The complete persisted session: the player plus the session-level fields
/// the room loop needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(default)]
    pub player: PlayerRecord,
    /// Index of the next room to enter.
    #[serde(default)]
    pub room: u32,
    /// Whether the plot-critical amulet has been won.
    #[serde(default)]
    pub has_amulet: bool,
    #[serde(default)]
    pub last_save_time: i64,
}

/// Manages the save file location and the load/store round-trip.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager rooted at the platform config directory.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "hallow").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join(SAVE_FILE_NAME),
        })
    }

    /// Creates a SaveManager writing to an explicit path. Used by tests.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes the save as pretty-printed JSON.
    pub fn save(&self, data: &SaveData) -> io::Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.save_path, json)
    }

    /// Loads the save if one exists and parses. A missing file is silent;
    /// an unreadable or corrupt one is logged and treated the same way.
    /// The caller starts a new game either way.
    pub fn load(&self) -> Option<SaveData> {
        let text = match fs::read_to_string(&self.save_path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.save_path.display(), error = %e, "could not read save file");
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(data) => Some(data),
            Err(e) => {
                warn!(path = %self.save_path.display(), error = %e, "corrupt save file, starting fresh");
                None
            }
        }
    }
}
