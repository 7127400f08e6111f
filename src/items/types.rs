use serde::{Deserialize, Serialize};

/// Effects an item can carry beyond plain healing or attack power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialTag {
    /// Grants bonus candies on use.
    CandyBoost,
    /// Lowers the scare meter on use.
    Calm,
}

/// An immutable item value. Items carry no identity beyond their attributes;
/// two items with equal fields are interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// HP restored on use.
    #[serde(default)]
    pub heal: u32,
    /// Permanent attack bonus gained on use.
    #[serde(default)]
    pub power: u32,
    #[serde(default)]
    pub special: Option<SpecialTag>,
}

impl Item {
    pub fn new(
        name: &str,
        description: &str,
        heal: u32,
        power: u32,
        special: Option<SpecialTag>,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            heal,
            power,
            special,
        }
    }

    /// A plain healing item with no other effects.
    pub fn healing(name: &str, description: &str, heal: u32) -> Self {
        Self::new(name, description, heal, 0, None)
    }
}
