//! Item catalog definitions.
//!
//! Read-only reference data: catalogs are constructed fresh on call and never
//! mutated during play.

use crate::constants::PUZZLE_ITEM_POWER;
use crate::items::types::{Item, SpecialTag};
use rand::Rng;

/// Returns the full item catalog found behind mansion doors.
pub fn all_items() -> Vec<Item> {
    vec![
        Item::healing("Moon Potion", "Restores 10 HP.", 10),
        Item::new(
            "Magic Candy",
            "Restores 25 HP and sweetens your candy stash.",
            25,
            0,
            Some(SpecialTag::CandyBoost),
        ),
        Item::healing("Bone Dagger", "Restores 5 HP.", 5),
        Item::healing("Pumpkin Charm", "Restores 15 HP.", 15),
        Item::new(
            "Old Candle",
            "Restores 2 HP and steadies your nerves.",
            2,
            0,
            Some(SpecialTag::Calm),
        ),
    ]
}

/// Draws a random item from the catalog.
pub fn random_item(rng: &mut impl Rng) -> Item {
    let catalog = all_items();
    let index = rng.gen_range(0..catalog.len());
    catalog[index].clone()
}

/// The bonus item awarded for solving the mirror puzzle.
pub fn night_runes() -> Item {
    Item::new(
        "Night Runes",
        "Arcane sigils: attack +2.",
        0,
        PUZZLE_ITEM_POWER,
        None,
    )
}
