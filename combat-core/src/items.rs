//! Consumable items and the standard item catalog.
//!
//! Items are single-use: the inventory removes an item once its effect
//! has been applied.

use crate::adversary::Adversary;
use crate::io::OutputSink;
use crate::naming::{Capitalization, IndefiniteArticle, Name};
use crate::player::Player;

/// What happens when an item is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    /// Restore health to the player.
    Heal(u32),
    /// Damage the adversary.
    Harm(u32),
}

/// A consumable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: Name,
    pub description: String,
    pub effect: ItemEffect,
}

impl Item {
    pub fn new(name: Name, description: impl Into<String>, effect: ItemEffect) -> Self {
        Self {
            name,
            description: description.into(),
            effect,
        }
    }

    /// Apply this item's effect once.
    pub fn apply(&self, player: &mut Player, adversary: &mut Adversary, out: &mut dyn OutputSink) {
        tracing::debug!(item = %self.name, effect = ?self.effect, "item used");
        match self.effect {
            ItemEffect::Heal(amount) => {
                out.write_line(&format!(
                    "You chug {}.",
                    self.name.with_indefinite_article(Capitalization::None)
                ));
                player.restore_health(amount, out);
            }
            ItemEffect::Harm(amount) => {
                out.write_line(&format!(
                    "You hurl {} at {}!",
                    self.name.with_indefinite_article(Capitalization::None),
                    adversary.name().with_definite_article(Capitalization::None)
                ));
                adversary.take_damage(amount, out);
            }
        }
    }
}

// ============================================================================
// Standard items
// ============================================================================

lazy_static::lazy_static! {
    /// Items every game knows about.
    pub static ref STANDARD_ITEMS: Vec<Item> = vec![
        Item::new(
            Name::generic("healing potion", IndefiniteArticle::A),
            "A potion that restores some hitpoints.",
            ItemEffect::Heal(5),
        ),
        Item::new(
            Name::generic("fire bomb", IndefiniteArticle::A),
            "A clay flask that bursts into flame.",
            ItemEffect::Harm(4),
        ),
    ];
}

/// Get a standard item by name (case-insensitive).
pub fn find_item(name: &str) -> Option<Item> {
    let name_lower = name.trim().to_lowercase();
    STANDARD_ITEMS
        .iter()
        .find(|i| i.name.as_str().to_lowercase() == name_lower)
        .cloned()
}

/// The standard healing potion: restores 5 health.
pub fn healing_potion() -> Item {
    STANDARD_ITEMS[0].clone()
}
