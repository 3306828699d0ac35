//! Item categories and the name-to-category mapping.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::rules::{self, Policy};

/// Legendary item: never sold, never loses quality.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
/// Ripening item: gains quality as it ages.
pub const AGED_BRIE: &str = "Aged Brie";
/// Event ticket: gains quality towards the concert, worthless afterwards.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
/// Accelerated decay: loses quality twice as fast as standard stock.
pub const CONJURED_MANA_CAKE: &str = "Conjured Mana Cake";

/// Rule category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    #[default]
    Standard,
    Legendary,
    Ripening,
    EventTicket,
    Accelerated,
}

impl ItemCategory {
    /// Resolve the category from an item name.
    ///
    /// Matching is exact (case and punctuation). Any other name, misspellings
    /// included, is `Standard`.
    pub fn from_name(name: &str) -> Self {
        match name {
            SULFURAS => ItemCategory::Legendary,
            AGED_BRIE => ItemCategory::Ripening,
            BACKSTAGE_PASSES => ItemCategory::EventTicket,
            CONJURED_MANA_CAKE => ItemCategory::Accelerated,
            _ => ItemCategory::Standard,
        }
    }

    /// The update policy for this category.
    pub fn policy(self) -> &'static Policy {
        match self {
            ItemCategory::Standard => &rules::STANDARD,
            ItemCategory::Legendary => &rules::LEGENDARY,
            ItemCategory::Ripening => &rules::RIPENING,
            ItemCategory::EventTicket => &rules::EVENT_TICKET,
            ItemCategory::Accelerated => &rules::ACCELERATED,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Standard => "standard",
            ItemCategory::Legendary => "legendary",
            ItemCategory::Ripening => "ripening",
            ItemCategory::EventTicket => "event_ticket",
            ItemCategory::Accelerated => "accelerated",
        }
    }
}

impl From<&Item> for ItemCategory {
    fn from(item: &Item) -> Self {
        Self::from_name(&item.name)
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
