//! Inventory quality module.
//!
//! This crate contains the day-step rules for the inn's stock, implemented
//! purely as deterministic domain logic (no IO, no persistence, no locking).

pub mod category;
pub mod engine;
pub mod item;
pub mod rules;

pub use category::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED_MANA_CAKE, ItemCategory, SULFURAS};
pub use engine::{GildedRose, advance_day};
pub use item::Item;
pub use rules::{MAX_QUALITY, MIN_QUALITY, Policy};
