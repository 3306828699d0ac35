//! Day-step engine.

use crate::category::ItemCategory;
use crate::item::Item;

/// Owns the inn's stock and advances it one day at a time.
///
/// Categories are resolved once, when the engine is built, and kept in step
/// with `items` (same length, same order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
    categories: Vec<ItemCategory>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        let categories = items.iter().map(ItemCategory::from).collect();
        Self { items, categories }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn categories(&self) -> &[ItemCategory] {
        &self.categories
    }

    /// Hand the (updated) items back to the caller.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Advance every item by one day, in order.
    pub fn advance_day(&mut self) {
        let _span = tracing::trace_span!("advance_day", items = self.items.len()).entered();

        for (item, category) in self.items.iter_mut().zip(&self.categories) {
            step(item, *category);
        }
    }
}

/// Advance a caller-owned slice of items by one day, in order.
///
/// Same rules as [`GildedRose::advance_day`]; the category is resolved from
/// each item's name on every call.
pub fn advance_day(items: &mut [Item]) {
    let _span = tracing::trace_span!("advance_day", items = items.len()).entered();

    for item in items.iter_mut() {
        let category = ItemCategory::from(&*item);
        step(item, category);
    }
}

fn step(item: &mut Item, category: ItemCategory) {
    let policy = category.policy();

    // Sell-in first: quality is computed from the updated value.
    item.sell_in = policy.next_sell_in(item.sell_in);
    item.quality = policy.next_quality(item.quality, item.sell_in);

    tracing::debug!(
        item = %item.name,
        category = %category,
        sell_in = item.sell_in,
        quality = item.quality,
        "item advanced"
    );
}
