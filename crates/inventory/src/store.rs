//! Storage abstraction for items.

use std::sync::Arc;

use crate::item::{Item, ItemId};

/// Persistence collaborator for [`Item`] records.
///
/// Implementations own identifier assignment: [`ItemStore::next_id`] hands out
/// the id a new record is saved under.
pub trait ItemStore: Send + Sync {
    /// Exact, case-sensitive name lookup.
    fn find_by_name(&self, name: &str) -> Option<Item>;
    fn find_by_id(&self, id: ItemId) -> Option<Item>;
    /// All stored items in the store's natural order.
    fn find_all(&self) -> Vec<Item>;
    /// Reserve a fresh identifier for an item about to be inserted.
    fn next_id(&self) -> ItemId;
    /// Insert-or-update keyed by the item's id. Returns the stored form.
    fn save(&self, item: Item) -> Item;
    fn delete_by_id(&self, id: ItemId);
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn find_by_name(&self, name: &str) -> Option<Item> {
        (**self).find_by_name(name)
    }

    fn find_by_id(&self, id: ItemId) -> Option<Item> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Vec<Item> {
        (**self).find_all()
    }

    fn next_id(&self) -> ItemId {
        (**self).next_id()
    }

    fn save(&self, item: Item) -> Item {
        (**self).save(item)
    }

    fn delete_by_id(&self, id: ItemId) {
        (**self).delete_by_id(id)
    }
}
