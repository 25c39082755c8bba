use itemstock_core::EntityId;
use itemstock_inventory::{Item, ItemId, ItemStore};

use super::entity_store::InMemoryEntityStore;

pub type InMemoryItemStore = InMemoryEntityStore<Item>;

impl ItemStore for InMemoryEntityStore<Item> {
    fn find_by_name(&self, name: &str) -> Option<Item> {
        self.find(|item| item.name() == name)
    }

    fn find_by_id(&self, id: ItemId) -> Option<Item> {
        self.get(&id)
    }

    fn find_all(&self) -> Vec<Item> {
        self.list()
    }

    fn next_id(&self) -> ItemId {
        ItemId::new(EntityId::new())
    }

    fn save(&self, item: Item) -> Item {
        self.upsert(item)
    }

    fn delete_by_id(&self, id: ItemId) {
        self.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemstock_inventory::NewItem;
    use itemstock_parties::PersonId;

    fn test_item(store: &InMemoryItemStore, name: &str) -> Item {
        let owner_id = PersonId::new(EntityId::new());
        Item::new(store.next_id(), NewItem::new(name, 1, 10, owner_id))
    }

    #[test]
    fn save_then_find_by_id_and_name() {
        let store = InMemoryItemStore::new();
        let item = store.save(test_item(&store, "bolt"));

        assert_eq!(store.find_by_id(item.id_typed()), Some(item.clone()));
        assert_eq!(store.find_by_name("bolt"), Some(item));
        assert_eq!(store.find_by_name("BOLT"), None);
    }

    #[test]
    fn save_with_existing_id_updates_in_place() {
        let store = InMemoryItemStore::new();
        let first = store.save(test_item(&store, "bolt"));
        let replacement = Item::new(
            first.id_typed(),
            NewItem::new("bolt", 7, 10, first.owner_id()),
        );

        store.save(replacement);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id(first.id_typed()).unwrap().quantity(), 7);
    }

    #[test]
    fn find_all_lists_in_id_order() {
        let store = InMemoryItemStore::new();
        let a = store.save(test_item(&store, "a"));
        let b = store.save(test_item(&store, "b"));

        let mut expected = vec![a.id_typed(), b.id_typed()];
        expected.sort();
        let listed: Vec<ItemId> = store.find_all().iter().map(Item::id_typed).collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn delete_removes_only_that_item() {
        let store = InMemoryItemStore::new();
        let a = store.save(test_item(&store, "a"));
        let b = store.save(test_item(&store, "b"));

        store.delete_by_id(a.id_typed());
        assert!(store.find_by_id(a.id_typed()).is_none());
        assert_eq!(store.find_all(), vec![b]);
    }
}
