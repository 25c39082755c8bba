//! In-memory service wiring for tests and local development.

use std::sync::Arc;

use itemstock_inventory::ItemManager;

use crate::config::InventoryConfig;
use crate::store::{InMemoryItemStore, InMemoryPersonStore};

pub type InMemoryItemManager = ItemManager<Arc<InMemoryItemStore>, Arc<InMemoryPersonStore>>;

/// An item manager plus handles on the stores behind it, so callers can seed
/// people and inspect stored items directly.
#[derive(Debug)]
pub struct InMemoryServices {
    pub manager: InMemoryItemManager,
    pub items: Arc<InMemoryItemStore>,
    pub people: Arc<InMemoryPersonStore>,
}

pub fn build_in_memory_services(config: &InventoryConfig) -> InMemoryServices {
    let items = Arc::new(InMemoryItemStore::new());
    let people = Arc::new(InMemoryPersonStore::new());
    let manager =
        ItemManager::new(items.clone(), people.clone()).with_policy(config.delta_policy);

    tracing::debug!(delta_policy = ?config.delta_policy, "in-memory item services built");

    InMemoryServices {
        manager,
        items,
        people,
    }
}
