//! In-memory store implementations for tests and local development.

pub mod entity_store;
pub mod items;
pub mod people;

pub use entity_store::InMemoryEntityStore;
pub use items::InMemoryItemStore;
pub use people::InMemoryPersonStore;
