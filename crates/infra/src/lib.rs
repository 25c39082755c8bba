//! Infrastructure layer: store implementations, config, wiring.

pub mod config;
pub mod services;
pub mod store;


pub use config::{ConfigError, InventoryConfig};
pub use services::{InMemoryServices, build_in_memory_services};
pub use store::{InMemoryEntityStore, InMemoryItemStore, InMemoryPersonStore};
