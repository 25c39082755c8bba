//! Inventory domain module.
//!
//! Business rules for stocked items: unique names, an existing owner at
//! creation time, and a quantity that never grows past the item's limit.
//! Storage is reached only through [`ItemStore`] and
//! [`itemstock_parties::PersonStore`].

pub mod error;
pub mod item;
pub mod manager;
pub mod store;

pub use error::{InventoryError, InventoryResult, ItemKey};
pub use item::{Item, ItemId, NewItem};
pub use manager::{DeltaPolicy, ItemManager};
pub use store::ItemStore;
