//! Inventory error model.

use thiserror::Error;

use itemstock_core::DomainError;
use itemstock_parties::PersonId;

use crate::item::ItemId;

pub type InventoryResult<T> = Result<T, InventoryError>;

/// The key an item lookup was attempted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKey {
    Name(String),
    Id(ItemId),
}

impl core::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ItemKey::Name(name) => write!(f, "name {name:?}"),
            ItemKey::Id(id) => write!(f, "id {id}"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("item already registered: {0:?}")]
    AlreadyRegistered(String),

    #[error("item not found by {0}")]
    NotFound(ItemKey),

    #[error("person not found: {0}")]
    PersonNotFound(PersonId),

    #[error("item {id}: adding {delta} exceeds its max quantity")]
    Exceeded { id: ItemId, delta: i64 },

    #[error("invalid quantity delta: {0}")]
    InvalidDelta(i64),

    #[error("item {id}: removing {} would leave negative stock", .delta.unsigned_abs())]
    BelowZero { id: ItemId, delta: i64 },
}

impl InventoryError {
    pub fn not_found_name(name: impl Into<String>) -> Self {
        Self::NotFound(ItemKey::Name(name.into()))
    }

    pub fn not_found_id(id: ItemId) -> Self {
        Self::NotFound(ItemKey::Id(id))
    }
}
