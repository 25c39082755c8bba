use serde::{Deserialize, Serialize};

use itemstock_core::{DomainError, DomainResult, Entity, EntityId};
use itemstock_parties::PersonId;

/// Inventory item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub EntityId);

impl ItemId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Input for creating an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub max: i64,
    pub owner_id: PersonId,
}

impl NewItem {
    pub fn new(name: impl Into<String>, quantity: i64, max: i64, owner_id: PersonId) -> Self {
        Self {
            name: name.into(),
            quantity,
            max,
            owner_id,
        }
    }

    /// Shape checks that need no storage access.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.max < 0 {
            return Err(DomainError::validation("max cannot be negative"));
        }
        if self.quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        if self.quantity > self.max {
            return Err(DomainError::validation(format!(
                "quantity {} exceeds max {}",
                self.quantity, self.max
            )));
        }
        Ok(())
    }
}

/// A stocked inventory entry.
///
/// `name`, `max` and `owner_id` are fixed at creation. Only the quantity moves,
/// and only through [`crate::ItemManager::increment_quantity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    quantity: i64,
    max: i64,
    owner_id: PersonId,
}

impl Item {
    pub fn new(id: ItemId, input: NewItem) -> Self {
        Self {
            id,
            name: input.name,
            quantity: input.quantity,
            max: input.max,
            owner_id: input.owner_id,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn owner_id(&self) -> PersonId {
        self.owner_id
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_owner_id() -> PersonId {
        PersonId::new(EntityId::new())
    }

    #[test]
    fn validate_accepts_quantity_at_limit() {
        let input = NewItem::new("bolt", 50, 50, test_owner_id());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let input = NewItem::new("  ", 1, 5, test_owner_id());
        match input.validate().unwrap_err() {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn validate_rejects_negative_values() {
        assert!(NewItem::new("bolt", -1, 5, test_owner_id()).validate().is_err());
        assert!(NewItem::new("bolt", 0, -5, test_owner_id()).validate().is_err());
    }

    #[test]
    fn validate_rejects_quantity_over_max() {
        let err = NewItem::new("bolt", 51, 50, test_owner_id())
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("quantity 51 exceeds max 50".to_string())
        );
    }

    #[test]
    fn item_takes_fields_from_input() {
        let owner_id = test_owner_id();
        let id = ItemId::new(EntityId::new());
        let item = Item::new(id, NewItem::new("bolt", 10, 50, owner_id));

        assert_eq!(*item.id(), id);
        assert_eq!(item.name(), "bolt");
        assert_eq!(item.quantity(), 10);
        assert_eq!(item.max(), 50);
        assert_eq!(item.owner_id(), owner_id);
    }

    #[test]
    fn item_serializes_with_plain_ids() {
        let owner_id = test_owner_id();
        let id = ItemId::new(EntityId::new());
        let item = Item::new(id, NewItem::new("bolt", 10, 50, owner_id));

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], serde_json::json!(id.to_string()));
        assert_eq!(value["owner_id"], serde_json::json!(owner_id.to_string()));
        assert_eq!(value["quantity"], 10);

        let back: Item = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }
}
