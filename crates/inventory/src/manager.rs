//! Item service: business checks around an otherwise-dumb item store.
//!
//! Every operation is a single check-then-act sequence. Checks run against the
//! stores first; a write happens only once every check has passed, so a
//! rejected call leaves storage exactly as it was.
//!
//! The manager does not serialize concurrent callers. Two creates racing on the
//! same name can both pass the uniqueness check; stores that are shared across
//! threads must provide their own transactional guarantees if that matters.

use tracing::{debug, info, instrument};

use itemstock_parties::{Person, PersonId, PersonStore};

use crate::error::{InventoryError, InventoryResult};
use crate::item::{Item, ItemId, NewItem};
use crate::store::ItemStore;

/// How [`ItemManager::increment_quantity`] treats the sign of its delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeltaPolicy {
    /// Only strictly positive deltas are accepted.
    #[default]
    Increment,
    /// Negative deltas act as decrements, bounded below by zero. Zero is
    /// still rejected.
    AllowDecrement,
}

impl DeltaPolicy {
    fn check(self, delta: i64) -> InventoryResult<()> {
        let accepted = match self {
            DeltaPolicy::Increment => delta > 0,
            DeltaPolicy::AllowDecrement => delta != 0,
        };
        if accepted {
            Ok(())
        } else {
            Err(InventoryError::InvalidDelta(delta))
        }
    }
}

/// Create/read/delete/adjust operations over stored items.
#[derive(Debug)]
pub struct ItemManager<I, P> {
    items: I,
    people: P,
    policy: DeltaPolicy,
}

impl<I, P> ItemManager<I, P>
where
    I: ItemStore,
    P: PersonStore,
{
    pub fn new(items: I, people: P) -> Self {
        Self {
            items,
            people,
            policy: DeltaPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DeltaPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> DeltaPolicy {
        self.policy
    }

    /// Register a new item.
    ///
    /// Rejects a name that is already taken, then an owner that does not
    /// exist, then malformed input, in that order.
    #[instrument(
        skip(self, input),
        fields(name = %input.name, owner_id = %input.owner_id),
        err(level = "debug")
    )]
    pub fn create(&self, input: NewItem) -> InventoryResult<Item> {
        self.verify_not_registered(&input.name)?;
        self.verify_person_exists(input.owner_id)?;
        input.validate()?;

        let item = Item::new(self.items.next_id(), input);
        let saved = self.items.save(item);
        info!(item_id = %saved.id_typed(), quantity = saved.quantity(), max = saved.max(), "item created");
        Ok(saved)
    }

    #[instrument(skip(self), err(level = "debug"))]
    pub fn find_by_name(&self, name: &str) -> InventoryResult<Item> {
        self.items
            .find_by_name(name)
            .ok_or_else(|| InventoryError::not_found_name(name))
    }

    pub fn list_all(&self) -> Vec<Item> {
        let items = self.items.find_all();
        debug!(count = items.len(), "listed items");
        items
    }

    /// Remove an item. Deleting an id that is already gone is an error.
    #[instrument(skip(self), fields(item_id = %id), err(level = "debug"))]
    pub fn delete_by_id(&self, id: ItemId) -> InventoryResult<()> {
        self.verify_exists(id)?;
        self.items.delete_by_id(id);
        info!("item deleted");
        Ok(())
    }

    /// Add `delta` to an item's quantity.
    ///
    /// The result must stay within `0..=max`. On any rejection nothing is
    /// written and the stored quantity is unchanged.
    #[instrument(skip(self), fields(item_id = %id), err(level = "debug"))]
    pub fn increment_quantity(&self, id: ItemId, delta: i64) -> InventoryResult<Item> {
        let mut item = self.verify_exists(id)?;
        self.policy.check(delta)?;

        let new_quantity = match item.quantity().checked_add(delta) {
            Some(q) => q,
            None if delta > 0 => return Err(InventoryError::Exceeded { id, delta }),
            None => return Err(InventoryError::BelowZero { id, delta }),
        };

        if new_quantity < 0 {
            return Err(InventoryError::BelowZero { id, delta });
        }
        if new_quantity > item.max() {
            debug!(
                current = item.quantity(),
                max = item.max(),
                "increment rejected"
            );
            return Err(InventoryError::Exceeded { id, delta });
        }

        item.set_quantity(new_quantity);
        let saved = self.items.save(item);
        info!(quantity = saved.quantity(), "item quantity changed");
        Ok(saved)
    }

    fn verify_exists(&self, id: ItemId) -> InventoryResult<Item> {
        self.items
            .find_by_id(id)
            .ok_or_else(|| InventoryError::not_found_id(id))
    }

    fn verify_not_registered(&self, name: &str) -> InventoryResult<()> {
        match self.items.find_by_name(name) {
            Some(_) => Err(InventoryError::AlreadyRegistered(name.to_string())),
            None => Ok(()),
        }
    }

    fn verify_person_exists(&self, id: PersonId) -> InventoryResult<Person> {
        self.people
            .find_by_id(id)
            .ok_or(InventoryError::PersonNotFound(id))
    }
}
