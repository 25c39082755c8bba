use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use itemstock_core::Entity;

/// In-memory keyed store for any [`Entity`], for tests/dev.
///
/// Entries are kept ordered by id, which is the store's natural listing order.
/// A poisoned lock is recovered: no caller code runs while the guard is held,
/// so the map is never left half-updated.
#[derive(Debug)]
pub struct InMemoryEntityStore<E: Entity> {
    inner: RwLock<BTreeMap<E::Id, E>>,
}

impl<E: Entity> InMemoryEntityStore<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<E::Id, E>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<E::Id, E>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Entity> Default for InMemoryEntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryEntityStore<E>
where
    E: Entity + Clone,
    E::Id: Ord,
{
    pub fn get(&self, id: &E::Id) -> Option<E> {
        self.read().get(id).cloned()
    }

    /// First entry matching `pred`, in id order.
    pub fn find(&self, pred: impl Fn(&E) -> bool) -> Option<E> {
        self.read().values().find(|v| pred(v)).cloned()
    }

    pub fn upsert(&self, entity: E) -> E {
        self.write().insert(*entity.id(), entity.clone());
        entity
    }

    pub fn list(&self) -> Vec<E> {
        self.read().values().cloned().collect()
    }

    pub fn remove(&self, id: &E::Id) -> Option<E> {
        self.write().remove(id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
