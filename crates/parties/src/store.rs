//! Read-side storage abstraction for people.

use std::sync::Arc;

use crate::person::{Person, PersonId};

/// Lookup of people by identifier.
pub trait PersonStore: Send + Sync {
    fn find_by_id(&self, id: PersonId) -> Option<Person>;
}

impl<S> PersonStore for Arc<S>
where
    S: PersonStore + ?Sized,
{
    fn find_by_id(&self, id: PersonId) -> Option<Person> {
        (**self).find_by_id(id)
    }
}
