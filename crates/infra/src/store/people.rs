use itemstock_core::{DomainResult, EntityId};
use itemstock_parties::{Person, PersonId, PersonStore};

use super::entity_store::InMemoryEntityStore;

pub type InMemoryPersonStore = InMemoryEntityStore<Person>;

impl InMemoryEntityStore<Person> {
    /// Seed a person under a fresh id.
    pub fn register(&self, name: impl Into<String>) -> DomainResult<Person> {
        let person = Person::new(PersonId::new(EntityId::new()), name)?;
        Ok(self.upsert(person))
    }
}

impl PersonStore for InMemoryEntityStore<Person> {
    fn find_by_id(&self, id: PersonId) -> Option<Person> {
        self.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_person_is_found() {
        let store = InMemoryPersonStore::new();
        let person = store.register("Ada").unwrap();
        assert_eq!(store.find_by_id(person.id_typed()), Some(person));
    }

    #[test]
    fn unknown_person_is_none() {
        let store = InMemoryPersonStore::new();
        assert!(store.find_by_id(PersonId::new(EntityId::new())).is_none());
    }

    #[test]
    fn register_rejects_blank_name() {
        let store = InMemoryPersonStore::new();
        assert!(store.register(" ").is_err());
        assert!(store.is_empty());
    }
}
