//! Parties domain module (item owners).
//!
//! Inventory only ever reads people: it checks that an owner exists before an
//! item referencing it is created. Registration and maintenance of people is
//! owned by whatever sits behind [`PersonStore`].

pub mod person;
pub mod store;

pub use person::{Person, PersonId};
pub use store::PersonStore;
