//! Storage port — repository traits for persistence.

use std::future::Future;

use persons_domain::error::PersonsError;
use persons_domain::id::PersonId;
use persons_domain::person::{NewPerson, Person};

/// Persistence operations for [`Person`] records.
///
/// Lookups by id return `Ok(None)` when the row is absent; only store
/// failures are errors.
pub trait PersonRepository {
    /// Insert a new row and return it with the id assigned by the store.
    fn create(
        &self,
        person: NewPerson,
    ) -> impl Future<Output = Result<Person, PersonsError>> + Send;

    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, PersonsError>> + Send;

    /// All rows, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, PersonsError>> + Send;

    /// Overwrite `name` and `data` of the row identified by `person.id`.
    fn update(&self, person: Person) -> impl Future<Output = Result<Person, PersonsError>> + Send;

    fn exists_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<bool, PersonsError>> + Send;

    fn delete(&self, id: PersonId) -> impl Future<Output = Result<(), PersonsError>> + Send;

    /// Rows whose name equals `name` exactly.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Person>, PersonsError>> + Send;

    /// Rows whose name contains `fragment`, ignoring case.
    fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> impl Future<Output = Result<Vec<Person>, PersonsError>> + Send;

    /// Whether any row has a name equal to `name` exactly.
    fn exists_by_name(&self, name: &str) -> impl Future<Output = Result<bool, PersonsError>> + Send;
}
