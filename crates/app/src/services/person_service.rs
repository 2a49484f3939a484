//! Person service — use-cases for managing persons.

use persons_domain::error::{NotFoundError, PersonsError};
use persons_domain::id::PersonId;
use persons_domain::person::{NewPerson, Person, PersonUpdate};

use crate::ports::PersonRepository;

/// Application service for person CRUD and search.
pub struct PersonService<R> {
    repo: R,
}

fn not_found(id: PersonId) -> PersonsError {
    NotFoundError {
        entity: "Person",
        id: id.to_string(),
    }
    .into()
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new person after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PersonsError::Validation`] if the name is blank, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, person), fields(person_name = %person.name))]
    pub async fn create_person(&self, person: NewPerson) -> Result<Person, PersonsError> {
        person.validate()?;
        let created = self.repo.create(person).await?;
        tracing::info!(person_id = %created.id, "person created");
        Ok(created)
    }

    /// Look up a person by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PersonsError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_person(&self, id: PersonId) -> Result<Person, PersonsError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all persons.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_persons(&self) -> Result<Vec<Person>, PersonsError> {
        self.repo.get_all().await
    }

    /// Overwrite name and data of an existing person. The id is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`PersonsError::NotFound`] when no person with `id` exists
    /// (nothing is created), or a storage error from the repository.
    #[tracing::instrument(skip(self, update))]
    pub async fn update_person(
        &self,
        id: PersonId,
        update: PersonUpdate,
    ) -> Result<Person, PersonsError> {
        let mut person = self.get_person(id).await?;
        person.apply(update);
        let updated = self.repo.update(person).await?;
        tracing::info!(person_id = %updated.id, "person updated");
        Ok(updated)
    }

    /// Delete a person by id.
    ///
    /// # Errors
    ///
    /// Returns [`PersonsError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_person(&self, id: PersonId) -> Result<(), PersonsError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(not_found(id));
        }
        self.repo.delete(id).await?;
        tracing::info!(person_id = %id, "person deleted");
        Ok(())
    }

    /// Persons whose name contains `fragment`, ignoring case.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn search_persons(&self, fragment: &str) -> Result<Vec<Person>, PersonsError> {
        self.repo.find_by_name_containing(fragment).await
    }

    /// Persons whose name is exactly `name`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_persons_by_name(&self, name: &str) -> Result<Vec<Person>, PersonsError> {
        self.repo.find_by_name(name).await
    }

    /// Whether a person named exactly `name` is stored.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn person_name_exists(&self, name: &str) -> Result<bool, PersonsError> {
        self.repo.exists_by_name(name).await
    }
}
