//! Person — the single record type managed by the system.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PersonsError, ValidationError};
use crate::id::PersonId;

/// A stored person. `id` is assigned by the store and never changes.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(default, with = "crate::codec::base64_data")]
    pub data: Option<Vec<u8>>,
}

impl Person {
    /// Overwrite both mutable fields, keeping the id.
    pub fn apply(&mut self, update: PersonUpdate) {
        self.name = update.name;
        self.data = update.data;
    }
}

// Payloads can be large, only their size is worth printing.
impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Person")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("data", &self.data.as_ref().map(Vec::len))
            .finish()
    }
}

/// A person that has not been stored yet, so has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub data: Option<Vec<u8>>,
}

impl NewPerson {
    /// Create a builder for constructing a [`NewPerson`].
    #[must_use]
    pub fn builder() -> NewPersonBuilder {
        NewPersonBuilder::default()
    }

    /// Check creation invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PersonsError::Validation`] when `name` is empty or only
    /// whitespace.
    pub fn validate(&self) -> Result<(), PersonsError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Attach the id assigned by the store.
    #[must_use]
    pub fn into_person(self, id: PersonId) -> Person {
        Person {
            id,
            name: self.name,
            data: self.data,
        }
    }
}

/// Step-by-step builder for [`NewPerson`].
#[derive(Debug, Default)]
pub struct NewPersonBuilder {
    name: Option<String>,
    data: Option<Vec<u8>>,
}

impl NewPersonBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn data(mut self, data: Vec<u8>) -> Self {
        self.data = Some(data);
        self
    }

    /// Consume the builder, validate, and return a [`NewPerson`].
    ///
    /// The name is kept as given; trimming only applies to the check.
    ///
    /// # Errors
    ///
    /// Returns [`PersonsError::Validation`] if `name` is missing, empty,
    /// or only whitespace.
    pub fn build(self) -> Result<NewPerson, PersonsError> {
        let person = NewPerson {
            name: self.name.unwrap_or_default(),
            data: self.data,
        };
        person.validate()?;
        Ok(person)
    }
}

/// Replacement values for an existing person. Both fields are overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonUpdate {
    pub name: String,
    pub data: Option<Vec<u8>>,
}
