//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PersonsError`] via `From`.

/// Top-level error returned by application services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum PersonsError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Opaque failure from the persistence layer.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated by the caller's input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    /// The request carried no `name` field at all.
    #[error("name is required")]
    MissingName,

    #[error("invalid id: {0}")]
    InvalidId(String),
}

/// A record looked up by id does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
