//! `SQLite` implementation of [`PersonRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use persons_app::ports::PersonRepository;
use persons_domain::error::PersonsError;
use persons_domain::id::PersonId;
use persons_domain::person::{NewPerson, Person};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Person);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Person> {
        value.map(|w| w.0)
    }

    fn many(values: Vec<Self>) -> Vec<Person> {
        values.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let data: Option<Vec<u8>> = row.try_get("data")?;

        Ok(Self(Person {
            id: PersonId::from_raw(id),
            name,
            data,
        }))
    }
}

const INSERT: &str = "INSERT INTO person (name, data) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, data FROM person WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, data FROM person ORDER BY id";
const SELECT_BY_NAME: &str = "SELECT id, name, data FROM person WHERE name = ? ORDER BY id";
const EXISTS_BY_ID: &str = "SELECT EXISTS(SELECT 1 FROM person WHERE id = ?)";
const EXISTS_BY_NAME: &str = "SELECT EXISTS(SELECT 1 FROM person WHERE name = ?)";
const UPDATE: &str = "UPDATE person SET name = ?, data = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM person WHERE id = ?";

/// Unicode-aware substring match. `SQLite`'s `lower()` only folds ASCII.
fn name_contains(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

/// `SQLite`-backed person repository.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PersonRepository for SqlitePersonRepository {
    fn create(
        &self,
        person: NewPerson,
    ) -> impl Future<Output = Result<Person, PersonsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&person.name)
                .bind(person.data.as_deref())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(person.into_person(PersonId::from_raw(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, PersonsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, PersonsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }

    fn update(&self, person: Person) -> impl Future<Output = Result<Person, PersonsError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&person.name)
                .bind(person.data.as_deref())
                .bind(person.id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(person)
        }
    }

    fn exists_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<bool, PersonsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let exists: i64 = sqlx::query_scalar(EXISTS_BY_ID)
                .bind(id.as_raw())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(exists != 0)
        }
    }

    fn delete(&self, id: PersonId) -> impl Future<Output = Result<(), PersonsError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Person>, PersonsError>> + Send {
        let pool = self.pool.clone();
        let name = name.to_string();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_NAME)
                .bind(name)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }

    fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> impl Future<Output = Result<Vec<Person>, PersonsError>> + Send {
        let pool = self.pool.clone();
        let needle = fragment.to_lowercase();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows)
                .into_iter()
                .filter(|person| name_contains(&person.name, &needle))
                .collect())
        }
    }

    fn exists_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<bool, PersonsError>> + Send {
        let pool = self.pool.clone();
        let name = name.to_string();
        async move {
            let exists: i64 = sqlx::query_scalar(EXISTS_BY_NAME)
                .bind(name)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(exists != 0)
        }
    }
}
