//! Opens the person database and brings its schema up to date.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// Where the person table lives.
pub struct Config {
    /// `sqlite:persons.db`, `sqlite::memory:`, or any other `sqlx` `SQLite` URL.
    pub database_url: String,
}

impl Config {
    /// Open the pool and apply the `person` migration. A missing database
    /// file is created.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database cannot be opened or migrated.
    pub async fn build(self) -> Result<Database, StorageError> {
        let options =
            SqliteConnectOptions::from_str(&self.database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!(url = %self.database_url, "person schema up to date");

        Ok(Database { pool })
    }
}

/// A migrated database, ready for [`crate::SqlitePersonRepository`].
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// The pool to hand to repositories and to close on shutdown.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
