//! Score store backed by an SQLite file.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tally_toe_core::ScoreStore;
use tracing::{debug, info, instrument};

use crate::db::{DbError, NewScoreEntry, ScoreEntry, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// [`ScoreStore`] that keeps values in an SQLite database.
///
/// Holds a single connection for the lifetime of the store, so `":memory:"`
/// works as a throwaway database.
pub struct SqliteScoreStore {
    db_path: String,
    conn: SqliteConnection,
}

impl std::fmt::Debug for SqliteScoreStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteScoreStore")
            .field("db_path", &self.db_path)
            .finish_non_exhaustive()
    }
}

impl SqliteScoreStore {
    /// Opens (creating if needed) the database at `db_path` and applies
    /// pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the file cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path.as_ref()))]
    pub fn open(db_path: impl AsRef<str>) -> Result<Self, DbError> {
        let db_path = db_path.as_ref().to_string();
        debug!("Establishing connection");
        let mut conn = SqliteConnection::establish(&db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", db_path, e)))?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migrations failed: {}", e)))?;
        info!(path = %db_path, migrations = applied.len(), "Score store opened");

        Ok(Self { db_path, conn })
    }

    /// Path this store was opened with.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Looks up the full entry for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn entry(&mut self, name: &str) -> Result<Option<ScoreEntry>, DbError> {
        let entry = schema::score_entries::table
            .filter(schema::score_entries::name.eq(name))
            .select(ScoreEntry::as_select())
            .first(&mut self.conn)
            .optional()?;
        debug!(found = entry.is_some(), "Entry lookup");
        Ok(entry)
    }

    /// Lists every stored entry ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn entries(&mut self) -> Result<Vec<ScoreEntry>, DbError> {
        let entries = schema::score_entries::table
            .order(schema::score_entries::name.asc())
            .select(ScoreEntry::as_select())
            .load(&mut self.conn)?;
        debug!(count = entries.len(), "Entries loaded");
        Ok(entries)
    }
}

impl ScoreStore for SqliteScoreStore {
    type Error = DbError;

    #[instrument(skip(self))]
    fn get(&mut self, key: &str) -> Result<Option<String>, DbError> {
        Ok(self.entry(key)?.map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), DbError> {
        let entry = NewScoreEntry::new(
            key.to_string(),
            value.to_string(),
            chrono::Utc::now().naive_utc(),
        );
        diesel::replace_into(schema::score_entries::table)
            .values(&entry)
            .execute(&mut self.conn)?;
        debug!("Entry stored");
        Ok(())
    }
}
