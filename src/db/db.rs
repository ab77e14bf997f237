use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::StoreError;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "taskapp.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database configured for this user, applying pending migrations.
    pub fn new() -> Result<Db, StoreError> {
        Self::open(Self::default_path()?)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Db, StoreError> {
        let conn = Self::open_without_migrations(path)?;
        Self::migrate(conn)
    }

    pub fn in_memory() -> Result<Db, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Self::migrate(conn)
    }

    pub fn open_without_migrations(path: impl AsRef<Path>) -> Result<Connection, StoreError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening task database");
        Connection::open(path).map_err(|e| StoreError::Unavailable(format!("{}: {}", path.display(), e)))
    }

    /// Resolves the database file: the configured override or the data directory.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let config = Config::read().map_err(|e| StoreError::Unavailable(e.to_string()))?;
        match config.storage.database {
            Some(path) => Ok(path),
            None => DataStorage::new()
                .get_path(DB_FILE_NAME)
                .map_err(|e| StoreError::Unavailable(e.to_string())),
        }
    }

    fn migrate(mut conn: Connection) -> Result<Db, StoreError> {
        init_with_migrations(&mut conn).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Db { conn })
    }
}
