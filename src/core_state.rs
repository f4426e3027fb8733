//! Transport-agnostic shared state.
//!
//! `CoreState` owns the database location; each request opens its own
//! connection and coordination happens entirely in the store. No other
//! cross-request state exists.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::db::{self, DatabaseError};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

pub struct CoreState {
    db_path: PathBuf,
}

impl CoreState {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Open a connection to the backing store. Runs pending migrations,
    /// so the first open on a fresh path creates the schema.
    pub fn open_db(&self) -> Result<rusqlite::Connection, CoreError> {
        db::open_database(&self.db_path).map_err(CoreError::Database)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}
