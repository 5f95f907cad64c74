//! Async facade over the result archive.
//!
//! Every operation opens its own connection on a blocking thread so callers
//! on the tokio runtime never wait on SQLite directly. Use
//! [`ArchiveBuilder`] to create an archive.

mod builder;


use std::path::{Path, PathBuf};

pub use builder::ArchiveBuilder;
use log::info;
use tokio::task;

use crate::{
    db::Database,
    error::{CompassError, Result},
    models::{ResultRecord, StoredResult},
    params::{Id, ListResults},
};

/// Persistent store for result records.
pub struct ResultArchive {
    db_path: PathBuf,
}

impl ResultArchive {
    fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite database backing this archive.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Stores a result record and returns it with its assigned ID.
    pub async fn save(&self, record: &ResultRecord) -> Result<StoredResult> {
        let db_path = self.db_path.clone();
        let record = record.clone();

        let stored = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_result(&record)
        })
        .await
        .map_err(|e| CompassError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!("Stored result {} (urgent: {})", stored.id, stored.record.urgent);
        Ok(stored)
    }

    /// Retrieves a stored result by its ID.
    pub async fn get(&self, params: &Id) -> Result<Option<StoredResult>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_result(id)
        })
        .await
        .map_err(|e| CompassError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists stored results, newest first.
    pub async fn list(&self, params: &ListResults) -> Result<Vec<StoredResult>> {
        let db_path = self.db_path.clone();
        let filter = params.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_results(&filter)
        })
        .await
        .map_err(|e| CompassError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
