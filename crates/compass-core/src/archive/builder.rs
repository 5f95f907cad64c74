//! Builder for creating and configuring ResultArchive instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::ResultArchive;
use crate::{
    db::Database,
    error::{CompassError, IoResultExt, Result},
};

/// Builder for creating and configuring ResultArchive instances.
#[derive(Debug, Clone)]
pub struct ArchiveBuilder {
    database_path: Option<PathBuf>,
}

impl ArchiveBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/compass/results.db` or
    /// `~/.local/share/compass/results.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the archive, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::FileSystem` if the parent directory cannot be
    /// created and `CompassError::Database` if initialization fails.
    pub async fn build(self) -> Result<ResultArchive> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).fs_context(parent)?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), CompassError>(())
        })
        .await
        .map_err(|e| CompassError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(ResultArchive::new(db_path))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("compass")
            .place_data_file("results.db")
            .map_err(|e| CompassError::XdgDirectory(e.to_string()))
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
