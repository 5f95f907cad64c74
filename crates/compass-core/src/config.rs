//! Startup configuration: language, step catalog and content table.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use crate::{
    catalog::StepCatalog, content::ContentTable, error::Result, flow::FlowController,
    models::Language,
};

/// Validated configuration shared by every session of a process.
#[derive(Debug, Clone)]
pub struct CompassConfig {
    pub language: Language,
    pub catalog: Arc<StepCatalog>,
    pub content: ContentTable,
}

impl CompassConfig {
    /// Starts a new session on the landing step in the configured language.
    pub fn new_session(&self) -> FlowController {
        FlowController::new(Arc::clone(&self.catalog), self.language)
    }
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            catalog: Arc::new(StepCatalog::knee_load_compass()),
            content: ContentTable::builtin(),
        }
    }
}

/// Builder for [`CompassConfig`].
///
/// Without files the built-in catalog and content are used. A content file
/// only needs the keys it overrides.
///
/// # Examples
///
/// ```rust
/// use compass_core::{config::CompassBuilder, Language};
///
/// let config = CompassBuilder::new()
///     .with_language(Some(Language::En))
///     .build()?;
/// assert_eq!(config.new_session().language(), Language::En);
/// # compass_core::Result::<()>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompassBuilder {
    language: Option<Language>,
    catalog_path: Option<PathBuf>,
    content_path: Option<PathBuf>,
}

impl CompassBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the session language. Dutch when not specified.
    pub fn with_language(mut self, language: Option<Language>) -> Self {
        if language.is_some() {
            self.language = language;
        }
        self
    }

    /// Sets a JSON step catalog file replacing the built-in catalog.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a JSON content file merged over the built-in content.
    pub fn with_content_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.content_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads and validates the configured files.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::FileSystem` for unreadable files,
    /// `CompassError::Serialization` for malformed JSON,
    /// `CompassError::InvalidCatalog` for a catalog that fails validation and
    /// `CompassError::MissingContent` for a content file with blank texts.
    pub fn build(self) -> Result<CompassConfig> {
        let catalog = match &self.catalog_path {
            Some(path) => {
                debug!("Loading step catalog from {}", path.display());
                StepCatalog::from_file(path)?
            }
            None => StepCatalog::knee_load_compass(),
        };

        let content = match &self.content_path {
            Some(path) => {
                debug!("Loading content from {}", path.display());
                ContentTable::from_file(path)?
            }
            None => ContentTable::builtin(),
        };

        Ok(CompassConfig {
            language: self.language.unwrap_or_default(),
            catalog: Arc::new(catalog),
            content,
        })
    }
}
