//! Builder for creating and configuring Agency instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use super::Agency;
use crate::{
    breeds::{BreedValidator, CatApiBreeds, DEFAULT_BREEDS_URL, DEFAULT_LOOKUP_TIMEOUT},
    error::{AgencyError, Result},
    service::{CatService, MissionService},
    store::Store,
};

/// Builder for creating and configuring Agency instances.
#[derive(Clone, Default)]
pub struct AgencyBuilder {
    database_path: Option<PathBuf>,
    breeds: Option<Arc<dyn BreedValidator>>,
}

impl AgencyBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/spycat/spycat.db` or `~/.local/share/spycat/spycat.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the breed validator. Defaults to the remote Cat API list.
    pub fn with_breed_validator(mut self, breeds: Arc<dyn BreedValidator>) -> Self {
        self.breeds = Some(breeds);
        self
    }

    /// Builds the configured agency.
    ///
    /// # Errors
    ///
    /// Returns `AgencyError::FileSystem` if the database directory cannot be
    /// created, `AgencyError::Database` if database initialization fails and
    /// `AgencyError::Configuration` if the default breed client cannot be
    /// built.
    pub async fn build(self) -> Result<Agency> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| AgencyError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let breeds = match self.breeds {
            Some(breeds) => breeds,
            None => Arc::new(CatApiBreeds::new(DEFAULT_BREEDS_URL, DEFAULT_LOOKUP_TIMEOUT)?),
        };

        let store = Arc::new(Store::open(&db_path).await?);
        let cats = CatService::new(store.clone(), breeds);
        let missions = MissionService::new(store.clone(), store);

        Ok(Agency::new(cats, missions))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("spycat")
            .place_data_file("spycat.db")
            .map_err(|e| AgencyError::XdgDirectory(e.to_string()))
    }
}
