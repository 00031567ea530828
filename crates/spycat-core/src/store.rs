//! SQLite-backed implementation of the repository traits.
//!
//! rusqlite is synchronous, so every call opens a [`Database`] on a blocking
//! task and runs there. Each call gets its own connection; SQLite's busy
//! timeout serializes concurrent writers.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::task;
use uuid::Uuid;

use crate::{
    db::Database,
    error::{AgencyError, Result},
    models::{Cat, CatChanges, Mission, MissionChanges, Target, TargetChanges},
    params::{CreateCat, TargetCreate},
    repository::{CatRepository, MissionRepository},
};

/// Repository backed by a SQLite database file.
#[derive(Debug, Clone)]
pub struct Store {
    db_path: PathBuf,
}

impl Store {
    /// Opens the database once to make sure the schema exists, then returns
    /// a store bound to that path.
    ///
    /// # Errors
    ///
    /// Returns `AgencyError::Database` if the database cannot be opened or
    /// initialized.
    pub async fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let store = Self {
            db_path: db_path.as_ref().to_path_buf(),
        };
        store.with_db(|_| Ok(())).await?;
        Ok(store)
    }

    /// Path of the underlying database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(AgencyError::join)?
    }
}

#[async_trait]
impl CatRepository for Store {
    async fn list_cats(&self) -> Result<Vec<Cat>> {
        self.with_db(|db| db.list_cats()).await
    }

    async fn get_cat(&self, id: Uuid) -> Result<Option<Cat>> {
        self.with_db(move |db| db.get_cat(id)).await
    }

    async fn insert_cat(&self, params: &CreateCat) -> Result<Cat> {
        let params = params.clone();
        self.with_db(move |db| {
            db.create_cat(&params.name, &params.breed, params.experience, params.salary)
        })
        .await
    }

    async fn update_cat(&self, id: Uuid, changes: CatChanges) -> Result<Cat> {
        self.with_db(move |db| db.update_cat(id, &changes)).await
    }

    async fn delete_cat(&self, id: Uuid) -> Result<()> {
        self.with_db(move |db| db.delete_cat(id)).await
    }

    async fn count_missions_for_cat(&self, id: Uuid) -> Result<u64> {
        self.with_db(move |db| db.count_missions_for_cat(id)).await
    }
}

#[async_trait]
impl MissionRepository for Store {
    async fn list_missions(&self) -> Result<Vec<Mission>> {
        self.with_db(|db| db.list_missions()).await
    }

    async fn get_mission(&self, id: Uuid) -> Result<Option<Mission>> {
        self.with_db(move |db| db.get_mission(id)).await
    }

    async fn insert_mission(&self, targets: &[TargetCreate]) -> Result<Mission> {
        let targets = targets.to_vec();
        self.with_db(move |db| db.create_mission(&targets)).await
    }

    async fn update_mission(&self, id: Uuid, changes: MissionChanges) -> Result<()> {
        self.with_db(move |db| db.update_mission(id, &changes)).await
    }

    async fn delete_mission(&self, id: Uuid) -> Result<()> {
        self.with_db(move |db| db.delete_mission(id)).await
    }

    async fn get_target(&self, id: Uuid) -> Result<Option<Target>> {
        self.with_db(move |db| db.get_target(id)).await
    }

    async fn update_target(&self, id: Uuid, changes: TargetChanges) -> Result<Target> {
        self.with_db(move |db| db.update_target(id, &changes)).await
    }
}
