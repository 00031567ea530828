//! Typed repository interfaces used by the services.
//!
//! There is one trait per aggregate: [`CatRepository`] for cats and
//! [`MissionRepository`] for missions and the targets they own. The services
//! only ever see these traits, which keeps them independent of SQLite and
//! lets tests substitute their own storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{Cat, CatChanges, Mission, MissionChanges, Target, TargetChanges},
    params::{CreateCat, TargetCreate},
};

/// Storage for cat records.
#[async_trait]
pub trait CatRepository: Send + Sync {
    /// All cats in creation order.
    async fn list_cats(&self) -> Result<Vec<Cat>>;

    /// A single cat, `None` when the id is unknown.
    async fn get_cat(&self, id: Uuid) -> Result<Option<Cat>>;

    /// Persists a new cat from already-validated parameters.
    async fn insert_cat(&self, params: &CreateCat) -> Result<Cat>;

    /// Applies a change set and returns the refreshed cat.
    async fn update_cat(&self, id: Uuid, changes: CatChanges) -> Result<Cat>;

    /// Removes a cat.
    async fn delete_cat(&self, id: Uuid) -> Result<()>;

    /// Number of missions currently referencing the cat.
    async fn count_missions_for_cat(&self, id: Uuid) -> Result<u64>;
}

/// Storage for missions and their targets.
#[async_trait]
pub trait MissionRepository: Send + Sync {
    /// All missions with cats and targets loaded.
    async fn list_missions(&self) -> Result<Vec<Mission>>;

    /// A single mission with cat and targets loaded, `None` when unknown.
    async fn get_mission(&self, id: Uuid) -> Result<Option<Mission>>;

    /// Persists a mission and all of its targets atomically.
    async fn insert_mission(&self, targets: &[TargetCreate]) -> Result<Mission>;

    /// Applies a change set atomically, including the target cascade when
    /// the mission is completed.
    async fn update_mission(&self, id: Uuid, changes: MissionChanges) -> Result<()>;

    /// Removes a mission and its targets.
    async fn delete_mission(&self, id: Uuid) -> Result<()>;

    /// A single target, `None` when unknown.
    async fn get_target(&self, id: Uuid) -> Result<Option<Target>>;

    /// Applies a change set and returns the refreshed target.
    async fn update_target(&self, id: Uuid, changes: TargetChanges) -> Result<Target>;
}
