//! Mission and target operations.
//!
//! Missions and targets follow a small state machine:
//!
//! ```text
//! Mission: [open, unassigned] --(link cat)----------> [open, assigned]
//!          [open, *]          --(is_completed=true)--> [closed, *]
//! Target:  [open]             --(notes/is_completed)-> [open]
//!          [open]             --(is_completed=true)--> [closed]
//! ```
//!
//! `closed` is terminal for both. A mission is linked to a cat at most once,
//! and completing a mission closes all of its targets.

use std::sync::Arc;

use log::{debug, info};
use uuid::Uuid;

use crate::{
    error::{AgencyError, Result},
    models::{Mission, MissionChanges, Target, TargetChanges},
    params::{CreateMission, UpdateMission, UpdateTarget},
    repository::{CatRepository, MissionRepository},
};

/// Service owning the mission and target lifecycle.
#[derive(Clone)]
pub struct MissionService {
    missions: Arc<dyn MissionRepository>,
    cats: Arc<dyn CatRepository>,
}

impl MissionService {
    /// Creates a service over the given repositories.
    pub fn new(missions: Arc<dyn MissionRepository>, cats: Arc<dyn CatRepository>) -> Self {
        Self { missions, cats }
    }

    /// Lists all missions with their targets and linked cats.
    pub async fn list_missions(&self) -> Result<Vec<Mission>> {
        info!("Getting all missions");
        self.missions.list_missions().await
    }

    /// Retrieves a mission with its targets and linked cat.
    ///
    /// # Errors
    ///
    /// * `AgencyError::MissionNotFound` - When no mission has this id
    pub async fn get_mission(&self, id: Uuid) -> Result<Mission> {
        info!("Getting a mission by id");
        self.find_mission(id).await
    }

    /// Creates an unassigned, open mission together with its targets.
    ///
    /// # Errors
    ///
    /// * `AgencyError::InvalidInput` - When fewer than one or more than three
    ///   targets are supplied
    pub async fn create_mission(&self, params: &CreateMission) -> Result<()> {
        info!("Creating a mission");
        params.validate()?;

        info!("Creating targets for a mission");
        let mission = self.missions.insert_mission(&params.targets).await?;
        debug!(
            "Created mission {} with {} targets",
            mission.id,
            mission.targets.len()
        );
        Ok(())
    }

    /// Links a cat and/or completes a mission.
    ///
    /// Completing a mission completes every one of its targets, whatever
    /// their previous state. An explicit `is_completed: false` on an open
    /// mission is accepted and changes nothing.
    ///
    /// # Errors
    ///
    /// * `AgencyError::MissionNotFound` - When no mission has this id
    /// * `AgencyError::MissionAlreadyCompleted` - When the mission is
    ///   completed and `is_completed` is supplied at all
    /// * `AgencyError::MissionCatAssigned` - When a cat is supplied but one is
    ///   already linked
    /// * `AgencyError::CatNotFound` - When the supplied cat does not exist
    pub async fn update_mission(&self, id: Uuid, params: &UpdateMission) -> Result<Mission> {
        info!("Updating a mission");
        let mission = self.find_mission(id).await?;

        info!("Checking if the mission is already completed");
        if mission.is_completed && params.is_completed.is_some() {
            return Err(AgencyError::MissionAlreadyCompleted { id });
        }

        info!("Checking if the cat is already assigned to the mission");
        if let Some(cat_id) = params.cat_id {
            if mission.is_assigned() {
                return Err(AgencyError::MissionCatAssigned { id });
            }
            if self.cats.get_cat(cat_id).await?.is_none() {
                return Err(AgencyError::CatNotFound { id: cat_id });
            }
        }

        let changes = MissionChanges::from(params);
        if changes.complete {
            info!("Updating the mission targets in case of completion");
        }
        self.missions.update_mission(id, changes).await?;

        self.find_mission(id).await
    }

    /// Deletes a mission that has no linked cat, along with its targets.
    ///
    /// # Errors
    ///
    /// * `AgencyError::MissionNotFound` - When no mission has this id
    /// * `AgencyError::MissionCatAssigned` - When a cat is linked
    pub async fn delete_mission(&self, id: Uuid) -> Result<()> {
        info!("Deleting a mission");
        let mission = self.find_mission(id).await?;

        if mission.is_assigned() {
            return Err(AgencyError::MissionCatAssigned { id });
        }

        self.missions.delete_mission(id).await
    }

    /// Updates the notes and/or completion flag of a single target.
    ///
    /// A completed target accepts neither a completion flag nor non-empty
    /// notes. Empty notes sent to a completed target are dropped.
    ///
    /// # Errors
    ///
    /// * `AgencyError::TargetNotFound` - When no target has this id
    /// * `AgencyError::TargetAlreadyCompleted` - When the target is completed
    ///   and the update would change it
    pub async fn update_target(&self, id: Uuid, params: UpdateTarget) -> Result<Target> {
        info!("Updating a target");
        let target = self
            .missions
            .get_target(id)
            .await?
            .ok_or(AgencyError::TargetNotFound { id })?;

        info!("Checking if the target is already completed");
        if target.is_completed && (params.is_completed.is_some() || params.has_notes()) {
            return Err(AgencyError::TargetAlreadyCompleted { id });
        }

        let changes = TargetChanges {
            notes: if target.is_completed { None } else { params.notes },
            is_completed: params.is_completed,
        };
        if changes.is_empty() {
            return Ok(target);
        }

        self.missions.update_target(id, changes).await
    }

    async fn find_mission(&self, id: Uuid) -> Result<Mission> {
        self.missions
            .get_mission(id)
            .await?
            .ok_or(AgencyError::MissionNotFound { id })
    }
}
