//! Mission CRUD operations and queries.
//!
//! Missions are always read fully assembled: one query joins the linked cat,
//! a second loads the targets. Writes that touch both missions and targets
//! run inside a single transaction.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

use super::{optional_uuid_column, timestamp_column, uuid_column};
use crate::{
    error::{AgencyError, DatabaseResultExt, Result},
    models::{Mission, MissionChanges, Target},
    params::TargetCreate,
};

const INSERT_MISSION_SQL: &str = "INSERT INTO missions (id, cat_id, is_completed, created_at, updated_at) VALUES (?1, NULL, 0, ?2, ?3)";
const INSERT_TARGET_SQL: &str = "INSERT INTO targets (id, mission_id, name, country, notes, is_completed, position, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, NULL, 0, ?5, ?6, ?7)";
const SELECT_MISSION_COLUMNS: &str = "SELECT m.id, m.cat_id, m.is_completed, m.created_at, m.updated_at, c.id, c.name, c.breed, c.experience, c.salary, c.created_at, c.updated_at FROM missions m LEFT JOIN cats c ON c.id = m.cat_id";
const UPDATE_MISSION_SQL: &str = "UPDATE missions SET cat_id = COALESCE(?1, cat_id), is_completed = MAX(is_completed, ?2), updated_at = ?3 WHERE id = ?4";
const COMPLETE_MISSION_TARGETS_SQL: &str =
    "UPDATE targets SET is_completed = 1, updated_at = ?1 WHERE mission_id = ?2";
const CHECK_MISSION_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM missions WHERE id = ?1)";
const DELETE_MISSION_SQL: &str = "DELETE FROM missions WHERE id = ?1";

/// Offset of the joined cat columns in [`SELECT_MISSION_COLUMNS`].
const CAT_COLUMNS_OFFSET: usize = 5;

impl super::Database {
    /// Helper function to construct a Mission (without targets) from a
    /// joined database row.
    fn build_mission_from_row(row: &rusqlite::Row) -> rusqlite::Result<Mission> {
        let linked_cat: Option<String> = row.get(CAT_COLUMNS_OFFSET)?;
        let cat = match linked_cat {
            Some(_) => Some(Self::build_cat_from_row(row, CAT_COLUMNS_OFFSET)?),
            None => None,
        };

        Ok(Mission {
            id: uuid_column(row, 0)?,
            cat_id: optional_uuid_column(row, 1)?,
            cat,
            is_completed: row.get(2)?,
            created_at: timestamp_column(row, 3)?,
            updated_at: timestamp_column(row, 4)?,
            targets: Vec::new(),
        })
    }

    /// Creates a mission and its targets in one transaction.
    pub fn create_mission(&mut self, targets: &[TargetCreate]) -> Result<Mission> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let id = Uuid::new_v4();
        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(INSERT_MISSION_SQL, params![id.to_string(), &now_str, &now_str])
            .db_context("Failed to insert mission")?;

        let mut created = Vec::with_capacity(targets.len());
        for (position, target) in targets.iter().enumerate() {
            let target_id = Uuid::new_v4();
            tx.execute(
                INSERT_TARGET_SQL,
                params![
                    target_id.to_string(),
                    id.to_string(),
                    &target.name,
                    &target.country,
                    position as i64,
                    &now_str,
                    &now_str
                ],
            )
            .db_context("Failed to insert target")?;

            created.push(Target {
                id: target_id,
                mission_id: id,
                name: target.name.clone(),
                country: target.country.clone(),
                notes: None,
                is_completed: false,
                created_at: now,
                updated_at: now,
            });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Mission {
            id,
            cat_id: None,
            cat: None,
            is_completed: false,
            created_at: now,
            updated_at: now,
            targets: created,
        })
    }

    /// Retrieves a mission by its ID with its cat and targets loaded.
    pub fn get_mission(&self, id: Uuid) -> Result<Option<Mission>> {
        let mut mission = self
            .connection
            .query_row(
                &format!("{SELECT_MISSION_COLUMNS} WHERE m.id = ?1"),
                params![id.to_string()],
                Self::build_mission_from_row,
            )
            .optional()
            .db_context("Failed to query mission")?;

        if let Some(ref mut mission) = mission {
            mission.targets = self.get_targets(mission.id)?;
        }

        Ok(mission)
    }

    /// Lists all missions in creation order with cats and targets loaded.
    pub fn list_missions(&self) -> Result<Vec<Mission>> {
        let mut stmt = self
            .connection
            .prepare(&format!("{SELECT_MISSION_COLUMNS} ORDER BY m.rowid"))
            .db_context("Failed to prepare mission query")?;

        let mut missions = stmt
            .query_map([], Self::build_mission_from_row)
            .db_context("Failed to query missions")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch missions")?;

        let mut targets = self.targets_by_mission()?;
        for mission in &mut missions {
            mission.targets = targets.remove(&mission.id).unwrap_or_default();
        }

        Ok(missions)
    }

    /// Applies a change set to a mission. When the change set completes the
    /// mission, every one of its targets is completed in the same
    /// transaction.
    pub fn update_mission(&mut self, id: Uuid, changes: &MissionChanges) -> Result<()> {
        if changes.is_empty() {
            return Ok(());
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let rows_affected = tx
            .execute(
                UPDATE_MISSION_SQL,
                params![
                    changes.cat_id.map(|c| c.to_string()),
                    changes.complete,
                    &now,
                    id.to_string()
                ],
            )
            .db_context("Failed to update mission")?;

        if rows_affected == 0 {
            return Err(AgencyError::MissionNotFound { id });
        }

        if changes.complete {
            tx.execute(COMPLETE_MISSION_TARGETS_SQL, params![&now, id.to_string()])
                .db_context("Failed to complete mission targets")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Permanently deletes a mission. Its targets go with it through the
    /// `ON DELETE CASCADE` foreign key.
    pub fn delete_mission(&mut self, id: Uuid) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_MISSION_EXISTS_SQL, params![id.to_string()], |row| {
                row.get(0)
            })
            .db_context("Failed to check mission existence")?;

        if !exists {
            return Err(AgencyError::MissionNotFound { id });
        }

        tx.execute(DELETE_MISSION_SQL, params![id.to_string()])
            .db_context("Failed to delete mission")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
