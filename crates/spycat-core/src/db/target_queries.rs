//! Target queries and updates.
//!
//! Targets are inserted together with their mission (see
//! [`mission_queries`](super::mission_queries)) and deleted by cascade, so
//! this file only reads and updates them.

use std::collections::HashMap;

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

use super::{timestamp_column, uuid_column};
use crate::{
    error::{AgencyError, DatabaseResultExt, Result},
    models::{Target, TargetChanges},
};

const SELECT_TARGET_SQL: &str = "SELECT id, mission_id, name, country, notes, is_completed, created_at, updated_at FROM targets WHERE id = ?1";
const SELECT_TARGETS_BY_MISSION_SQL: &str = "SELECT id, mission_id, name, country, notes, is_completed, created_at, updated_at FROM targets WHERE mission_id = ?1 ORDER BY position";
const SELECT_ALL_TARGETS_SQL: &str = "SELECT id, mission_id, name, country, notes, is_completed, created_at, updated_at FROM targets ORDER BY mission_id, position";
const UPDATE_TARGET_SQL: &str = "UPDATE targets SET notes = COALESCE(?1, notes), is_completed = COALESCE(?2, is_completed), updated_at = ?3 WHERE id = ?4";

impl super::Database {
    /// Helper function to construct a Target from a database row
    fn build_target_from_row(row: &rusqlite::Row) -> rusqlite::Result<Target> {
        Ok(Target {
            id: uuid_column(row, 0)?,
            mission_id: uuid_column(row, 1)?,
            name: row.get(2)?,
            country: row.get(3)?,
            notes: row.get(4)?,
            is_completed: row.get(5)?,
            created_at: timestamp_column(row, 6)?,
            updated_at: timestamp_column(row, 7)?,
        })
    }

    /// Retrieves a target by its ID.
    pub fn get_target(&self, id: Uuid) -> Result<Option<Target>> {
        self.connection
            .query_row(
                SELECT_TARGET_SQL,
                params![id.to_string()],
                Self::build_target_from_row,
            )
            .optional()
            .db_context("Failed to query target")
    }

    /// Gets all targets of a mission in creation order.
    pub fn get_targets(&self, mission_id: Uuid) -> Result<Vec<Target>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TARGETS_BY_MISSION_SQL)
            .db_context("Failed to prepare target query")?;

        let targets = stmt
            .query_map(params![mission_id.to_string()], Self::build_target_from_row)
            .db_context("Failed to query targets")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch targets")?;

        Ok(targets)
    }

    /// Loads every target in one pass, grouped by mission.
    pub(crate) fn targets_by_mission(&self) -> Result<HashMap<Uuid, Vec<Target>>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_TARGETS_SQL)
            .db_context("Failed to prepare target query")?;

        let mut grouped: HashMap<Uuid, Vec<Target>> = HashMap::new();
        let rows = stmt
            .query_map([], Self::build_target_from_row)
            .db_context("Failed to query targets")?;
        for target in rows {
            let target = target.db_context("Failed to fetch target")?;
            grouped.entry(target.mission_id).or_default().push(target);
        }

        Ok(grouped)
    }

    /// Applies a change set to a target and returns the refreshed record.
    pub fn update_target(&mut self, id: Uuid, changes: &TargetChanges) -> Result<Target> {
        if !changes.is_empty() {
            let now = Timestamp::now().to_string();
            let rows_affected = self
                .connection
                .execute(
                    UPDATE_TARGET_SQL,
                    params![changes.notes, changes.is_completed, &now, id.to_string()],
                )
                .db_context("Failed to update target")?;

            if rows_affected == 0 {
                return Err(AgencyError::TargetNotFound { id });
            }
        }

        self.get_target(id)?
            .ok_or(AgencyError::TargetNotFound { id })
    }
}
