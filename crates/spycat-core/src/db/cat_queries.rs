//! Cat CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

use super::{timestamp_column, uuid_column};
use crate::{
    error::{AgencyError, DatabaseResultExt, Result},
    models::{Cat, CatChanges},
};

const INSERT_CAT_SQL: &str = "INSERT INTO cats (id, name, breed, experience, salary, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_CAT_SQL: &str =
    "SELECT id, name, breed, experience, salary, created_at, updated_at FROM cats WHERE id = ?1";
const SELECT_CATS_SQL: &str =
    "SELECT id, name, breed, experience, salary, created_at, updated_at FROM cats ORDER BY rowid";
const UPDATE_CAT_SQL: &str =
    "UPDATE cats SET salary = COALESCE(?1, salary), updated_at = ?2 WHERE id = ?3";
const CHECK_CAT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM cats WHERE id = ?1)";
const COUNT_CAT_MISSIONS_SQL: &str = "SELECT COUNT(*) FROM missions WHERE cat_id = ?1";
const DELETE_CAT_SQL: &str = "DELETE FROM cats WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Cat from a database row, starting at
    /// column `offset`. Mission queries embed the cat columns after their own.
    pub(crate) fn build_cat_from_row(row: &rusqlite::Row, offset: usize) -> rusqlite::Result<Cat> {
        Ok(Cat {
            id: uuid_column(row, offset)?,
            name: row.get(offset + 1)?,
            breed: row.get(offset + 2)?,
            experience: row.get(offset + 3)?,
            salary: row.get(offset + 4)?,
            created_at: timestamp_column(row, offset + 5)?,
            updated_at: timestamp_column(row, offset + 6)?,
        })
    }

    /// Creates a new cat. Inputs are expected to be validated by the caller.
    pub fn create_cat(
        &mut self,
        name: &str,
        breed: &str,
        experience: i64,
        salary: i64,
    ) -> Result<Cat> {
        let id = Uuid::new_v4();
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_CAT_SQL,
                params![id.to_string(), name, breed, experience, salary, &now_str, &now_str],
            )
            .db_context("Failed to insert cat")?;

        Ok(Cat {
            id,
            name: name.into(),
            breed: breed.into(),
            experience,
            salary,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a cat by its ID.
    pub fn get_cat(&self, id: Uuid) -> Result<Option<Cat>> {
        self.connection
            .query_row(SELECT_CAT_SQL, params![id.to_string()], |row| {
                Self::build_cat_from_row(row, 0)
            })
            .optional()
            .db_context("Failed to query cat")
    }

    /// Lists all cats in creation order.
    pub fn list_cats(&self) -> Result<Vec<Cat>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CATS_SQL)
            .db_context("Failed to prepare cat query")?;

        let cats = stmt
            .query_map([], |row| Self::build_cat_from_row(row, 0))
            .db_context("Failed to query cats")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch cats")?;

        Ok(cats)
    }

    /// Applies a change set to a cat and returns the refreshed record.
    /// An empty change set leaves the row, including `updated_at`, untouched.
    pub fn update_cat(&mut self, id: Uuid, changes: &CatChanges) -> Result<Cat> {
        if !changes.is_empty() {
            let now = Timestamp::now().to_string();
            let rows_affected = self
                .connection
                .execute(UPDATE_CAT_SQL, params![changes.salary, &now, id.to_string()])
                .db_context("Failed to update cat")?;

            if rows_affected == 0 {
                return Err(AgencyError::CatNotFound { id });
            }
        }

        self.get_cat(id)?.ok_or(AgencyError::CatNotFound { id })
    }

    /// Counts the missions that reference a cat.
    pub fn count_missions_for_cat(&self, id: Uuid) -> Result<u64> {
        let count: i64 = self
            .connection
            .query_row(COUNT_CAT_MISSIONS_SQL, params![id.to_string()], |row| {
                row.get(0)
            })
            .db_context("Failed to count cat missions")?;
        Ok(count as u64)
    }

    /// Permanently deletes a cat. The foreign key on `missions.cat_id`
    /// rejects the delete while any mission still references the cat.
    pub fn delete_cat(&mut self, id: Uuid) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_CAT_EXISTS_SQL, params![id.to_string()], |row| {
                row.get(0)
            })
            .db_context("Failed to check cat existence")?;

        if !exists {
            return Err(AgencyError::CatNotFound { id });
        }

        tx.execute(DELETE_CAT_SQL, params![id.to_string()])
            .db_context("Failed to delete cat")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
