//! Change sets applied by the persistence layer.
//!
//! These are the lowered, already-validated forms of the update parameters in
//! [`crate::params`]. A `None` field is never written.

use uuid::Uuid;

/// Fields of a cat that may change after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatChanges {
    pub salary: Option<i64>,
}

impl CatChanges {
    /// Returns true when the change set would not touch the record.
    pub fn is_empty(&self) -> bool {
        self.salary.is_none()
    }
}

impl TryFrom<crate::params::UpdateCat> for CatChanges {
    type Error = crate::AgencyError;

    /// Validates an [`UpdateCat`](crate::params::UpdateCat) and keeps only the
    /// supplied fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spycat_core::{models::CatChanges, params::UpdateCat};
    ///
    /// let changes: CatChanges = UpdateCat { salary: Some(900) }.try_into()?;
    /// assert_eq!(changes.salary, Some(900));
    ///
    /// let rejected = CatChanges::try_from(UpdateCat { salary: Some(0) });
    /// assert!(rejected.is_err());
    /// # Ok::<(), spycat_core::AgencyError>(())
    /// ```
    fn try_from(params: crate::params::UpdateCat) -> Result<Self, Self::Error> {
        params.validate()?;
        Ok(Self {
            salary: params.salary,
        })
    }
}

/// Mission fields written by an update.
///
/// `complete` is only ever set, never cleared: an explicit `false` from the
/// caller carries no instruction and lowers to `complete: false`, which
/// leaves the stored flag untouched. When `complete` is set, every target of
/// the mission is completed in the same transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionChanges {
    pub complete: bool,
    pub cat_id: Option<Uuid>,
}

impl MissionChanges {
    /// Returns true when the change set would not touch the record.
    pub fn is_empty(&self) -> bool {
        !self.complete && self.cat_id.is_none()
    }
}

impl From<&crate::params::UpdateMission> for MissionChanges {
    fn from(params: &crate::params::UpdateMission) -> Self {
        Self {
            complete: params.is_completed == Some(true),
            cat_id: params.cat_id,
        }
    }
}

/// Target fields written by an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetChanges {
    pub notes: Option<String>,
    pub is_completed: Option<bool>,
}

impl TargetChanges {
    /// Returns true when the change set would not touch the record.
    pub fn is_empty(&self) -> bool {
        self.notes.is_none() && self.is_completed.is_none()
    }
}
