//! Parameter structures for agency operations
//!
//! These are the request shapes accepted by the services. They carry serde
//! derives so transports can deserialize request bodies straight into them,
//! but no transport-specific attributes.
//!
//! Every optional field distinguishes "absent" (`None`) from an explicit
//! value. An explicit JSON `null` deserializes to `None` and is treated the
//! same as leaving the field out.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{models::Mission, AgencyError, Result};

/// Parameters for creating a new cat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCat {
    /// Name of the cat
    pub name: String,
    /// Breed, checked against the breed reference list
    pub breed: String,
    /// Years of experience, must be greater than zero
    pub experience: i64,
    /// Salary, must be greater than zero
    pub salary: i64,
}

impl CreateCat {
    /// Validate the numeric fields. The breed is checked separately by the
    /// cat service because it requires an outbound lookup.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spycat_core::params::CreateCat;
    ///
    /// let params = CreateCat {
    ///     name: "Tom".to_string(),
    ///     breed: "Siamese".to_string(),
    ///     experience: 0,
    ///     salary: 100,
    /// };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        positive("experience", self.experience)?;
        positive("salary", self.salary)
    }
}

/// Parameters for a partial cat update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCat {
    /// New salary, must be greater than zero when supplied
    #[serde(default)]
    pub salary: Option<i64>,
}

impl UpdateCat {
    /// Validate supplied fields.
    pub fn validate(&self) -> Result<()> {
        match self.salary {
            Some(salary) => positive("salary", salary),
            None => Ok(()),
        }
    }
}

/// A target supplied at mission creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetCreate {
    /// Name of the target
    pub name: String,
    /// Country the target is located in
    pub country: String,
}

/// Parameters for creating a mission together with its targets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMission {
    /// Between one and three targets
    pub targets: Vec<TargetCreate>,
}

impl CreateMission {
    /// Validate the number of targets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spycat_core::params::{CreateMission, TargetCreate};
    ///
    /// let empty = CreateMission { targets: vec![] };
    /// assert!(empty.validate().is_err());
    ///
    /// let one = CreateMission {
    ///     targets: vec![TargetCreate {
    ///         name: "Vault".to_string(),
    ///         country: "Monaco".to_string(),
    ///     }],
    /// };
    /// assert!(one.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if (Mission::MIN_TARGETS..=Mission::MAX_TARGETS).contains(&self.targets.len()) {
            Ok(())
        } else {
            Err(AgencyError::invalid_input("targets")
                .with_reason("Mission targets quantity must be from 1 to 3"))
        }
    }
}

/// Parameters for a partial mission update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMission {
    /// Completion flag. `true` completes the mission and all of its targets;
    /// `false` is accepted on an open mission and changes nothing.
    #[serde(default)]
    pub is_completed: Option<bool>,
    /// Cat to link. A mission can be linked only once.
    #[serde(default)]
    pub cat_id: Option<Uuid>,
}

/// Parameters for a partial target update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTarget {
    /// Replacement notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Completion flag
    #[serde(default)]
    pub is_completed: Option<bool>,
}

impl UpdateTarget {
    /// Returns true when the caller supplied non-empty notes.
    pub fn has_notes(&self) -> bool {
        self.notes.as_deref().is_some_and(|n| !n.is_empty())
    }
}

fn positive(field: &str, value: i64) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        let mut label = field.to_string();
        if let Some(first) = label.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        Err(AgencyError::invalid_input(field).with_reason(format!("{label} must be greater than 0")))
    }
}
