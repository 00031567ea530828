//! Cat model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A spy cat that can be assigned to missions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cat {
    /// Unique identifier for the cat
    pub id: Uuid,

    /// Name of the cat
    pub name: String,

    /// Breed, validated against the breed reference list at creation
    pub breed: String,

    /// Years of experience (always positive)
    pub experience: i64,

    /// Salary (always positive)
    pub salary: i64,

    /// Timestamp when the cat was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the cat was last modified (UTC)
    pub updated_at: Timestamp,
}
