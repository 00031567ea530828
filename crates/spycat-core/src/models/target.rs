//! Target model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One objective within a mission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Target {
    /// Unique identifier for the target
    pub id: Uuid,

    /// ID of the owning mission
    pub mission_id: Uuid,

    /// Name of the target
    pub name: String,

    /// Country the target is located in
    pub country: String,

    /// Free-form notes collected by the assigned cat
    pub notes: Option<String>,

    /// Whether the target has been completed. Terminal once true.
    pub is_completed: bool,

    /// Timestamp when the target was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the target was last modified (UTC)
    pub updated_at: Timestamp,
}
