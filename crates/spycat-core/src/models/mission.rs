//! Mission model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cat, Target};

/// A mission made of one to three targets, optionally worked by one cat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mission {
    /// Unique identifier for the mission
    pub id: Uuid,

    /// ID of the linked cat, if any
    pub cat_id: Option<Uuid>,

    /// The linked cat, loaded together with the mission
    pub cat: Option<Cat>,

    /// Whether the mission has been completed. Terminal once true.
    pub is_completed: bool,

    /// Timestamp when the mission was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the mission was last modified (UTC)
    pub updated_at: Timestamp,

    /// Targets in creation order
    #[serde(default)]
    pub targets: Vec<Target>,
}

impl Mission {
    /// Smallest number of targets a mission may be created with.
    pub const MIN_TARGETS: usize = 1;

    /// Largest number of targets a mission may be created with.
    pub const MAX_TARGETS: usize = 3;

    /// Returns true when a cat has been linked to the mission.
    pub fn is_assigned(&self) -> bool {
        self.cat_id.is_some()
    }

    /// Number of targets that are still open.
    pub fn open_targets(&self) -> usize {
        self.targets.iter().filter(|t| !t.is_completed).count()
    }
}
