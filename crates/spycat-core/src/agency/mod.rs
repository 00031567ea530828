//! High-level entry point wiring storage and services together.
//!
//! An [`Agency`] owns one [`CatService`] and one [`MissionService`] sharing
//! the same store. Build it with [`AgencyBuilder`].
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use spycat_core::{
//!     breeds::FixedBreeds,
//!     params::{CreateMission, TargetCreate},
//!     AgencyBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let agency = AgencyBuilder::new()
//!     .with_database_path(Some("/tmp/spycat.db"))
//!     .with_breed_validator(Arc::new(FixedBreeds::new(["Siamese"])))
//!     .build()
//!     .await?;
//!
//! agency
//!     .missions()
//!     .create_mission(&CreateMission {
//!         targets: vec![TargetCreate {
//!             name: "Vault".to_string(),
//!             country: "Monaco".to_string(),
//!         }],
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;

pub use builder::AgencyBuilder;

use crate::service::{CatService, MissionService};

/// The assembled agency services.
#[derive(Clone)]
pub struct Agency {
    cats: CatService,
    missions: MissionService,
}

impl Agency {
    /// Creates an agency from already-built services.
    pub fn new(cats: CatService, missions: MissionService) -> Self {
        Self { cats, missions }
    }

    /// Cat operations.
    pub fn cats(&self) -> &CatService {
        &self.cats
    }

    /// Mission and target operations.
    pub fn missions(&self) -> &MissionService {
        &self.missions
    }
}
