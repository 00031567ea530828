//! Core library for the spycat agency service.
//!
//! This crate provides the domain rules for managing spy cats and the
//! missions they are assigned to, including SQLite storage, the breed
//! reference lookup and error handling. Transports (the HTTP server) sit on
//! top of the [`Agency`] facade.
//!
//! # Layout
//!
//! - **Models** ([`models`]): plain records for cats, missions and targets
//! - **Params** ([`params`]): request shapes with their input validation
//! - **Services** ([`service`]): the business rules and state machine
//! - **Repositories** ([`repository`]): typed storage traits, implemented by
//!   the SQLite [`Store`]
//! - **Breeds** ([`breeds`]): the injected breed validation capability
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use spycat_core::{breeds::FixedBreeds, params::CreateCat, AgencyBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let agency = AgencyBuilder::new()
//!     .with_database_path(Some("agency.db"))
//!     .with_breed_validator(Arc::new(FixedBreeds::new(["Siamese"])))
//!     .build()
//!     .await?;
//!
//! let cat = agency
//!     .cats()
//!     .create_cat(&CreateCat {
//!         name: "Tom".to_string(),
//!         breed: "Siamese".to_string(),
//!         experience: 3,
//!         salary: 1000,
//!     })
//!     .await?;
//! println!("Hired {}", cat.name);
//! # Ok(())
//! # }
//! ```

pub mod agency;
pub mod breeds;
pub mod db;
pub mod error;
pub mod models;
pub mod params;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use agency::{Agency, AgencyBuilder};
pub use breeds::{BreedValidator, CatApiBreeds, FixedBreeds};
pub use db::Database;
pub use error::{AgencyError, ErrorKind, Result};
pub use models::{Cat, CatChanges, Mission, MissionChanges, Target, TargetChanges};
pub use params::{CreateCat, CreateMission, TargetCreate, UpdateCat, UpdateMission, UpdateTarget};
pub use repository::{CatRepository, MissionRepository};
pub use service::{CatService, MissionService};
pub use store::Store;
