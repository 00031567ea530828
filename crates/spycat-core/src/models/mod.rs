//! Data models for cats, missions and targets.
//!
//! This module contains the core domain records of the agency. They are plain
//! data carriers: the rules that govern how they change live in
//! [`crate::service`], and the SQL that loads them lives in [`crate::db`].
//!
//! # Nesting
//!
//! A [`Mission`] is always handed out fully assembled: its [`Target`]s are
//! loaded in creation order and, when a cat has been linked, the [`Cat`]
//! record is embedded next to its id. Assembly happens once per read in the
//! persistence layer, never lazily.
//!
//! # Examples
//!
//! ```rust
//! use spycat_core::models::{Mission, Target};
//! use jiff::Timestamp;
//! use uuid::Uuid;
//!
//! let mission_id = Uuid::new_v4();
//! let mission = Mission {
//!     id: mission_id,
//!     cat_id: None,
//!     cat: None,
//!     is_completed: false,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//!     targets: vec![Target {
//!         id: Uuid::new_v4(),
//!         mission_id,
//!         name: "Vault".to_string(),
//!         country: "Monaco".to_string(),
//!         notes: None,
//!         is_completed: false,
//!         created_at: Timestamp::now(),
//!         updated_at: Timestamp::now(),
//!     }],
//! };
//!
//! assert!(!mission.is_assigned());
//! assert_eq!(mission.open_targets(), 1);
//! ```

pub mod cat;
pub mod mission;
pub mod requests;
pub mod target;


pub use cat::Cat;
pub use mission::Mission;
pub use requests::{CatChanges, MissionChanges, TargetChanges};
pub use target::Target;
