//! Domain services enforcing the agency rules.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Services     │    │  Repositories   │    │    Database     │
//! │ (CatService,    │───▶│ (CatRepository, │───▶│   (via db/)     │
//! │  MissionService)│    │  MissionRepo..) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    Business rules        Typed storage         Data persistence
//! ```
//!
//! Every rule is checked before the first write. Once the checks pass the
//! write is issued as a single repository call, which the SQLite store runs
//! in one transaction.

pub mod cats;
pub mod missions;

pub use cats::CatService;
pub use missions::MissionService;
