//! Database operations and SQLite management for cats, missions and targets.
//!
//! This module provides the low-level storage for the agency. It handles
//! SQLite connections and schema setup, and exposes one query file per
//! record type as `impl Database` blocks.

use std::{path::Path, time::Duration};

use rusqlite::{types::Type, Connection};
use uuid::Uuid;

use crate::error::{DatabaseResultExt, Result};

pub mod cat_queries;
pub mod migrations;
pub mod mission_queries;
pub mod target_queries;

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Reads a UUID stored as TEXT.
pub(crate) fn uuid_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Uuid> {
    let raw: String = row.get(idx)?;
    Uuid::parse_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads a nullable UUID stored as TEXT.
pub(crate) fn optional_uuid_column(
    row: &rusqlite::Row,
    idx: usize,
) -> rusqlite::Result<Option<Uuid>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| {
        Uuid::parse_str(&s)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    })
    .transpose()
}

/// Reads a jiff timestamp stored as TEXT.
pub(crate) fn timestamp_column(
    row: &rusqlite::Row,
    idx: usize,
) -> rusqlite::Result<jiff::Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<jiff::Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
