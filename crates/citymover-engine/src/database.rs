//! Database handle and process-level initialization

#![allow(clippy::result_large_err)]

use std::path::{Path, PathBuf};
use std::time::Instant;

use citymover_core::{log_op_end, log_op_error, log_op_start};
use citymover_store::db;
use citymover_store::errors::{io_error, Result};
use citymover_store::schema::{self, SeedReport};
use rusqlite::Connection;
use serde::Serialize;

/// Location of the application database
///
/// Holds only the path; every operation opens a fresh connection and drops
/// it when done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    path: PathBuf,
}

/// Result of [`Database::initialize`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InitOutcome {
    /// Schema present and seed data in place
    Ready(SeedReport),
    /// Initialization failed; an empty database file was left behind
    Fallback { error: String },
}

impl InitOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, InitOutcome::Ready(_))
    }
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `explicit`, else the environment, else `./city_app.db`
    pub fn locate(explicit: Option<&Path>) -> Self {
        Self::new(db::resolve_db_path(explicit))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a configured connection
    pub fn connect(&self) -> Result<Connection> {
        db::open(&self.path).map_err(|e| e.with_entity_id(self.path.display()))
    }

    /// Create the schema and seed data
    ///
    /// Never fails: errors are logged and an empty database file is created
    /// so the application can still start.
    pub fn initialize(&self) -> InitOutcome {
        let op = "initialize";
        log_op_start!(op, path = %self.path.display());
        let start = Instant::now();

        let result = self
            .connect()
            .and_then(|mut conn| schema::initialize(&mut conn));

        match result {
            Ok(report) => {
                log_op_end!(
                    op,
                    duration_ms = start.elapsed().as_millis() as u64,
                    cities_inserted = report.cities_inserted,
                    demo_users_inserted = report.demo_users_inserted
                );
                InitOutcome::Ready(report)
            }
            Err(e) => {
                log_op_error!(op, e, duration_ms = start.elapsed().as_millis() as u64);
                if let Err(fallback) = self.create_empty_file() {
                    tracing::error!(
                        op = op,
                        err.code = fallback.code(),
                        err.message = fallback.message(),
                        "could not create empty database file"
                    );
                }
                InitOutcome::Fallback {
                    error: e.to_string(),
                }
            }
        }
    }

    fn create_empty_file(&self) -> Result<()> {
        db::ensure_parent_dir(&self.path)?;
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map(|_| ())
            .map_err(|e| io_error("initialize", e).with_entity_id(self.path.display()))
    }
}
