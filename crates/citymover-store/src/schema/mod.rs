//! Schema creation and first-run seeding
//!
//! Both steps are idempotent, so `initialize` runs at every start.

#![allow(clippy::result_large_err)]

mod seed;

pub use seed::{ensure_seeded, DemoAccount, SeedReport, DEFAULT_CITIES, DEMO_ACCOUNTS};

use crate::errors::{sqlite_error, Result};
use rusqlite::Connection;

/// Table and index definitions
pub const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Tables every initialized database carries
pub const TABLES: [&str; 3] = ["users", "cities", "properties"];

/// Create any missing tables and indexes
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)
        .map_err(|e| sqlite_error("ensure_schema", e))
}

/// Create the schema and seed reference data
///
/// Existing rows are never modified.
pub fn initialize(conn: &mut Connection) -> Result<SeedReport> {
    ensure_schema(conn)?;
    let report = ensure_seeded(conn)?;
    tracing::debug!(
        cities_inserted = report.cities_inserted,
        demo_users_inserted = report.demo_users_inserted,
        "schema initialized"
    );
    Ok(report)
}
