//! Database connection management
//!
//! Provides utilities for locating, opening and configuring SQLite
//! connections. Callers open one connection per operation and drop it when
//! done.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File name used when no explicit path is configured
pub const DB_FILE_NAME: &str = "city_app.db";

/// Full path to the database file
pub const ENV_DB_PATH: &str = "CITYMOVER_DB";

/// Writable directory that should hold `city_app.db`
pub const ENV_DATA_DIR: &str = "CITYMOVER_DATA_DIR";

/// Pick the database file location
///
/// Precedence: explicit path, `$CITYMOVER_DB`, `$CITYMOVER_DATA_DIR/city_app.db`,
/// then `./city_app.db`. Empty environment values are ignored.
pub fn resolve_db_path(explicit: Option<&Path>) -> PathBuf {
    resolve_with(
        explicit,
        std::env::var_os(ENV_DB_PATH),
        std::env::var_os(ENV_DATA_DIR),
    )
}

fn resolve_with(
    explicit: Option<&Path>,
    db_env: Option<OsString>,
    data_dir_env: Option<OsString>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = db_env.filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }
    if let Some(dir) = data_dir_env.filter(|v| !v.is_empty()) {
        return PathBuf::from(dir).join(DB_FILE_NAME);
    }
    PathBuf::from(DB_FILE_NAME)
}

/// Create the directory that will hold `path`, if any
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|e| io_error("ensure_parent_dir", e).with_entity_id(parent.display())),
        _ => Ok(()),
    }
}

/// Open and configure a SQLite database at the given path
///
/// The parent directory is created first; SQLite creates the file itself.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    let conn = Connection::open(path).map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection with optimal settings
pub fn configure(conn: &Connection) -> Result<()> {
    // Enforce owner/city references
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(from_rusqlite)?;

    // WAL for concurrent readers; in-memory databases report "memory"
    conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
        row.get::<_, String>(0)
    })
    .map_err(from_rusqlite)?;

    Ok(())
}
