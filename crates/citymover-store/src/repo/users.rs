#![allow(clippy::result_large_err)]

use super::rows::{user_from_row, USER_COLUMNS};
use crate::errors::{duplicate_username, is_unique_violation, sqlite_error, Result};
use citymover_core::{Role, User};
use rusqlite::{params, Connection, OptionalExtension};

/// Access to the `users` table
pub struct UserRepo;

impl UserRepo {
    /// Insert a new account and return its id
    ///
    /// # Errors
    /// * `DuplicateUsername` - If the username is already registered
    /// * `Persistence` - Any other SQLite failure
    pub fn create_user(
        conn: &Connection,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<i64> {
        let op = "create_user";
        conn.execute(
            "INSERT INTO users (username, password, role) VALUES (?1, ?2, ?3)",
            params![username, password, role.as_str()],
        )
        .map_err(|e| {
            if is_unique_violation(&e) {
                duplicate_username(op, username)
            } else {
                sqlite_error(op, e)
            }
        })?;

        Ok(conn.last_insert_rowid())
    }

    /// Exact match on username and password
    pub fn get_user_by_credentials(
        conn: &Connection,
        username: &str,
        password: &str,
    ) -> Result<Option<User>> {
        conn.query_row(
            &format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?1 AND password = ?2"),
            params![username, password],
            user_from_row,
        )
        .optional()
        .map_err(|e| sqlite_error("get_user_by_credentials", e))
    }

    pub fn get_user_by_id(conn: &Connection, user_id: i64) -> Result<Option<User>> {
        conn.query_row(
            &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
            [user_id],
            user_from_row,
        )
        .optional()
        .map_err(|e| sqlite_error("get_user_by_id", e))
    }
}
