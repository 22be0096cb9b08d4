//! Reference data written on first run

#![allow(clippy::result_large_err)]

use crate::errors::{sqlite_error, Result};
use citymover_core::Role;
use rusqlite::Connection;
use serde::Serialize;

/// Cities offered in every picker
pub const DEFAULT_CITIES: [&str; 14] = [
    "دمشق",
    "حلب",
    "حمص",
    "حماة",
    "اللاذقية",
    "طرطوس",
    "دير الزور",
    "الرقة",
    "الحسكة",
    "ريف دمشق",
    "درعا",
    "القنيطرة",
    "سويدا",
    "إدلب",
];

/// A login created on an empty users table
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub username: &'static str,
    pub password: &'static str,
    pub role: Role,
}

pub const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        username: "user1",
        password: "123456",
        role: Role::User,
    },
    DemoAccount {
        username: "owner1",
        password: "123456",
        role: Role::Owner,
    },
];

/// Rows written by one seeding pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub cities_inserted: usize,
    pub demo_users_inserted: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.cities_inserted == 0 && self.demo_users_inserted == 0
    }
}

/// Insert missing default cities, and the demo accounts when no user exists
///
/// Runs in a single transaction.
pub fn ensure_seeded(conn: &mut Connection) -> Result<SeedReport> {
    let op = "ensure_seeded";
    let tx = conn.transaction().map_err(|e| sqlite_error(op, e))?;
    let mut report = SeedReport::default();

    {
        let mut stmt = tx
            .prepare("INSERT OR IGNORE INTO cities (name) VALUES (?1)")
            .map_err(|e| sqlite_error(op, e))?;
        for name in DEFAULT_CITIES {
            report.cities_inserted += stmt.execute([name]).map_err(|e| sqlite_error(op, e))?;
        }
    }

    let user_count: i64 = tx
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .map_err(|e| sqlite_error(op, e))?;

    if user_count == 0 {
        let mut stmt = tx
            .prepare("INSERT INTO users (username, password, role) VALUES (?1, ?2, ?3)")
            .map_err(|e| sqlite_error(op, e))?;
        for account in DEMO_ACCOUNTS {
            report.demo_users_inserted += stmt
                .execute([account.username, account.password, account.role.as_str()])
                .map_err(|e| sqlite_error(op, e))?;
        }
    }

    tx.commit().map_err(|e| sqlite_error(op, e))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_cities_unique() {
        let unique: HashSet<_> = DEFAULT_CITIES.iter().collect();
        assert_eq!(unique.len(), DEFAULT_CITIES.len());
    }

    #[test]
    fn test_damascus_is_seeded() {
        assert!(DEFAULT_CITIES.contains(&citymover_core::areas::DAMASCUS));
    }

    #[test]
    fn test_demo_accounts_cover_both_dashboards() {
        let roles: Vec<_> = DEMO_ACCOUNTS.iter().map(|a| a.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Owner]);
    }
}
