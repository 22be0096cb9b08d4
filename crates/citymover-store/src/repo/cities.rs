#![allow(clippy::result_large_err)]

use super::rows::city_from_row;
use crate::errors::{sqlite_error, Result};
use citymover_core::City;
use rusqlite::{Connection, OptionalExtension};

/// Read-only access to the seeded `cities` table
pub struct CityRepo;

impl CityRepo {
    /// All cities ordered by name
    pub fn get_cities(conn: &Connection) -> Result<Vec<City>> {
        let op = "get_cities";
        let mut stmt = conn
            .prepare("SELECT id, name FROM cities ORDER BY name")
            .map_err(|e| sqlite_error(op, e))?;
        let cities = stmt
            .query_map([], city_from_row)
            .map_err(|e| sqlite_error(op, e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| sqlite_error(op, e))?;
        Ok(cities)
    }

    pub fn get_city_by_id(conn: &Connection, city_id: i64) -> Result<Option<City>> {
        conn.query_row(
            "SELECT id, name FROM cities WHERE id = ?1",
            [city_id],
            city_from_row,
        )
        .optional()
        .map_err(|e| sqlite_error("get_city_by_id", e))
    }

    pub fn get_city_by_name(conn: &Connection, name: &str) -> Result<Option<City>> {
        conn.query_row(
            "SELECT id, name FROM cities WHERE name = ?1",
            [name],
            city_from_row,
        )
        .optional()
        .map_err(|e| sqlite_error("get_city_by_name", e))
    }
}
