#![allow(clippy::result_large_err)]

use super::rows::{listing_from_row, property_from_row, LISTING_SELECT, PROPERTY_COLUMNS};
use crate::errors::{is_foreign_key_violation, missing_reference, sqlite_error, Result};
use citymover_core::errors::ExError;
use citymover_core::{NewProperty, Property, PropertyListing, PropertyUpdate};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Params};

/// Columns an owner may change, paired with their new values
///
/// Names come only from this function, never from the caller.
fn assignments(update: &PropertyUpdate) -> Vec<(&'static str, Value)> {
    let mut set = Vec::new();
    if let Some(city_id) = update.city_id {
        set.push(("city_id", Value::from(city_id)));
    }
    if let Some(area) = &update.area {
        set.push(("area", Value::from(area.clone())));
    }
    if let Some(title) = &update.title {
        set.push(("title", Value::from(title.clone())));
    }
    if let Some(description) = &update.description {
        set.push(("description", Value::from(description.clone())));
    }
    if let Some(rent) = update.rent {
        set.push(("rent", Value::from(rent)));
    }
    if let Some(lat) = update.lat {
        set.push(("lat", Value::from(lat)));
    }
    if let Some(lon) = update.lon {
        set.push(("lon", Value::from(lon)));
    }
    if let Some(services) = &update.services {
        set.push(("services", Value::from(services.clone())));
    }
    set
}

fn write_error(op: &str, err: rusqlite::Error) -> ExError {
    if is_foreign_key_violation(&err) {
        missing_reference(op, "owner or city does not exist")
    } else {
        sqlite_error(op, err)
    }
}

/// Access to the `properties` table
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a listing and return its id
    ///
    /// # Errors
    /// * `NotFound` - If the owner or city does not exist
    /// * `Persistence` - Any other SQLite failure
    pub fn add_property(conn: &Connection, property: &NewProperty) -> Result<i64> {
        conn.execute(
            "INSERT INTO properties
                (owner_id, city_id, area, title, description, rent, lat, lon, services)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                property.owner_id,
                property.city_id,
                property.area,
                property.title,
                property.description,
                property.rent,
                property.lat,
                property.lon,
                property.services,
            ],
        )
        .map_err(|e| write_error("add_property", e).with_entity_id(property.city_id))?;

        Ok(conn.last_insert_rowid())
    }

    fn listings<P: Params>(
        conn: &Connection,
        op: &str,
        filter: &str,
        params: P,
    ) -> Result<Vec<PropertyListing>> {
        let sql = format!("{LISTING_SELECT} WHERE {filter} ORDER BY p.id DESC");
        let mut stmt = conn.prepare(&sql).map_err(|e| sqlite_error(op, e))?;
        let listings = stmt
            .query_map(params, listing_from_row)
            .map_err(|e| sqlite_error(op, e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| sqlite_error(op, e))?;
        Ok(listings)
    }

    /// Listings in one city, newest first
    pub fn get_properties_by_city(conn: &Connection, city_id: i64) -> Result<Vec<PropertyListing>> {
        Self::listings(conn, "get_properties_by_city", "p.city_id = ?1", [city_id])
    }

    /// One owner's listings, newest first
    pub fn get_properties_by_owner(
        conn: &Connection,
        owner_id: i64,
    ) -> Result<Vec<PropertyListing>> {
        Self::listings(conn, "get_properties_by_owner", "p.owner_id = ?1", [owner_id])
    }

    /// Listings whose area matches exactly, newest first
    pub fn get_properties_by_city_and_area(
        conn: &Connection,
        city_id: i64,
        area: &str,
    ) -> Result<Vec<PropertyListing>> {
        Self::listings(
            conn,
            "get_properties_by_city_and_area",
            "p.city_id = ?1 AND p.area = ?2",
            params![city_id, area],
        )
    }

    pub fn get_property(conn: &Connection, property_id: i64) -> Result<Option<Property>> {
        conn.query_row(
            &format!("SELECT {PROPERTY_COLUMNS} FROM properties p WHERE p.id = ?1"),
            [property_id],
            property_from_row,
        )
        .optional()
        .map_err(|e| sqlite_error("get_property", e))
    }

    /// Distinct non-empty areas that already have listings in a city
    pub fn get_areas_by_city(conn: &Connection, city_id: i64) -> Result<Vec<String>> {
        let op = "get_areas_by_city";
        let mut stmt = conn
            .prepare(
                "SELECT DISTINCT area FROM properties
                 WHERE city_id = ?1 AND area IS NOT NULL AND area != ''
                 ORDER BY area",
            )
            .map_err(|e| sqlite_error(op, e))?;
        let areas = stmt
            .query_map([city_id], |row| row.get(0))
            .map_err(|e| sqlite_error(op, e))?
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(|e| sqlite_error(op, e))?;
        Ok(areas)
    }

    /// Delete a listing only when `owner_id` owns it
    ///
    /// Returns whether a row was removed.
    pub fn delete_property(conn: &Connection, property_id: i64, owner_id: i64) -> Result<bool> {
        let removed = conn
            .execute(
                "DELETE FROM properties WHERE id = ?1 AND owner_id = ?2",
                [property_id, owner_id],
            )
            .map_err(|e| sqlite_error("delete_property", e).with_entity_id(property_id))?;
        Ok(removed > 0)
    }

    /// Apply a partial update scoped to id and owner
    ///
    /// Returns whether a row was changed. An empty update touches nothing and
    /// returns false.
    ///
    /// # Errors
    /// * `NotFound` - If a new `city_id` does not exist
    /// * `Persistence` - Any other SQLite failure
    pub fn update_property(
        conn: &Connection,
        property_id: i64,
        owner_id: i64,
        update: &PropertyUpdate,
    ) -> Result<bool> {
        let set = assignments(update);
        if set.is_empty() {
            return Ok(false);
        }

        let columns = set
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{} = ?{}", column, i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE properties SET {} WHERE id = ?{} AND owner_id = ?{}",
            columns,
            set.len() + 1,
            set.len() + 2
        );

        let values = set
            .into_iter()
            .map(|(_, value)| value)
            .chain([Value::from(property_id), Value::from(owner_id)]);

        let changed = conn
            .execute(&sql, params_from_iter(values))
            .map_err(|e| write_error("update_property", e).with_entity_id(property_id))?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignments_follow_column_order() {
        let update = PropertyUpdate::new()
            .services(None)
            .title("Flat")
            .city_id(3);
        let names: Vec<_> = assignments(&update).into_iter().map(|(c, _)| c).collect();
        assert_eq!(names, vec!["city_id", "title", "services"]);
    }

    #[test]
    fn test_cleared_column_binds_null() {
        let update = PropertyUpdate::new().rent(None);
        let set = assignments(&update);
        assert_eq!(set, vec![("rent", Value::Null)]);
    }

    #[test]
    fn test_empty_update_has_no_assignments() {
        assert!(assignments(&PropertyUpdate::new()).is_empty());
    }
}
