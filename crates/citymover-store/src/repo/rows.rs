//! Row mappers shared by the repositories

use citymover_core::{City, Property, PropertyListing, Role, User};
use rusqlite::types::Type;
use rusqlite::Row;

pub(crate) const USER_COLUMNS: &str = "id, username, role";

pub(crate) const PROPERTY_COLUMNS: &str =
    "p.id, p.owner_id, p.city_id, p.area, p.title, p.description, p.rent, p.lat, p.lon, p.services";

/// Listing query prefix; callers append WHERE and ORDER BY
pub(crate) const LISTING_SELECT: &str = "SELECT p.id, p.owner_id, p.city_id, p.area, p.title, \
     p.description, p.rent, p.lat, p.lon, p.services, u.username \
     FROM properties p JOIN users u ON p.owner_id = u.id";

fn role_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Role> {
    let raw: String = row.get(idx)?;
    raw.parse::<Role>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(crate) fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        role: role_at(row, 2)?,
    })
}

pub(crate) fn city_from_row(row: &Row<'_>) -> rusqlite::Result<City> {
    Ok(City {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub(crate) fn property_from_row(row: &Row<'_>) -> rusqlite::Result<Property> {
    Ok(Property {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        city_id: row.get(2)?,
        area: row.get(3)?,
        title: row.get(4)?,
        description: row.get(5)?,
        rent: row.get(6)?,
        lat: row.get(7)?,
        lon: row.get(8)?,
        services: row.get(9)?,
    })
}

pub(crate) fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<PropertyListing> {
    Ok(PropertyListing {
        property: property_from_row(row)?,
        owner_username: row.get(10)?,
    })
}
