//! Read-side queries for the browse and owner screens
//!
//! Storage failures here are logged and degrade to empty results, so a
//! broken database shows an empty screen instead of an error.

#![allow(clippy::result_large_err)]

use std::collections::HashMap;
use std::time::Instant;

use citymover_core::areas::{area_options, is_area_allowed, is_damascus, AreaOption};
use citymover_core::{log_op_end, log_op_error, log_op_start};
use citymover_core::{City, Property, PropertyListing};
use citymover_store::errors::Result;
use citymover_store::{CityRepo, PropertyRepo};
use serde::Serialize;

use crate::database::Database;

/// Area picker contents for one city
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AreaOptions {
    /// None when the city id is unknown
    pub city: Option<City>,
    /// True when only `active` entries accept listings
    pub restricted: bool,
    pub options: Vec<AreaOption>,
}

/// What the browse screen should show
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BrowseOutcome {
    /// No city selected, or the city does not exist
    NoCity,
    /// City selected but no area yet
    NoArea { city: City },
    /// Area exists in the picker but is closed for this city
    AreaInactive { city: City, area: String },
    /// Listings in the area, newest first; may be empty
    Listings {
        city: City,
        area: String,
        listings: Vec<PropertyListing>,
    },
}

/// A listing on the owner's dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnedListing {
    #[serde(flatten)]
    pub listing: PropertyListing,
    /// Damascus listing in one of the active districts
    pub active_area: bool,
}

/// Run a read, logging and swallowing failures
fn read_or_default<T: Default>(op: &str, f: impl FnOnce() -> Result<T>) -> T {
    log_op_start!(op);
    let start = Instant::now();
    match f() {
        Ok(value) => {
            log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
            value
        }
        Err(e) => {
            log_op_error!(op, e, duration_ms = start.elapsed().as_millis() as u64);
            T::default()
        }
    }
}

/// All cities ordered by name
pub fn cities(db: &Database) -> Vec<City> {
    read_or_default("cities", || {
        let conn = db.connect()?;
        CityRepo::get_cities(&conn)
    })
}

pub fn city(db: &Database, city_id: i64) -> Option<City> {
    read_or_default("city", || {
        let conn = db.connect()?;
        CityRepo::get_city_by_id(&conn, city_id)
    })
}

/// Area picker for a city
///
/// Damascus offers its fixed district list with active marks; other cities
/// offer the areas their listings already use.
pub fn areas_for_city(db: &Database, city_id: i64) -> AreaOptions {
    read_or_default("areas_for_city", || {
        let conn = db.connect()?;
        let Some(city) = CityRepo::get_city_by_id(&conn, city_id)? else {
            return Ok(AreaOptions::default());
        };
        let known = if is_damascus(&city.name) {
            Vec::new()
        } else {
            PropertyRepo::get_areas_by_city(&conn, city_id)?
        };
        Ok(AreaOptions {
            restricted: is_damascus(&city.name),
            options: area_options(&city.name, &known),
            city: Some(city),
        })
    })
}

/// Resolve the browse screen for a city and area selection
pub fn browse(db: &Database, city_id: Option<i64>, area: Option<&str>) -> BrowseOutcome {
    let op = "browse";
    log_op_start!(op, city_id = ?city_id, area = ?area);
    let start = Instant::now();

    match browse_impl(db, city_id, area) {
        Ok(outcome) => {
            log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
            outcome
        }
        Err(e) => {
            log_op_error!(op, e, duration_ms = start.elapsed().as_millis() as u64);
            BrowseOutcome::NoCity
        }
    }
}

fn browse_impl(
    db: &Database,
    city_id: Option<i64>,
    area: Option<&str>,
) -> Result<BrowseOutcome> {
    let Some(city_id) = city_id else {
        return Ok(BrowseOutcome::NoCity);
    };
    let conn = db.connect()?;
    let Some(city) = CityRepo::get_city_by_id(&conn, city_id)? else {
        return Ok(BrowseOutcome::NoCity);
    };
    let Some(area) = area.map(str::trim).filter(|a| !a.is_empty()) else {
        return Ok(BrowseOutcome::NoArea { city });
    };
    if !is_area_allowed(&city.name, area) {
        return Ok(BrowseOutcome::AreaInactive {
            city,
            area: area.to_string(),
        });
    }

    let listings = PropertyRepo::get_properties_by_city_and_area(&conn, city_id, area)?;
    Ok(BrowseOutcome::Listings {
        city,
        area: area.to_string(),
        listings,
    })
}

/// Every listing in a city, newest first
pub fn listings_for_city(db: &Database, city_id: i64) -> Vec<PropertyListing> {
    read_or_default("listings_for_city", || {
        let conn = db.connect()?;
        PropertyRepo::get_properties_by_city(&conn, city_id)
    })
}

/// The owner's own listings, newest first
pub fn my_listings(db: &Database, owner_id: i64) -> Vec<OwnedListing> {
    read_or_default("my_listings", || {
        let conn = db.connect()?;
        let names: HashMap<i64, String> = CityRepo::get_cities(&conn)?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();
        let listings = PropertyRepo::get_properties_by_owner(&conn, owner_id)?;

        Ok(listings
            .into_iter()
            .map(|listing| {
                let active_area = match (names.get(&listing.property.city_id), listing.area()) {
                    (Some(city), Some(area)) => is_damascus(city) && is_area_allowed(city, area),
                    _ => false,
                };
                OwnedListing {
                    listing,
                    active_area,
                }
            })
            .collect())
    })
}

/// One listing, for the edit form
pub fn listing(db: &Database, property_id: i64) -> Option<Property> {
    read_or_default("listing", || {
        let conn = db.connect()?;
        PropertyRepo::get_property(&conn, property_id)
    })
}
