//! Owner-side listing commands

#![allow(clippy::result_large_err)]

use std::time::Instant;

use citymover_core::errors::{CityMoverError, ExError};
use citymover_core::rules::{EditForm, EditPatch, ListingForm};
use citymover_core::{log_op_end, log_op_error, log_op_start, PropertyUpdate, User};
use citymover_store::errors::Result;
use citymover_store::{CityRepo, PropertyRepo};

use crate::database::Database;

/// Validate a new listing and store it
///
/// Checks run in form order: city, area, the Damascus allow-list, title,
/// rent, then coordinates.
///
/// ## Returns
///
/// The new property id
///
/// ## Errors
///
/// - `Forbidden`: The user's role cannot own listings
/// - `Validation`: Missing city/area/title or malformed numbers
/// - `NotFound`: The city does not exist
/// - `AreaNotAllowed`: Damascus area outside the active list
/// - `Persistence`: Database error
pub fn post_listing(db: &Database, owner: &User, form: ListingForm) -> Result<i64> {
    let op = "post_listing";
    log_op_start!(op, owner_id = owner.id, city_id = ?form.city_id);
    let start = Instant::now();

    let property_id = post_listing_impl(db, owner, form).map_err(|e| {
        log_op_error!(op, e, duration_ms = start.elapsed().as_millis() as u64);
        e.with_op_if_missing(op)
    })?;

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        property_id = property_id
    );
    Ok(property_id)
}

fn post_listing_impl(db: &Database, owner: &User, form: ListingForm) -> Result<i64> {
    if !owner.role.can_manage_listings() {
        return Err(CityMoverError::RoleNotPermitted {
            user_id: owner.id,
            role: owner.role.to_string(),
            action: "post listings".to_string(),
        }
        .into());
    }

    let city_id = form.city_id.ok_or_else(|| CityMoverError::MissingField {
        field: "city".to_string(),
    })?;

    let conn = db.connect()?;
    let city = CityRepo::get_city_by_id(&conn, city_id)?
        .ok_or_else(|| ExError::from(CityMoverError::CityNotFound { city_id }))?;

    let property = form.into_new_property(owner.id, &city)?;
    PropertyRepo::add_property(&conn, &property)
}

/// Rewrite a listing from the edit form
///
/// Returns false when the listing does not exist or belongs to someone else.
///
/// ## Errors
///
/// - `Validation`: Blank title or malformed numbers
/// - `Persistence`: Database error
pub fn edit_listing(
    db: &Database,
    owner_id: i64,
    property_id: i64,
    form: EditForm,
) -> Result<bool> {
    write_update("edit_listing", db, owner_id, property_id, || form.into_update())
}

/// Change only the fields set in `patch`
///
/// Untouched columns are neither re-read nor re-validated. An empty patch
/// returns false without writing.
///
/// ## Errors
///
/// - `Validation`: A supplied field is blank (title) or malformed
/// - `Persistence`: Database error
pub fn patch_listing(
    db: &Database,
    owner_id: i64,
    property_id: i64,
    patch: EditPatch,
) -> Result<bool> {
    write_update("patch_listing", db, owner_id, property_id, || {
        patch.into_update()
    })
}

fn write_update(
    op: &str,
    db: &Database,
    owner_id: i64,
    property_id: i64,
    build: impl FnOnce() -> citymover_core::errors::Result<PropertyUpdate>,
) -> Result<bool> {
    log_op_start!(op, owner_id = owner_id, property_id = property_id);
    let start = Instant::now();

    let changed = build()
        .map_err(ExError::from)
        .and_then(|update| {
            let conn = db.connect()?;
            PropertyRepo::update_property(&conn, property_id, owner_id, &update)
        })
        .map_err(|e| {
            log_op_error!(op, e, duration_ms = start.elapsed().as_millis() as u64);
            e.with_op_if_missing(op).with_entity_id(property_id)
        })?;

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        changed = changed
    );
    Ok(changed)
}

/// Delete a listing owned by `owner_id`
///
/// Returns whether a row was removed.
pub fn remove_listing(db: &Database, owner_id: i64, property_id: i64) -> Result<bool> {
    let op = "remove_listing";
    log_op_start!(op, owner_id = owner_id, property_id = property_id);
    let start = Instant::now();

    let removed = db
        .connect()
        .and_then(|conn| PropertyRepo::delete_property(&conn, property_id, owner_id))
        .map_err(|e| {
            log_op_error!(op, e, duration_ms = start.elapsed().as_millis() as u64);
            e.with_op_if_missing(op)
        })?;

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        removed = removed
    );
    Ok(removed)
}
