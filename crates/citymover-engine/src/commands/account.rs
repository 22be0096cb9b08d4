//! Login and signup

#![allow(clippy::result_large_err)]

use std::time::Instant;

use citymover_core::errors::{CityMoverError, ExError};
use citymover_core::routing::dashboard_for;
use citymover_core::rules::SignupForm;
use citymover_core::{log_op_end, log_op_error, log_op_start, Route, User};
use citymover_core_types::Sensitive;
use citymover_store::errors::Result;
use citymover_store::UserRepo;
use serde::Serialize;

use crate::database::Database;

/// A logged-in user and the screen they land on
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub user: User,
    pub route: Route,
}

impl Session {
    pub fn for_user(user: User) -> Self {
        let route = dashboard_for(user.role);
        Self { user, route }
    }
}

/// Log in with a username and password
///
/// Both inputs are trimmed before the lookup.
///
/// ## Errors
///
/// - `NotFound`: No account matches (`InvalidCredentials`)
/// - `Persistence`: Database error
pub fn login(db: &Database, username: &str, password: &Sensitive<String>) -> Result<Session> {
    let op = "login";
    let username = username.trim();
    log_op_start!(op, username = username);
    let start = Instant::now();

    let session = login_impl(db, username, password.expose_str().trim()).map_err(|e| {
        log_op_error!(op, e, duration_ms = start.elapsed().as_millis() as u64);
        e.with_op_if_missing(op)
    })?;

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        user_id = session.user.id
    );
    Ok(session)
}

fn login_impl(db: &Database, username: &str, password: &str) -> Result<Session> {
    let conn = db.connect()?;
    let user = UserRepo::get_user_by_credentials(&conn, username, password)?.ok_or_else(|| {
        ExError::from(CityMoverError::InvalidCredentials {
            username: username.to_string(),
        })
    })?;
    Ok(Session::for_user(user))
}

/// Create an account and log it in
///
/// ## Errors
///
/// - `Validation`: Blank username/password or unknown role
/// - `DuplicateUsername`: Username already registered
/// - `Persistence`: Database error
pub fn signup(db: &Database, form: SignupForm) -> Result<Session> {
    let op = "signup";
    log_op_start!(op, username = form.username.trim(), role = form.role.as_str());
    let start = Instant::now();

    let session = signup_impl(db, form).map_err(|e| {
        log_op_error!(op, e, duration_ms = start.elapsed().as_millis() as u64);
        e.with_op_if_missing(op)
    })?;

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        user_id = session.user.id
    );
    Ok(session)
}

fn signup_impl(db: &Database, form: SignupForm) -> Result<Session> {
    let valid = form.validate()?;
    let conn = db.connect()?;
    let id = UserRepo::create_user(
        &conn,
        &valid.username,
        valid.password.expose_str(),
        valid.role,
    )?;

    Ok(Session::for_user(User {
        id,
        username: valid.username,
        role: valid.role,
    }))
}
