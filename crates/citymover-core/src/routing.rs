//! View routing between the login screen and the two dashboards

use serde::Serialize;

use crate::model::Role;

/// The three screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    Login,
    UserDashboard,
    OwnerDashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::UserDashboard => "/user",
            Route::OwnerDashboard => "/owner",
        }
    }
}

/// Landing screen after login or signup
///
/// Owners get the owner dashboard; everyone else browses.
pub fn dashboard_for(role: Role) -> Route {
    match role {
        Role::Owner => Route::OwnerDashboard,
        Role::User | Role::Admin => Route::UserDashboard,
    }
}
