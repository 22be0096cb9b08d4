//! City Mover Core - domain model and rules for the rental-listing app
//!
//! This crate provides:
//! - User, City and Property models shared by the store and engine
//! - The error facility (`CityMoverError` domain errors, structured `ExError`)
//! - The structured logging facility and its macros
//! - Form validation and the Damascus area allow-list
//! - Routing between the login screen and the dashboards

pub mod areas;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod routing;
pub mod rules;

// Used by the logging macros
pub use citymover_core_types as core_types;

// Re-export commonly used types
pub use errors::{CityMoverError, ExError, ExErrorKind, Result};
pub use model::{City, NewProperty, Property, PropertyListing, PropertyUpdate, Role, User};
pub use routing::Route;
