//! City Mover Store - SQLite persistence for users, cities and listings
//!
//! Provides:
//! - Connection management and database path detection
//! - Idempotent schema creation and seeding
//! - Repositories for the `users`, `cities` and `properties` tables

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use errors::Result;
pub use repo::{CityRepo, PropertyRepo, UserRepo};
pub use schema::{initialize, SeedReport};
