//! Repository layer for the three application tables
//!
//! Each repository is a zero-sized type with associated functions that take
//! a borrowed connection, so callers own connection lifetime.

mod cities;
mod properties;
mod rows;
mod users;

pub use cities::CityRepo;
pub use properties::PropertyRepo;
pub use users::UserRepo;
