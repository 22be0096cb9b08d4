pub mod city;
pub mod property;
pub mod user;

pub use city::City;
pub use property::{NewProperty, Property, PropertyListing, PropertyUpdate};
pub use user::{Role, User};
