//! Form rules applied before anything reaches the store

pub mod forms;
pub mod validation;

pub use forms::{EditForm, EditPatch, ListingForm, SignupForm};
