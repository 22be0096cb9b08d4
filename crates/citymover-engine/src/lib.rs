//! City Mover Engine - Orchestration layer
//!
//! Provides the account, listing and browsing operations the front ends
//! call. Each operation opens its own connection through [`Database`],
//! applies core rules and persists through the store.
//!
//! ## Logging Ownership
//!
//! The engine owns lifecycle logging: `log_op_start!` at entry,
//! `log_op_end!` on success, `log_op_error!` on failure. Lower layers use
//! only `tracing::debug!()`.

pub mod commands;
pub mod database;
pub mod messages;
pub mod queries;

pub use commands::account::{login, signup, Session};
pub use commands::listing::{edit_listing, patch_listing, post_listing, remove_listing};
pub use database::{Database, InitOutcome};
pub use queries::{AreaOptions, BrowseOutcome, OwnedListing};
