//! Command orchestration layer.
//!
//! Write-side operations. Failures are returned to the caller as `ExError`
//! after being logged.

pub mod account;
pub mod listing;
