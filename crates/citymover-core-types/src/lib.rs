//! Core types shared across City Mover facilities
//!
//! This crate provides foundational types used by both the error and
//! logging facilities:
//!
//! - **Schema constants**: Canonical field keys and event names
//! - **Sensitive data**: `Sensitive<T>` marker for automatic redaction

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
