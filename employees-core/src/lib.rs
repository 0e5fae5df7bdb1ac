//! # Employees Core Library
//!
//! This crate contains the domain layer of the Employees service, shared by
//! the HTTP API crate and its tests.
//!
//! ## Module Organization
//!
//! - `model`: Employee record types
//! - `store`: In-memory record store with synchronized mutation
//! - `validate`: Request parameter validation
//! - `envelope`: Outcome envelopes (`success` / `error` / `skipped`)

pub mod envelope;
pub mod model;
pub mod store;
pub mod validate;

/// Current version of the employees core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
