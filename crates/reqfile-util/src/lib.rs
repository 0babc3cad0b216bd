//! Shared utilities for the reqfile tool.
//!
//! This crate provides the cross-cutting concerns used by the other reqfile
//! crates: the unified error type and Cargo-style terminal status lines.

pub mod errors;
pub mod status;
