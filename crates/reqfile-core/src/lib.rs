//! Core data types for the reqfile tool.
//!
//! This crate defines the in-memory model of a pip-style `requirements.txt`
//! manifest: package requirements, their version constraints, and the
//! line-oriented reader that produces an ordered [`manifest::Manifest`].
//!
//! This crate is intentionally free of terminal and CLI concerns.

pub mod manifest;
pub mod requirement;
