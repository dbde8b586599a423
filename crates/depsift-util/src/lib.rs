//! Shared utilities for the depsift analyzer.
//!
//! This crate provides the cross-cutting concerns used by all other depsift
//! crates: the unified error type and filesystem helpers.

pub mod errors;
pub mod fs;
