//! Dependency-light base crate for cardex.
//!
//! Holds configuration loading, the core error taxonomy, and shared
//! types used by the conversion core and the CLI.

pub mod config;
pub mod error;
pub mod types;
