//! kaq — Kubernetes audit query generator
//!
//! Renders a layered field configuration into a search query for audit logs.
//! This crate re-exports [`kaq_core`] and adds the command-line front end so
//! integration tests can drive it without spawning a process.
//!
//! # Architecture
//!
//! ```text
//! config.toml ──► Config ──► FieldSetTable ──┐
//!                                            ├──► QueryGen ──► stdout
//! --extra files ──► FieldSet layers ─────────┘
//! ```

pub mod cli;

pub use kaq_core::{
    config, ApiId, ConfigError, FieldSet, FieldSetTable, FieldSpec, QueryGen, QueryGenError,
    QuerySyntax,
};
