//! kaq-core — Kubernetes audit query generator core library.
//!
//! This crate holds the layered field configuration model and the query
//! generator that renders it, plus configuration loading.
//!
//! # Pipeline
//!
//! ```text
//! Config ──► FieldSetTable ──► QueryGen ──► query string
//!                                 ▲
//!            extra FieldSets ─────┘
//! ```
//!
//! Generation is a pure function of its inputs: the table is only ever
//! borrowed immutably, so it can be shared freely between callers.

pub mod config;
pub mod error;
pub mod querygen;
pub mod syntax;
pub mod types;

pub use error::{ConfigError, QueryGenError};
pub use querygen::QueryGen;
pub use syntax::QuerySyntax;
pub use types::{ApiId, FieldSet, FieldSetTable, FieldSpec};
