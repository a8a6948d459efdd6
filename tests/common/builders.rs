//! Test builders — ergonomic constructors for tables, layers, and field lists.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use kaq::{ApiId, FieldSet, FieldSetTable, FieldSpec};

// ---------------------------------------------------------------------------
// FieldSetBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`FieldSet`] layers.
///
/// # Example
///
/// ```rust
/// let layer = FieldSetBuilder::new()
///     .plain("verb")
///     .from_fields("workload", &["objectRef.namespace", "objectRef.name"])
///     .expr("age", "now()-_time")
///     .build();
/// ```
#[derive(Default)]
pub struct FieldSetBuilder {
    set: FieldSet,
}

impl FieldSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(mut self, name: &str) -> Self {
        self.set.insert(name, FieldSpec::passthrough());
        self
    }

    pub fn from_fields(mut self, name: &str, sources: &[&str]) -> Self {
        self.set.insert(name, FieldSpec::from_fields(sources.iter().copied()));
        self
    }

    pub fn expr(mut self, name: &str, expr: &str) -> Self {
        self.set.insert(name, FieldSpec::from_expr(expr));
        self
    }

    pub fn build(self) -> FieldSet {
        self.set
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build an [`ApiId`] from string slices.
pub fn api(group: &str, kind: &str) -> ApiId {
    ApiId::new(group, kind)
}

/// Build an owned field list.
pub fn field_list(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// A table holding only a default layer of plain fields.
pub fn default_only_table(names: &[&str]) -> FieldSetTable {
    let layer = names
        .iter()
        .fold(FieldSetBuilder::new(), |b, name| b.plain(name))
        .build();
    FieldSetTable::new().with(ApiId::default(), layer)
}
