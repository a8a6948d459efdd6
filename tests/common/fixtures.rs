//! Static tables and field lists used across harnesses.

use super::builders::*;
use kaq::{ApiId, FieldSetTable};

pub const INDEX: &str = "some_idx";
pub const SEARCH: &str = "foo bar baz";

/// The base field universe shared by the canonical scenarios.
pub const BASE_FIELDS: &[&str] = &["plain_field", "override_field", "override_field2"];

/// Default layer of three plain fields plus one override for
/// `api1.com/SomeObj`.
pub fn scenario_table() -> FieldSetTable {
    FieldSetTable::new()
        .with(
            ApiId::default(),
            FieldSetBuilder::new()
                .plain("plain_field")
                .plain("override_field")
                .plain("override_field2")
                .build(),
        )
        .with(
            api("api1.com", "SomeObj"),
            FieldSetBuilder::new()
                .from_fields("override_field", &["other_field"])
                .build(),
        )
}

/// Base clause for `group/kind` with the shared index and search expression.
pub fn base_clause(group: &str, kind: &str) -> String {
    format!(
        r#"search index="{INDEX}" log_type=audit "objectRef.apiGroup"="{group}" "objectRef.resource"="{kind}" {SEARCH}"#
    )
}

/// The default exclusion clause.
pub fn exclude_clause() -> String {
    kaq::QuerySyntax::default().exclude_clause()
}
