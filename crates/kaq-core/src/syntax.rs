//! Backend query-language details that are not business logic.
//!
//! The string concatenation operator and the list of backend-internal fields
//! dropped from every result live here so they can follow the backend's
//! syntax without touching the merge algorithm.

use serde::Deserialize;

/// Operator used to join several quoted source fields in an `eval`.
pub const DEFAULT_CONCAT_OPERATOR: &str = "+";

/// Backend-internal fields removed from every result.
pub const DEFAULT_EXCLUDE_FIELDS: &[&str] = &[
    "_bkt",
    "_cd",
    "_eventtype_color",
    "_indextime",
    "_kv",
    "_raw",
    "_serial",
    "_si",
    "_sourcetype",
    "_subsecond",
    "date_*",
    "linecount",
    "punct",
    "splunk_server",
    "splunk_server_group",
    "timeendpos",
    "timestartpos",
];

/// Rendering rules for the target search language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuerySyntax {
    #[serde(default = "default_concat_operator")]
    pub concat_operator: String,
    #[serde(default = "default_exclude_fields")]
    pub exclude_fields: Vec<String>,
}

fn default_concat_operator() -> String { DEFAULT_CONCAT_OPERATOR.to_string() }
fn default_exclude_fields() -> Vec<String> {
    DEFAULT_EXCLUDE_FIELDS.iter().map(|s| s.to_string()).collect()
}

impl Default for QuerySyntax {
    fn default() -> Self {
        Self {
            concat_operator: default_concat_operator(),
            exclude_fields: default_exclude_fields(),
        }
    }
}

impl QuerySyntax {
    /// The trailing `fields - ...` clause, in configured order.
    pub fn exclude_clause(&self) -> String {
        format!("fields - {}", self.exclude_fields.join(","))
    }

    /// Join several source fields into one quoted concatenation.
    pub fn concat(&self, fields: &[String]) -> String {
        fields
            .iter()
            .map(|f| quote_field(f))
            .collect::<Vec<_>>()
            .join(&self.concat_operator)
    }
}

/// Single-quoted field reference, as the eval language expects.
pub fn quote_field(name: &str) -> String {
    format!("'{name}'")
}
