//! Core types for kaq-core.
//!
//! This module defines the layered field configuration model: the [`ApiId`]
//! key, per-field [`FieldSpec`] rendering instructions, a [`FieldSet`] layer,
//! and the [`FieldSetTable`] holding the default layer plus per-API overrides.

use crate::error::QueryGenError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Identifies a Kubernetes-style API resource type by `(group, kind)`.
///
/// The zero value (empty group and kind) is the default layer key that
/// applies to every API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApiId {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub kind: String,
}

impl ApiId {
    pub fn new(group: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            kind: kind.into(),
        }
    }

    /// True for the zero value used as the default layer key.
    pub fn is_default(&self) -> bool {
        self.group.is_empty() && self.kind.is_empty()
    }
}

impl std::fmt::Display for ApiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.group, self.kind)
    }
}

impl std::str::FromStr for ApiId {
    type Err = QueryGenError;

    /// Parse `group/kind`. The core API group is written with an empty
    /// group, e.g. `/pods`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('/') {
            Some((group, kind)) => Ok(ApiId::new(group.trim(), kind.trim())),
            None => Err(QueryGenError::InvalidApiId(s.to_string())),
        }
    }
}

/// How a single field is rendered into the query.
///
/// A spec with neither `source_fields` nor `source_expr` is a plain
/// passthrough: the field is included but never evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Source fields combined into this one, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_fields: Vec<String>,
    /// Literal eval expression, emitted without quoting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_expr: Option<String>,
}

impl FieldSpec {
    pub fn passthrough() -> Self {
        Self::default()
    }

    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source_fields: fields.into_iter().map(Into::into).collect(),
            source_expr: None,
        }
    }

    pub fn from_expr(expr: impl Into<String>) -> Self {
        Self {
            source_fields: Vec::new(),
            source_expr: Some(expr.into()),
        }
    }

    /// The literal expression, if one is set and non-empty.
    pub fn expr(&self) -> Option<&str> {
        self.source_expr.as_deref().filter(|e| !e.is_empty())
    }

    /// Whether this field needs an `eval` expression.
    pub fn is_computed(&self) -> bool {
        self.expr().is_some() || !self.source_fields.is_empty()
    }
}

/// One override layer: field name → [`FieldSpec`].
///
/// Backed by a `BTreeMap`, so iteration is always in lexicographic name
/// order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet(BTreeMap<String, FieldSpec>);

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.insert(name, spec);
        self
    }

    /// Insert or replace the spec for `name`, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, spec: FieldSpec) -> Option<FieldSpec> {
        self.0.insert(name.into(), spec)
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Field names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, FieldSpec)> for FieldSet {
    fn from_iter<T: IntoIterator<Item = (S, FieldSpec)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// The full field configuration: a default layer plus per-API overrides.
///
/// Built once and then only read; query generation borrows it immutably.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSetTable {
    layers: HashMap<ApiId, FieldSet>,
}

impl FieldSetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, api: ApiId, set: FieldSet) -> Self {
        self.insert(api, set);
        self
    }

    pub fn insert(&mut self, api: ApiId, set: FieldSet) -> Option<FieldSet> {
        self.layers.insert(api, set)
    }

    /// Exact-match lookup; no wildcard or partial matching.
    pub fn get(&self, api: &ApiId) -> Option<&FieldSet> {
        self.layers.get(api)
    }

    /// The layer keyed by the zero-value [`ApiId`].
    pub fn default_set(&self) -> Option<&FieldSet> {
        self.layers.get(&ApiId::default())
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl FromIterator<(ApiId, FieldSet)> for FieldSetTable {
    fn from_iter<T: IntoIterator<Item = (ApiId, FieldSet)>>(iter: T) -> Self {
        Self {
            layers: iter.into_iter().collect(),
        }
    }
}
