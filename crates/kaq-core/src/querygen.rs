//! Query generation — merges field set layers and renders a search query.
//!
//! Layers are applied default → API-specific → extra layers in argument
//! order, each one replacing earlier specs for the same field name. The
//! merged result is rendered as
//!
//! ```text
//! search ... <expr> | eval a=...,b=... | fields a,b,c | fields - _raw,...
//! ```
//!
//! with the `eval` clause omitted when no field needs computing. All field
//! lists are emitted in lexicographic order.

use crate::error::QueryGenError;
use crate::syntax::{quote_field, QuerySyntax};
use crate::types::{ApiId, FieldSet, FieldSetTable, FieldSpec};
use std::collections::{BTreeMap, BTreeSet};

const CLAUSE_SEPARATOR: &str = "|";

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Renders queries from a borrowed [`FieldSetTable`].
#[derive(Debug, Clone)]
pub struct QueryGen<'a> {
    table: &'a FieldSetTable,
    syntax: QuerySyntax,
}

impl<'a> QueryGen<'a> {
    pub fn new(table: &'a FieldSetTable) -> Self {
        Self {
            table,
            syntax: QuerySyntax::default(),
        }
    }

    pub fn with_syntax(mut self, syntax: &QuerySyntax) -> Self {
        self.syntax = syntax.clone();
        self
    }

    /// Build the query for `api`.
    ///
    /// `all_fields` is the caller's universe of included fields; every name
    /// introduced by a layer is added to it. Fails only when the table has
    /// no default layer and nothing else yields a field to include.
    pub fn generate(
        &self,
        index: &str,
        api: &ApiId,
        search_expr: &str,
        all_fields: &[String],
        extra_layers: &[FieldSet],
    ) -> Result<String, QueryGenError> {
        let default_set = self.table.default_set();
        if default_set.is_none() {
            tracing::warn!(%api, "field set table has no default layer");
        }
        let api_set = self.table.get(api);

        let layers = default_set.into_iter().chain(api_set).chain(extra_layers);
        let merged = merge_layers(layers);

        let included: BTreeSet<&str> = all_fields
            .iter()
            .map(String::as_str)
            .chain(merged.keys().copied())
            .collect();

        if default_set.is_none() && included.is_empty() {
            return Err(QueryGenError::Configuration(format!(
                "no default field set and no fields to include for api {api}"
            )));
        }

        let computed: Vec<(&str, &FieldSpec)> = merged
            .iter()
            .filter(|(_, spec)| spec.is_computed())
            .map(|(name, spec)| (*name, *spec))
            .collect();

        tracing::debug!(
            %api,
            api_layer = api_set.is_some(),
            extra_layers = extra_layers.len(),
            computed = computed.len(),
            included = included.len(),
            "generating query"
        );

        let mut clauses = Vec::with_capacity(4);
        clauses.push(base_clause(index, api, search_expr));
        if !computed.is_empty() {
            clauses.push(self.eval_clause(&computed));
        }
        clauses.push(include_clause(&included));
        clauses.push(self.syntax.exclude_clause());

        Ok(clauses.join(CLAUSE_SEPARATOR))
    }

    fn eval_clause(&self, computed: &[(&str, &FieldSpec)]) -> String {
        let assignments: Vec<String> = computed
            .iter()
            .map(|(name, spec)| format!("{name}={}", self.render_spec(spec)))
            .collect();
        format!("eval {}", assignments.join(","))
    }

    fn render_spec(&self, spec: &FieldSpec) -> String {
        if let Some(expr) = spec.expr() {
            return expr.to_string();
        }
        match spec.source_fields.as_slice() {
            [single] => quote_field(single),
            many => self.syntax.concat(many),
        }
    }
}

impl FieldSetTable {
    /// Build a query with the default [`QuerySyntax`].
    ///
    /// See [`QueryGen::generate`].
    pub fn generate(
        &self,
        index: &str,
        api: &ApiId,
        search_expr: &str,
        all_fields: &[String],
        extra_layers: &[FieldSet],
    ) -> Result<String, QueryGenError> {
        QueryGen::new(self).generate(index, api, search_expr, all_fields, extra_layers)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Shallow per-name overwrite; later layers win.
fn merge_layers<'s>(layers: impl Iterator<Item = &'s FieldSet>) -> BTreeMap<&'s str, &'s FieldSpec> {
    let mut merged = BTreeMap::new();
    for layer in layers {
        for (name, spec) in layer.iter() {
            merged.insert(name, spec);
        }
    }
    merged
}

fn base_clause(index: &str, api: &ApiId, search_expr: &str) -> String {
    format!(
        r#"search index="{index}" log_type=audit "objectRef.apiGroup"="{}" "objectRef.resource"="{}" {search_expr}"#,
        api.group, api.kind
    )
}

fn include_clause(names: &BTreeSet<&str>) -> String {
    format!("fields {}", names.iter().copied().collect::<Vec<_>>().join(","))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
