//! Query-shape assertion macros for kaq harnesses.
//!
//! These split a generated query on `|` and report which clause broke the
//! expected shape.

/// Split a query into its `|`-separated clauses.
pub fn clauses(query: &str) -> Vec<&str> {
    query.split('|').collect()
}

/// Field names listed by the `fields <a,b,c>` include clause.
pub fn included_fields(query: &str) -> Vec<&str> {
    clauses(query)
        .into_iter()
        .find_map(|c| c.strip_prefix("fields ").filter(|rest| !rest.starts_with("- ")))
        .map(|list| list.split(',').collect())
        .unwrap_or_default()
}

/// `name=rendering` assignments in the `eval` clause, if any.
pub fn eval_assignments(query: &str) -> Vec<&str> {
    clauses(query)
        .into_iter()
        .find_map(|c| c.strip_prefix("eval "))
        .map(|list| list.split(',').collect())
        .unwrap_or_default()
}

/// Assert the clause kinds of a query, in order.
///
/// ```rust
/// assert_clause_order!(query, ["search", "eval", "fields", "fields -"]);
/// ```
#[macro_export]
macro_rules! assert_clause_order {
    ($query:expr, [$($kind:expr),* $(,)?]) => {{
        let query: &str = &$query;
        let expected: Vec<&str> = vec![$($kind),*];
        let actual: Vec<&str> = query
            .split('|')
            .map(|c| {
                if c.starts_with("fields - ") {
                    "fields -"
                } else {
                    c.split(' ').next().unwrap_or("")
                }
            })
            .collect();
        if actual != expected {
            panic!(
                "assert_clause_order! failed:\n  expected: {:?}\n  actual:   {:?}\n  query: {}",
                expected, actual, query
            );
        }
    }};
}

/// Assert that a list of names is in strictly increasing lexicographic order.
#[macro_export]
macro_rules! assert_sorted_unique {
    ($names:expr) => {{
        let names: Vec<&str> = $names;
        for pair in names.windows(2) {
            if pair[0] >= pair[1] {
                panic!(
                    "assert_sorted_unique! failed: {:?} is not before {:?}\n  names: {:?}",
                    pair[0], pair[1], names
                );
            }
        }
    }};
}
