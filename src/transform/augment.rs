//! Table augmentation: derived identifier columns.
//!
//! For every configured source column present in a table, a derived
//! column is computed with the edge transform and inserted immediately
//! to its right. Source values are never mutated and unrelated columns
//! keep their relative order. Tables without any matching source
//! column pass through untouched.

use serde_json::Value;
use std::collections::HashMap;

use super::identifier::transform_cached;
use crate::config::ColumnRules;
use crate::models::{Direction, Document, Table};

/// Augment one table in place.
///
/// Matching is exact and case-sensitive. When several source columns
/// match, insertions run right-to-left so earlier column indices are
/// not disturbed by later splices. A derived column that already
/// exists (a re-run over its own output) is overwritten in place
/// rather than duplicated.
pub fn augment_table(table: &mut Table, direction: Direction, rules: &ColumnRules) {
    // (source index, derived name) for every rule present in this table.
    let mut targets: Vec<(usize, &str)> = rules
        .for_direction(direction)
        .iter()
        .filter_map(|rule| {
            table
                .column_index(&rule.source)
                .map(|i| (i, rule.derived.as_str()))
        })
        .collect();
    targets.sort_by(|a, b| b.0.cmp(&a.0));

    for (source_idx, derived) in targets {
        let mut cache: HashMap<String, String> = HashMap::new();
        let values: Vec<Value> = table
            .column_values(source_idx)
            .map(|cell| transform_cached(cell, direction, &mut cache))
            .collect();

        match table.column_index(derived) {
            Some(existing) => table.replace_column(existing, values),
            None => table.insert_column(source_idx + 1, derived, values),
        }
    }
}

/// Augment every table of a loaded document in place.
pub fn augment_document(document: &mut Document, direction: Direction, rules: &ColumnRules) {
    for table in document.tables_mut() {
        augment_table(table, direction, rules);
    }
}
