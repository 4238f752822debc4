//! Domain models for the idshift batch pipeline.
//!
//! This module contains the core data structures used throughout the tool:
//!
//! - [`Direction`] - which way the shift cipher runs (sanitize/desanitize)
//! - [`Table`] - one tabular dataset: ordered columns plus row-major cells
//! - [`Sheet`] - a named table inside a workbook
//! - [`Document`] - one loaded input file (single CSV table or XLSX workbook)

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Transform Direction
// =============================================================================

/// Direction of the identifier transform.
///
/// `Forward` obscures identifiers (sanitize), `Backward` recovers
/// them (desanitize). The direction is chosen once at startup and
/// threaded explicitly through the batch; no component reads it from
/// ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Sanitize: shift characters forward.
    Forward,
    /// Desanitize: shift characters backward.
    Backward,
}

impl Direction {
    /// Human-readable mode name used in logs.
    pub fn mode_name(&self) -> &'static str {
        match self {
            Direction::Forward => "sanitize",
            Direction::Backward => "desanitize",
        }
    }
}

// =============================================================================
// Table
// =============================================================================

/// One tabular dataset: ordered column names and row-major cells.
///
/// Every row holds exactly one cell per column, in column order. Cells
/// are [`serde_json::Value`]: strings for text, numbers/booleans as
/// loaded from XLSX, `Null` for blanks. Column names are expected to
/// be unique within a table; lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Ordered column names (header row).
    pub columns: Vec<String>,
    /// Rows, each parallel to `columns`.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from a header and rows, padding or truncating
    /// every row to the header width.
    pub fn new(columns: Vec<String>, mut rows: Vec<Vec<Value>>) -> Self {
        let width = columns.len();
        for row in &mut rows {
            row.resize(width, Value::Null);
        }
        Self { columns, rows }
    }

    /// Index of a column by exact, case-sensitive name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Whether the table has a column with this exact name.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Insert a new column at `index`, shifting later columns right.
    ///
    /// `values` must hold one cell per row; missing cells are filled
    /// with `Null`, extras are dropped.
    pub fn insert_column(&mut self, index: usize, name: impl Into<String>, values: Vec<Value>) {
        let index = index.min(self.columns.len());
        self.columns.insert(index, name.into());
        let mut values = values.into_iter();
        for row in &mut self.rows {
            row.insert(index, values.next().unwrap_or(Value::Null));
        }
    }

    /// Replace the cells of an existing column in place.
    pub fn replace_column(&mut self, index: usize, values: Vec<Value>) {
        let mut values = values.into_iter();
        for row in &mut self.rows {
            row[index] = values.next().unwrap_or(Value::Null);
        }
    }

    /// All cells of one column, in row order.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Number of rows (excluding the header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

// =============================================================================
// Sheet / Document
// =============================================================================

/// A named table inside a workbook. Sheets are independent; they share
/// only the output file identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Worksheet name, preserved for output.
    pub name: String,
    /// The sheet's tabular content.
    pub table: Table,
}

/// One loaded input file.
///
/// A CSV file yields exactly one table; an XLSX workbook yields one
/// sheet per worksheet, in workbook order.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Single-table CSV file.
    Csv(Table),
    /// Multi-sheet XLSX workbook.
    Workbook(Vec<Sheet>),
}

impl Document {
    /// Iterate over every table in the document, mutably.
    pub fn tables_mut(&mut self) -> Box<dyn Iterator<Item = &mut Table> + '_> {
        match self {
            Document::Csv(table) => Box::new(std::iter::once(table)),
            Document::Workbook(sheets) => Box::new(sheets.iter_mut().map(|s| &mut s.table)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_table() -> Table {
        Table::new(
            vec!["id".into(), "external_id".into(), "other".into()],
            vec![
                vec![json!("1"), json!("AB12"), json!("x")],
                vec![json!("2"), json!("CD34"), json!("y")],
            ],
        )
    }

    #[test]
    fn test_new_pads_short_rows() {
        let table = Table::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![vec![json!("1")]],
        );
        assert_eq!(table.rows[0], vec![json!("1"), Value::Null, Value::Null]);
    }

    #[test]
    fn test_column_lookup_is_case_sensitive() {
        let table = sample_table();
        assert_eq!(table.column_index("external_id"), Some(1));
        assert_eq!(table.column_index("External_Id"), None);
        assert!(!table.has_column("missing"));
    }

    #[test]
    fn test_insert_column_shifts_right() {
        let mut table = sample_table();
        table.insert_column(2, "external_id_sanitized", vec![json!("BC23"), json!("DE45")]);

        assert_eq!(
            table.columns,
            vec!["id", "external_id", "external_id_sanitized", "other"]
        );
        assert_eq!(table.rows[0][2], json!("BC23"));
        assert_eq!(table.rows[0][3], json!("x"));
    }

    #[test]
    fn test_insert_column_fills_missing_cells() {
        let mut table = sample_table();
        table.insert_column(3, "extra", vec![json!("only-one")]);
        assert_eq!(table.rows[1][3], Value::Null);
    }

    #[test]
    fn test_replace_column() {
        let mut table = sample_table();
        table.replace_column(2, vec![json!("p"), json!("q")]);
        assert_eq!(table.rows[0][2], json!("p"));
        assert_eq!(table.rows[1][2], json!("q"));
        assert_eq!(table.columns.len(), 3);
    }

    #[test]
    fn test_document_tables_mut() {
        let mut doc = Document::Workbook(vec![
            Sheet { name: "A".into(), table: sample_table() },
            Sheet { name: "B".into(), table: Table::default() },
        ]);
        assert_eq!(doc.tables_mut().count(), 2);

        let mut doc = Document::Csv(sample_table());
        assert_eq!(doc.tables_mut().count(), 1);
    }

    #[test]
    fn test_mode_name() {
        assert_eq!(Direction::Forward.mode_name(), "sanitize");
        assert_eq!(Direction::Backward.mode_name(), "desanitize");
    }
}
