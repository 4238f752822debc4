//! XLSX loading: one [`Sheet`] per worksheet, in workbook order.

use calamine::{open_workbook, Data, Reader, Xlsx};
use serde_json::Value;
use std::path::Path;

use crate::error::LoadResult;
use crate::models::{Sheet, Table};

/// Load every worksheet of an XLSX file.
///
/// The first row of each sheet is its header; sheet names are kept for
/// output. An empty worksheet yields an empty table rather than an
/// error — sheet-level emptiness is not a file-level failure.
pub fn load_workbook_file(path: &Path) -> LoadResult<Vec<Sheet>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let names = workbook.sheet_names().to_owned();

    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook.worksheet_range(&name)?;
        sheets.push(Sheet {
            table: range_to_table(&range),
            name,
        });
    }
    Ok(sheets)
}

/// Convert a cell range into a table, first row as header.
fn range_to_table(range: &calamine::Range<Data>) -> Table {
    let mut rows_iter = range.rows();

    let columns: Vec<String> = match rows_iter.next() {
        Some(header) => header.iter().map(header_name).collect(),
        None => return Table::default(),
    };

    let rows: Vec<Vec<Value>> = rows_iter
        .map(|row| row.iter().map(cell_to_value).collect())
        .collect();

    Table::new(columns, rows)
}

/// Render a header cell to its column name.
fn header_name(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Map a calamine cell onto the pipeline's cell currency.
fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => serde_json::Number::from_f64(dt.as_f64())
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Error(_) => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_mapping() {
        assert_eq!(cell_to_value(&Data::Empty), Value::Null);
        assert_eq!(cell_to_value(&Data::String("AB12".into())), json!("AB12"));
        assert_eq!(cell_to_value(&Data::Int(7)), json!(7));
        assert_eq!(cell_to_value(&Data::Float(1.5)), json!(1.5));
        assert_eq!(cell_to_value(&Data::Bool(true)), json!(true));
    }

    #[test]
    fn test_header_name_trims() {
        assert_eq!(header_name(&Data::String("  external_id  ".into())), "external_id");
        assert_eq!(header_name(&Data::Empty), "");
    }

    #[test]
    fn test_range_to_table() {
        let mut range = calamine::Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("external_id".into()));
        range.set_value((0, 1), Data::String("other".into()));
        range.set_value((1, 0), Data::String("ab".into()));
        range.set_value((1, 1), Data::Float(2.0));
        range.set_value((2, 0), Data::String("cd".into()));

        let table = range_to_table(&range);
        assert_eq!(table.columns, vec!["external_id", "other"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][0], json!("ab"));
        assert_eq!(table.rows[1][1], Value::Null);
    }

    #[test]
    fn test_empty_range() {
        let range: calamine::Range<Data> = calamine::Range::empty();
        let table = range_to_table(&range);
        assert!(table.columns.is_empty());
        assert_eq!(table.row_count(), 0);
    }
}
