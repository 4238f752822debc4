//! CSV loading: decoded text to a [`Table`].

use csv::ReaderBuilder;
use serde_json::Value;

use super::{decode_content, detect_delimiter, detect_encoding};
use crate::error::{LoadError, LoadResult};
use crate::models::Table;

/// Parse raw CSV bytes into a table.
///
/// The first record is the header. Rows shorter than the header are
/// padded with null cells; longer rows are truncated to the header
/// width. All cells load as strings — CSV has no richer cell types.
pub fn parse_csv_bytes(bytes: &[u8]) -> LoadResult<Table> {
    if bytes.is_empty() {
        return Err(LoadError::EmptyFile);
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    // Our own output carries a BOM for Excel; strip it on the way in.
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    let delimiter = detect_delimiter(content);

    parse_csv_str(content, delimiter)
}

/// Parse decoded CSV text with an explicit delimiter.
pub fn parse_csv_str(content: &str, delimiter: u8) -> LoadResult<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if columns.is_empty() || (columns.len() == 1 && columns[0].is_empty()) {
        return Err(LoadError::EmptyFile);
    }

    let width = columns.len();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<Value> = record
            .iter()
            .take(width)
            .map(|cell| Value::String(cell.to_string()))
            .collect();
        row.resize(width, Value::Null);
        rows.push(row);
    }

    Ok(Table { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_csv() {
        let table = parse_csv_bytes(b"name,external_id\nAlice,AB12\nBob,CD34").unwrap();
        assert_eq!(table.columns, vec!["name", "external_id"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0], vec![json!("Alice"), json!("AB12")]);
    }

    #[test]
    fn test_semicolon_delimiter_detected() {
        let table = parse_csv_bytes(b"a;b;c\n1;2;3").unwrap();
        assert_eq!(table.columns, vec!["a", "b", "c"]);
        assert_eq!(table.rows[0][2], json!("3"));
    }

    #[test]
    fn test_quoted_cells_keep_delimiters() {
        let table = parse_csv_bytes(b"name,note\n\"Doe, Jane\",ok").unwrap();
        assert_eq!(table.rows[0][0], json!("Doe, Jane"));
    }

    #[test]
    fn test_short_rows_padded() {
        let table = parse_csv_bytes(b"a,b,c\n1\n1,2,3").unwrap();
        assert_eq!(table.rows[0], vec![json!("1"), Value::Null, Value::Null]);
        assert_eq!(table.rows[1].len(), 3);
    }

    #[test]
    fn test_long_rows_truncated() {
        let table = parse_csv_bytes(b"a,b\n1,2,3,4").unwrap();
        assert_eq!(table.rows[0], vec![json!("1"), json!("2")]);
    }

    #[test]
    fn test_bom_stripped() {
        let table = parse_csv_bytes("\u{feff}a,b\n1,2".as_bytes()).unwrap();
        assert_eq!(table.columns, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_file_errors() {
        match parse_csv_bytes(b"") {
            Err(LoadError::EmptyFile) => {}
            other => panic!("expected EmptyFile, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_file() {
        let table = parse_csv_bytes(b"a,b\n").unwrap();
        assert_eq!(table.columns, vec!["a", "b"]);
        assert_eq!(table.row_count(), 0);
    }
}
