//! Output serialization: derived filenames, CSV and XLSX writing.
//!
//! A document is written back in its original format. Sanitize mode
//! appends `_sanitized` to the file stem; desanitize mode keeps the
//! input name (the output directory distinguishes the runs).

use rust_xlsxwriter::Workbook;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{WriteError, WriteResult};
use crate::models::{Direction, Document, Sheet, Table};

/// UTF-8 byte order mark; Excel needs it to pick up UTF-8 CSVs.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Derive the output path for an input file.
///
/// Forward: `data.csv` → `<output_dir>/data_sanitized.csv`.
/// Backward: `data.csv` → `<output_dir>/data.csv`.
pub fn output_path(input: &Path, output_dir: &Path, direction: Direction) -> WriteResult<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| WriteError::BadFileName(input.display().to_string()))?;
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| WriteError::BadFileName(input.display().to_string()))?;

    let name = match direction {
        Direction::Forward => format!("{stem}_sanitized.{ext}"),
        Direction::Backward => format!("{stem}.{ext}"),
    };
    Ok(output_dir.join(name))
}

/// Serialize a document to `path` in its original format.
pub fn write_document(document: &Document, path: &Path) -> WriteResult<()> {
    match document {
        Document::Csv(table) => write_csv(table, path),
        Document::Workbook(sheets) => write_xlsx(sheets, path),
    }
}

/// Write one table as comma-delimited UTF-8 CSV with a BOM.
fn write_csv(table: &Table, path: &Path) -> WriteResult<()> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(render_cell))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a workbook, one worksheet per sheet, names preserved.
fn write_xlsx(sheets: &[Sheet], path: &Path) -> WriteResult<()> {
    let mut workbook = Workbook::new();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name.as_str())?;

        for (col, name) in sheet.table.columns.iter().enumerate() {
            worksheet.write_string(0, col as u16, name.as_str())?;
        }
        for (r, row) in sheet.table.rows.iter().enumerate() {
            let excel_row = (r + 1) as u32;
            for (c, cell) in row.iter().enumerate() {
                let col = c as u16;
                match cell {
                    Value::Null => {}
                    Value::String(s) => {
                        worksheet.write_string(excel_row, col, s.as_str())?;
                    }
                    Value::Number(n) => {
                        worksheet.write_number(excel_row, col, n.as_f64().unwrap_or(0.0))?;
                    }
                    Value::Bool(b) => {
                        worksheet.write_boolean(excel_row, col, *b)?;
                    }
                    other => {
                        worksheet.write_string(excel_row, col, other.to_string().as_str())?;
                    }
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Render a cell for CSV output.
fn render_cell(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
