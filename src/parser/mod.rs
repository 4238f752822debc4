//! Input file loading with encoding and delimiter auto-detection.
//!
//! Dispatches on extension: `.csv` loads as a single table, `.xlsx`
//! as one table per worksheet. CSV bytes go through charset detection
//! before parsing because real-world exports arrive in UTF-8, Latin-1,
//! Windows-1252, and GB18030 alike.

mod csv;
mod xlsx;

pub use self::csv::parse_csv_bytes;
pub use self::xlsx::load_workbook_file;

use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::models::Document;

/// Extensions the batch processor picks up.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["csv", "xlsx"];

/// Whether a path has a supported extension (ASCII case-insensitive).
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        })
}

/// Load one input file into a [`Document`].
pub fn load_document(path: &Path) -> LoadResult<Document> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    if ext.eq_ignore_ascii_case("csv") {
        let bytes = std::fs::read(path)?;
        Ok(Document::Csv(parse_csv_bytes(&bytes)?))
    } else if ext.eq_ignore_ascii_case("xlsx") {
        Ok(Document::Workbook(load_workbook_file(path)?))
    } else {
        Err(LoadError::UnsupportedFormat(ext.to_string()))
    }
}

/// Detect the charset of raw bytes.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        "gbk" | "gb2312" | "gb18030" => "gb18030".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the detected charset.
pub fn decode_content(bytes: &[u8], encoding: &str) -> LoadResult<String> {
    match encoding {
        "utf-8" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        "iso-8859-1" => Ok(encoding_rs::ISO_8859_15.decode(bytes).0.into_owned()),
        "windows-1252" => Ok(encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()),
        "gb18030" => {
            let (text, _, had_errors) = encoding_rs::GB18030.decode(bytes);
            if had_errors {
                return Err(LoadError::Encoding(encoding.to_string()));
            }
            Ok(text.into_owned())
        }
        // Unknown charsets fall back to lossy UTF-8 rather than failing
        // the whole file.
        _ => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Detect the delimiter by counting candidates in the header line.
pub fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [b';', b',', b'\t', b'|'];
    let mut best_sep = b',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep as char).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}
