//! Error types for the idshift batch pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`LoadError`] - file loading/decoding errors
//! - [`WriteError`] - output serialization errors
//! - [`ConfigError`] - configuration file errors
//! - [`BatchError`] - per-file wrapper used by the batch loop
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries. The batch loop
//! contains `BatchError` at single-file granularity; nothing
//! propagates past it.

use thiserror::Error;

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while loading an input file into tables.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Decoding with the detected encoding failed.
    #[error("Failed to decode content as {0}")]
    Encoding(String),

    /// Invalid CSV structure.
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid XLSX workbook.
    #[error("Invalid XLSX workbook: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    /// File has no content at all.
    #[error("File is empty")]
    EmptyFile,

    /// Unsupported file extension reached the loader.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

// =============================================================================
// Write Errors
// =============================================================================

/// Errors while serializing tables back to disk.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create or write the output file.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// XLSX serialization failed.
    #[error("XLSX write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Output path has no usable file name.
    #[error("Cannot derive output name for '{0}'")]
    BadFileName(String),
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors while reading the optional configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON.
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Batch Errors (per-file)
// =============================================================================

/// A failure while processing one input file.
///
/// Captured in [`crate::batch::BatchReport::failures`]; one failing
/// file never aborts the rest of the batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The file could not be loaded.
    #[error("{0}")]
    Load(#[from] LoadError),

    /// The output could not be written.
    #[error("{0}")]
    Write(#[from] WriteError),
}

impl BatchError {
    /// Short label for log lines ("unreadable file" / "write failure").
    pub fn kind(&self) -> &'static str {
        match self {
            BatchError::Load(_) => "unreadable file",
            BatchError::Write(_) => "write failure",
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for write operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for per-file batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // LoadError -> BatchError
        let load_err = LoadError::EmptyFile;
        let batch_err: BatchError = load_err.into();
        assert!(batch_err.to_string().contains("empty"));
        assert_eq!(batch_err.kind(), "unreadable file");

        // WriteError -> BatchError
        let write_err = WriteError::BadFileName("???".into());
        let batch_err: BatchError = write_err.into();
        assert_eq!(batch_err.kind(), "write failure");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let load_err: LoadError = io_err.into();
        assert!(load_err.to_string().contains("gone"));
    }
}
