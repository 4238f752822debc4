//! Batch orchestration: one directory in, one directory out.
//!
//! Files are processed strictly one at a time; a file that cannot be
//! loaded or written is logged and recorded, and the batch moves on.
//! Nothing escapes the batch loop.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::{ColumnRules, Config};
use crate::error::{BatchError, BatchResult};
use crate::models::Direction;
use crate::parser::{is_supported, load_document};
use crate::transform::augment_document;
use crate::writer::{output_path, write_document};

// =============================================================================
// Options / Report
// =============================================================================

/// Everything one batch run needs, injected up front.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory scanned (non-recursively) for input files.
    pub input_dir: PathBuf,
    /// Directory the transformed files are written to.
    pub output_dir: PathBuf,
    /// Transform direction for the whole run.
    pub direction: Direction,
    /// Column rules for both directions.
    pub columns: ColumnRules,
}

impl BatchOptions {
    /// Build options for one mode from the loaded configuration.
    pub fn from_config(config: &Config, direction: Direction) -> Self {
        Self {
            input_dir: config.input_dir(direction).to_path_buf(),
            output_dir: config.output_dir(direction).to_path_buf(),
            direction,
            columns: config.columns.clone(),
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output paths written, in processing order.
    pub processed: Vec<PathBuf>,
    /// Files that failed, with their errors.
    pub failures: Vec<FileFailure>,
}

/// One failed input file.
#[derive(Debug)]
pub struct FileFailure {
    /// The input file that failed.
    pub path: PathBuf,
    /// What went wrong.
    pub error: BatchError,
}

impl BatchReport {
    /// Whether every attempted file succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line summary for the final log.
    pub fn summary(&self) -> String {
        format!(
            "{} file(s) written, {} failed",
            self.processed.len(),
            self.failures.len()
        )
    }
}

// =============================================================================
// Batch loop
// =============================================================================

/// Run one batch: enumerate, transform, write.
///
/// Always returns a report. A missing or unreadable input directory is
/// logged and yields an empty report; per-file failures are collected
/// and never abort the remaining files.
pub fn run(options: &BatchOptions) -> BatchReport {
    let mut report = BatchReport::default();

    let files = match list_input_files(&options.input_dir) {
        Ok(files) => files,
        Err(e) => {
            error!("cannot read input directory {}: {}", options.input_dir.display(), e);
            return report;
        }
    };

    if files.is_empty() {
        info!("no .csv or .xlsx files found in {}", options.input_dir.display());
        return report;
    }

    info!("{} file(s) to {}:", files.len(), options.direction.mode_name());
    for file in &files {
        info!(" - {}", file.display());
    }

    if let Err(e) = fs::create_dir_all(&options.output_dir) {
        error!("cannot create output directory {}: {}", options.output_dir.display(), e);
        return report;
    }

    for file in files {
        match process_file(&file, options) {
            Ok(written) => {
                info!("processed {} -> {}", file.display(), written.display());
                report.processed.push(written);
            }
            Err(e) => {
                error!("{}: {} ({})", file.display(), e, e.kind());
                report.failures.push(FileFailure { path: file, error: e });
            }
        }
    }

    report
}

/// Load, augment, and write one input file.
fn process_file(path: &Path, options: &BatchOptions) -> BatchResult<PathBuf> {
    let mut document = load_document(path)?;
    augment_document(&mut document, options.direction, &options.columns);

    let out = output_path(path, &options.output_dir, options.direction)?;
    write_document(&document, &out)?;
    Ok(out)
}

/// Eligible input files, sorted by name for a deterministic run order.
fn list_input_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported(path))
        .collect();
    files.sort();
    Ok(files)
}
