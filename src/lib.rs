//! # idshift - batch identifier sanitization for tabular files
//!
//! idshift walks a directory of `.csv`/`.xlsx` files and inserts a
//! reversibly obscured copy of configured identifier columns next to
//! their sources. Sanitize shifts characters forward, desanitize
//! shifts them back; the transform touches only the first two and last
//! two non-space characters of each value.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV/XLSX   │────▶│   Parser    │────▶│  Augmenter  │────▶│   Writer    │
//! │ (input dir) │     │ (auto-enc)  │     │ (shift ±1)  │     │ (output dir)│
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use idshift::{batch, BatchOptions, Config, Direction};
//!
//! let config = Config::load_or_default();
//! let report = batch::run(&BatchOptions::from_config(&config, Direction::Forward));
//! println!("{}", report.summary());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - layered error types
//! - [`models`] - tables, sheets, documents, transform direction
//! - [`config`] - column rules and directories, optional JSON override
//! - [`parser`] - CSV/XLSX loading with encoding auto-detection
//! - [`transform`] - shift cipher, edge transform, table augmentation
//! - [`writer`] - CSV/XLSX output with derived filenames
//! - [`batch`] - the per-file orchestration loop

// Core modules
pub mod error;
pub mod models;

// Configuration
pub mod config;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod writer;

// Orchestration
pub mod batch;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{BatchError, ConfigError, LoadError, WriteError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Direction, Document, Sheet, Table};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{ColumnRule, ColumnRules, Config, CONFIG_FILE};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    augment_document, augment_table, shift_backward, shift_forward, transform_value,
};

// =============================================================================
// Re-exports - Batch
// =============================================================================

pub use batch::{BatchOptions, BatchReport, FileFailure};
