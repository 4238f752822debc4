//! Tool configuration: column rules and input/output directories.
//!
//! Everything has built-in defaults matching the fixed identifier
//! columns; an optional `idshift.json` next to the process overrides
//! them. A missing file is normal, an unreadable or invalid one is
//! reported and the defaults are used — configuration problems never
//! stop the batch.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{ConfigError, ConfigResult};
use crate::models::Direction;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "idshift.json";

// =============================================================================
// Column Rules
// =============================================================================

/// One source column and the name of the column derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRule {
    /// Column the values are read from (exact, case-sensitive match).
    pub source: String,
    /// Column the transformed values are written to.
    pub derived: String,
}

impl ColumnRule {
    fn new(source: &str, derived: &str) -> Self {
        Self {
            source: source.to_string(),
            derived: derived.to_string(),
        }
    }
}

/// Ordered source→derived pairs for each direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRules {
    /// Rules applied when sanitizing.
    #[serde(default = "default_sanitize_rules")]
    pub sanitize: Vec<ColumnRule>,
    /// Rules applied when desanitizing.
    #[serde(default = "default_desanitize_rules")]
    pub desanitize: Vec<ColumnRule>,
}

fn default_sanitize_rules() -> Vec<ColumnRule> {
    vec![
        ColumnRule::new("external_id", "external_id_sanitized"),
        ColumnRule::new("internal_id", "internal_id_sanitized"),
    ]
}

fn default_desanitize_rules() -> Vec<ColumnRule> {
    vec![
        ColumnRule::new("external_id_sanitized", "external_desanitized"),
        ColumnRule::new("internal_id_sanitized", "internal_desanitized"),
    ]
}

impl Default for ColumnRules {
    fn default() -> Self {
        Self {
            sanitize: default_sanitize_rules(),
            desanitize: default_desanitize_rules(),
        }
    }
}

impl ColumnRules {
    /// The rule list for one direction.
    pub fn for_direction(&self, direction: Direction) -> &[ColumnRule] {
        match direction {
            Direction::Forward => &self.sanitize,
            Direction::Backward => &self.desanitize,
        }
    }
}

// =============================================================================
// Config
// =============================================================================

/// Full tool configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Input directory scanned in sanitize mode.
    #[serde(default = "default_sanitize_input")]
    pub sanitize_input_dir: PathBuf,
    /// Output directory written in sanitize mode.
    #[serde(default = "default_sanitize_output")]
    pub sanitize_output_dir: PathBuf,
    /// Input directory scanned in desanitize mode.
    #[serde(default = "default_desanitize_input")]
    pub desanitize_input_dir: PathBuf,
    /// Output directory written in desanitize mode.
    #[serde(default = "default_desanitize_output")]
    pub desanitize_output_dir: PathBuf,
    /// Column rules for both directions.
    #[serde(default)]
    pub columns: ColumnRules,
}

fn default_sanitize_input() -> PathBuf {
    PathBuf::from("Unsanitized")
}

fn default_sanitize_output() -> PathBuf {
    PathBuf::from("Sanitized")
}

fn default_desanitize_input() -> PathBuf {
    PathBuf::from("Undesanitized")
}

fn default_desanitize_output() -> PathBuf {
    PathBuf::from("Desanitized")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sanitize_input_dir: default_sanitize_input(),
            sanitize_output_dir: default_sanitize_output(),
            desanitize_input_dir: default_desanitize_input(),
            desanitize_output_dir: default_desanitize_output(),
            columns: ColumnRules::default(),
        }
    }
}

impl Config {
    /// Parse a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load [`CONFIG_FILE`] if present, otherwise the defaults.
    ///
    /// A present-but-broken file is reported and ignored.
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring {}: {}", CONFIG_FILE, e);
                Self::default()
            }
        }
    }

    /// Input directory for the chosen mode.
    pub fn input_dir(&self, direction: Direction) -> &Path {
        match direction {
            Direction::Forward => &self.sanitize_input_dir,
            Direction::Backward => &self.desanitize_input_dir,
        }
    }

    /// Output directory for the chosen mode.
    pub fn output_dir(&self, direction: Direction) -> &Path {
        match direction {
            Direction::Forward => &self.sanitize_output_dir,
            Direction::Backward => &self.desanitize_output_dir,
        }
    }
}
