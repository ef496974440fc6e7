// Configuration loading and parsing (projection.toml).

use chrono::Datelike;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::projection::history::DuplicatePolicy;
use crate::stats::expected::DEFAULT_OUTPUT;

/// Built-in settings, used when no `config/projection.toml` is present.
pub const DEFAULT_CONFIG: &str = include_str!("../defaults/projection.toml");

/// Tolerance when checking whether the weights sum past 1.0.
const WEIGHT_SUM_EPSILON: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub projection: ProjectionConfig,
    pub duplicate_seasons: DuplicatePolicy,
    pub output_path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Season being projected.
    pub current_year: i32,
    /// Weight per prior season, most recent first.
    pub weights: Vec<f64>,
}

// ---------------------------------------------------------------------------
// projection.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct ProjectionFile {
    projection: ProjectionSection,
    #[serde(default)]
    input: InputSection,
    #[serde(default)]
    output: OutputSection,
}

#[derive(Debug, Clone, Deserialize)]
struct ProjectionSection {
    #[serde(default)]
    current_year: Option<i32>,
    weights: Vec<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct InputSection {
    #[serde(default)]
    duplicate_seasons: DuplicatePolicy,
}

#[derive(Debug, Clone, Deserialize)]
struct OutputSection {
    path: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        OutputSection {
            path: DEFAULT_OUTPUT.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Parse and validate config text. `path` is only used in error messages.
pub fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    let file: ProjectionFile = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let current_year = file
        .projection
        .current_year
        .unwrap_or_else(|| chrono::Local::now().year());

    let config = Config {
        projection: ProjectionConfig {
            current_year,
            weights: file.projection.weights,
        },
        duplicate_seasons: file.input.duplicate_seasons,
        output_path: file.output.path,
    };

    validate(&config)?;

    Ok(config)
}

/// Load and validate an explicit config file.
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let text = read_file(path)?;
    parse_config(&text, path)
}

/// Load `config/projection.toml` under `base_dir`, falling back to the
/// built-in defaults when that file does not exist.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("projection.toml");
    if path.exists() {
        load_config_file(&path)
    } else {
        default_config()
    }
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    load_config_from(&cwd)
}

/// The built-in configuration.
pub fn default_config() -> Result<Config, ConfigError> {
    parse_config(DEFAULT_CONFIG, Path::new("<defaults>/projection.toml"))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub(crate) fn validate(config: &Config) -> Result<(), ConfigError> {
    let weights = &config.projection.weights;
    if weights.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "projection.weights".into(),
            message: "must contain at least one weight".into(),
        });
    }

    for (i, w) in weights.iter().enumerate() {
        if !w.is_finite() || *w < 0.0 {
            return Err(ConfigError::ValidationError {
                field: format!("projection.weights[{i}]"),
                message: format!("must be a finite value >= 0, got {w}"),
            });
        }
    }

    let total: f64 = weights.iter().sum();
    if total > 1.0 + WEIGHT_SUM_EPSILON {
        warn!(
            "projection weights sum to {total}; renormalization for players missing seasons is unreliable above 1.0"
        );
    }

    if config.output_path.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "output.path".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
