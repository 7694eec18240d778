//! Engine configuration.
//!
//! Loaded from a JSON file (all fields optional) and adjustable at runtime
//! through `setoption`. Example:
//!
//! ```json
//! { "board": { "rows": ["1", "2", "3"], "cols": ["a", "b", "c"] },
//!   "slide_policy": "passthrough" }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::board::{BoardConfig, BoardError, MAX_DIMENSION};
use crate::movegen::SlidePolicy;

/// Errors raised while loading or changing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Everything the engine needs to build and query boards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board: BoardConfig,
    pub slide_policy: SlidePolicy,
}

impl EngineConfig {
    /// Applies one `setoption` pair.
    ///
    /// Supported names: `Rows` and `Cols` (board size, at most
    /// [`MAX_DIMENSION`]) and `SlidePolicy` (`blocking` or `passthrough`).
    /// Resizing keeps the labels already configured; added rows and columns
    /// get standard labels. Names are case-insensitive.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        let value = value.ok_or_else(|| ConfigError::InvalidValue {
            name: name.to_string(),
            reason: "missing value".to_string(),
        })?;
        let invalid = |reason: String| ConfigError::InvalidValue {
            name: name.to_string(),
            reason,
        };

        match name.to_ascii_lowercase().as_str() {
            "rows" => {
                let rows = value.parse::<usize>().map_err(|e| invalid(e.to_string()))?;
                self.board = self.board.resized(rows, self.board.cols())?;
            }
            "cols" => {
                let cols = value.parse::<usize>().map_err(|e| invalid(e.to_string()))?;
                self.board = self.board.resized(self.board.rows(), cols)?;
            }
            "slidepolicy" => {
                self.slide_policy = value.parse::<SlidePolicy>().map_err(invalid)?;
            }
            _ => return Err(ConfigError::UnknownOption(name.to_string())),
        }
        Ok(())
    }
}

/// Loads and validates a configuration file.
pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_config_from_str(&data)
}

/// Parses and validates configuration JSON.
pub fn load_config_from_str(json: &str) -> Result<EngineConfig, ConfigError> {
    let config: EngineConfig = serde_json::from_str(json)?;
    config.board.validate()?;
    Ok(config)
}
