//! Engine configuration and the translation table loader.
//!
//! Defaults come from [`EngineConfig::default`]; environment variables
//! override them one by one. Out-of-range or unparsable values are logged
//! and ignored, so a bad override never prevents the sheet from working.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const ENV_THROTTLE_MS: &str = "LEGION_SHEET_THROTTLE_MS";
pub const ENV_MAX_CASCADE_DEPTH: &str = "LEGION_SHEET_MAX_CASCADE_DEPTH";
pub const ENV_SHEET_VERSION: &str = "LEGION_SHEET_VERSION";
pub const ENV_SHEET_TITLE: &str = "LEGION_SHEET_TITLE";
pub const ENV_TRANSLATIONS: &str = "LEGION_SHEET_TRANSLATIONS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window in which repeated clicks of one button collapse into the first
    pub button_throttle_ms: u64,
    /// Events produced deeper than this are dropped
    pub max_cascade_depth: u32,
    pub sheet_version: String,
    pub sheet_title: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            button_throttle_ms: 200,
            max_cascade_depth: 16,
            sheet_version: "1.0".to_string(),
            sheet_title: "Band of Blades".to_string(),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup(ENV_THROTTLE_MS) {
            match val.trim().parse::<u64>() {
                Ok(ms) => {
                    config.button_throttle_ms = ms;
                    tracing::info!(ms, "Applied {ENV_THROTTLE_MS} environment variable");
                }
                Err(_) => {
                    tracing::warn!(val = %val, "{ENV_THROTTLE_MS} is not a valid u64, ignoring")
                }
            }
        }

        if let Some(val) = lookup(ENV_MAX_CASCADE_DEPTH) {
            match val.trim().parse::<u32>() {
                Ok(depth) if depth > 0 => {
                    config.max_cascade_depth = depth;
                    tracing::info!(depth, "Applied {ENV_MAX_CASCADE_DEPTH} environment variable");
                }
                _ => tracing::warn!(
                    val = %val,
                    "{ENV_MAX_CASCADE_DEPTH} must be a positive integer, ignoring"
                ),
            }
        }

        if let Some(version) = lookup(ENV_SHEET_VERSION).filter(|v| !v.trim().is_empty()) {
            config.sheet_version = version.trim().to_string();
        }
        if let Some(title) = lookup(ENV_SHEET_TITLE).filter(|v| !v.trim().is_empty()) {
            config.sheet_title = title.trim().to_string();
        }

        config
    }
}

/// Errors while loading configuration files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid translation table {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a translation table: one JSON object mapping keys to display strings.
pub fn parse_translations(json: &str, path: &str) -> Result<HashMap<String, String>, ConfigError> {
    serde_json::from_str(json).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Read and parse the translation table at `path`.
pub fn load_translations(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let shown = path.display().to_string();
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: shown.clone(),
        source,
    })?;
    let translations = parse_translations(&json, &shown)?;
    tracing::info!(path = %shown, count = translations.len(), "Loaded translations");
    Ok(translations)
}
