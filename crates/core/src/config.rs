//! Configuration for the comparison engine
//!
//! [`EngineConfig`] is loaded in three layers (lowest priority first):
//! 1. **Compiled defaults** via [`EngineConfig::default()`]
//! 2. **JSON file** (optional), missing keys keep their defaults
//! 3. **Environment variables** `DIKTAT_IGNORE_CASE`, `DIKTAT_IGNORE_PUNCTUATION`
//!
//! ```json
//! {
//!   "options": { "ignoreCase": false },
//!   "costs": { "substitution": 4 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, Result};

/// Environment variable overriding [`ComparisonOptions::ignore_case`].
pub const ENV_IGNORE_CASE: &str = "DIKTAT_IGNORE_CASE";
/// Environment variable overriding [`ComparisonOptions::ignore_punctuation`].
pub const ENV_IGNORE_PUNCTUATION: &str = "DIKTAT_IGNORE_PUNCTUATION";

/// Options passed by value into every comparison call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparisonOptions {
    /// Render case-only differences as correct
    pub ignore_case: bool,

    /// Strip punctuation and quotation marks before tokenizing
    pub ignore_punctuation: bool,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self {
            ignore_case: true,
            ignore_punctuation: true,
        }
    }
}

impl ComparisonOptions {
    /// Create the default options (case and punctuation ignored)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    pub fn with_ignore_punctuation(mut self, ignore: bool) -> Self {
        self.ignore_punctuation = ignore;
        self
    }

    /// Options that report capitalization errors
    pub fn case_sensitive() -> Self {
        Self::default().with_ignore_case(false)
    }
}

/// Edit costs used by the word aligner
///
/// Insertion and deletion must stay cheaper than substitution so that very
/// dissimilar words surface as extra/missing instead of paired substitutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlignmentCosts {
    /// Cost of aligning two identical words
    pub match_cost: u32,
    /// Cost of aligning two different words
    pub substitution: u32,
    /// Cost of a user word with no reference counterpart
    pub insertion: u32,
    /// Cost of a reference word the user left out
    pub deletion: u32,
}

impl Default for AlignmentCosts {
    fn default() -> Self {
        Self {
            match_cost: 0,
            substitution: 3,
            insertion: 2,
            deletion: 2,
        }
    }
}

/// Root configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Per-call comparison options
    pub options: ComparisonOptions,
    /// Aligner edit costs
    pub costs: AlignmentCosts,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: ComparisonOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_costs(mut self, costs: AlignmentCosts) -> Self {
        self.costs = costs;
        self
    }

    /// Parse a JSON document, defaulting any missing fields
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Load a config file, defaulting missing keys
pub fn load_config_from_path(path: &Path) -> Result<EngineConfig> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = EngineConfig::from_json_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(?path, "loaded comparison config");
    Ok(config)
}

/// Build the effective config: defaults, then the optional file, then the environment
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let base = match path {
        Some(path) => load_config_from_path(path)?,
        None => EngineConfig::default(),
    };
    apply_env_overrides(base)
}

/// Apply `DIKTAT_*` environment overrides from the process environment
pub fn apply_env_overrides(config: EngineConfig) -> Result<EngineConfig> {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary key lookup
pub fn apply_overrides_from<F>(mut config: EngineConfig, lookup: F) -> Result<EngineConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(ENV_IGNORE_CASE) {
        config.options.ignore_case = parse_bool(ENV_IGNORE_CASE, &value)?;
    }
    if let Some(value) = lookup(ENV_IGNORE_PUNCTUATION) {
        config.options.ignore_punctuation = parse_bool(ENV_IGNORE_PUNCTUATION, &value)?;
    }
    Ok(config)
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
