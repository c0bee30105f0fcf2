//! Error types for the fallible edges of the crate
//!
//! The comparison engine itself is total. Only configuration loading can fail.

use std::path::PathBuf;

/// Errors raised while loading an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config at {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for the expected shape.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        /// Path that was being parsed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// An environment override carried a value that is not a boolean.
    #[error("invalid value {value:?} for {key}, expected true/false")]
    InvalidEnv {
        /// Environment variable name.
        key: String,
        /// Offending value.
        value: String,
    },
}

/// Convenience alias used by the config loaders.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_env_message_names_key() {
        let err = ConfigError::InvalidEnv {
            key: "DIKTAT_IGNORE_CASE".to_string(),
            value: "maybe".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("DIKTAT_IGNORE_CASE"));
        assert!(msg.contains("maybe"));
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;

        let err = ConfigError::Io {
            path: PathBuf::from("/nope.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("/nope.json"));
    }
}
