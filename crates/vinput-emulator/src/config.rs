//! TOML configuration for the emulator.
//!
//! Read from `$XDG_CONFIG_HOME/vinput/config.toml` (or
//! `~/.config/vinput/config.toml`) unless a path is given explicitly:
//!
//! ```toml
//! log_level = "info"
//!
//! [scroll]
//! quantum = 60
//! carry_remainder = false
//! ```
//!
//! # Serde default values
//!
//! Every field has a `#[serde(default = "...")]`, so an empty file, a file
//! missing a section, or no file at all yields the same settings as
//! [`EmulatorConfig::default`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mouse::SCROLL_QUANTUM;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config to TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The config parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level emulator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// Default `tracing` filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub scroll: ScrollConfig,
}

/// Wheel scroll quantization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// High-resolution units per wheel pulse.  Must be positive.
    #[serde(default = "default_quantum")]
    pub quantum: i32,

    /// Keep the sub-quantum remainder and add it to the next scroll event.
    #[serde(default)]
    pub carry_remainder: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_quantum() -> i32 {
    SCROLL_QUANTUM
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            scroll: ScrollConfig::default(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            quantum: default_quantum(),
            carry_remainder: false,
        }
    }
}

impl EmulatorConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] if [`validate`](Self::validate) fails.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reads and validates the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] for file-system errors other than "not
    /// found", otherwise the errors of [`from_toml_str`](Self::from_toml_str).
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Checks values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `scroll.quantum` is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scroll.quantum <= 0 {
            return Err(ConfigError::Invalid(format!(
                "scroll.quantum must be positive, got {}",
                self.scroll.quantum
            )));
        }
        Ok(())
    }
}

/// Default config file location, if a base directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    // XDG_CONFIG_HOME or ~/.config
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
    Some(base.join("vinput").join("config.toml"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level_is_info() {
        assert_eq!(EmulatorConfig::default().log_level, "info");
    }

    #[test]
    fn test_default_scroll_discards_remainder_at_60() {
        let scroll = EmulatorConfig::default().scroll;

        assert_eq!(scroll.quantum, 60);
        assert!(!scroll.carry_remainder);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = EmulatorConfig::from_toml_str("").unwrap();

        assert_eq!(config, EmulatorConfig::default());
    }

    #[test]
    fn test_partial_scroll_section_keeps_other_defaults() {
        // Arrange
        let text = "[scroll]\ncarry_remainder = true\n";

        // Act
        let config = EmulatorConfig::from_toml_str(text).unwrap();

        // Assert
        assert!(config.scroll.carry_remainder);
        assert_eq!(config.scroll.quantum, 60);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_zero_quantum_is_rejected() {
        let err = EmulatorConfig::from_toml_str("[scroll]\nquantum = 0\n").unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("scroll.quantum"));
    }

    #[test]
    fn test_negative_quantum_is_rejected() {
        let err = EmulatorConfig::from_toml_str("[scroll]\nquantum = -60\n").unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = EmulatorConfig::from_toml_str("log_level = ").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_serialized_config_parses_back() {
        // Arrange
        let config = EmulatorConfig {
            log_level: "debug".to_string(),
            scroll: ScrollConfig {
                quantum: 120,
                carry_remainder: true,
            },
        };

        // Act
        let text = config.to_toml_string().unwrap();
        let parsed = EmulatorConfig::from_toml_str(&text).unwrap();

        // Assert
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = Path::new("/nonexistent/vinput/config.toml");

        let err = EmulatorConfig::load(path).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/vinput/config.toml"));
    }

    #[test]
    fn test_load_or_default_missing_file_yields_defaults() {
        let path = Path::new("/nonexistent/vinput/config.toml");

        let config = EmulatorConfig::load_or_default(path).unwrap();

        assert_eq!(config, EmulatorConfig::default());
    }

    #[test]
    fn test_load_reads_file_from_disk() {
        // Arrange
        let path = std::env::temp_dir().join(format!("vinput-config-{}.toml", std::process::id()));
        std::fs::write(&path, "log_level = \"warn\"\n[scroll]\nquantum = 30\n").unwrap();

        // Act
        let config = EmulatorConfig::load(&path);
        let _ = std::fs::remove_file(&path);

        // Assert
        let config = config.unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.scroll.quantum, 30);
    }
}
