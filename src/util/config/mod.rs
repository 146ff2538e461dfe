//! Checker configuration
//!
//! All fields have defaults, so an empty file is a valid configuration.
//!
//! ```toml
//! # Type assumed for capture groups that are neither integer- nor float-shaped
//! capture_default = "int"   # or "string"
//! log_level = "info"
//! ```
//!
//! # Usage
//!
//! ```rust
//! use logvm_types::util::config::{CaptureDefault, CheckerConfig};
//!
//! let config = CheckerConfig::from_toml_str("capture_default = \"string\"").unwrap();
//! assert_eq!(config.capture_default, CaptureDefault::String);
//! ```

use crate::types::Type;
use crate::util::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Fallback type for capture groups that match more than numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaptureDefault {
    /// Assume the captured text is usable in arithmetic
    #[default]
    Int,
    /// Treat the captured text as a string
    String,
}

impl CaptureDefault {
    pub fn to_type(self) -> Type {
        match self {
            CaptureDefault::Int => Type::int(),
            CaptureDefault::String => Type::string(),
        }
    }
}

impl std::fmt::Display for CaptureDefault {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            CaptureDefault::Int => write!(f, "int"),
            CaptureDefault::String => write!(f, "string"),
        }
    }
}

/// Type checker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CheckerConfig {
    /// Capture group fallback type
    #[serde(default)]
    pub capture_default: CaptureDefault,
    /// Log level used by the binary
    #[serde(default)]
    pub log_level: LogLevel,
}

impl CheckerConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize configuration to TOML text
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
