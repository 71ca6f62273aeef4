//! Top-level configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ScanConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Every field is optional; the `effective_*` accessors on the sub-configs
/// supply compiled defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CcgConfig {
    pub scan: ScanConfig,
    pub analysis: AnalysisConfig,
}

impl CcgConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file chosen by the caller.
    /// Unknown keys are silently ignored (forward-compatible).
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;

        ::tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CcgConfig) -> Result<(), ConfigError> {
        if let Some(ref exts) = config.scan.source_extensions {
            if exts.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.source_extensions".to_string(),
                    message: "must list at least one extension".to_string(),
                });
            }
            for ext in exts {
                if ext.is_empty() || ext.contains(['.', '/', '\\']) {
                    return Err(ConfigError::ValidationFailed {
                        field: "scan.source_extensions".to_string(),
                        message: format!(
                            "invalid extension {ext:?}: expected a bare suffix such as \"py\""
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}
