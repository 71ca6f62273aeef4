//! Tree enumeration configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SOURCE_EXTENSIONS;

/// Configuration for source file discovery.
///
/// Ignored names, README candidates and entry-point names are fixed
/// constants, not configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    /// Analyzable extensions without the leading dot. Default: `["py", "jac"]`.
    pub source_extensions: Option<Vec<String>>,
}

impl ScanConfig {
    /// Returns the effective extension set.
    pub fn effective_source_extensions(&self) -> Vec<String> {
        match &self.source_extensions {
            Some(exts) => exts.clone(),
            None => DEFAULT_SOURCE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}
