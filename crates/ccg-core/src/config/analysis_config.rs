//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_THREADS;

/// Configuration for the per-file analysis batch.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Shard files across worker threads. Default: false.
    pub parallel: Option<bool>,
    /// Worker threads for sharded analysis (0 = auto). Default: 0.
    pub threads: Option<usize>,
}

impl AnalysisConfig {
    /// Returns whether sharded analysis is enabled, defaulting to false.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }

    /// Returns the effective worker thread count, defaulting to 0.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_THREADS)
    }
}
