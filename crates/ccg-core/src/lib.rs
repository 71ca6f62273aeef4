//! ccg-core: errors, configuration, tracing, and constants shared by the
//! code context graph engine.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::CcgConfig;
pub use errors::{CcgErrorCode, ConfigError, ParseError, PipelineError, PipelineResult, ScanError};
