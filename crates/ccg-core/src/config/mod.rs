//! Configuration system.
//! TOML-based; the caller always supplies the source explicitly.

pub mod analysis_config;
pub mod ccg_config;
pub mod scan_config;

pub use analysis_config::AnalysisConfig;
pub use ccg_config::CcgConfig;
pub use scan_config::ScanConfig;
