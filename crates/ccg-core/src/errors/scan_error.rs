//! Tree enumeration errors.

use std::path::PathBuf;

use super::error_code::{self, CcgErrorCode};

/// Errors that abort a directory enumeration.
///
/// Permission-denied subtrees are not errors: they are skipped where they
/// occur and never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Invalid root {path}: not an existing directory")]
    InvalidRoot { path: PathBuf },

    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid ignore pattern: {message}")]
    IgnorePattern { message: String },
}

impl CcgErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRoot { .. } => error_code::INVALID_ROOT,
            _ => error_code::SCAN_ERROR,
        }
    }
}
