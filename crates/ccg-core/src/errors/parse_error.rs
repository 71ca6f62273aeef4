//! Per-file analysis errors.

use std::path::PathBuf;

use super::error_code::{self, CcgErrorCode};

/// Errors that reject a single source file. A rejected file leaves the
/// graph untouched.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8")]
    Encoding { path: PathBuf },

    #[error("Grammar could not be loaded: {message}")]
    Grammar { message: String },

    #[error("Tree-sitter produced no tree for {path}")]
    TreeSitter { path: PathBuf },

    #[error("Syntax error in {path} at line {line}, column {column}")]
    Syntax {
        path: PathBuf,
        line: u32,
        column: u32,
    },
}

impl ParseError {
    /// The file this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Io { path, .. }
            | Self::Encoding { path }
            | Self::TreeSitter { path }
            | Self::Syntax { path, .. } => Some(path),
            Self::Grammar { .. } => None,
        }
    }
}

impl CcgErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Encoding { .. } => error_code::ENCODING_ERROR,
            Self::Syntax { .. } => error_code::SYNTAX_ERROR,
            Self::Grammar { .. } | Self::TreeSitter { .. } => error_code::PARSE_ERROR,
        }
    }
}
