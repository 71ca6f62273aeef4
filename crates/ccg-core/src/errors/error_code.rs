//! Stable error codes for reporting failures as plain data.

/// Every error enum exposes a code string that survives serialization,
/// unlike the error value itself.
pub trait CcgErrorCode {
    /// Returns the code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const INVALID_ROOT: &str = "INVALID_ROOT";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const SYNTAX_ERROR: &str = "SYNTAX_ERROR";
pub const ENCODING_ERROR: &str = "ENCODING_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
