//! Tests for error codes and non-fatal error collection.

use std::path::PathBuf;

use ccg_core::errors::{CcgErrorCode, ParseError, PipelineError, PipelineResult, ScanError};

#[test]
fn test_parse_error_codes() {
    let syntax = ParseError::Syntax {
        path: PathBuf::from("a.py"),
        line: 3,
        column: 4,
    };
    assert_eq!(syntax.error_code(), "SYNTAX_ERROR");
    assert_eq!(
        syntax.coded_string(),
        "[SYNTAX_ERROR] Syntax error in a.py at line 3, column 4"
    );

    let encoding = ParseError::Encoding {
        path: PathBuf::from("b.py"),
    };
    assert_eq!(encoding.error_code(), "ENCODING_ERROR");
    assert_eq!(encoding.path(), Some(PathBuf::from("b.py").as_path()));

    let grammar = ParseError::Grammar {
        message: "abi".to_string(),
    };
    assert_eq!(grammar.path(), None);
}

#[test]
fn test_pipeline_error_delegates_code() {
    let err: PipelineError = ScanError::InvalidRoot {
        path: PathBuf::from("/nope"),
    }
    .into();
    assert_eq!(err.error_code(), "INVALID_ROOT");
}

#[test]
fn test_pipeline_result_collects() {
    let mut result: PipelineResult<usize> = PipelineResult::new(2);
    assert!(result.is_clean());

    result.add_error(ParseError::TreeSitter {
        path: PathBuf::from("c.py"),
    });

    assert!(!result.is_clean());
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.data, 2);
}
