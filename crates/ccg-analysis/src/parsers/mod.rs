//! Syntax front-end: tree-sitter Python into a closed set of syntax nodes.

pub mod docstring;
pub mod error_tolerant;
pub mod python;
pub mod types;

pub use python::PythonParser;
pub use types::{
    CallExpr, Callee, ClassDecl, FunctionDecl, ImportDecl, ImportFromDecl, ParsedFile, SyntaxNode,
};
