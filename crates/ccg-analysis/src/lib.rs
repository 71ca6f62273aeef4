//! ccg-analysis: repository enumeration and the code context graph
//!
//! - Scanner: directory snapshots, README and entry-point discovery,
//!   source-file listing over a fixed ignore set
//! - Parsers: tree-sitter Python lowered to a closed set of syntax nodes
//! - Graph: function, class, call and import tables with queries and export
//! - Pipeline: one call from a repository root to a full analysis

pub mod graph;
pub mod parsers;
pub mod pipeline;
pub mod scanner;

// Re-exports for convenience
pub use graph::{
    analyze_files_parallel, AnalysisOutcome, BatchStats, CcgBuilder, CcgExport, ClassHierarchy,
    ClassRecord, CodeContextGraph, FunctionRecord,
};
pub use parsers::{ParsedFile, PythonParser, SyntaxNode};
pub use pipeline::{analyze_repository, FailedFile, RepositoryAnalysis};
pub use scanner::{TreeEnumerator, TreeNode};
