//! Code context graph: function, class, call and import tables built from
//! parsed Python files.

pub mod builder;
pub mod call_edges;
pub mod context_graph;
pub mod parallel;
pub mod types;

pub use builder::CcgBuilder;
pub use call_edges::CallEdges;
pub use context_graph::CodeContextGraph;
pub use parallel::analyze_files_parallel;
pub use types::{
    AnalysisOutcome, BatchStats, CcgExport, ClassHierarchy, ClassRecord, FunctionRecord,
};
