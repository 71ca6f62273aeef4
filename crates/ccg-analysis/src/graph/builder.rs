//! CCG builder: one parser plus one graph, fed file by file.

use std::path::{Path, PathBuf};

use ccg_core::errors::{CcgErrorCode, ParseError, PipelineResult};

use crate::parsers::PythonParser;

use super::context_graph::CodeContextGraph;
use super::types::{
    AnalysisOutcome, BatchStats, CcgExport, ClassHierarchy, ClassRecord, FunctionRecord,
};

/// Builds a code context graph for one analysis session.
///
/// Not shared across threads; shard work over several builders and merge
/// their exports instead (see [`super::analyze_files_parallel`]).
pub struct CcgBuilder {
    parser: PythonParser,
    graph: CodeContextGraph,
}

impl CcgBuilder {
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            parser: PythonParser::new()?,
            graph: CodeContextGraph::new(),
        })
    }

    /// Parse `path` and record its declarations.
    ///
    /// A file that fails to read or parse is reported and leaves the graph
    /// untouched.
    pub fn analyze_file(&mut self, path: impl AsRef<Path>) -> Result<AnalysisOutcome, ParseError> {
        let path = path.as_ref();
        match self.parser.parse_file(path) {
            Ok(parsed) => {
                let outcome = self.graph.ingest(&parsed);
                tracing::debug!(
                    path = %path.display(),
                    functions = outcome.functions,
                    classes = outcome.classes,
                    calls = outcome.calls,
                    imports = outcome.imports,
                    "analyzed file"
                );
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(code = e.error_code(), "{e}");
                Err(e)
            }
        }
    }

    /// Analyze every path in order. Failures are collected, never fatal.
    pub fn analyze_batch(&mut self, paths: &[PathBuf]) -> PipelineResult<BatchStats> {
        let mut result = PipelineResult::<BatchStats>::default();
        for path in paths {
            match self.analyze_file(path) {
                Ok(outcome) => result.data.record(&outcome),
                Err(e) => {
                    result.data.files_failed += 1;
                    result.add_error(e);
                }
            }
        }

        tracing::info!(
            analyzed = result.data.files_analyzed,
            failed = result.data.files_failed,
            functions = result.data.functions,
            classes = result.data.classes,
            "batch complete"
        );
        result
    }

    pub fn get_function(&self, name: &str) -> Option<&FunctionRecord> {
        self.graph.get_function(name)
    }

    pub fn get_class(&self, name: &str) -> Option<&ClassRecord> {
        self.graph.get_class(name)
    }

    pub fn get_function_callers(&self, name: &str) -> Vec<String> {
        self.graph.get_function_callers(name)
    }

    pub fn get_function_callees(&self, name: &str) -> &[String] {
        self.graph.get_function_callees(name)
    }

    pub fn get_class_hierarchy(&self, name: &str) -> Option<ClassHierarchy> {
        self.graph.get_class_hierarchy(name)
    }

    pub fn export(&self) -> CcgExport {
        self.graph.export()
    }

    pub fn graph(&self) -> &CodeContextGraph {
        &self.graph
    }

    pub fn into_graph(self) -> CodeContextGraph {
        self.graph
    }
}
