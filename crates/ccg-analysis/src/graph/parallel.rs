//! Sharded analysis across rayon workers.

use std::path::{Path, PathBuf};

use ccg_core::errors::{CcgErrorCode, ParseError, PipelineResult};
use rayon::prelude::*;

use crate::parsers::PythonParser;

use super::context_graph::CodeContextGraph;
use super::types::CcgExport;

/// Analyze `paths` on `threads` workers (0 = rayon's default pool).
///
/// Each file goes into its own graph and the exports are merged in input
/// order, so the result equals a sequential batch over the same paths.
pub fn analyze_files_parallel(paths: &[PathBuf], threads: usize) -> PipelineResult<CcgExport> {
    let shards = if threads > 0 {
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(|| analyze_shards(paths)),
            Err(e) => {
                tracing::warn!(threads, error = %e, "thread pool unavailable, using global pool");
                analyze_shards(paths)
            }
        }
    } else {
        analyze_shards(paths)
    };

    let mut result = PipelineResult::<CcgExport>::default();
    for shard in shards {
        match shard {
            Ok(export) => result.data.merge(export),
            Err(e) => result.add_error(e),
        }
    }

    tracing::info!(
        files = paths.len(),
        failed = result.error_count(),
        threads,
        "parallel analysis complete"
    );
    result
}

fn analyze_shards(paths: &[PathBuf]) -> Vec<Result<CcgExport, ParseError>> {
    paths
        .par_iter()
        .map_init(PythonParser::new, |parser, path| match parser {
            Ok(parser) => analyze_one(parser, path),
            Err(e) => Err(ParseError::Grammar {
                message: e.to_string(),
            }),
        })
        .collect()
}

fn analyze_one(parser: &mut PythonParser, path: &Path) -> Result<CcgExport, ParseError> {
    let parsed = parser.parse_file(path).inspect_err(|e| {
        tracing::warn!(code = e.error_code(), "{e}");
    })?;
    let mut graph = CodeContextGraph::new();
    graph.ingest(&parsed);
    Ok(graph.export())
}
