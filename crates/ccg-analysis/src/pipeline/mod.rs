//! Repository pipeline: enumerate a root, then build its graph.

use std::path::{Path, PathBuf};

use ccg_core::config::CcgConfig;
use ccg_core::constants::VERSION;
use ccg_core::errors::{CcgErrorCode, PipelineError, PipelineResult};
use serde::Serialize;

use crate::graph::{analyze_files_parallel, CcgBuilder, CcgExport};
use crate::scanner::{TreeEnumerator, TreeNode};

/// Everything known about one repository after a full run.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryAnalysis {
    /// Engine version that produced this analysis.
    pub version: &'static str,
    pub root: PathBuf,
    pub tree: TreeNode,
    pub readme: Option<PathBuf>,
    pub entry_points: Vec<PathBuf>,
    pub source_files: Vec<PathBuf>,
    pub graph: CcgExport,
    /// Files skipped because they could not be analyzed.
    pub failures: Vec<FailedFile>,
}

/// A source file that was skipped, with its error code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub path: Option<PathBuf>,
    pub code: &'static str,
    pub message: String,
}

impl From<&PipelineError> for FailedFile {
    fn from(error: &PipelineError) -> Self {
        let path = match error {
            PipelineError::Parse(e) => e.path().map(Path::to_path_buf),
            _ => None,
        };
        Self {
            path,
            code: error.error_code(),
            message: error.to_string(),
        }
    }
}

/// Run the enumerator and the builder over `root`.
///
/// An invalid root or an unreadable directory fails the run; files that do
/// not parse are listed in `failures`.
pub fn analyze_repository(
    root: impl AsRef<Path>,
    config: &CcgConfig,
) -> Result<RepositoryAnalysis, PipelineError> {
    CcgConfig::validate(config)?;

    let enumerator = TreeEnumerator::with_config(root, &config.scan)?;
    let tree = enumerator.generate_tree()?;
    let readme = enumerator.find_readme();
    let entry_points = enumerator.find_entry_points()?;
    let source_files = enumerator.get_source_files()?;

    tracing::info!(
        root = %enumerator.root().display(),
        files = tree.file_count(),
        sources = source_files.len(),
        entry_points = entry_points.len(),
        "enumerated repository"
    );

    let (graph, errors) = if config.analysis.effective_parallel() {
        let PipelineResult { data, errors } =
            analyze_files_parallel(&source_files, config.analysis.effective_threads());
        (data, errors)
    } else {
        let mut builder = CcgBuilder::new()?;
        let result = builder.analyze_batch(&source_files);
        (builder.export(), result.errors)
    };

    Ok(RepositoryAnalysis {
        version: VERSION,
        root: enumerator.root().to_path_buf(),
        tree,
        readme,
        entry_points,
        source_files,
        graph,
        failures: errors.iter().map(FailedFile::from).collect(),
    })
}
