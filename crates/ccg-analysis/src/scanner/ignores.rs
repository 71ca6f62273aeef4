//! Noise-name ignore matching.
//!
//! Directory and file names come from fixed lists in `ccg_core::constants`.
//! Names are matched exactly against the entry's own name, at any depth.

use std::path::Path;

use ccg_core::constants::{IGNORED_DIRS, IGNORED_FILES};
use ccg_core::errors::ScanError;
use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Matchers for the ignored-directory and ignored-file name sets.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    dirs: Gitignore,
    files: Gitignore,
}

impl IgnoreSet {
    /// Build matchers for the fixed name sets.
    pub fn new(root: &Path) -> Result<Self, ScanError> {
        Ok(Self {
            dirs: build_matcher(root, IGNORED_DIRS)?,
            files: build_matcher(root, IGNORED_FILES)?,
        })
    }

    /// True when `name` is in the ignored-directory set.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.dirs.matched(Path::new(name), true).is_ignore()
    }

    /// True when `name` is in either set, whatever kind of entry carries it.
    pub fn is_ignored_name(&self, name: &str) -> bool {
        self.is_ignored_dir(name) || self.files.matched(Path::new(name), false).is_ignore()
    }
}

fn build_matcher(root: &Path, names: &[&str]) -> Result<Gitignore, ScanError> {
    let mut builder = GitignoreBuilder::new(root);
    for name in names {
        builder
            .add_line(None, name)
            .map_err(|e| ScanError::IgnorePattern {
                message: e.to_string(),
            })?;
    }
    builder.build().map_err(|e| ScanError::IgnorePattern {
        message: e.to_string(),
    })
}
