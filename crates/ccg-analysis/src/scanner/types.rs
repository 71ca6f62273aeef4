//! Tree snapshot types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One filesystem entry of a tree snapshot.
///
/// Built top-down in a single traversal and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Directory {
        name: String,
        path: PathBuf,
        /// Sorted by entry name.
        children: Vec<TreeNode>,
    },
    File {
        name: String,
        path: PathBuf,
        /// `.ext` suffix, empty when the name has none.
        extension: String,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } | Self::File { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Directory { path, .. } | Self::File { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// Children of a directory; empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            Self::Directory { children, .. } => children,
            Self::File { .. } => &[],
        }
    }

    /// Number of file nodes in this subtree.
    pub fn file_count(&self) -> usize {
        match self {
            Self::File { .. } => 1,
            Self::Directory { children, .. } => children.iter().map(Self::file_count).sum(),
        }
    }

    /// Number of directory nodes below this one (this node excluded).
    pub fn dir_count(&self) -> usize {
        self.children()
            .iter()
            .filter(|c| c.is_dir())
            .map(|c| 1 + c.dir_count())
            .sum()
    }

    /// First node named `name` in depth-first order, this node included.
    pub fn find(&self, name: &str) -> Option<&TreeNode> {
        if self.name() == name {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(name))
    }
}

/// Split-extension rule: the last `.suffix` of `name`, dot included, with
/// leading dots not counting as a separator.
///
/// ```
/// use ccg_analysis::scanner::split_extension;
/// assert_eq!(split_extension("main.py"), ".py");
/// assert_eq!(split_extension("archive.tar.gz"), ".gz");
/// assert_eq!(split_extension(".bashrc"), "");
/// assert_eq!(split_extension("Makefile"), "");
/// ```
pub fn split_extension(name: &str) -> &str {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(idx) => &name[stem_start + idx..],
        None => "",
    }
}
