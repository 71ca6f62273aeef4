//! Directory walker behind the Tree Enumerator.
//!
//! Everything here is synchronous local I/O. Each directory listing is
//! consumed before the next one is opened.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ccg_core::config::ScanConfig;
use ccg_core::constants::{ENTRY_POINT_NAMES, README_CANDIDATES};
use ccg_core::errors::ScanError;

use super::ignores::IgnoreSet;
use super::types::{split_extension, TreeNode};

/// Enumerates one root directory.
#[derive(Debug, Clone)]
pub struct TreeEnumerator {
    root: PathBuf,
    ignores: IgnoreSet,
    /// Filename suffixes, dot included (".py").
    source_suffixes: Vec<String>,
}

/// A listed directory entry, classified by what its target is.
struct Entry {
    name: String,
    path: PathBuf,
    is_dir: bool,
    is_symlink: bool,
}

impl TreeEnumerator {
    /// Enumerator over `root` with the default analyzable extensions.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ScanError> {
        Self::with_config(root, &ScanConfig::default())
    }

    /// Enumerator over `root` using the extension set of `config`.
    ///
    /// Fails with `ScanError::InvalidRoot` unless `root` is an existing
    /// directory; no default root is ever substituted.
    pub fn with_config(root: impl AsRef<Path>, config: &ScanConfig) -> Result<Self, ScanError> {
        let given = root.as_ref();
        let root = std::path::absolute(given).map_err(|_| ScanError::InvalidRoot {
            path: given.to_path_buf(),
        })?;
        if !root.is_dir() {
            return Err(ScanError::InvalidRoot { path: root });
        }

        let ignores = IgnoreSet::new(&root)?;
        let source_suffixes = config
            .effective_source_extensions()
            .into_iter()
            .map(|ext| format!(".{ext}"))
            .collect();

        Ok(Self {
            root,
            ignores,
            source_suffixes,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Snapshot of the whole tree: children sorted by name, ignored names
    /// absent at every depth, unreadable subdirectories left empty.
    pub fn generate_tree(&self) -> Result<TreeNode, ScanError> {
        let name = self
            .root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.to_string_lossy().into_owned());

        let children = match self.list_subdir(&self.root)? {
            Some(entries) => self.build_children(entries)?,
            None => Vec::new(),
        };

        Ok(TreeNode::Directory {
            name,
            path: self.root.clone(),
            children,
        })
    }

    fn build_children(&self, mut entries: Vec<Entry>) -> Result<Vec<TreeNode>, ScanError> {
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut nodes = Vec::with_capacity(entries.len());
        for entry in entries {
            if self.ignores.is_ignored_name(&entry.name) {
                continue;
            }

            if entry.is_dir {
                // Linked directories are listed but never descended into.
                let listed = if entry.is_symlink {
                    None
                } else {
                    self.list_subdir(&entry.path)?
                };
                let children = match listed {
                    Some(sub) => self.build_children(sub)?,
                    None => Vec::new(),
                };
                nodes.push(TreeNode::Directory {
                    name: entry.name,
                    path: entry.path,
                    children,
                });
            } else {
                let extension = split_extension(&entry.name).to_string();
                nodes.push(TreeNode::File {
                    name: entry.name,
                    path: entry.path,
                    extension,
                });
            }
        }
        Ok(nodes)
    }

    /// First README candidate present directly under the root.
    pub fn find_readme(&self) -> Option<PathBuf> {
        README_CANDIDATES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.exists())
    }

    /// Every file named like a conventional entry point, in walk order.
    pub fn find_entry_points(&self) -> Result<Vec<PathBuf>, ScanError> {
        let mut found = Vec::new();
        self.walk(&self.root, &mut |entry| {
            if ENTRY_POINT_NAMES.contains(&entry.name.as_str()) {
                found.push(entry.path.clone());
            }
        })?;
        Ok(found)
    }

    /// Every file whose name ends in an analyzable extension, in walk order.
    pub fn get_source_files(&self) -> Result<Vec<PathBuf>, ScanError> {
        let mut found = Vec::new();
        self.walk(&self.root, &mut |entry| {
            if self.is_source_name(&entry.name) {
                found.push(entry.path.clone());
            }
        })?;
        Ok(found)
    }

    fn is_source_name(&self, name: &str) -> bool {
        self.source_suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Top-down walk in listing order: the files of a directory are visited
    /// first, then its non-ignored subdirectories.
    fn walk(&self, dir: &Path, visit: &mut dyn FnMut(&Entry)) -> Result<(), ScanError> {
        let Some(entries) = self.list_subdir(dir)? else {
            return Ok(());
        };

        let (dirs, files): (Vec<Entry>, Vec<Entry>) = entries.into_iter().partition(|e| e.is_dir);
        for file in &files {
            visit(file);
        }
        for sub in dirs {
            if sub.is_symlink || self.ignores.is_ignored_dir(&sub.name) {
                continue;
            }
            self.walk(&sub.path, visit)?;
        }
        Ok(())
    }

    /// Lists `dir`, or `None` when permission to list it is denied.
    fn list_subdir(&self, dir: &Path) -> Result<Option<Vec<Entry>>, ScanError> {
        match read_entries(dir) {
            Ok(entries) => Ok(Some(entries)),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                tracing::debug!(path = %dir.display(), "permission denied, skipping subtree");
                Ok(None)
            }
            Err(source) => Err(ScanError::Io {
                path: dir.to_path_buf(),
                source,
            }),
        }
    }
}

/// Reads a whole directory listing, in the order the OS returns it.
fn read_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for dirent in fs::read_dir(dir)? {
        let dirent = dirent?;
        let path = dirent.path();
        let file_type = dirent.file_type()?;
        let is_symlink = file_type.is_symlink();
        // Broken links have no target metadata and count as files.
        let is_dir = if is_symlink {
            fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false)
        } else {
            file_type.is_dir()
        };
        entries.push(Entry {
            name: dirent.file_name().to_string_lossy().into_owned(),
            path,
            is_dir,
            is_symlink,
        });
    }
    Ok(entries)
}
