use crate::core::constants::{ignored_dirs, python};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Discovers Python sources under a project root.
///
/// Output is sorted by path so whole-project builds visit files in a
/// stable order regardless of filesystem enumeration.
pub struct ProjectScanner {
    ignored: Vec<String>,
}

impl ProjectScanner {
    pub fn new() -> Self {
        Self {
            ignored: ignored_dirs::ALL.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn with_ignored(ignored: Vec<String>) -> Self {
        Self { ignored }
    }

    /// Every `*.py` file under `root`. Ignored and hidden directories are
    /// pruned before descent, so nothing inside them is even visited.
    pub fn scan(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !self.is_pruned(entry, root))
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry.path().extension().and_then(|e| e.to_str()) == Some(python::EXTENSION)
            })
            .map(DirEntry::into_path)
            .collect();
        files.sort();
        debug!("Scan of {:?} found {} Python files", root, files.len());
        files
    }

    fn is_pruned(&self, entry: &DirEntry, root: &Path) -> bool {
        if entry.path() == root || !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || self.ignored.iter().any(|d| *d == name)
    }
}

impl Default for ProjectScanner {
    fn default() -> Self {
        Self::new()
    }
}
