//! In-memory include tree for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use splice_core::{
    application::{ApplicationError, ports::SourceTree},
    domain::{FileNode, ProjectProfile},
    error::SpliceResult,
};

/// Include tree held in a map of relative path to content.
#[derive(Debug, Clone)]
pub struct MemorySourceTree {
    root: PathBuf,
    files: Arc<RwLock<HashMap<FileNode, String>>>,
}

impl MemorySourceTree {
    /// Create an empty tree with a nominal root used only in messages.
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("<memory>"),
            files: Arc::default(),
        }
    }

    /// Build a tree from `(relative path, content)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if a path is not a valid relative path.
    pub fn with_files<P, C>(files: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: AsRef<str>,
        C: Into<String>,
    {
        let map = files
            .into_iter()
            .map(|(path, content)| (FileNode::new(path.as_ref()), content.into()))
            .collect();
        Self {
            files: Arc::new(RwLock::new(map)),
            ..Self::new()
        }
    }

    /// Add or replace a file.
    ///
    /// # Errors
    ///
    /// `AdapterLockError` if a writer panicked while holding the tree.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid relative path.
    pub fn insert(&self, path: &str, content: impl Into<String>) -> SpliceResult<()> {
        let mut files = self
            .files
            .write()
            .map_err(|_| ApplicationError::AdapterLockError { name: "source tree" })?;
        files.insert(FileNode::new(path), content.into());
        Ok(())
    }
}

impl Default for MemorySourceTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceTree for MemorySourceTree {
    fn root(&self) -> &Path {
        &self.root
    }

    fn discover(&self, profile: &ProjectProfile) -> SpliceResult<Vec<FileNode>> {
        let files = self
            .files
            .read()
            .map_err(|_| ApplicationError::AdapterLockError { name: "source tree" })?;

        Ok(files
            .keys()
            .filter(|node| profile.is_recognized(node))
            .filter(|node| {
                let s = node.as_str();
                // every directory segment, not the file name
                let dirs = s.rsplit_once('/').map_or("", |(d, _)| d);
                !dirs.split('/').any(|d| profile.is_excluded_dir(d))
            })
            .cloned()
            .collect())
    }

    fn read(&self, node: &FileNode) -> SpliceResult<String> {
        let files = self
            .files
            .read()
            .map_err(|_| ApplicationError::AdapterLockError { name: "source tree" })?;

        files.get(node).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: node.resolve(&self.root),
                reason: "No such file".into(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splice_core::error::SpliceError;

    #[test]
    fn discovery_matches_local_rules() {
        let tree = MemorySourceTree::with_files([
            ("ureact/version.hpp", ""),
            ("ureact/detail/base.hpp", ""),
            ("ureact/detail.hpp", ""),
            ("ureact/notes.txt", ""),
        ]);
        let profile = ProjectProfile::builder("ureact").build().unwrap();

        let mut found = tree.discover(&profile).unwrap();
        found.sort();
        assert_eq!(
            found,
            vec![
                FileNode::new("ureact/detail.hpp"),
                FileNode::new("ureact/version.hpp"),
            ]
        );
    }

    #[test]
    fn insert_replaces_content() {
        let tree = MemorySourceTree::with_files([("a.hpp", "old\n")]);
        tree.insert("a.hpp", "new\n").unwrap();
        assert_eq!(tree.read(&FileNode::new("a.hpp")).unwrap(), "new\n");
    }

    #[test]
    fn insert_reports_poisoned_lock() {
        let tree = MemorySourceTree::new();
        let shared = tree.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.files.write().unwrap();
            panic!("writer died");
        })
        .join();

        assert!(matches!(
            tree.insert("a.hpp", "x"),
            Err(SpliceError::Application(ApplicationError::AdapterLockError { .. }))
        ));
    }

    #[test]
    fn read_returns_content_or_filesystem_error() {
        let tree = MemorySourceTree::with_files([("a.hpp", "x\n")]);
        assert_eq!(tree.read(&FileNode::new("a.hpp")).unwrap(), "x\n");
        assert!(tree.read(&FileNode::new("b.hpp")).is_err());
    }
}
