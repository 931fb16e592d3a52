//! Include tree on the local disk, walked with `walkdir`.

use std::path::{Path, PathBuf};

use splice_core::{
    application::{ApplicationError, ports::SourceTree},
    domain::{FileNode, ProjectProfile},
    error::SpliceResult,
};
use tracing::{debug, instrument, trace};
use walkdir::{DirEntry, WalkDir};

use crate::filesystem::local::map_io_error;

/// Production source tree rooted at an include directory.
#[derive(Debug, Clone)]
pub struct LocalSourceTree {
    root: PathBuf,
}

impl LocalSourceTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn discovery_failed(&self, reason: impl Into<String>) -> ApplicationError {
        ApplicationError::DiscoveryFailed {
            root: self.root.clone(),
            reason: reason.into(),
        }
    }
}

impl SourceTree for LocalSourceTree {
    fn root(&self) -> &Path {
        &self.root
    }

    #[instrument(skip_all, fields(root = %self.root.display()))]
    fn discover(&self, profile: &ProjectProfile) -> SpliceResult<Vec<FileNode>> {
        if !self.root.is_dir() {
            return Err(self.discovery_failed("not a directory").into());
        }

        let mut found = Vec::new();
        let walker = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|e| !is_pruned(e, profile));

        for entry in walker {
            let entry = entry.map_err(|e| self.discovery_failed(e.to_string()))?;
            // Follows symlinked files; symlinked directories are not entered.
            if !entry.path().is_file() {
                continue;
            }

            let rel = entry.path().strip_prefix(&self.root).map_err(|_| {
                self.discovery_failed(format!(
                    "failed to relativise '{}'",
                    entry.path().display()
                ))
            })?;
            let node = FileNode::from_relative_path(rel)?;

            if profile.is_recognized(&node) {
                trace!(file = %node, "discovered");
                found.push(node);
            }
        }

        debug!(count = found.len(), "walk complete");
        Ok(found)
    }

    fn read(&self, node: &FileNode) -> SpliceResult<String> {
        let path = node.resolve(&self.root);
        std::fs::read_to_string(&path).map_err(|e| map_io_error(&path, e, "read file"))
    }
}

/// Excluded directories are skipped with everything below them. The root
/// itself is never pruned.
fn is_pruned(entry: &DirEntry, profile: &ProjectProfile) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| profile.is_excluded_dir(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn profile() -> ProjectProfile {
        ProjectProfile::builder("ureact").build().unwrap()
    }

    #[test]
    fn discovers_recognised_files_and_prunes_excluded_dirs() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "ureact/version.hpp", "");
        touch(dir.path(), "ureact/context.hpp", "");
        touch(dir.path(), "ureact/adaptor/cast.hpp", "");
        touch(dir.path(), "ureact/detail/base.hpp", "");
        touch(dir.path(), "ureact/adaptor/detail/impl.hpp", "");
        touch(dir.path(), "ureact/README.md", "");

        let tree = LocalSourceTree::new(dir.path());
        let mut found: Vec<String> = tree
            .discover(&profile())
            .unwrap()
            .into_iter()
            .map(|n| n.to_string())
            .collect();
        found.sort();

        assert_eq!(
            found,
            vec![
                "ureact/adaptor/cast.hpp",
                "ureact/context.hpp",
                "ureact/version.hpp",
            ]
        );
    }

    #[test]
    fn root_named_like_excluded_dir_is_walked() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "detail/a.hpp", "");

        let tree = LocalSourceTree::new(dir.path().join("detail"));
        let found = tree.discover(&profile()).unwrap();
        assert_eq!(found, vec![FileNode::new("a.hpp")]);
    }

    #[test]
    fn missing_root_fails_discovery() {
        let dir = TempDir::new().unwrap();
        let tree = LocalSourceTree::new(dir.path().join("absent"));
        let err = tree.discover(&profile()).unwrap_err();
        assert!(err.to_string().contains("Cannot discover files"));
    }

    #[test]
    fn reads_excluded_files_by_path() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "ureact/detail/base.hpp", "int base;\n");

        let tree = LocalSourceTree::new(dir.path());
        let content = tree.read(&FileNode::new("ureact/detail/base.hpp")).unwrap();
        assert_eq!(content, "int base;\n");
    }

    #[test]
    fn reading_missing_file_is_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let tree = LocalSourceTree::new(dir.path());
        let err = tree.read(&FileNode::new("ureact/gone.hpp")).unwrap_err();
        assert!(matches!(
            err,
            splice_core::error::SpliceError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
