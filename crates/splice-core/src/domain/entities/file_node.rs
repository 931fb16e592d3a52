use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A file below the include root, identified by its canonical relative path.
///
/// Invariant: never absolute, never escapes the root, always uses `/` as the
/// separator and carries no `.` components. Two nodes naming the same file
/// through different spellings (`ureact/./a.hpp`, `ureact\a.hpp`) compare
/// equal, which is what the inclusion record relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileNode(String);

/// Ordering compares path segments, so `ureact/x.hpp` sorts before
/// `ureact-extra/x.hpp` on every platform.
impl Ord for FileNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.split('/').cmp(other.0.split('/'))
    }
}

impl PartialOrd for FileNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl FileNode {
    /// Create a new node.
    ///
    /// # Panics
    /// Panics if the path is absolute or escapes the root (use `try_new` for
    /// fallible construction).
    pub fn new(path: impl AsRef<str>) -> Self {
        match Self::try_new(path.as_ref()) {
            Ok(node) => node,
            Err(e) => panic!("FileNode: {e}"),
        }
    }

    /// Fallible constructor.
    pub fn try_new(path: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = path.as_ref();
        let normalized = normalize_separators(raw);

        if normalized.starts_with('/') || Path::new(raw).is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: raw.to_string(),
            });
        }

        let mut parts: Vec<&str> = Vec::new();
        for segment in normalized.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if parts.pop().is_none() {
                        return Err(DomainError::PathEscapesRoot {
                            path: raw.to_string(),
                        });
                    }
                }
                other => parts.push(other),
            }
        }

        if parts.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "path" });
        }

        Ok(Self(parts.join("/")))
    }

    /// Build a node from a filesystem path relative to the include root.
    pub fn from_relative_path(path: &Path) -> Result<Self, DomainError> {
        let mut joined = String::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => {
                    if !joined.is_empty() {
                        joined.push('/');
                    }
                    joined.push_str(&part.to_string_lossy());
                }
                Component::CurDir => {}
                Component::ParentDir => joined.push_str(if joined.is_empty() {
                    ".."
                } else {
                    "/.."
                }),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(DomainError::AbsolutePathNotAllowed {
                        path: path.display().to_string(),
                    });
                }
            }
        }
        Self::try_new(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve this node against an include root.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        self.0.split('/').fold(root.to_path_buf(), |acc, part| acc.join(part))
    }

    /// File extension without the leading dot, if any.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name();
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }

    /// Last path segment.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl AsRef<str> for FileNode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileNode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for FileNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalise a path to forward slashes so Windows and Unix spellings compare
/// identically.
fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
