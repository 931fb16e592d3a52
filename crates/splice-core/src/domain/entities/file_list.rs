use super::file_node::FileNode;

/// Top-level files of one run, in processing order.
///
/// Sorted by path and deduplicated, with the pinned entry (the version
/// metadata file) moved to index 0 regardless of where it sorts. The version
/// header therefore always leads the artifact body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedFileList {
    files: Vec<FileNode>,
}

impl OrderedFileList {
    /// Order `discovered` and pin `pinned` first.
    ///
    /// The pinned entry is inserted even if the walk did not find it, so a
    /// missing version file surfaces as a read failure instead of an artifact
    /// without its version header.
    pub fn new(discovered: impl IntoIterator<Item = FileNode>, pinned: &FileNode) -> Self {
        let mut files: Vec<FileNode> = discovered.into_iter().collect();
        files.sort();
        files.dedup();
        files.retain(|f| f != pinned);
        files.insert(0, pinned.clone());
        Self { files }
    }

    pub fn pinned(&self) -> &FileNode {
        &self.files[0]
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Never true: the pinned entry is always present.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileNode> {
        self.files.iter()
    }

    pub fn as_slice(&self) -> &[FileNode] {
        &self.files
    }
}

impl<'a> IntoIterator for &'a OrderedFileList {
    type Item = &'a FileNode;
    type IntoIter = std::slice::Iter<'a, FileNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
