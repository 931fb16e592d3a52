//! Amalgamation engine - recursive include expansion.
//!
//! The engine reads a file through the [`SourceTree`] port, classifies each
//! line, and appends what survives to an output buffer. Internal includes are
//! either replaced by the content of the file they name (expand mode) or
//! dropped (reference mode).
//!
//! The [`InclusionRecord`] is shared by every call of one run. A node is
//! recorded *before* the engine recurses into it, so a second reference,
//! whether from another parent or from a cycle back to an ancestor, finds the
//! node recorded and is dropped instead of expanded again.

use tracing::{debug, info, instrument, trace};

use crate::{
    application::{ApplicationError, ports::SourceTree},
    domain::{FileNode, InclusionRecord, LineClassification, LineClassifier},
    error::{SpliceError, SpliceResult},
};

/// How internal include directives are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpandMode {
    /// Replace each directive with the content of the file it names, once per
    /// run.
    #[default]
    Expand,
    /// Drop each directive without inlining anything.
    ///
    /// Meant for compile-unit bundles whose headers stay externally included.
    /// The directive is removed, not kept, so a bundled file consumed on its
    /// own no longer sees the declarations it included.
    Reference,
}

impl ExpandMode {
    pub fn expands(self) -> bool {
        matches!(self, Self::Expand)
    }
}

impl From<bool> for ExpandMode {
    fn from(expand: bool) -> Self {
        if expand { Self::Expand } else { Self::Reference }
    }
}

/// Accumulated body of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmalgamationResult {
    /// Flattened text, boilerplate stripped, directives resolved.
    pub text: String,
    /// Number of distinct files inlined.
    pub files: usize,
}

/// Expands files against one include tree.
pub struct AmalgamationEngine<'a> {
    tree: &'a dyn SourceTree,
    classifier: &'a LineClassifier,
    mode: ExpandMode,
}

impl<'a> AmalgamationEngine<'a> {
    pub fn new(tree: &'a dyn SourceTree, classifier: &'a LineClassifier, mode: ExpandMode) -> Self {
        Self {
            tree,
            classifier,
            mode,
        }
    }

    pub fn mode(&self) -> ExpandMode {
        self.mode
    }

    /// Expand every top-level file in order with one shared record.
    ///
    /// A top-level file already pulled in transitively by an earlier one is
    /// skipped, and a file expanded at top level is never inlined again by a
    /// later include.
    #[instrument(skip_all, fields(mode = ?self.mode, files = files.len()))]
    pub fn expand_all(
        &self,
        files: &[FileNode],
        record: &mut InclusionRecord,
    ) -> SpliceResult<AmalgamationResult> {
        let mut result = AmalgamationResult::default();

        for file in files {
            if !record.insert(file) {
                debug!(file = %file, "already inlined, skipping top-level entry");
                continue;
            }
            result.files += self.expand(file, record, &mut result.text)?;
        }

        info!(count = result.files, "Concatenated files");
        Ok(result)
    }

    /// Expand `file` into `out` and return the number of files it touched
    /// (itself plus everything expanded below it).
    ///
    /// The caller records `file` beforehand; the engine records every node
    /// it recurses into.
    pub fn expand(
        &self,
        file: &FileNode,
        record: &mut InclusionRecord,
        out: &mut String,
    ) -> SpliceResult<usize> {
        self.expand_from(file, None, record, out)
    }

    fn expand_from(
        &self,
        file: &FileNode,
        parent: Option<&FileNode>,
        record: &mut InclusionRecord,
        out: &mut String,
    ) -> SpliceResult<usize> {
        debug!(file = %file, "expanding");

        let content = self
            .tree
            .read(file)
            .map_err(|e| dangling(parent, file, e))?;

        let mut concatenated = 1;

        for line in content.split_inclusive('\n') {
            match self.classifier.classify(line) {
                LineClassification::Boilerplate => {}
                LineClassification::PassThrough(text) => out.push_str(text),
                LineClassification::InternalInclude(target) => {
                    if !self.mode.expands() {
                        continue;
                    }

                    let next = FileNode::try_new(target)?;
                    if !record.insert(&next) {
                        trace!(file = %file, include = %next, "already inlined");
                        continue;
                    }

                    concatenated += self.expand_from(&next, Some(file), record, out)?;
                }
            }
        }

        Ok(concatenated)
    }
}

/// A read failure below the top level is a dangling include.
fn dangling(parent: Option<&FileNode>, file: &FileNode, err: SpliceError) -> SpliceError {
    match (parent, err) {
        (Some(parent), SpliceError::Application(ApplicationError::FilesystemError { reason, .. })) => {
            ApplicationError::DanglingInclude {
                from: parent.to_string(),
                target: file.to_string(),
                reason,
            }
            .into()
        }
        (_, err) => err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectProfile;
    use std::{
        collections::HashMap,
        path::{Path, PathBuf},
    };

    /// Minimal tree for engine tests; the adapters crate has the real ones.
    struct MapTree {
        root: PathBuf,
        files: HashMap<String, String>,
    }

    impl MapTree {
        fn new(files: &[(&str, &str)]) -> Self {
            Self {
                root: PathBuf::from("/include"),
                files: files
                    .iter()
                    .map(|(p, c)| (p.to_string(), c.to_string()))
                    .collect(),
            }
        }
    }

    impl SourceTree for MapTree {
        fn root(&self) -> &Path {
            &self.root
        }

        fn discover(&self, _profile: &ProjectProfile) -> SpliceResult<Vec<FileNode>> {
            Ok(self.files.keys().map(FileNode::new).collect())
        }

        fn read(&self, node: &FileNode) -> SpliceResult<String> {
            self.files.get(node.as_str()).cloned().ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: node.resolve(&self.root),
                    reason: "No such file".into(),
                }
                .into()
            })
        }
    }

    fn classifier() -> LineClassifier {
        let profile = ProjectProfile::builder("p")
            .version_file("p/v.h")
            .extensions(["h"])
            .copyright("// (c) p\n")
            .build()
            .unwrap();
        LineClassifier::new(&profile).unwrap()
    }

    fn run(tree: &MapTree, mode: ExpandMode, files: &[&str]) -> SpliceResult<AmalgamationResult> {
        let classifier = classifier();
        let engine = AmalgamationEngine::new(tree, &classifier, mode);
        let files: Vec<_> = files.iter().copied().map(FileNode::new).collect();
        engine.expand_all(&files, &mut InclusionRecord::new())
    }

    #[test]
    fn includes_are_replaced_by_content() {
        let tree = MapTree::new(&[
            ("p/a.h", "a1\n#include <p/b.h>\na2\n"),
            ("p/b.h", "b1\n"),
        ]);
        let result = run(&tree, ExpandMode::Expand, &["p/a.h"]).unwrap();
        assert_eq!(result.text, "a1\nb1\na2\n");
        assert_eq!(result.files, 2);
    }

    #[test]
    fn diamond_inlines_shared_file_once() {
        let tree = MapTree::new(&[
            ("p/top.h", "#include <p/l.h>\n#include <p/r.h>\n"),
            ("p/l.h", "#include <p/base.h>\nl\n"),
            ("p/r.h", "#include <p/base.h>\nr\n"),
            ("p/base.h", "base\n"),
        ]);
        let result = run(&tree, ExpandMode::Expand, &["p/top.h"]).unwrap();
        assert_eq!(result.text, "base\nl\nr\n");
        assert_eq!(result.files, 4);
    }

    #[test]
    fn cycle_terminates() {
        let tree = MapTree::new(&[
            ("p/a.h", "#include <p/b.h>\na\n"),
            ("p/b.h", "#include <p/a.h>\nb\n"),
        ]);
        let result = run(&tree, ExpandMode::Expand, &["p/a.h", "p/b.h"]).unwrap();
        assert_eq!(result.text, "b\na\n");
        assert_eq!(result.files, 2);
    }

    #[test]
    fn self_include_is_dropped() {
        let tree = MapTree::new(&[("p/a.h", "#include <p/a.h>\na\n")]);
        let result = run(&tree, ExpandMode::Expand, &["p/a.h"]).unwrap();
        assert_eq!(result.text, "a\n");
    }

    #[test]
    fn reference_mode_drops_directives_without_recursing() {
        let tree = MapTree::new(&[
            ("p/a.h", "a1\n#include <p/b.h>\n#include <vector>\na2\n"),
            ("p/b.h", "b1\n"),
            ("p/c.h", "c1\n"),
        ]);
        let result = run(&tree, ExpandMode::Reference, &["p/a.h", "p/c.h"]).unwrap();
        assert_eq!(result.text, "a1\n#include <vector>\na2\nc1\n");
        assert_eq!(result.files, 2);
    }

    #[test]
    fn reference_mode_ignores_dangling_includes() {
        let tree = MapTree::new(&[("p/a.h", "#include <p/missing.h>\na\n")]);
        let result = run(&tree, ExpandMode::Reference, &["p/a.h"]).unwrap();
        assert_eq!(result.text, "a\n");
    }

    #[test]
    fn boilerplate_is_stripped() {
        let tree = MapTree::new(&[("p/a.h", "// (c) p\na\n// (c) p\n")]);
        let result = run(&tree, ExpandMode::Expand, &["p/a.h"]).unwrap();
        assert_eq!(result.text, "a\n");
    }

    #[test]
    fn crlf_boilerplate_is_stripped_and_terminators_kept() {
        let tree = MapTree::new(&[("p/a.h", "// (c) p\r\na\r\n#include <p/b.h>\r\n"), ("p/b.h", "b\r\n")]);
        let result = run(&tree, ExpandMode::Expand, &["p/a.h"]).unwrap();
        assert_eq!(result.text, "a\r\nb\r\n");
    }

    #[test]
    fn top_level_file_already_inlined_is_skipped() {
        let tree = MapTree::new(&[
            ("p/a.h", "#include <p/b.h>\na\n"),
            ("p/b.h", "b\n"),
        ]);
        let result = run(&tree, ExpandMode::Expand, &["p/a.h", "p/b.h"]).unwrap();
        assert_eq!(result.text, "b\na\n");
        assert_eq!(result.files, 2);
    }

    #[test]
    fn later_include_of_top_level_file_is_skipped() {
        let tree = MapTree::new(&[("p/a.h", "a\n"), ("p/b.h", "#include <p/a.h>\nb\n")]);
        let result = run(&tree, ExpandMode::Expand, &["p/a.h", "p/b.h"]).unwrap();
        assert_eq!(result.text, "a\nb\n");
    }

    #[test]
    fn dangling_include_is_fatal() {
        let tree = MapTree::new(&[("p/a.h", "a\n#include <p/gone.h>\n")]);
        let err = run(&tree, ExpandMode::Expand, &["p/a.h"]).unwrap_err();
        match err {
            SpliceError::Application(ApplicationError::DanglingInclude { from, target, .. }) => {
                assert_eq!(from, "p/a.h");
                assert_eq!(target, "p/gone.h");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_top_level_file_is_a_filesystem_error() {
        let tree = MapTree::new(&[]);
        let err = run(&tree, ExpandMode::Expand, &["p/a.h"]).unwrap_err();
        assert!(matches!(
            err,
            SpliceError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn include_escaping_root_is_rejected() {
        let tree = MapTree::new(&[("p/a.h", "#include <p/../../etc/passwd>\n")]);
        let err = run(&tree, ExpandMode::Expand, &["p/a.h"]).unwrap_err();
        assert!(matches!(err, SpliceError::Domain(_)));
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let tree = MapTree::new(&[("p/a.h", "a\nend")]);
        let result = run(&tree, ExpandMode::Expand, &["p/a.h"]).unwrap();
        assert_eq!(result.text, "a\nend");
    }

    #[test]
    fn mode_from_bool() {
        assert_eq!(ExpandMode::from(true), ExpandMode::Expand);
        assert_eq!(ExpandMode::from(false), ExpandMode::Reference);
    }
}
