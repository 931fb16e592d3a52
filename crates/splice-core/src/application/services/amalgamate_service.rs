//! Amalgamate Service - main application orchestrator.
//!
//! This service coordinates one amalgamation run:
//! 1. Discover the top-level files and pin the version file first
//! 2. Detect the version string
//! 3. Render banner and opening guard
//! 4. Expand every top-level file with one shared inclusion record
//! 5. Close the guard and write the artifact
//!
//! The artifact is accumulated in memory and written in one call, so a run
//! that fails never leaves a partial file behind.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Clock, Filesystem, SourceTree},
        services::engine::{AmalgamationEngine, ExpandMode},
    },
    domain::{
        Banner, DomainValidator as validator, InclusionRecord, LineClassifier, OrderedFileList,
        ProjectProfile, closing_guard, detect_version,
    },
    error::{SpliceError, SpliceResult},
};

/// Parameters of one run.
#[derive(Debug, Clone)]
pub struct AmalgamateRequest {
    pub profile: ProjectProfile,
    /// Where the artifact is written.
    pub output: PathBuf,
    pub mode: ExpandMode,
}

impl AmalgamateRequest {
    pub fn new(profile: ProjectProfile, output: impl Into<PathBuf>) -> Self {
        Self {
            profile,
            output: output.into(),
            mode: ExpandMode::Expand,
        }
    }

    pub fn mode(mut self, mode: ExpandMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmalgamationReport {
    /// Artifact location; `None` when the text was only rendered.
    pub output: Option<PathBuf>,
    pub version: String,
    /// Distinct files inlined, top-level and transitive.
    pub files_inlined: usize,
    /// Files found by discovery, pinned entry included.
    pub top_level: usize,
    pub bytes: usize,
}

/// A rendered artifact not yet written anywhere.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub text: String,
    pub report: AmalgamationReport,
}

/// Main amalgamation service.
pub struct AmalgamateService {
    tree: Box<dyn SourceTree>,
    filesystem: Box<dyn Filesystem>,
    clock: Box<dyn Clock>,
}

impl AmalgamateService {
    /// Create a new service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use splice_core::application::{AmalgamateService, ports::*};
    ///
    /// let service = AmalgamateService::new(
    ///     tree,       // impl SourceTree
    ///     filesystem, // impl Filesystem
    ///     clock,      // impl Clock
    /// );
    /// ```
    pub fn new(
        tree: Box<dyn SourceTree>,
        filesystem: Box<dyn Filesystem>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            tree,
            filesystem,
            clock,
        }
    }

    /// Discover the top-level files in processing order.
    #[instrument(skip_all, fields(root = %self.tree.root().display()))]
    pub fn discover(&self, profile: &ProjectProfile) -> SpliceResult<OrderedFileList> {
        validator::validate_profile(profile)?;

        let found = self.tree.discover(profile)?;
        debug!(count = found.len(), "discovered files");

        Ok(OrderedFileList::new(found, profile.version_file()))
    }

    /// Read the version string from the profile's version file.
    pub fn detect_version(&self, profile: &ProjectProfile) -> SpliceResult<String> {
        let content = self.tree.read(profile.version_file())?;
        Ok(detect_version(profile, &content)?)
    }

    /// Run the whole pipeline without writing anything.
    #[instrument(skip_all, fields(namespace = %profile.namespace(), mode = ?mode))]
    pub fn render(&self, profile: &ProjectProfile, mode: ExpandMode) -> SpliceResult<Artifact> {
        // 1. Discovery (fatal before anything else happens)
        let files = self.discover(profile)?;

        // 2. Version (fatal before any output is produced)
        let version = self.detect_version(profile)?;
        info!(version = %version, files = files.len(), "Version detected");

        // 3. Banner + opening guard, exactly once
        let generated_at = self.clock.timestamp();
        let mut text = Banner::new(profile, &version, &generated_at).render();

        // 4. Body
        let classifier = LineClassifier::new(profile)?;
        let engine = AmalgamationEngine::new(self.tree.as_ref(), &classifier, mode);
        let mut record = InclusionRecord::new();
        let body = engine.expand_all(files.as_slice(), &mut record)?;
        text.push_str(&body.text);

        // 5. Closing guard
        text.push_str(&closing_guard(profile.guard()));

        let report = AmalgamationReport {
            output: None,
            version,
            files_inlined: body.files,
            top_level: files.len(),
            bytes: text.len(),
        };

        Ok(Artifact { text, report })
    }

    /// Amalgamate and write the artifact.
    ///
    /// This is the main use case.
    #[instrument(
        skip_all,
        fields(
            namespace = %request.profile.namespace(),
            output = %request.output.display()
        )
    )]
    pub fn assemble(&self, request: &AmalgamateRequest) -> SpliceResult<AmalgamationReport> {
        let Artifact { text, mut report } = self.render(&request.profile, request.mode)?;

        self.write_artifact(&request.output, &text)?;

        report.output = Some(request.output.clone());
        info!(
            files = report.files_inlined,
            bytes = report.bytes,
            "Artifact written"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_artifact(&self, output: &Path, text: &str) -> SpliceResult<()> {
        if output.as_os_str().is_empty() {
            return Err(SpliceError::Application(ApplicationError::ValidationFailed(
                "output path is empty".into(),
            )));
        }

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !self.filesystem.exists(parent) {
                self.filesystem.create_dir_all(parent)?;
            }
        }

        self.filesystem.write_file(output, text)
    }
}
