//! Command handlers, one module per subcommand.

use std::path::{Path, PathBuf};

use splice_adapters::{LocalFilesystem, LocalSourceTree, SystemClock};
use splice_core::{
    application::{AmalgamateService, ApplicationError},
    domain::ProjectProfile,
};
use tracing::{debug, info};

use crate::{
    cli::ProjectArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod completions;
pub mod config;
pub mod discover;
pub mod generate;
pub mod init;
pub mod version;

/// Include root and profile resolved from flags and config.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub profile: ProjectProfile,
}

impl Workspace {
    /// Flags win over config; an unset namespace is inferred from the root.
    pub fn resolve(args: ProjectArgs, config: &AppConfig) -> CliResult<Self> {
        let root = args
            .root
            .unwrap_or_else(|| config.project.include_root.clone());

        let namespace = match args.namespace.or_else(|| config.project.namespace.clone()) {
            Some(ns) => ns,
            None => infer_namespace(&root)?,
        };

        let profile = config.project.profile(&namespace)?;
        debug!(root = %root.display(), namespace = %namespace, "workspace resolved");

        Ok(Self { root, profile })
    }

    /// Service wired to the local disk and wall clock.
    pub fn service(&self) -> AmalgamateService {
        AmalgamateService::new(
            Box::new(LocalSourceTree::new(&self.root)),
            Box::new(LocalFilesystem::new()),
            Box::new(SystemClock::new()),
        )
    }
}

/// The namespace is the only directory directly under the root.
fn infer_namespace(root: &Path) -> CliResult<String> {
    let entries = std::fs::read_dir(root).map_err(|e| {
        CliError::Core(
            ApplicationError::DiscoveryFailed {
                root: root.to_path_buf(),
                reason: e.to_string(),
            }
            .into(),
        )
    })?;

    let mut candidates: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_ok_and(|t| t.is_dir()))
        .filter_map(|e| e.file_name().to_str().map(str::to_owned))
        .filter(|name| !name.starts_with('.'))
        .collect();
    candidates.sort();

    match candidates.as_slice() {
        [only] => {
            info!(namespace = %only, "Namespace inferred from include root");
            Ok(only.clone())
        }
        _ => Err(CliError::NamespaceUnknown {
            root: root.display().to_string(),
            candidates,
        }),
    }
}
