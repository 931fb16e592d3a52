//! Project profile: every project-specific constant of an amalgamation run.
//!
//! The engine itself knows nothing about any particular library. The profile
//! tells it which include prefix marks an internal include, which file holds
//! the version, which lines are boilerplate, and how to name the guard.
//!
//! [`ProjectProfile::builder`] derives conventional values from a namespace
//! (`ureact` → `ureact/` prefix, `ureact/version.hpp`, `UREACT_VERSION_STR`,
//! `UREACT_UREACT_AMALGAMATED_HPP`, ...). A namespace with a known header
//! convention also gets its copyright and introduction blocks. Every value
//! can be overridden.

use std::path::PathBuf;

use super::{entities::file_node::FileNode, error::DomainError};

/// Immutable description of the project being amalgamated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectProfile {
    namespace: String,
    product_name: String,
    include_prefix: String,
    version_file: FileNode,
    version_macro: String,
    guard: String,
    extensions: Vec<String>,
    excluded_dirs: Vec<String>,
    copyright: String,
    introduction: String,
}

impl ProjectProfile {
    /// Start a builder with values derived from `namespace`.
    pub fn builder(namespace: impl Into<String>) -> ProfileBuilder {
        ProfileBuilder::new(namespace.into())
    }

    /// Conventional profile for `namespace` with no overrides.
    pub fn for_namespace(namespace: impl Into<String>) -> Result<Self, DomainError> {
        Self::builder(namespace).build()
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Display name used in the banner (`Ureact v1.2.3`).
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Prefix that marks an include as internal (`ureact/`).
    pub fn include_prefix(&self) -> &str {
        &self.include_prefix
    }

    /// The pinned metadata file.
    pub fn version_file(&self) -> &FileNode {
        &self.version_file
    }

    pub fn version_macro(&self) -> &str {
        &self.version_macro
    }

    pub fn guard(&self) -> &str {
        &self.guard
    }

    /// Recognised extensions, without the leading dot.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Directory names pruned from discovery.
    pub fn excluded_dirs(&self) -> &[String] {
        &self.excluded_dirs
    }

    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    pub fn introduction(&self) -> &str {
        &self.introduction
    }

    /// Whether a file takes part in discovery.
    pub fn is_recognized(&self, node: &FileNode) -> bool {
        node.extension()
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// Whether a directory name is pruned from discovery.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    /// Conventional artifact location relative to the repository root:
    /// `single_include/<ns>/<ns>_amalgamated.hpp`.
    pub fn default_output(&self) -> PathBuf {
        PathBuf::from("single_include")
            .join(&self.namespace)
            .join(format!("{}_amalgamated.hpp", self.namespace))
    }

    /// Check every invariant the engine depends on.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.namespace.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "namespace" });
        }
        if self.include_prefix.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "include_prefix",
            });
        }
        if self.version_macro.is_empty() || self.version_macro.contains(char::is_whitespace) {
            return Err(DomainError::InvalidProfile(format!(
                "version macro '{}' must be a single identifier",
                self.version_macro
            )));
        }
        if self.guard.is_empty() || self.guard.contains(char::is_whitespace) {
            return Err(DomainError::InvalidProfile(format!(
                "include guard '{}' must be a single identifier",
                self.guard
            )));
        }
        if self.extensions.is_empty() {
            return Err(DomainError::InvalidProfile(
                "at least one recognised extension is required".into(),
            ));
        }
        if !self.is_recognized(&self.version_file) {
            return Err(DomainError::InvalidProfile(format!(
                "version file '{}' does not have a recognised extension ({})",
                self.version_file,
                self.extensions.join(", ")
            )));
        }
        Ok(())
    }
}

/// Builder for [`ProjectProfile`].
///
/// Unset fields fall back to values derived from the namespace; `build()`
/// validates the result.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    namespace: String,
    product_name: Option<String>,
    include_prefix: Option<String>,
    version_file: Option<String>,
    version_macro: Option<String>,
    guard: Option<String>,
    extensions: Option<Vec<String>>,
    excluded_dirs: Option<Vec<String>>,
    copyright: Option<String>,
    introduction: Option<String>,
}

impl ProfileBuilder {
    fn new(namespace: String) -> Self {
        Self {
            namespace,
            product_name: None,
            include_prefix: None,
            version_file: None,
            version_macro: None,
            guard: None,
            extensions: None,
            excluded_dirs: None,
            copyright: None,
            introduction: None,
        }
    }

    pub fn product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    pub fn include_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.include_prefix = Some(prefix.into());
        self
    }

    pub fn version_file(mut self, path: impl Into<String>) -> Self {
        self.version_file = Some(path.into());
        self
    }

    pub fn version_macro(mut self, name: impl Into<String>) -> Self {
        self.version_macro = Some(name.into());
        self
    }

    pub fn guard(mut self, guard: impl Into<String>) -> Self {
        self.guard = Some(guard.into());
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(
            extensions
                .into_iter()
                .map(|e| e.into().trim_start_matches('.').to_string())
                .collect(),
        );
        self
    }

    pub fn excluded_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs = Some(dirs.into_iter().map(Into::into).collect());
        self
    }

    /// Copyright block carried by every source file; stripped from bodies and
    /// emitted once in the banner.
    pub fn copyright(mut self, text: impl Into<String>) -> Self {
        self.copyright = Some(text.into());
        self
    }

    /// Introduction block; treated like the copyright block.
    pub fn introduction(mut self, text: impl Into<String>) -> Self {
        self.introduction = Some(text.into());
        self
    }

    /// Consume the builder and construct the profile.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if the namespace is blank
    /// - `InvalidProfile` if a derived or supplied value breaks an invariant
    /// - `AbsolutePathNotAllowed` / `PathEscapesRoot` for a bad version file
    pub fn build(self) -> Result<ProjectProfile, DomainError> {
        let namespace = self.namespace.trim().to_string();
        if namespace.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "namespace" });
        }

        let upper = sanitize_identifier(&namespace);
        let known = KnownBlocks::for_namespace(&namespace);
        let version_file = FileNode::try_new(
            self.version_file
                .unwrap_or_else(|| format!("{namespace}/version.hpp")),
        )?;

        let profile = ProjectProfile {
            product_name: self
                .product_name
                .unwrap_or_else(|| capitalize(&namespace)),
            include_prefix: self
                .include_prefix
                .unwrap_or_else(|| format!("{namespace}/")),
            version_file,
            version_macro: self
                .version_macro
                .unwrap_or_else(|| format!("{upper}_VERSION_STR")),
            guard: self
                .guard
                .unwrap_or_else(|| sanitize_identifier(&format!("{namespace}/{namespace}_amalgamated.hpp"))),
            extensions: self.extensions.unwrap_or_else(|| vec!["hpp".into()]),
            excluded_dirs: self.excluded_dirs.unwrap_or_else(|| vec!["detail".into()]),
            copyright: self
                .copyright
                .unwrap_or_else(|| known.copyright.to_string()),
            introduction: self
                .introduction
                .unwrap_or_else(|| known.introduction.to_string()),
            namespace,
        };

        profile.validate()?;
        Ok(profile)
    }
}

/// Boilerplate carried by every header of a known project.
#[derive(Debug, Clone, Copy, Default)]
struct KnownBlocks {
    copyright: &'static str,
    introduction: &'static str,
}

impl KnownBlocks {
    fn for_namespace(namespace: &str) -> Self {
        match namespace {
            "ureact" => Self {
                copyright: UREACT_COPYRIGHT,
                introduction: UREACT_INTRODUCTION,
            },
            _ => Self::default(),
        }
    }
}

const UREACT_COPYRIGHT: &str = "\
//
//         Copyright (C) 2014-2017 Sebastian Jeckel.
//         Copyright (C) 2020-2023 Yaroslav Krylov.
// Distributed under the Boost Software License, Version 1.0.
//    (See accompanying file LICENSE_1_0.txt or copy at
//          http://www.boost.org/LICENSE_1_0.txt)
//
";

const UREACT_INTRODUCTION: &str = "\
// ureact - C++ header-only FRP library
// The library is heavily influenced by cpp.react - https://github.com/snakster/cpp.react
// which uses the Boost Software License - Version 1.0
// see here - https://github.com/snakster/cpp.react/blob/master/LICENSE_1_0.txt
// Project started as a complex refactoring and transformation of cpp.react's codebase
// but with different design goals.
// The documentation can be found at the library's page:
// https://github.com/YarikTH/ureact/blob/main/README.md
";

/// Upper-case `s` and collapse every run of non-alphanumerics into `_`.
///
/// `ureact/ureact_amalgamated.hpp` → `UREACT_UREACT_AMALGAMATED_HPP`.
pub fn sanitize_identifier(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_gap = false;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_uppercase());
            in_gap = false;
        } else if !in_gap {
            out.push('_');
            in_gap = true;
        }
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
