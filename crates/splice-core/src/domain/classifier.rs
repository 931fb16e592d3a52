//! Line classification.
//!
//! Classification is purely syntactic and line-local: no state is carried
//! from one line to the next, so files can be streamed line by line.

use std::collections::HashSet;

use regex::Regex;

use super::{error::DomainError, profile::ProjectProfile};

/// What to do with one line of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClassification<'a> {
    /// Part of the copyright or introduction block; dropped.
    Boilerplate,
    /// `#include <prefix/...>`; carries the referenced path relative to the
    /// include root.
    InternalInclude(&'a str),
    /// Anything else, copied verbatim with its terminator.
    PassThrough(&'a str),
}

/// Compiled classifier for one profile.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    ignored: HashSet<String>,
    internal_include: Regex,
}

impl LineClassifier {
    /// Compile the classifier for `profile`.
    ///
    /// Every non-empty line of the profile's copyright and introduction
    /// blocks is registered as boilerplate. Empty lines are never registered,
    /// otherwise every blank line of every file would be stripped.
    pub fn new(profile: &ProjectProfile) -> Result<Self, DomainError> {
        let ignored = profile
            .copyright()
            .lines()
            .chain(profile.introduction().lines())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let pattern = format!(
            r"^\s*#\s*include <({}.*)>",
            regex::escape(profile.include_prefix())
        );
        let internal_include = Regex::new(&pattern).map_err(|e| DomainError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            ignored,
            internal_include,
        })
    }

    /// Classify one line. `line` may carry its `\n` or `\r\n` terminator.
    pub fn classify<'a>(&self, line: &'a str) -> LineClassification<'a> {
        let content = line.strip_suffix('\n').unwrap_or(line);
        let bare = content.strip_suffix('\r').unwrap_or(content);

        if self.ignored.contains(bare) {
            return LineClassification::Boilerplate;
        }

        match self
            .internal_include
            .captures(content)
            .and_then(|caps| caps.get(1))
        {
            Some(target) => LineClassification::InternalInclude(target.as_str()),
            None => LineClassification::PassThrough(line),
        }
    }
}

/// Find the version string in the content of the version file.
///
/// The first line of the form `#define <MACRO> "<value>"` wins.
pub fn detect_version(profile: &ProjectProfile, content: &str) -> Result<String, DomainError> {
    let pattern = format!(
        r#"^#define {} "([^"]+)""#,
        regex::escape(profile.version_macro())
    );
    let parser = Regex::new(&pattern).map_err(|e| DomainError::InvalidPattern {
        pattern: pattern.clone(),
        reason: e.to_string(),
    })?;

    content
        .lines()
        .find_map(|line| parser.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| DomainError::VersionNotFound {
            macro_name: profile.version_macro().to_string(),
            file: profile.version_file().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const COPYRIGHT: &str = "//\n//  Copyright (C) 2020 Someone.\n// Distributed under the Boost Software License.\n//\n";
    const INTRO: &str = "// ureact - C++ header-only FRP library\n";

    fn classifier() -> LineClassifier {
        let profile = ProjectProfile::builder("ureact")
            .copyright(COPYRIGHT)
            .introduction(INTRO)
            .build()
            .unwrap();
        LineClassifier::new(&profile).unwrap()
    }

    #[test]
    fn copyright_and_intro_lines_are_boilerplate() {
        let c = classifier();
        assert_eq!(c.classify("//\n"), LineClassification::Boilerplate);
        assert_eq!(
            c.classify("//  Copyright (C) 2020 Someone.\n"),
            LineClassification::Boilerplate
        );
        assert_eq!(
            c.classify("// ureact - C++ header-only FRP library\n"),
            LineClassification::Boilerplate
        );
    }

    #[test]
    fn crlf_boilerplate_is_recognised() {
        let c = classifier();
        assert_eq!(c.classify("//\r\n"), LineClassification::Boilerplate);
        assert_eq!(
            c.classify("// ureact - C++ header-only FRP library\r\n"),
            LineClassification::Boilerplate
        );
        assert_eq!(c.classify("int x;\r\n"), LineClassification::PassThrough("int x;\r\n"));
    }

    #[test]
    fn near_boilerplate_passes_through() {
        let c = classifier();
        let line = "//  Copyright (C) 2021 Someone.\n";
        assert_eq!(c.classify(line), LineClassification::PassThrough(line));
        let indented = "  //\n";
        assert_eq!(c.classify(indented), LineClassification::PassThrough(indented));
    }

    #[test]
    fn blank_lines_are_never_boilerplate() {
        let c = classifier();
        assert_eq!(c.classify("\n"), LineClassification::PassThrough("\n"));
    }

    #[test]
    fn internal_include_captures_path() {
        let c = classifier();
        assert_eq!(
            c.classify("#include <ureact/detail/base.hpp>\n"),
            LineClassification::InternalInclude("ureact/detail/base.hpp")
        );
        assert_eq!(
            c.classify("  #  include <ureact/signal.hpp> // fwd\n"),
            LineClassification::InternalInclude("ureact/signal.hpp")
        );
    }

    #[test]
    fn other_includes_pass_through() {
        let c = classifier();
        for line in [
            "#include <vector>\n",
            "#include \"ureact/signal.hpp\"\n",
            "#include <ureactx/signal.hpp>\n",
            "#include <boost/ureact/signal.hpp>\n",
        ] {
            assert_eq!(c.classify(line), LineClassification::PassThrough(line));
        }
    }

    #[test]
    fn pass_through_keeps_terminator_and_whitespace() {
        let c = classifier();
        let line = "    int x = 0;   \r\n";
        assert_eq!(c.classify(line), LineClassification::PassThrough(line));
        assert_eq!(c.classify("tail"), LineClassification::PassThrough("tail"));
    }

    #[test]
    fn prefix_is_matched_literally() {
        let profile = ProjectProfile::builder("a.b").build().unwrap();
        let c = LineClassifier::new(&profile).unwrap();
        assert_eq!(
            c.classify("#include <axb/x.hpp>\n"),
            LineClassification::PassThrough("#include <axb/x.hpp>\n")
        );
        assert_eq!(
            c.classify("#include <a.b/x.hpp>\n"),
            LineClassification::InternalInclude("a.b/x.hpp")
        );
    }

    #[test]
    fn detects_first_version_define() {
        let profile = ProjectProfile::builder("ureact").build().unwrap();
        let content = "#define UREACT_VERSION_MAJOR 0\n\
                       #define UREACT_VERSION_STR \"0.16.0 wip\"\n\
                       #define UREACT_VERSION_STR \"9.9.9\"\n";
        assert_eq!(detect_version(&profile, content).unwrap(), "0.16.0 wip");
    }

    #[test]
    fn missing_version_is_reported() {
        let profile = ProjectProfile::builder("ureact").build().unwrap();
        let err = detect_version(&profile, "#define UREACT_VERSION_MAJOR 0\n").unwrap_err();
        assert!(matches!(err, DomainError::VersionNotFound { .. }));
        assert_eq!(err.category(), super::super::ErrorCategory::NotFound);
    }

    #[test]
    fn version_macro_must_match_exactly() {
        let profile = ProjectProfile::builder("ureact").build().unwrap();
        let content = "#define UREACT_VERSION_STRING \"1.0\"\n";
        assert!(detect_version(&profile, content).is_err());
    }
}
