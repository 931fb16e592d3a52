//! Generated banner and include guard of the artifact.

use super::profile::ProjectProfile;

const RULE: &str = "// ----------------------------------------------------------------\n";

/// Provenance header written once at the top of the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner<'a> {
    profile: &'a ProjectProfile,
    version: &'a str,
    generated_at: &'a str,
}

impl<'a> Banner<'a> {
    pub fn new(profile: &'a ProjectProfile, version: &'a str, generated_at: &'a str) -> Self {
        Self {
            profile,
            version,
            generated_at,
        }
    }

    /// Render the banner followed by the opening guard pair.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("// =============================================================\n");
        out.push_str("// == DO NOT MODIFY THIS FILE BY HAND - IT IS AUTO GENERATED! ==\n");
        out.push_str("// =============================================================\n");
        push_block(&mut out, self.profile.copyright());
        out.push_str(RULE);
        out.push_str(&format!(
            "// {} v{}\n",
            self.profile.product_name(),
            self.version
        ));
        out.push_str(&format!("// Generated: {}\n", self.generated_at));
        out.push_str(RULE);
        push_block(&mut out, self.profile.introduction());
        out.push_str(RULE);
        out.push_str("// This file is an amalgamation of multiple different files.\n");
        out.push_str("// You probably shouldn't edit it directly.\n");
        out.push_str("// It is mostly intended to be used from godbolt and similar tools.\n");
        out.push_str(RULE);
        out.push_str(&opening_guard(self.profile.guard()));
        out
    }
}

/// `#ifndef G` / `#define G`.
pub fn opening_guard(guard: &str) -> String {
    format!("#ifndef {guard}\n#define {guard}\n")
}

/// `#endif // G`.
pub fn closing_guard(guard: &str) -> String {
    format!("#endif // {guard}\n")
}

fn push_block(out: &mut String, block: &str) {
    if block.is_empty() {
        return;
    }
    out.push_str(block);
    if !block.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ProjectProfile {
        ProjectProfile::builder("ureact")
            .copyright("//\n// Copyright (C) 2020 Someone.\n//\n")
            .introduction("// ureact - C++ header-only FRP library")
            .build()
            .unwrap()
    }

    #[test]
    fn banner_carries_version_and_timestamp() {
        let profile = profile();
        let text = Banner::new(&profile, "0.16.0 wip", "2024-01-02 03:04:05.000006").render();

        assert!(text.starts_with("// ====="));
        assert!(text.contains("// == DO NOT MODIFY THIS FILE BY HAND - IT IS AUTO GENERATED! ==\n"));
        assert!(text.contains("// Ureact v0.16.0 wip\n"));
        assert!(text.contains("// Generated: 2024-01-02 03:04:05.000006\n"));
        assert!(text.contains("// This file is an amalgamation of multiple different files.\n"));
    }

    #[test]
    fn blocks_appear_once_and_in_order() {
        let profile = profile();
        let text = Banner::new(&profile, "1", "now").render();

        assert_eq!(text.matches("// Copyright (C) 2020 Someone.\n").count(), 1);
        assert_eq!(text.matches("// ureact - C++ header-only FRP library\n").count(), 1);

        let copyright = text.find("Copyright").unwrap();
        let version = text.find("Ureact v1").unwrap();
        let intro = text.find("header-only FRP").unwrap();
        assert!(copyright < version && version < intro);
    }

    #[test]
    fn banner_ends_with_opening_guard() {
        let profile = profile();
        let text = Banner::new(&profile, "1", "now").render();
        assert!(text.ends_with(
            "#ifndef UREACT_UREACT_AMALGAMATED_HPP\n#define UREACT_UREACT_AMALGAMATED_HPP\n"
        ));
    }

    #[test]
    fn closing_guard_names_the_guard() {
        assert_eq!(closing_guard("X_H"), "#endif // X_H\n");
    }

    #[test]
    fn empty_blocks_are_skipped() {
        let profile = ProjectProfile::builder("lib").build().unwrap();
        let text = Banner::new(&profile, "1", "now").render();
        assert!(!text.contains("\n\n"));
    }
}
