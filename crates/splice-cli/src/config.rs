//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`ProjectProfile`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `SPLICE__<SECTION>__<KEY>` (`.env` honoured)
//! 3. `--config FILE`, or `./splice.toml` when no file is given
//! 4. User config (`directories` config dir, `config.toml`)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use splice_core::domain::{ProjectProfile, ProfileBuilder};

use crate::error::{CliError, CliResult};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG: &str = "splice.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// The library being amalgamated.
    pub project: ProjectConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Include prefix and directory name; inferred from the root when unset.
    pub namespace: Option<String>,
    pub include_root: PathBuf,
    /// Artifact path; `single_include/<ns>/<ns>_amalgamated.hpp` when unset.
    pub output: Option<PathBuf>,
    pub product_name: Option<String>,
    pub version_file: Option<String>,
    pub version_macro: Option<String>,
    pub guard: Option<String>,
    pub extensions: Vec<String>,
    pub excluded_dirs: Vec<String>,
    /// Copyright block: printed in the banner, stripped from every file.
    /// Known namespaces bring their own when unset.
    pub copyright: Option<String>,
    /// File holding the copyright block; wins over `copyright`.
    pub copyright_file: Option<PathBuf>,
    /// Introduction block, handled like the copyright block.
    pub introduction: Option<String>,
    pub introduction_file: Option<PathBuf>,
    /// Inline internal includes (`false` is the `--no-expand` behaviour).
    pub expand: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project: ProjectConfig {
                namespace: None,
                include_root: PathBuf::from("include"),
                output: None,
                product_name: None,
                version_file: None,
                version_macro: None,
                guard: None,
                extensions: vec!["hpp".into()],
                excluded_dirs: vec!["detail".into()],
                copyright: None,
                copyright_file: None,
                introduction: None,
                introduction_file: None,
                expand: true,
            },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via `--config`.
    /// It must exist; `./splice.toml` and the user config are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(user) = Self::user_config_path() {
            builder = builder.add_source(File::from(user).required(false));
        }

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.as_path()).required(true)),
            None => builder.add_source(File::from(Path::new(LOCAL_CONFIG)).required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix("SPLICE")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("project.extensions")
                    .with_list_parse_key("project.excluded_dirs")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// User-level configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "splice", "splice")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// The file that wins over the others, for `splice config path`.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        if let Some(path) = config_file {
            return path.clone();
        }
        let local = PathBuf::from(LOCAL_CONFIG);
        if local.exists() {
            return local;
        }
        Self::user_config_path().unwrap_or(local)
    }
}

impl ProjectConfig {
    /// Build the domain profile for `namespace`, applying every override.
    pub fn profile(&self, namespace: &str) -> CliResult<ProjectProfile> {
        let mut builder: ProfileBuilder = ProjectProfile::builder(namespace)
            .extensions(self.extensions.iter())
            .excluded_dirs(self.excluded_dirs.iter());

        if let Some(text) = block(self.copyright.as_ref(), self.copyright_file.as_ref())? {
            builder = builder.copyright(text);
        }
        if let Some(text) = block(self.introduction.as_ref(), self.introduction_file.as_ref())? {
            builder = builder.introduction(text);
        }

        if let Some(name) = &self.product_name {
            builder = builder.product_name(name.as_str());
        }
        if let Some(file) = &self.version_file {
            builder = builder.version_file(file.as_str());
        }
        if let Some(name) = &self.version_macro {
            builder = builder.version_macro(name.as_str());
        }
        if let Some(guard) = &self.guard {
            builder = builder.guard(guard.as_str());
        }

        builder.build().map_err(|e| CliError::ConfigError {
            message: format!("project settings are invalid: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

/// Resolve one boilerplate block: the file when set, else the inline text.
fn block(inline: Option<&String>, file: Option<&PathBuf>) -> CliResult<Option<String>> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map(Some)
            .map_err(|e| CliError::ConfigError {
                message: format!("cannot read boilerplate file {}: {e}", path.display()),
                source: Some(Box::new(e)),
            }),
        None => Ok(inline.cloned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_target_hpp_headers() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.project.extensions, ["hpp"]);
        assert_eq!(cfg.project.excluded_dirs, ["detail"]);
        assert!(cfg.project.expand);
        assert_eq!(cfg.project.namespace, None);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[project]\nnamespace = \"ureact\"\ninclude_root = \"inc\"\nexpand = false\n"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.project.namespace.as_deref(), Some("ureact"));
        assert_eq!(cfg.project.include_root, PathBuf::from("inc"));
        assert!(!cfg.project.expand);
        // untouched keys keep their defaults
        assert_eq!(cfg.project.extensions, ["hpp"]);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/splice.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn profile_applies_overrides() {
        let mut project = AppConfig::default().project;
        project.version_macro = Some("LIB_VERSION".into());
        project.extensions = vec!["h".into(), "hpp".into()];
        project.version_file = Some("lib/version.h".into());

        let profile = project.profile("lib").unwrap();
        assert_eq!(profile.version_macro(), "LIB_VERSION");
        assert_eq!(profile.version_file().as_str(), "lib/version.h");
        assert_eq!(profile.guard(), "LIB_LIB_AMALGAMATED_HPP");
    }

    #[test]
    fn invalid_profile_is_a_config_error() {
        let mut project = AppConfig::default().project;
        project.guard = Some("HAS SPACE".into());
        assert!(matches!(
            project.profile("lib"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn boilerplate_file_wins_over_inline_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "// from file\n").unwrap();

        let mut project = AppConfig::default().project;
        project.copyright = Some("// inline\n".into());
        project.copyright_file = Some(file.path().to_path_buf());
        project.introduction = Some("// intro\n".into());

        let profile = project.profile("lib").unwrap();
        assert_eq!(profile.copyright(), "// from file\n");
        assert_eq!(profile.introduction(), "// intro\n");
    }

    #[test]
    fn unset_blocks_keep_known_defaults() {
        let profile = AppConfig::default().project.profile("ureact").unwrap();
        assert!(profile.copyright().contains("Yaroslav Krylov"));
    }

    #[test]
    fn missing_boilerplate_file_is_a_config_error() {
        let mut project = AppConfig::default().project;
        project.introduction_file = Some(PathBuf::from("/definitely/not/here/intro.txt"));
        assert!(matches!(
            project.profile("lib"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn serialises_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[project]"));
        assert!(text.contains("include_root = \"include\""));
        assert!(!text.contains("namespace"));
    }
}
