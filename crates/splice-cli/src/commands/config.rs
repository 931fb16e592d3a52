//! `splice config`: inspect the resolved configuration.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.data(&get_config_value(&config, &key)?)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.data(&serialised)?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::active_path(config_file.as_ref()).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let p = &config.project;
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    let path = |v: &Option<PathBuf>| {
        v.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    };

    match key {
        "project.namespace" => Ok(opt(&p.namespace)),
        "project.include_root" => Ok(p.include_root.display().to_string()),
        "project.output" => Ok(path(&p.output)),
        "project.product_name" => Ok(opt(&p.product_name)),
        "project.version_file" => Ok(opt(&p.version_file)),
        "project.version_macro" => Ok(opt(&p.version_macro)),
        "project.guard" => Ok(opt(&p.guard)),
        "project.extensions" => Ok(p.extensions.join(",")),
        "project.excluded_dirs" => Ok(p.excluded_dirs.join(",")),
        "project.copyright" => Ok(opt(&p.copyright)),
        "project.introduction" => Ok(opt(&p.introduction)),
        "project.copyright_file" => Ok(path(&p.copyright_file)),
        "project.introduction_file" => Ok(path(&p.introduction_file)),
        "project.expand" => Ok(p.expand.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::InvalidInput {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "project.include_root").unwrap(), "include");
        assert_eq!(get_config_value(&cfg, "project.extensions").unwrap(), "hpp");
    }

    #[test]
    fn unset_optional_key_is_empty() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "project.namespace").unwrap(), "");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::InvalidInput { .. })
        ));
    }
}
