//! `splice init`: write a default `splice.toml` in the current directory.

use std::path::Path;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const HEADER: &str = "\
# Splice configuration.
#
# Every key can also be set through the environment, e.g.
#   SPLICE__PROJECT__NAMESPACE=ureact
#
# Unset `namespace` is inferred when the include root holds one directory.
# Unset `output` means single_include/<namespace>/<namespace>_amalgamated.hpp.

";

pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    write_default(Path::new(LOCAL_CONFIG), args.force, &output)
}

fn write_default(path: &Path, force: bool, output: &OutputManager) -> CliResult<()> {
    // Bail early if the file already exists and --force was not given.
    if path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(());
    }

    let body = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    std::fs::write(path, format!("{HEADER}{body}"))
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    output.success(&format!("Configuration created at {}", path.display()))?;
    Ok(())
}
