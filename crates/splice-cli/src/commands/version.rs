//! `splice version`: print the version the banner would carry.

use serde_json::json;

use crate::{
    cli::{OutputFormat, VersionArgs},
    commands::Workspace,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: VersionArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let workspace = Workspace::resolve(args.project, &config)?;
    let version = workspace.service().detect_version(&workspace.profile)?;

    if output.format() == OutputFormat::Json {
        output.json(&json!({
            "product": workspace.profile.product_name(),
            "version": version,
            "file": workspace.profile.version_file().as_str(),
        }))?;
    } else {
        output.data(&version)?;
    }

    Ok(())
}
