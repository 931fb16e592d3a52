//! `splice generate`: build the amalgamated header.

use splice_core::application::{AmalgamateRequest, ExpandMode};
use tracing::instrument;

use crate::{
    cli::{GenerateArgs, OutputFormat},
    commands::Workspace,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let workspace = Workspace::resolve(args.project, &config)?;
    let service = workspace.service();
    let profile = workspace.profile;

    let mode = if args.no_expand {
        ExpandMode::Reference
    } else {
        ExpandMode::from(config.project.expand)
    };

    if args.stdout {
        let artifact = service
            .render(&profile, mode)
            .with_cli_context(|| "rendering artifact")?;
        output.raw(&artifact.text)?;
        return Ok(());
    }

    let target = args
        .output
        .or(config.project.output)
        .unwrap_or_else(|| profile.default_output());

    let request = AmalgamateRequest::new(profile, target).mode(mode);
    let report = service
        .assemble(&request)
        .with_cli_context(|| "writing artifact")?;

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }

    output.success(&format!(
        "Generated {} ({} v{}, {} files, {} bytes)",
        request.output.display(),
        request.profile.product_name(),
        report.version,
        report.files_inlined,
        report.bytes,
    ))?;
    if !mode.expands() {
        output.print("  internal includes were dropped, not inlined (--no-expand)")?;
    }

    Ok(())
}
