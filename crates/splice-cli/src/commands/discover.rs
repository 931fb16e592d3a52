//! `splice discover`: show the top-level files in processing order.

use crate::{
    cli::{DiscoverArgs, ListFormat, OutputFormat},
    commands::Workspace,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: DiscoverArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let workspace = Workspace::resolve(args.project, &config)?;
    let files = workspace.service().discover(&workspace.profile)?;

    let format = match output.format() {
        OutputFormat::Json => ListFormat::Json,
        _ => args.format,
    };

    match format {
        ListFormat::Table => {
            output.header(&format!(
                "Top-level files under {} ({}):",
                workspace.root.display(),
                files.len()
            ))?;
            for (i, file) in files.iter().enumerate() {
                let marker = if file == files.pinned() {
                    output.dim("  (version)")
                } else {
                    String::new()
                };
                output.data(&format!("{:>4}  {}{}", i + 1, file, marker))?;
            }
        }

        ListFormat::List => {
            for file in &files {
                output.data(file.as_str())?;
            }
        }

        ListFormat::Json => {
            let paths: Vec<&str> = files.iter().map(|f| f.as_str()).collect();
            output.json(&paths)?;
        }
    }

    Ok(())
}
