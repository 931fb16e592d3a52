//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "splice",
    bin_name = "splice",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Flatten a header-only library into a single header",
    long_about = "Splice walks an include tree, inlines every internal include \
                  exactly once, and writes one self-contained header with a \
                  version banner and include guard.",
    after_help = "EXAMPLES:\n\
        \x20 splice generate --root include --namespace ureact\n\
        \x20 splice generate --stdout > ureact.hpp\n\
        \x20 splice discover --format list\n\
        \x20 splice completions bash > /usr/share/bash-completion/completions/splice",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the amalgamated header.
    #[command(
        visible_alias = "gen",
        about = "Generate the amalgamated header",
        after_help = "EXAMPLES:\n\
            \x20 splice generate\n\
            \x20 splice generate --root include --namespace ureact\n\
            \x20 splice generate --output build/ureact.hpp --no-expand"
    )]
    Generate(GenerateArgs),

    /// List the top-level files in processing order.
    #[command(
        visible_alias = "ls",
        about = "List top-level files in processing order",
        after_help = "EXAMPLES:\n\
            \x20 splice discover\n\
            \x20 splice discover --format json"
    )]
    Discover(DiscoverArgs),

    /// Print the version detected in the version file.
    #[command(about = "Print the detected library version")]
    Version(VersionArgs),

    /// Write a default `splice.toml` in the current directory.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 splice init\n\
            \x20 splice init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 splice completions bash > ~/.local/share/bash-completion/completions/splice\n\
            \x20 splice completions zsh  > ~/.zfunc/_splice\n\
            \x20 splice completions fish > ~/.config/fish/completions/splice.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the resolved configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 splice config get project.namespace\n\
            \x20 splice config list\n\
            \x20 splice config path"
    )]
    Config(ConfigCommands),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Where the include tree lives and which library it holds.
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectArgs {
    /// Include root containing `<namespace>/...`.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Include root (default: project.include_root)"
    )]
    pub root: Option<PathBuf>,

    /// Library namespace, also the internal include prefix.
    #[arg(
        short = 'n',
        long = "namespace",
        value_name = "NAME",
        help = "Library namespace (default: project.namespace, or the only directory under the root)"
    )]
    pub namespace: Option<String>,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `splice generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Artifact path.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (default: single_include/<ns>/<ns>_amalgamated.hpp)"
    )]
    pub output: Option<PathBuf>,

    /// Drop internal includes instead of inlining them.
    #[arg(
        long = "no-expand",
        help = "Do not inline internal includes",
        long_help = "Do not inline internal includes.\n\n\
            Each internal #include line is removed without being replaced, so \
            only the top-level files are concatenated. Meant for compile-unit \
            bundles whose headers are included separately."
    )]
    pub no_expand: bool,

    /// Print the artifact instead of writing it.
    #[arg(long = "stdout", help = "Write the artifact to stdout instead of a file")]
    pub stdout: bool,
}

// ── discover ──────────────────────────────────────────────────────────────────

/// Arguments for `splice discover`.
#[derive(Debug, Args)]
pub struct DiscoverArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `discover` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
}

// ── version ───────────────────────────────────────────────────────────────────

/// Arguments for `splice version`.
#[derive(Debug, Args)]
pub struct VersionArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `splice init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `splice completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `splice config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `project.namespace`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_flags_parse() {
        let cli = Cli::try_parse_from([
            "splice",
            "generate",
            "--root",
            "include",
            "-n",
            "ureact",
            "--no-expand",
            "--stdout",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.project.root, Some(PathBuf::from("include")));
        assert_eq!(args.project.namespace.as_deref(), Some("ureact"));
        assert!(args.no_expand);
        assert!(args.stdout);
        assert_eq!(args.output, None);
    }

    #[test]
    fn discover_defaults_to_table() {
        let cli = Cli::try_parse_from(["splice", "discover"]).unwrap();
        let Commands::Discover(args) = cli.command else {
            panic!("expected discover");
        };
        assert_eq!(args.format, ListFormat::Table);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["splice", "version", "-vv"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["splice", "-q", "-v", "version"]).is_err());
    }
}
