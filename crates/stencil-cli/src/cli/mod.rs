//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use stencil_core::domain::EmitTarget;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stencil",
    bin_name = "stencil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Typed clients and routes from CMS collection configs",
    long_about = "Stencil scans CMS collection definitions and generates \
                  TypeScript types, a data-access client, and route scaffolds.",
    after_help = "EXAMPLES:\n\
        \x20 stencil generate\n\
        \x20 stencil generate -i src/collections -o src/generated --only types\n\
        \x20 stencil inspect --format json\n\
        \x20 stencil completions bash > /usr/share/bash-completion/completions/stencil",
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
    /// Generate artifacts from collection definitions.
    #[command(
        visible_alias = "gen",
        about = "Generate types, client, and routes",
        after_help = "EXAMPLES:\n\
            \x20 stencil generate\n\
            \x20 stencil generate --only types --only client\n\
            \x20 stencil generate --dry-run\n\
            \x20 stencil generate --routes app --no-clean"
    )]
    Generate(GenerateArgs),

    /// Print what the extractor finds.
    #[command(
        visible_alias = "ls",
        about = "Show extracted collection metadata",
        after_help = "EXAMPLES:\n\
            \x20 stencil inspect\n\
            \x20 stencil inspect -i cms/collections --format json"
    )]
    Inspect(InspectArgs),

    /// Initialise a Stencil configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stencil init           # ./stencil.toml\n\
            \x20 stencil init --global  # user config directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil\n\
            \x20 stencil completions zsh  > ~/.zfunc/_stencil\n\
            \x20 stencil completions fish > ~/.config/fish/completions/stencil.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stencil configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stencil config get paths.output\n\
            \x20 stencil config get conventions.fields.slug\n\
            \x20 stencil config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `stencil generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory containing collection definitions.
    #[arg(short = 'i', long = "input", value_name = "DIR", help = "Collections directory")]
    pub input: Option<PathBuf>,

    /// Directory for `types.ts` and `client.ts`.
    #[arg(short = 'o', long = "output", value_name = "DIR", help = "Output directory")]
    pub output: Option<PathBuf>,

    /// Directory route scaffolds are written under.
    #[arg(long = "routes", value_name = "DIR", help = "Routes directory")]
    pub routes: Option<PathBuf>,

    /// Module specifier route files import the client from.
    #[arg(
        long = "client-module",
        value_name = "SPECIFIER",
        help = "Import path for the generated client"
    )]
    pub client_module: Option<String>,

    /// Restrict generation to some artifact families.
    #[arg(
        long = "only",
        value_enum,
        value_name = "TARGET",
        help = "Only emit these targets (repeatable)"
    )]
    pub only: Vec<TargetArg>,

    /// Preview what would be written without writing any files.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    /// Keep stale generated files.
    #[arg(long = "no-clean", help = "Do not remove stale generated files")]
    pub no_clean: bool,

    /// Fail when any collection document could not be processed.
    #[arg(long = "strict", help = "Exit with an error if any document failed")]
    pub strict: bool,
}

/// Artifact family selectable with `--only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    Types,
    Client,
    Routes,
}

impl From<TargetArg> for EmitTarget {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Types => EmitTarget::Types,
            TargetArg::Client => EmitTarget::Client,
            TargetArg::Routes => EmitTarget::Routes,
        }
    }
}

// ── inspect ───────────────────────────────────────────────────────────────────

/// Arguments for `stencil inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Directory containing collection definitions.
    #[arg(short = 'i', long = "input", value_name = "DIR", help = "Collections directory")]
    pub input: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: InspectFormat,
}

/// Output format for the `inspect` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    /// Human-readable table.
    Table,
    /// One identifier per line.
    List,
    /// JSON object keyed by identifier.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location instead of `./stencil.toml`.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stencil completions`.
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

/// Subcommands for `stencil config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.output`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
