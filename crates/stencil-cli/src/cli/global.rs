//! Flags shared by every `stencil` subcommand: log level, colour, config
//! file and output format.

use clap::Args;
use std::path::PathBuf;

/// Flattened into [`super::Cli`]; each flag is `global` so it may follow the
/// subcommand (`stencil generate -vv`).
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level for the stencil crates. Logs go to stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more while scanning and generating (-v, -vv, -vvv)",
        long_help = "Log level for the stencil crates, written to stderr:
    (none)  - warnings, e.g. skipped or unreadable collection files
    -v      - each collection found and each file written
    -vv     - per-document scan and format decisions
    -vvv    - everything

RUST_LOG, when set, replaces this mapping entirely
(e.g. RUST_LOG=stencil_core=debug)."
    )]
    pub verbose: u8,

    /// Errors only, on stderr. Command results still print.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only log errors; skip progress and summaries"
    )]
    pub quiet: bool,

    /// Also set by `NO_COLOR` or `[output] no_color = true`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Print without ANSI colours (also: NO_COLOR, [output] no_color)"
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of the global file and
    /// `./stencil.toml`. `STENCIL__*` variables still apply on top.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Use FILE instead of the global and ./stencil.toml files"
    )]
    pub config: Option<PathBuf>,

    /// `auto` defers to `[output] format`, then to whether stdout is a
    /// terminal. Only the flag switches logs to JSON.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Result format; `json` also emits logs as JSON lines on stderr"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `[output] format`, else human on a terminal and plain when piped.
    #[default]
    Auto,
    /// Coloured headers and status symbols.
    Human,
    /// Uncoloured text, stable for scripts.
    Plain,
    /// JSON documents, e.g. the collection list from `stencil inspect`.
    Json,
}
