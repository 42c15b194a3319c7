//! Clap derive structures for the `natsmon` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// natsmon -- human-readable views of NATS monitoring snapshots
#[derive(Debug, Parser)]
#[command(
    name = "natsmon",
    version,
    about = "Format NATS server monitoring snapshots for humans",
    long_about = "Turns raw /varz and /connz monitoring snapshots into readable sizes,\n\
        counts, durations, and per-second rates.\n\n\
        Snapshots are read from saved JSON files, or from stdin when the path is '-'.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "NATSMON_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "NATSMON_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Format byte counts with binary units (KiB, MiB, ...)
    #[command(alias = "b")]
    Bytes(ValuesArgs),

    /// Abbreviate large counts (K, M, B, T)
    #[command(alias = "n")]
    Count(ValuesArgs),

    /// Space out or round server duration strings
    #[command(alias = "d")]
    Duration(DurationArgs),

    /// Compute a pager window with ellipses
    #[command(alias = "p")]
    Pages(PagesArgs),

    /// Per-second rates across successive /varz snapshots
    #[command(alias = "r")]
    Rates(RatesArgs),

    /// Summarize a /varz snapshot
    Varz(VarzArgs),

    /// List connections from a /connz snapshot, one page at a time
    Connz(ConnzArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Formatting commands ──────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ValuesArgs {
    /// Raw values to format
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,
}

#[derive(Debug, Args)]
pub struct DurationArgs {
    /// Duration strings as reported by the server (e.g. 3d12h30m52s)
    #[arg(required = true)]
    pub values: Vec<String>,

    /// Round fractional parts to two decimals instead of spacing
    #[arg(long, conflicts_with = "rtt")]
    pub round: bool,

    /// Space out and round, as for round-trip times
    #[arg(long)]
    pub rtt: bool,
}

#[derive(Debug, Args)]
pub struct PagesArgs {
    /// Total number of pages
    #[arg(long, short = 't')]
    pub total: usize,

    /// Current page (1-based)
    #[arg(long, short = 'c', default_value = "1")]
    pub current: usize,

    /// Number of pager slots [default: pagination.window from config]
    #[arg(long, short = 's')]
    pub size: Option<usize>,
}

// ── Snapshot commands ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RatesArgs {
    /// /varz snapshots in poll order ('-' reads one from stdin)
    #[arg(required = true)]
    pub snapshots: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct VarzArgs {
    /// /varz snapshot ('-' for stdin)
    pub snapshot: PathBuf,

    /// Earlier /varz snapshot to derive rates from
    #[arg(long)]
    pub previous: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ConnzArgs {
    /// /connz snapshot ('-' for stdin)
    pub snapshot: PathBuf,

    /// Page to show (1-based)
    #[arg(long, short = 'p', default_value = "1")]
    pub page: usize,

    /// Connections per page [default: pagination.per_page from config]
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Number of pager slots [default: pagination.window from config]
    #[arg(long)]
    pub window: Option<usize>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current resolved configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
