//! CLI argument definitions for `vernum`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use vernum_ingest::CaseSensitivity;

#[derive(Parser)]
#[command(
    name = "vernum",
    version,
    about = "Find the latest version of versioned files",
    long_about = "Parse filenames such as report-2.3.1.csv and group sibling files \
                  into version families.\n\n\
                  Versioned names follow <base>-<major>.<minor>.<revision>(.<ext>)*."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Output format for results.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show how filenames decompose into base name, version and extensions.
    Parse(ParseArgs),

    /// Parse a version number, optionally stepping to the next or previous one.
    Version(VersionArgs),

    /// Group a directory into version families.
    List(ListArgs),

    /// Print the path of the newest file in a family.
    Latest(LatestArgs),
}

#[derive(Args)]
pub struct ParseArgs {
    /// Filenames to decompose.
    #[arg(value_name = "FILENAME", required = true)]
    pub filenames: Vec<String>,
}

#[derive(Args)]
pub struct VersionArgs {
    /// Version text, e.g. 1.4.2 or 2.0.7rc1.
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Print the next revision instead.
    #[arg(long = "next", conflicts_with = "prev")]
    pub next: bool,

    /// Print the previous revision instead.
    #[arg(long = "prev")]
    pub prev: bool,

    /// Segment separator used in VERSION.
    #[arg(long = "separator", value_name = "CHAR", default_value_t = '.')]
    pub separator: char,
}

/// Case rule flags shared by directory commands.
#[derive(Args)]
pub struct CaseArgs {
    /// Treat names differing only in case as different families.
    #[arg(long = "case-sensitive", conflicts_with = "case_insensitive")]
    pub case_sensitive: bool,

    /// Treat names differing only in case as the same family.
    #[arg(long = "case-insensitive")]
    pub case_insensitive: bool,
}

impl CaseArgs {
    /// The requested rule, or the platform default when neither flag is set.
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        if self.case_sensitive {
            CaseSensitivity::Sensitive
        } else if self.case_insensitive {
            CaseSensitivity::Insensitive
        } else {
            CaseSensitivity::system_default()
        }
    }
}

#[derive(Args)]
pub struct ListArgs {
    /// Directory to scan.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Only show families whose original name contains TEXT.
    #[arg(long = "contains", value_name = "TEXT")]
    pub contains: Option<String>,

    /// Only show families that have no versioned member.
    #[arg(long = "originals-only")]
    pub originals_only: bool,

    #[command(flatten)]
    pub case: CaseArgs,
}

#[derive(Args)]
pub struct LatestArgs {
    /// Directory to scan.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Original (unversioned) name of the family, e.g. report.csv.
    #[arg(value_name = "ORIGINAL_NAME")]
    pub original_name: String,

    #[command(flatten)]
    pub case: CaseArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
