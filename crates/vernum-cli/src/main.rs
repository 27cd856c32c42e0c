//! `vernum` command-line entry point.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use vernum_cli::commands::{
    ListFilter, VersionStep, find_latest, list_families, parse_filenames, parse_version,
};
use vernum_cli::logging::{LogConfig, LogFormat, init_logging};
use vernum_ingest::GroupingOptions;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::summary::{print_families, print_filenames, print_latest, print_version};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Command::Parse(args) => {
            print_filenames(&parse_filenames(&args.filenames), cli.format)?;
            Ok(0)
        }
        Command::Version(args) => {
            let step = if args.next {
                VersionStep::Next
            } else if args.prev {
                VersionStep::Prev
            } else {
                VersionStep::Current
            };
            let report = parse_version(&args.version, args.separator, step)?;
            print_version(&report, cli.format)?;
            Ok(0)
        }
        Command::List(args) => {
            let options = GroupingOptions::new().with_case_sensitivity(args.case.case_sensitivity());
            let filter = ListFilter {
                contains: args.contains.clone(),
                originals_only: args.originals_only,
            };
            let reports = list_families(&args.dir, &options, &filter)?;
            print_families(&reports, cli.format)?;
            Ok(0)
        }
        Command::Latest(args) => {
            let options = GroupingOptions::new().with_case_sensitivity(args.case.case_sensitivity());
            match find_latest(&args.dir, &args.original_name, &options)? {
                Some(report) => {
                    print_latest(&report, cli.format)?;
                    Ok(0)
                }
                None => {
                    eprintln!(
                        "error: no files named {} in {}",
                        args.original_name,
                        args.dir.display()
                    );
                    Ok(1)
                }
            }
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };

    let mut config = LogConfig::default()
        .with_level_filter(level_filter)
        .with_timestamps(cli.log_timestamps)
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config
}
