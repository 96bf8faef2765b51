//! BOQ audit CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use boq_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use boq_cli::commands::{run_audit, run_parse, run_tags};
use boq_cli::logging::{LogConfig, LogFormat, init_logging};
use boq_cli::summary::{print_audit_summary, print_parse_summary, print_tags};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Parse(args) => match run_parse(args) {
            Ok(outcome) => {
                print_parse_summary(&outcome);
                outcome.exit_code()
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Audit(args) => match run_audit(args) {
            Ok(outcome) => {
                print_audit_summary(&outcome);
                outcome.exit_code(args.fail_on_red)
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Tags(args) => match run_tags(args) {
            Ok(mapping) => {
                print_tags(&mapping);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
