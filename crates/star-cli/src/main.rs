//! Star catalog CLI.

use clap::{ColorChoice, Parser};
use star_catalog::Catalog;
use star_cli::cli::{Cli, LogFormatArg, LogLevelArg};
use star_cli::commands::run_command;
use star_cli::logging::{LogConfig, LogFormat, init_logging};
use star_store::StoreConfig;
use std::io::{self, IsTerminal};
use tracing::error;
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let config = store_config_from_cli(&cli);
    let mut catalog = Catalog::open(config);
    let mut stdout = io::stdout().lock();
    let exit_code = match run_command(&mut catalog, &cli.command, &mut stdout) {
        Ok(()) => 0,
        Err(err) => {
            error!(error = %format!("{err:#}"), "command failed");
            eprintln!("error: {err:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// `--catalog-dir` wins over `STARS_CATALOG_DIR`.
fn store_config_from_cli(cli: &Cli) -> StoreConfig {
    let config = StoreConfig::from_env();
    match &cli.catalog_dir {
        Some(dir) => config.with_catalog_dir(dir),
        None => config,
    }
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
    config.log_file = cli.log_file.clone();
    config.with_timestamps = cli.log_file.is_some();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
