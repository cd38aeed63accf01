//! `abp`: validate and browse the antibiotic-prophylaxis catalog.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use abp_cli::logging::{LogConfig, init_logging};
use abp_cli::report::{render_json, render_text};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, ReportFormatArg, ValidateArgs};
use crate::commands::{run_molecule, run_search, run_show, run_specialties, run_validate};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let data = cli.data.as_deref();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Validate(ValidateArgs::default()));
    let outcome = match &command {
        Command::Validate(args) => {
            run_validate(data, cli.config.as_deref(), args).and_then(|report| {
                match args.format {
                    ReportFormatArg::Text => print!("{}", render_text(&report)),
                    ReportFormatArg::Json => println!("{}", render_json(&report)?),
                }
                Ok(report.exit_code())
            })
        }
        Command::Specialties => run_specialties(data).map(|()| 0),
        Command::Show(args) => run_show(data, args).map(|()| 0),
        Command::Search(args) => run_search(data, args).map(|()| 0),
        Command::Molecule(args) => run_molecule(data, args).map(|()| 0),
    };

    let exit_code = outcome.unwrap_or_else(|error| {
        eprintln!("error: {error:#}");
        1
    });
    std::process::exit(exit_code);
}

/// An explicit `--log-level` beats `-v/-q`; either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter: cli
            .log_level
            .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from),
        use_env_filter: !cli.verbosity.is_present() && cli.log_level.is_none(),
        with_ansi,
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
        ..LogConfig::default()
    }
}
