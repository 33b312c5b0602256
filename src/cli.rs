// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::commands;

/// Initializes the tracing subscriber for diagnostic output. The filter can
/// be overridden with the `RESULT_REPORTER_LOG` environment variable.
pub fn init_tracing() {
    let env = std::env::var("RESULT_REPORTER_LOG")
        .unwrap_or_else(|_| "result_reporter=info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn build_cli() -> Command {
    Command::new("result-reporter")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Publishes test-run results to the console, per-suite log files, and the flakiness dashboard")
        .subcommand_required(true)
        .subcommand(
            Command::new("report")
                .about("Report the results of one completed test run")
                .arg(
                    Arg::new("results")
                        .long("results")
                        .help("Path to the JSON file holding the run's test results")
                        .value_name("FILE")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("test-type")
                        .long("test-type")
                        .help("Type of the test run, e.g. \"gtest\" or \"instrumentation\"")
                        .value_name("TYPE")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("test-package")
                        .long("test-package")
                        .help("Test package name, e.g. \"ipc_tests\" or \"ContentShellTest\"")
                        .value_name("NAME")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("annotation")
                        .long("annotation")
                        .help("Annotation of the run; may be repeated. A single annotation becomes the suite display name")
                        .value_name("NAME")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("flakiness-server")
                        .long("flakiness-server")
                        .help("Forward results to the flakiness dashboard at this server")
                        .value_name("URL")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .help("Build output directory; summary files go to its test_logs subdirectory")
                        .value_name("DIR")
                        .default_value("out")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
}

/// Parses the command line arguments.
pub fn parse_args() -> ArgMatches {
    build_cli().get_matches()
}

/// Dispatches the parsed command line to the matching command.
pub fn process_command(matches: ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("report", report_matches)) => {
            let results = report_matches
                .get_one::<PathBuf>("results")
                .unwrap() // Required
                .clone();
            let test_type = report_matches
                .get_one::<String>("test-type")
                .unwrap() // Required
                .clone();
            let test_package = report_matches
                .get_one::<String>("test-package")
                .unwrap() // Required
                .clone();
            let annotations: Vec<String> = report_matches
                .get_many::<String>("annotation")
                .unwrap_or_default()
                .cloned()
                .collect();
            let flakiness_server = report_matches.get_one::<String>("flakiness-server").cloned();
            let out_dir = report_matches
                .get_one::<PathBuf>("out-dir")
                .unwrap() // Has default
                .clone();

            commands::report::execute(
                results,
                test_type,
                test_package,
                annotations,
                flakiness_server,
                out_dir,
            )
        }
        _ => unreachable!("clap enforces a known subcommand"),
    }
}
