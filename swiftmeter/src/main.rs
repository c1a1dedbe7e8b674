//! # swiftmeter
//!
//! A CLI tool for Swift codebase statistics and README badges.
//!
//! ## Overview
//!
//! swiftmeter is built on top of swiftmeterlib. It counts declarations in a
//! single Swift file or in every Swift file under a directory, prints the
//! counts as a JSON block, and can add shields.io badge URLs for each count.
//!
//! ## Usage
//!
//! ```bash
//! # Statistics for every .swift file under Sources/
//! swiftmeter -d Sources/
//!
//! # Statistics for one file, with badges
//! swiftmeter -f Sources/App/main.swift -b
//!
//! # Also append the report to a file (relative paths resolve next to the binary)
//! swiftmeter -d Sources/ -o /tmp/stats.txt
//!
//! # Show progress while scanning
//! swiftmeter -d Sources/ -v
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::style;
use swiftmeterlib::{
    count_directory, count_file, export_to_file, resolve_output_path, BadgeColor, CountOptions,
    Report, ReportSection,
};

/// Settings gathered from the command line
#[derive(Debug)]
struct Config {
    file: Option<PathBuf>,
    directory: Option<PathBuf>,
    badges: bool,
    badge_color: BadgeColor,
    by_file: bool,
    verbose: bool,
    output: Option<PathBuf>,
}

impl Config {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            file: matches.get_one::<PathBuf>("file").cloned(),
            directory: matches.get_one::<PathBuf>("directory").cloned(),
            badges: matches.get_flag("badges"),
            badge_color: matches
                .get_one::<String>("badge-color")
                .map(|s| BadgeColor::from(s.as_str()))
                .unwrap_or_default(),
            by_file: matches.get_flag("by-file"),
            verbose: matches.get_flag("verbose"),
            output: matches.get_one::<PathBuf>("output").cloned(),
        }
    }
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("swiftmeter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Swift codebase statistics and shields.io badges")
        .arg(
            Arg::new("directory")
                .short('d')
                .long("directory")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Code statistics for all .swift files in a directory"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Code statistics for a swift file"),
        )
        .arg(
            Arg::new("badges")
                .short('b')
                .long("badges")
                .action(ArgAction::SetTrue)
                .help("README badges from shields.io"),
        )
        .arg(
            Arg::new("badge-color")
                .long("badge-color")
                .value_name("COLOR")
                .default_value("green")
                .help("Badge color name or hex code"),
        )
        .arg(
            Arg::new("by-file")
                .long("by-file")
                .action(ArgAction::SetTrue)
                .help("Include per-file statistics for directory reports"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log verbose data"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("The output file path where the results will be exported"),
        )
}

/// Verbose runs log progress; quiet runs log nothing, so stdout holds only the report.
fn log_level(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Off
    }
}

/// Route library progress logs to stdout as bare messages.
fn setup_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(env_logger::Target::Stdout)
        .init();
}

/// Build the report text: file section first, then directory section.
fn build_report(config: &Config) -> anyhow::Result<String> {
    let mut report = Report::new();

    if let Some(file) = &config.file {
        let stats = count_file(file)?;
        let mut section = ReportSection::new(&stats)?;
        if config.badges {
            section = section.with_badges(&config.badge_color)?;
        }
        report.push(section);
    }

    if let Some(directory) = &config.directory {
        let mut options = CountOptions::new();
        if config.by_file {
            options = options.with_file_stats();
        }

        let result = count_directory(directory, &options)?;
        let mut section = ReportSection::new(&result.total)?;
        if config.badges {
            section = section.with_badges(&config.badge_color)?;
        }
        if config.by_file {
            section = section.with_files(&result.files);
        }
        report.push(section);
    }

    Ok(report.render()?)
}

/// Directory holding the running executable; relative output paths land here.
fn install_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the swiftmeter executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("executable has no parent directory: {}", exe.display()))
}

fn run(config: &Config) -> anyhow::Result<()> {
    let report = build_report(config)?;

    println!("{}", report);

    if let Some(output) = &config.output {
        let path = resolve_output_path(output, install_dir()?);
        export_to_file(&report, &path)
            .with_context(|| format!("failed to export report to {}", path.display()))?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    let config = Config::from_matches(&matches);

    setup_logging(config.verbose);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold().for_stderr(), e);
            ExitCode::FAILURE
        }
    }
}
