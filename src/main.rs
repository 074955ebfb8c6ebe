//! CLI entry point for dotls

use std::path::PathBuf;
use std::process;

use chrono::Local;
use clap::Parser;
use clap::error::ErrorKind;
use dotls::logging::init_logging;
use dotls::{ListOrder, OutputConfig, Settings, list_hidden};
use termcolor::{ColorChoice, StandardStream};
use tracing::debug;

/// Exit status for every failure, matching a C `return -1`.
const EXIT_FAILURE: i32 = 255;

#[derive(Parser, Debug)]
#[command(name = "dotls")]
#[command(about = "List the hidden entries of a directory with their size and modification time")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(allow_hyphen_values = true)]
    path: PathBuf,

    /// Pass `-s` to sort by modification time, oldest first; equal times sort by name
    #[arg(value_name = "-s", allow_hyphen_values = true, value_parser = parse_sort_flag)]
    sort: Option<SortFlag>,
}

/// The only accepted value for the second argument.
#[derive(Debug, Clone, Copy)]
struct SortFlag;

fn parse_sort_flag(s: &str) -> Result<SortFlag, String> {
    if s == "-s" {
        Ok(SortFlag)
    } else {
        Err("the only accepted flag is '-s'".to_string())
    }
}

fn main() {
    init_logging();

    let args = Args::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let _ = e.print();
            process::exit(EXIT_FAILURE);
        }
    });

    let settings = Settings::from_env().unwrap_or_else(|e| {
        eprintln!("dotls: {}", e);
        process::exit(EXIT_FAILURE);
    });

    process::exit(run(&args, &settings));
}

/// Run one listing and return the exit status.
///
/// Everything opened here is dropped before the caller exits.
fn run(args: &Args, settings: &Settings) -> i32 {
    let config = OutputConfig::from_settings(settings);
    let order = if args.sort.is_some() {
        ListOrder::Modified
    } else {
        ListOrder::Directory
    };

    let choice = if config.use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    match list_hidden(&args.path, order, config, Local, &mut stdout) {
        Ok(report) => {
            debug!(
                listed = report.listed,
                skipped = report.skipped.len(),
                "listing complete"
            );
            for skipped in &report.skipped {
                eprintln!("dotls: {}", skipped);
            }
            0
        }
        Err(e) => {
            eprintln!("dotls: {}", e);
            EXIT_FAILURE
        }
    }
}
