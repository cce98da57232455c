//! `lifedash` command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, start optional file logging and dispatch commands.
//! - Read the wall clock once when no `--now` is given, then inject it.

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod reference_time;

const LONG_ABOUT: &str = "\
Lays out dated dashboard events for rendering.

Reads a JSON snapshot of events and prints a layout as JSON: either the
orbital bubble map (events on a compressed time axis with their open actions
orbiting them) or the 30-day ribbon (date spans stacked into rows).";

const AFTER_HELP: &str = "\
EXAMPLES:
    Bubble map as of right now:
        $ lifedash bubble snapshot.json

    Ribbon for a fixed reference date:
        $ lifedash ribbon snapshot.json --now 2026-10-19

    Axis gridlines with tuned constants:
        $ lifedash --config layout.json gridlines

SNAPSHOT FORMAT:
    { \"events\": [
        { \"name\": \"Flight\", \"date\": \"2026-10-20\", \"weight\": 8,
          \"actions\": [{ \"name\": \"Pack\", \"status\": \"todo\" }] },
        { \"name\": \"Course\", \"startDate\": \"2026-10-21\", \"durationDays\": 3, \"weight\": 4 }
    ],
      \"icons\": [{ \"icon\": \"plane\", \"tags\": [\"flight\", \"travel\"] }] }";

#[derive(Parser)]
#[command(name = "lifedash")]
#[command(version)]
#[command(about = "Temporal layout engine for the life dashboard")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// JSON file overriding layout constants
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Absolute directory for rolling log files (logging is off without it)
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bubble-map layout for a snapshot
    Bubble {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Reference time (RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD)
        #[arg(long, value_parser = reference_time::parse_reference_time)]
        now: Option<NaiveDateTime>,
    },

    /// Print the ribbon layout for a snapshot
    Ribbon {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Reference time (RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD)
        #[arg(long, value_parser = reference_time::parse_reference_time)]
        now: Option<NaiveDateTime>,
    },

    /// Print the reference gridlines of the compressed axis
    Gridlines,
}

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or_else(|| lifedash_core::default_log_level());
        if let Err(e) = lifedash_core::init_logging(level, log_dir) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let options = commands::OutputOptions {
        config: cli.config,
        pretty: cli.pretty,
    };

    let result = match cli.command {
        Commands::Bubble { snapshot, now } => {
            commands::bubble(&options, &snapshot, now.unwrap_or_else(reference_time::wall_clock))
        }
        Commands::Ribbon { snapshot, now } => {
            commands::ribbon(&options, &snapshot, now.unwrap_or_else(reference_time::wall_clock))
        }
        Commands::Gridlines => commands::gridlines(&options),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log::error!("event=cli_command module=cli status=error");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
