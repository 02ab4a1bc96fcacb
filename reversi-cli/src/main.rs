use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressIterator};
use reversi_cli::{apply, fixtures, logging};
use reversi_move::Location;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Apply a single Reversi move to a board.
#[derive(Parser, Debug)]
#[command(name = "reversi-cli")]
#[command(version)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read a JSON request and write the resulting board as JSON to stdout.
    Apply {
        /// Read the request from this file instead of stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Play at this location ("C4") instead of the request's column and row.
        #[arg(long)]
        at: Option<Location>,
    },

    /// Replay a fixture file and report which fixtures pass.
    Fixtures {
        #[arg(default_value = "tests.json")]
        path: PathBuf,

        /// Hide the progress bar.
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Command::Apply { input, at } => run_apply(input.as_deref(), at),
        Command::Fixtures { path, quiet } => run_fixtures(&path, quiet),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_apply(input: Option<&Path>, at: Option<Location>) -> anyhow::Result<bool> {
    let stdout = io::stdout();
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            apply::run(file, stdout.lock(), at)?
        }
        None => apply::run(io::stdin().lock(), stdout.lock(), at)?,
    }
    Ok(true)
}

fn run_fixtures(path: &Path, quiet: bool) -> anyhow::Result<bool> {
    let loaded = fixtures::load_fixtures(path)?;
    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(loaded.len() as u64)
    };

    let report: fixtures::Report = loaded
        .iter()
        .progress_with(bar)
        .map(fixtures::run_fixture)
        .collect();

    for line in report.lines() {
        println!("{}", line);
    }
    println!("{}/{} passed", report.passed(), report.outcomes.len());

    Ok(report.all_passed())
}
