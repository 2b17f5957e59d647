use anyhow::{bail, Result};
use chess_runner::{run_file, run_suite, Report, RunnerConfig, SuiteRange};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-runner")]
#[command(about = "Run chess rules scenarios", long_about = None)]
struct Cli {
    /// Config file to use instead of ./chess-runner.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single scenario file
    File {
        /// Path to the scenario file
        path: PathBuf,
    },
    /// Run a numbered suite of scenario files
    Suite {
        /// Directory holding the scenario files
        dir: PathBuf,

        /// Board size label, e.g. 8x8
        size: String,

        /// First scenario number (overrides the configured range)
        #[arg(long)]
        start: Option<u32>,

        /// Last scenario number (overrides the configured range)
        #[arg(long)]
        end: Option<u32>,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => RunnerConfig::load_from(path)?,
        None => RunnerConfig::load()?,
    };

    match cli.command {
        Commands::File { path } => {
            let report = run_file(&path)?;
            print_report(&report, &config);
        }
        Commands::Suite {
            dir,
            size,
            start,
            end,
        } => {
            let range = match (start, end) {
                (Some(start), Some(end)) => SuiteRange::new(start, end),
                _ => {
                    let configured = config.suite(&size)?;
                    SuiteRange::new(
                        start.unwrap_or(configured.start),
                        end.unwrap_or(configured.end),
                    )
                }
            };

            let results = run_suite(&config, &dir, &size, range);
            let mut failures = 0;
            for (path, result) in &results {
                println!("=== Running {} ===", path.display());
                match result {
                    Ok(report) => print_report(report, &config),
                    Err(e) => {
                        println!("[ERROR] {e}");
                        failures += 1;
                    }
                }
                println!();
            }

            if failures > 0 {
                let total = results.len();
                bail!("{failures} of {total} scenario(s) failed to open or parse");
            }
            tracing::info!(count = results.len(), "all scenarios ran to completion");
        }
    }

    Ok(())
}

fn print_report(report: &Report, config: &RunnerConfig) {
    for line in &report.lines {
        println!("{line}");
    }
    if config.print_board {
        print!("{}", report.board);
    }
}
