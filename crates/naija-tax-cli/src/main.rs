mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde_json::Value;
use std::process;

use commands::format::FormatArgs;
use commands::pit::{PitArgs, ValidateArgs};
use commands::thresholds::TurnoverArgs;

/// Nigerian personal income tax, VAT and CIT estimates
#[derive(Parser)]
#[command(
    name = "ntax",
    version,
    about = "Nigerian personal income tax, VAT and CIT estimates",
    long_about = "A CLI for estimating Nigerian personal income tax on the progressive \
                  2025 schedule with decimal precision, and for classifying turnover \
                  against the VAT registration threshold and CIT rate tiers. \
                  Set RUST_LOG=debug to trace each band allocation."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate personal income tax with reliefs and a band breakdown
    Pit(PitArgs),
    /// Check PIT inputs and list every problem found
    Validate(ValidateArgs),
    /// Classify turnover against the VAT registration threshold
    Vat(TurnoverArgs),
    /// Determine the CIT rate tier for a turnover
    Cit(TurnoverArgs),
    /// Print the personal income tax band schedule
    Bands,
    /// Render an amount in Naira
    Format(FormatArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let result: Result<Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Pit(args) => commands::pit::run_pit(args),
        Commands::Validate(args) => commands::pit::run_validate(args),
        Commands::Vat(args) => commands::thresholds::run_vat(args),
        Commands::Cit(args) => commands::thresholds::run_cit(args),
        Commands::Bands => commands::pit::run_bands(),
        Commands::Format(args) => commands::format::run_format(args),
        Commands::Version => {
            println!("ntax {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            // A failed validation still prints its report but exits non-zero
            let invalid = value
                .pointer("/result/valid")
                .and_then(Value::as_bool)
                .map(|valid| !valid)
                .unwrap_or(false);
            process::exit(if invalid { 2 } else { 0 });
        }
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
