mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::report::ReportArgs;
use commands::summarize::SummarizeArgs;

/// Bond screening analytics and portfolio summaries
#[derive(Parser)]
#[command(
    name = "bonds",
    version,
    about = "Bond screening analytics and portfolio summaries",
    long_about = "Computes running yield, approximate yield to maturity, approximate \
                  modified duration and maturity buckets for a CSV of bonds, and \
                  summarizes them into averages, a maturity ladder and the next \
                  maturities."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format when printing to stdout
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log progress at info level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich a bond CSV and summarize it into a {bonds, summary} report
    Report(ReportArgs),
    /// Re-summarize an already enriched record set
    Summarize(SummarizeArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (result, destination) = match cli.command {
        Commands::Report(args) => {
            let out = args.out.clone();
            (commands::report::run_report(args), out)
        }
        Commands::Summarize(args) => {
            let out = args.out.clone();
            (commands::summarize::run_summarize(args), out)
        }
        Commands::Version => {
            println!("bonds {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    let outcome = result.and_then(|value| match destination {
        Some(path) => output::file::write_json(&path, &value),
        None => {
            output::format_output(&cli.output, &value);
            Ok(())
        }
    });

    match outcome {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
