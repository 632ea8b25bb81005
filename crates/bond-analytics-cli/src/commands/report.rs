use chrono::{Local, NaiveDate};
use clap::Args;
use serde_json::Value;
use tracing::info;

use bond_analytics_core::fixed_income::loader::LoaderConfig;
use bond_analytics_core::portfolio::report;

use crate::input;

/// Arguments for the bond report
#[derive(Args)]
pub struct ReportArgs {
    /// Path to the bond CSV (a missing file yields an empty report)
    #[arg(long, env = "BONDS_CSV", default_value = "data/bonds.csv")]
    pub csv: String,

    /// Write the JSON report here instead of printing it
    #[arg(long, env = "BONDS_OUT")]
    pub out: Option<String>,

    /// Reference date for years to maturity, YYYY-MM-DD (default: today)
    #[arg(long, env = "BONDS_AS_OF")]
    pub as_of: Option<NaiveDate>,

    /// Coupon payments per year for the duration estimate: 1, 2, 4, or 12
    #[arg(long, default_value = "2")]
    pub frequency: u32,
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let config = LoaderConfig::new(as_of).with_frequency(args.frequency)?;

    info!("Reading bonds from {}", args.csv);
    let rows = input::csv_file::read_rows(&args.csv)?;
    let result = report::build_report(&rows, &config);
    info!("Enriched {} bonds as of {}", result.summary.count, as_of);

    Ok(serde_json::to_value(result)?)
}
