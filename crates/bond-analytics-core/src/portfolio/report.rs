use serde::Serialize;
use tracing::info;

use crate::fixed_income::fields::RawRow;
use crate::fixed_income::loader::{load_rows, BondRecord, LoaderConfig};
use crate::portfolio::summary::{summarize, PortfolioSummary};
use crate::BondAnalyticsResult;

/// The analytics artifact handed to downstream reporting: the enriched
/// records and their summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondReport {
    pub bonds: Vec<BondRecord>,
    pub summary: PortfolioSummary,
}

impl BondReport {
    pub fn from_records(bonds: Vec<BondRecord>) -> Self {
        let summary = summarize(&bonds);
        Self { bonds, summary }
    }

    /// Compact single-document JSON.
    pub fn to_json(&self) -> BondAnalyticsResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Load raw rows and summarize them in one pass.
pub fn build_report(rows: &[RawRow], config: &LoaderConfig) -> BondReport {
    let loaded = load_rows(rows, config);
    info!(
        records = loaded.records.len(),
        warnings = loaded.warnings.len(),
        as_of = %config.as_of,
        "built bond report"
    );
    BondReport::from_records(loaded.records)
}
