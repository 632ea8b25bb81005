use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::Years;

/// Calendar format accepted for maturity dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed day count for year fractions.
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);

/// Parse a `YYYY-MM-DD` date. Any other shape yields `None`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// Elapsed years from `reference` to `target` on a 365.25-day year.
///
/// Negative when `target` precedes `reference`.
pub fn years_between(reference: NaiveDate, target: NaiveDate) -> Years {
    let days = (target - reference).num_days();
    Decimal::from(days) / DAYS_PER_YEAR
}
