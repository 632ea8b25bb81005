use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::BondAnalyticsError;
use crate::fixed_income::buckets::{bucket, MaturityBucket};
use crate::fixed_income::dates::{parse_date, years_between};
use crate::fixed_income::duration::{modified_duration, DEFAULT_COUPON_FREQUENCY};
use crate::fixed_income::fields::{
    FieldRule, FieldValue, RawRow, COUPON, CURRENCY, ISIN, ISSUER, MATURITY, PRICE,
    RUNNING_YIELD, TICKER, YTM,
};
use crate::fixed_income::yields::{running_yield, ytm_approx};
use crate::types::{round_output, Money, Percent, Years};
use crate::BondAnalyticsResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Parameters shared by every row of one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Reference date that years-to-maturity is measured from
    pub as_of: NaiveDate,
    /// Coupon payments per year used by the duration estimate
    pub coupon_frequency: u32,
}

impl LoaderConfig {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            coupon_frequency: DEFAULT_COUPON_FREQUENCY,
        }
    }

    /// Override the coupon frequency: 1 (annual), 2 (semi), 4 (quarterly), 12 (monthly).
    pub fn with_frequency(mut self, coupon_frequency: u32) -> BondAnalyticsResult<Self> {
        if !matches!(coupon_frequency, 1 | 2 | 4 | 12) {
            return Err(BondAnalyticsError::InvalidInput {
                field: "coupon_frequency".into(),
                reason: "Coupon frequency must be 1, 2, 4, or 12.".into(),
            });
        }
        self.coupon_frequency = coupon_frequency;
        Ok(self)
    }
}

/// One instrument with its derived screening analytics.
///
/// Numeric fields serialize as JSON numbers; absent values as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondRecord {
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub isin: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub currency: String,
    /// Coupon rate in percent. `None` when missing or unparseable, `Some(0)` for a zero coupon
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub coupon: Option<Percent>,
    #[serde(default)]
    pub maturity: Option<NaiveDate>,
    /// Negative once the maturity date has passed
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub years_to_maturity: Option<Years>,
    /// Clean price per 100 face
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Money>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub running_yield: Option<Percent>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub ytm: Option<Percent>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub duration_mod: Option<Years>,
    #[serde(default)]
    pub bucket: MaturityBucket,
}

/// Records in input order plus the input problems met along the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutput {
    pub records: Vec<BondRecord>,
    pub warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build one enriched record per raw row, in input order.
///
/// Never fails: malformed cells degrade to absent values and are reported
/// in [`LoadOutput::warnings`]. Unparseable coupon or price text counts as
/// zero for the analytics but is emitted as `null`.
pub fn load_rows(rows: &[RawRow], config: &LoaderConfig) -> LoadOutput {
    let mut output = LoadOutput {
        records: Vec::with_capacity(rows.len()),
        warnings: Vec::new(),
    };
    for (index, row) in rows.iter().enumerate() {
        let record = load_row(index + 1, row, config, &mut output.warnings);
        output.records.push(record);
    }
    output
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn load_row(
    line: usize,
    row: &RawRow,
    config: &LoaderConfig,
    warnings: &mut Vec<String>,
) -> BondRecord {
    let price_field = PRICE.number(row);
    let coupon_field = COUPON.number(row);
    report_zero_filled(line, &PRICE, &price_field, warnings);
    report_zero_filled(line, &COUPON, &coupon_field, warnings);
    let price = price_field.or_zero();
    let coupon = coupon_field.or_zero();

    let maturity_text = MATURITY.resolve(row);
    let maturity = maturity_text.and_then(parse_date);
    if let (Some(text), None) = (maturity_text, maturity) {
        push_warning(
            warnings,
            format!(
                "row {line}: maturity '{text}' is not a YYYY-MM-DD date; treated as unknown"
            ),
        );
    }
    let years = maturity.map(|m| years_between(config.as_of, m));

    let ytm = supplied(line, &YTM, row, warnings)
        .or_else(|| years.and_then(|y| ytm_approx(coupon, price, y)));
    let running = supplied(line, &RUNNING_YIELD, row, warnings)
        .or_else(|| running_yield(coupon, price));
    let duration =
        years.and_then(|y| modified_duration(coupon, ytm, y, config.coupon_frequency));

    let record = BondRecord {
        ticker: TICKER.text(row),
        isin: ISIN.text(row),
        issuer: ISSUER.text(row),
        currency: CURRENCY.text(row),
        coupon: coupon_field.value(),
        maturity,
        years_to_maturity: years.map(round_output),
        price: price_field.value(),
        running_yield: running.map(round_output),
        ytm: ytm.map(round_output),
        duration_mod: duration.map(round_output),
        bucket: bucket(years),
    };

    debug!(
        row = line,
        isin = %record.isin,
        bucket = %record.bucket,
        "derived bond analytics"
    );
    record
}

/// A numeric value supplied by the input that takes precedence over the
/// computed estimate. Zero is a placeholder and does not count.
fn supplied(
    line: usize,
    rule: &FieldRule,
    row: &RawRow,
    warnings: &mut Vec<String>,
) -> Option<Percent> {
    match rule.number(row) {
        FieldValue::Present(v) if !v.is_zero() => Some(v),
        FieldValue::Invalid(text) => {
            push_warning(
                warnings,
                format!(
                    "row {line}: {} '{text}' is not numeric; computed estimate used",
                    rule.name
                ),
            );
            None
        }
        _ => None,
    }
}

fn report_zero_filled(
    line: usize,
    rule: &FieldRule,
    field: &FieldValue,
    warnings: &mut Vec<String>,
) {
    if let FieldValue::Invalid(text) = field {
        push_warning(
            warnings,
            format!(
                "row {line}: {} '{text}' is not numeric; treated as 0",
                rule.name
            ),
        );
    }
}

fn push_warning(warnings: &mut Vec<String>, message: String) {
    warn!("{message}");
    warnings.push(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn row(cells: &[(&str, &str)]) -> RawRow {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load_one(cells: &[(&str, &str)]) -> (BondRecord, Vec<String>) {
        let out = load_rows(&[row(cells)], &LoaderConfig::new(as_of()));
        (out.records[0].clone(), out.warnings)
    }

    #[test]
    fn test_full_row_is_enriched() {
        let (rec, warnings) = load_one(&[
            ("ticker", "UKT"),
            ("isin", "GB00TEST0001"),
            ("issuer", "HM Treasury"),
            ("currency", "GBP"),
            ("coupon", "5"),
            ("maturity", "2035-01-02"),
            ("price", "100"),
        ]);
        assert!(warnings.is_empty());
        assert_eq!(rec.ticker, "UKT");
        assert_eq!(rec.issuer, "HM Treasury");
        assert_eq!(rec.coupon, Some(dec!(5)));
        assert_eq!(rec.price, Some(dec!(100)));
        assert_eq!(rec.running_yield, Some(dec!(5)));
        assert_eq!(rec.ytm, Some(dec!(5)));
        // 3653 days / 365.25 = 10.00137
        assert_eq!(rec.years_to_maturity, Some(dec!(10.001)));
        assert_eq!(rec.bucket, MaturityBucket::Over10Y);
        let dur = rec.duration_mod.unwrap();
        assert!(dur > dec!(7.7) && dur < dec!(7.9), "duration {dur}");
    }

    #[test]
    fn test_aliases_are_honoured() {
        let (rec, _) = load_one(&[
            ("name", "Acme"),
            ("maturity_date", "2027-01-01"),
            ("price_clean", "95"),
            ("coupon", "4"),
        ]);
        assert_eq!(rec.issuer, "Acme");
        assert_eq!(rec.price, Some(dec!(95)));
        assert_eq!(rec.maturity, NaiveDate::from_ymd_opt(2027, 1, 1));
        assert_eq!(rec.bucket, MaturityBucket::From1To3Y);
    }

    #[test]
    fn test_supplied_ytm_takes_precedence() {
        let (rec, _) = load_one(&[
            ("coupon", "5"),
            ("price", "100"),
            ("maturity", "2030-01-01"),
            ("ytm", "7.12345"),
            ("running_yield", "6.5"),
        ]);
        assert_eq!(rec.ytm, Some(dec!(7.123)));
        assert_eq!(rec.running_yield, Some(dec!(6.5)));
    }

    #[test]
    fn test_zero_supplied_ytm_is_placeholder() {
        let (rec, _) = load_one(&[
            ("coupon", "5"),
            ("price", "100"),
            ("maturity", "2030-01-01"),
            ("ytm", "0"),
        ]);
        assert_eq!(rec.ytm, Some(dec!(5)));
    }

    #[test]
    fn test_invalid_supplied_ytm_falls_back_with_warning() {
        let (rec, warnings) = load_one(&[
            ("coupon", "5"),
            ("price", "100"),
            ("maturity", "2030-01-01"),
            ("ytm", "high"),
        ]);
        assert_eq!(rec.ytm, Some(dec!(5)));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("ytm 'high'"));
    }

    #[test]
    fn test_supplied_ytm_kept_for_unpriced_bond() {
        let (rec, warnings) = load_one(&[
            ("coupon", "5"),
            ("price", "0"),
            ("maturity", "2030-01-01"),
            ("ytm", "6.5"),
        ]);
        assert!(warnings.is_empty());
        assert_eq!(rec.price, Some(Decimal::ZERO));
        assert_eq!(rec.ytm, Some(dec!(6.5)));
        // No supplied running yield, and none can be computed at price 0
        assert_eq!(rec.running_yield, None);
        assert!(rec.duration_mod.is_some());
    }

    #[test]
    fn test_price_at_decimal_max_does_not_abort_load() {
        let rows = vec![
            row(&[
                ("isin", "HUGE"),
                ("coupon", "5"),
                ("price", "79228162514264337593543950335"),
                ("maturity", "2030-01-01"),
            ]),
            row(&[
                ("isin", "OK"),
                ("coupon", "5"),
                ("price", "100"),
                ("maturity", "2030-01-01"),
            ]),
        ];
        let out = load_rows(&rows, &LoaderConfig::new(as_of()));
        assert_eq!(out.records.len(), 2);
        let huge = &out.records[0];
        assert_eq!(huge.price, Some(Decimal::MAX));
        assert_eq!(huge.ytm, None);
        assert_eq!(huge.duration_mod, None);
        assert_eq!(huge.bucket, MaturityBucket::From3To5Y);
        assert_eq!(out.records[1].ytm, Some(dec!(5)));
    }

    #[test]
    fn test_missing_price_leaves_yields_absent() {
        let (rec, warnings) = load_one(&[("coupon", "5"), ("maturity", "2030-01-01")]);
        assert!(warnings.is_empty());
        assert_eq!(rec.price, None);
        assert_eq!(rec.running_yield, None);
        assert_eq!(rec.ytm, None);
        assert_eq!(rec.duration_mod, None);
        assert!(rec.years_to_maturity.is_some());
    }

    #[test]
    fn test_invalid_numerics_are_zero_filled_and_reported() {
        let (rec, warnings) = load_one(&[
            ("coupon", "five"),
            ("price", "n/a"),
            ("maturity", "2030-01-01"),
        ]);
        assert_eq!(rec.coupon, None);
        assert_eq!(rec.price, None);
        assert_eq!(rec.running_yield, None);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| w.contains("price 'n/a'")));
        assert!(warnings.iter().any(|w| w.contains("coupon 'five'")));
    }

    #[test]
    fn test_zero_coupon_distinct_from_missing_coupon() {
        let (zero, _) = load_one(&[
            ("coupon", "0"),
            ("price", "80"),
            ("maturity", "2030-01-01"),
        ]);
        let (missing, _) = load_one(&[("price", "80"), ("maturity", "2030-01-01")]);
        assert_eq!(zero.coupon, Some(Decimal::ZERO));
        assert_eq!(missing.coupon, None);
        // Analytics agree: a missing coupon computes as zero
        assert_eq!(zero.ytm, missing.ytm);
        assert_eq!(zero.running_yield, Some(Decimal::ZERO));
    }

    #[test]
    fn test_bad_maturity_keeps_record_as_unknown() {
        let (rec, warnings) = load_one(&[
            ("isin", "X1"),
            ("maturity", "31/12/2030"),
            ("price", "99"),
        ]);
        assert_eq!(rec.isin, "X1");
        assert_eq!(rec.maturity, None);
        assert_eq!(rec.years_to_maturity, None);
        assert_eq!(rec.ytm, None);
        assert_eq!(rec.duration_mod, None);
        assert_eq!(rec.bucket, MaturityBucket::Unknown);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_matured_bond_is_past() {
        let (rec, _) = load_one(&[
            ("coupon", "3"),
            ("price", "100"),
            ("maturity", "2024-07-01"),
        ]);
        assert_eq!(rec.bucket, MaturityBucket::Past);
        assert!(rec.years_to_maturity.unwrap() < Decimal::ZERO);
        assert_eq!(rec.ytm, None);
        assert_eq!(rec.duration_mod, None);
        assert_eq!(rec.running_yield, Some(dec!(3)));
    }

    #[test]
    fn test_empty_row_yields_blank_record() {
        let (rec, warnings) = load_one(&[]);
        assert!(warnings.is_empty());
        assert_eq!(rec.ticker, "");
        assert_eq!(rec.coupon, None);
        assert_eq!(rec.bucket, MaturityBucket::Unknown);
    }

    #[test]
    fn test_input_order_preserved() {
        let rows = vec![
            row(&[("isin", "A"), ("maturity", "2040-01-01")]),
            row(&[("isin", "B"), ("maturity", "2026-01-01")]),
            row(&[("isin", "C")]),
        ];
        let out = load_rows(&rows, &LoaderConfig::new(as_of()));
        let isins: Vec<&str> = out.records.iter().map(|r| r.isin.as_str()).collect();
        assert_eq!(isins, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_frequency_validation() {
        assert!(LoaderConfig::new(as_of()).with_frequency(4).is_ok());
        assert!(LoaderConfig::new(as_of()).with_frequency(0).is_err());
        assert!(LoaderConfig::new(as_of()).with_frequency(3).is_err());
    }

    #[test]
    fn test_record_serializes_numbers_not_strings() {
        let (rec, _) = load_one(&[
            ("coupon", "5"),
            ("price", "100"),
            ("maturity", "2035-01-02"),
        ]);
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json["ytm"].is_number());
        assert_eq!(json["maturity"], "2035-01-02");
        assert_eq!(json["bucket"], "10y+");
        assert!(json["duration_mod"].is_number());
    }
}
