use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::fixed_income::buckets::{MaturityBucket, LADDER};
use crate::fixed_income::loader::BondRecord;
use crate::types::{round_output, Percent, Years};

/// Number of soonest-maturing records listed in a summary.
pub const NEXT_MATURITIES: usize = 5;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Aggregate view of a record set. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub count: usize,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub avg_running_yield: Option<Percent>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub avg_ytm: Option<Percent>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub avg_duration_mod: Option<Years>,
    pub ladder: MaturityLadder,
    pub next_maturities: Vec<BondRecord>,
}

/// Record counts per maturity bucket.
///
/// The five ladder rungs are always present, in ladder order. `past` and
/// `unknown` follow, only when non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaturityLadder {
    counts: Vec<(MaturityBucket, usize)>,
}

impl MaturityLadder {
    pub fn from_buckets(buckets: impl IntoIterator<Item = MaturityBucket>) -> Self {
        let mut past = 0;
        let mut unknown = 0;
        let mut counts: Vec<(MaturityBucket, usize)> = LADDER.iter().map(|b| (*b, 0)).collect();

        for b in buckets {
            match b {
                MaturityBucket::Past => past += 1,
                MaturityBucket::Unknown => unknown += 1,
                rung => {
                    if let Some(entry) = counts.iter_mut().find(|(k, _)| *k == rung) {
                        entry.1 += 1;
                    }
                }
            }
        }

        if past > 0 {
            counts.push((MaturityBucket::Past, past));
        }
        if unknown > 0 {
            counts.push((MaturityBucket::Unknown, unknown));
        }
        Self { counts }
    }

    pub fn get(&self, bucket: MaturityBucket) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| *k == bucket)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MaturityBucket, usize)> + '_ {
        self.counts.iter().copied()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

impl Serialize for MaturityLadder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (bucket, n) in &self.counts {
            map.serialize_entry(bucket.as_str(), n)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Aggregate a record set into count, null-safe averages, the maturity
/// ladder and the next maturities.
///
/// Total over its input, including the empty slice.
pub fn summarize(records: &[BondRecord]) -> PortfolioSummary {
    PortfolioSummary {
        count: records.len(),
        avg_running_yield: mean_present(records.iter().map(|r| r.running_yield)),
        avg_ytm: mean_present(records.iter().map(|r| r.ytm)),
        avg_duration_mod: mean_present(records.iter().map(|r| r.duration_mod)),
        ladder: MaturityLadder::from_buckets(records.iter().map(|r| r.bucket)),
        next_maturities: next_maturities(records),
    }
}

/// Records with a known time to maturity, soonest first, at most
/// [`NEXT_MATURITIES`]. Ties keep input order.
pub fn next_maturities(records: &[BondRecord]) -> Vec<BondRecord> {
    let mut dated: Vec<(Years, &BondRecord)> = records
        .iter()
        .filter_map(|r| r.years_to_maturity.map(|y| (y, r)))
        .collect();
    dated.sort_by_key(|(years, _)| *years);
    dated
        .into_iter()
        .take(NEXT_MATURITIES)
        .map(|(_, r)| r.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Mean of the present values, rounded to output precision. `None` when no
/// value is present or the sum overflows.
fn mean_present(values: impl Iterator<Item = Option<Decimal>>) -> Option<Decimal> {
    let (sum, n) = values
        .flatten()
        .try_fold((Decimal::ZERO, 0u64), |(sum, n), v| {
            sum.checked_add(v).map(|s| (s, n + 1))
        })?;
    if n == 0 {
        return None;
    }
    sum.checked_div(Decimal::from(n)).map(round_output)
}
