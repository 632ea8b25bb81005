use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Years;

/// Maturity-ladder classification. Each bucket is inclusive on its upper edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaturityBucket {
    #[serde(rename = "past")]
    Past,
    #[serde(rename = "0-1y")]
    UpTo1Y,
    #[serde(rename = "1-3y")]
    From1To3Y,
    #[serde(rename = "3-5y")]
    From3To5Y,
    #[serde(rename = "5-10y")]
    From5To10Y,
    #[serde(rename = "10y+")]
    Over10Y,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

/// The canonical ladder rungs, shortest first.
pub const LADDER: [MaturityBucket; 5] = [
    MaturityBucket::UpTo1Y,
    MaturityBucket::From1To3Y,
    MaturityBucket::From3To5Y,
    MaturityBucket::From5To10Y,
    MaturityBucket::Over10Y,
];

impl MaturityBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaturityBucket::Past => "past",
            MaturityBucket::UpTo1Y => "0-1y",
            MaturityBucket::From1To3Y => "1-3y",
            MaturityBucket::From3To5Y => "3-5y",
            MaturityBucket::From5To10Y => "5-10y",
            MaturityBucket::Over10Y => "10y+",
            MaturityBucket::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MaturityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a time to maturity into its ladder bucket.
pub fn bucket(years: Option<Years>) -> MaturityBucket {
    let Some(years) = years else {
        return MaturityBucket::Unknown;
    };
    if years < Decimal::ZERO {
        MaturityBucket::Past
    } else if years <= dec!(1) {
        MaturityBucket::UpTo1Y
    } else if years <= dec!(3) {
        MaturityBucket::From1To3Y
    } else if years <= dec!(5) {
        MaturityBucket::From3To5Y
    } else if years <= dec!(10) {
        MaturityBucket::From5To10Y
    } else {
        MaturityBucket::Over10Y
    }
}
