pub mod error;
pub mod types;

#[cfg(feature = "fixed_income")]
pub mod fixed_income;

#[cfg(feature = "portfolio")]
pub mod portfolio;

pub use error::BondAnalyticsError;
pub use types::*;

/// Standard result type for all bond-analytics operations
pub type BondAnalyticsResult<T> = Result<T, BondAnalyticsError>;
