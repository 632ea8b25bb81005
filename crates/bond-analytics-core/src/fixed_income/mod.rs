//! Per-instrument fixed-income screening analytics.
//!
//! Raw rows flow through [`loader`], which resolves column aliases via
//! [`fields`], parses dates with [`dates`] and derives yields, duration and
//! the maturity bucket with [`yields`], [`duration`] and [`buckets`].

pub mod buckets;
pub mod dates;
pub mod duration;
pub mod fields;
pub mod loader;
pub mod yields;
