//! Portfolio-level aggregation of enriched bond records.

pub mod report;
pub mod summary;
