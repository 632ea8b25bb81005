pub mod report;
pub mod summarize;
