pub mod types;

pub use types::{ComplianceIssue, ComplianceReport, ScoreBand, Segment, Standard, MAX_SCORE};
