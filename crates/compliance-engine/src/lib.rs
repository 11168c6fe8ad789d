//! Healthcare compliance assessment core
//!
//! - `synthesizer`: builds the (mock) report for a document
//! - `highlight`: maps report issues back onto the document text
//! - `session`: form and request lifecycle as an explicit state machine
//! - `export`: JSON and plain-text report downloads

pub mod assessor;
pub mod catalog;
pub mod error;
pub mod export;
pub mod highlight;
pub mod jurisdiction;
pub mod patterns;
pub mod session;
pub mod synthesizer;

pub use assessor::{assess_with_timeout, Assessor, AssessorConfig, MockAssessor};
pub use catalog::{find_standard, standards_for};
pub use error::{AssessError, ExportError, SessionError};
pub use export::ExportFormat;
pub use highlight::{escape_literal, highlight, reassemble};
pub use jurisdiction::Geography;
pub use session::{AssessmentRequest, AssessmentSession, SessionState};
pub use synthesizer::{synthesize_report, template_report};

pub use shared_types::{ComplianceIssue, ComplianceReport, ScoreBand, Segment, Standard};
