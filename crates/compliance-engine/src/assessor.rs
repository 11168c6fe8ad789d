//! Assessment service boundary
//!
//! The session talks to an [`Assessor`] rather than to the synthesizer
//! directly, so a remote assessment service can replace [`MockAssessor`]
//! without touching highlighting or session handling.

use std::time::Duration;

use async_trait::async_trait;
use shared_types::ComplianceReport;
use tracing::info;

use crate::error::AssessError;
use crate::synthesizer::synthesize_report;

/// Default artificial latency of the mock service
pub const DEFAULT_SYNTHESIS_DELAY_MS: u64 = 2000;

/// Produces a compliance report for a document
#[async_trait]
pub trait Assessor: Send + Sync {
    async fn synthesize(
        &self,
        content: &str,
        standard_name: &str,
    ) -> Result<ComplianceReport, AssessError>;
}

/// Settings for the mock assessment service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessorConfig {
    /// Delay before the mock resolves
    pub synthesis_delay: Duration,
}

impl Default for AssessorConfig {
    fn default() -> Self {
        Self {
            synthesis_delay: Duration::from_millis(DEFAULT_SYNTHESIS_DELAY_MS),
        }
    }
}

/// Stand-in for a remote assessment service.
///
/// Waits for the configured delay, then returns a synthesized report. It
/// never fails.
#[derive(Debug, Clone, Default)]
pub struct MockAssessor {
    config: AssessorConfig,
}

impl MockAssessor {
    pub fn new(config: AssessorConfig) -> Self {
        Self { config }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self::new(AssessorConfig {
            synthesis_delay: delay,
        })
    }

    pub fn config(&self) -> &AssessorConfig {
        &self.config
    }
}

#[async_trait]
impl Assessor for MockAssessor {
    async fn synthesize(
        &self,
        content: &str,
        standard_name: &str,
    ) -> Result<ComplianceReport, AssessError> {
        info!(
            "Using mock assessment service, simulating a {}ms call",
            self.config.synthesis_delay.as_millis()
        );

        let report = synthesize_report(content, standard_name);
        tokio::time::sleep(self.config.synthesis_delay).await;

        Ok(report)
    }
}

/// Run an assessment, failing with [`AssessError::Timeout`] once `timeout` elapses
pub async fn assess_with_timeout(
    assessor: &dyn Assessor,
    content: &str,
    standard_name: &str,
    timeout: Duration,
) -> Result<ComplianceReport, AssessError> {
    match tokio::time::timeout(timeout, assessor.synthesize(content, standard_name)).await {
        Ok(result) => result,
        Err(_elapsed) => Err(AssessError::Timeout(timeout_millis(timeout))),
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`
fn timeout_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
