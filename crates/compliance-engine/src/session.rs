//! # Assessment Session State Machine
//!
//! Holds the form (geography, standard, content) and the outcome of the
//! current assessment.
//!
//! ```text
//! Idle ◀──set_content / clear_content──▶ Editing ──begin_assessment──▶ Loading
//!                                          ▲                            │
//!                                          │             complete_assessment
//!                                          │                            ▼
//!                                          └─edit_content / dismiss_error── Report | Error
//! ```
//!
//! `begin_assessment` is also accepted from `Report` and `Error`, replacing
//! the previous outcome. Content can still be changed or cleared from
//! `Error`, which drops the error and returns to the form.
//!
//! A report and an error never coexist, and neither survives a new request.
//! Only one request can be in flight: `begin_assessment` is rejected while
//! `Loading`.

use std::time::Duration;

use shared_types::{ComplianceReport, Segment, Standard};
use tracing::{debug, info, warn};

use crate::assessor::{assess_with_timeout, Assessor};
use crate::catalog::find_standard;
use crate::error::{AssessError, SessionError};
use crate::export::ExportFormat;
use crate::highlight::highlight;
use crate::jurisdiction::Geography;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No content yet.
    Idle,
    /// Content present, no assessment shown.
    Editing,
    /// An assessment request is outstanding.
    Loading,
    /// The last assessment succeeded.
    Report(ComplianceReport),
    /// The last assessment failed with this message.
    Error(String),
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "IDLE",
            Self::Editing => "EDITING",
            Self::Loading => "LOADING",
            Self::Report(_) => "REPORT",
            Self::Error(_) => "ERROR",
        };
        f.write_str(s)
    }
}

/// Inputs captured when an assessment starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentRequest {
    pub content: String,
    pub standard_name: String,
}

/// Single-user assessment session
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    geography: Option<Geography>,
    standard: Option<Standard>,
    content: String,
    state: SessionState,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self {
            geography: None,
            standard: None,
            content: String::new(),
            state: SessionState::Idle,
        }
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn geography(&self) -> Option<Geography> {
        self.geography
    }

    pub fn standard(&self) -> Option<&Standard> {
        self.standard.as_ref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    pub fn report(&self) -> Option<&ComplianceReport> {
        match &self.state {
            SessionState::Report(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Pick a geography. The selected standard is cleared.
    pub fn select_geography(&mut self, geography: Geography) -> Result<(), SessionError> {
        self.ensure_not_loading("select a geography")?;
        debug!("Geography selected: {}", geography);
        self.geography = Some(geography);
        self.standard = None;
        Ok(())
    }

    /// Pick a standard from the current geography's catalog
    pub fn select_standard(&mut self, id: &str) -> Result<&Standard, SessionError> {
        self.ensure_not_loading("select a standard")?;
        let geography = self.geography.ok_or(SessionError::MissingGeography)?;
        let standard =
            find_standard(geography, id).ok_or_else(|| SessionError::UnknownStandard {
                geography: geography.to_string(),
                id: id.to_string(),
            })?;
        debug!("Standard selected: {}", standard.name);
        Ok(&*self.standard.insert(standard.clone()))
    }

    /// Replace the document text. A failed assessment's error is dropped.
    pub fn set_content(&mut self, content: impl Into<String>) -> Result<(), SessionError> {
        match self.state {
            SessionState::Idle | SessionState::Editing | SessionState::Error(_) => {
                self.content = content.into();
                self.state = self.form_state();
                Ok(())
            }
            _ => Err(self.invalid("edit content")),
        }
    }

    /// Empty the document text. Not available while a report is shown.
    pub fn clear_content(&mut self) -> Result<(), SessionError> {
        self.set_content(String::new())
    }

    /// Discard the report or error and return to editing the same content
    pub fn edit_content(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Report(_) | SessionState::Error(_) => {
                self.state = self.form_state();
                Ok(())
            }
            _ => Err(self.invalid("return to editing")),
        }
    }

    /// Dismiss a failed assessment so it can be retried
    pub fn dismiss_error(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Error(_) => {
                self.state = self.form_state();
                Ok(())
            }
            _ => Err(self.invalid("dismiss an error")),
        }
    }

    /// Whether `begin_assessment` would succeed
    pub fn can_assess(&self) -> bool {
        self.geography.is_some()
            && self.standard.is_some()
            && !self.content.is_empty()
            && !self.is_loading()
    }

    /// Enter `Loading`, dropping any previous report or error
    pub fn begin_assessment(&mut self) -> Result<AssessmentRequest, SessionError> {
        self.ensure_not_loading("start an assessment")?;
        if self.geography.is_none() {
            return Err(SessionError::MissingGeography);
        }
        let standard = self.standard.as_ref().ok_or(SessionError::MissingStandard)?;
        if self.content.is_empty() {
            return Err(SessionError::MissingContent);
        }

        let request = AssessmentRequest {
            content: self.content.clone(),
            standard_name: standard.name.clone(),
        };
        info!("Assessment started: standard={}", request.standard_name);
        self.state = SessionState::Loading;
        Ok(request)
    }

    /// Leave `Loading` with the outcome of the outstanding request
    pub fn complete_assessment(
        &mut self,
        outcome: Result<ComplianceReport, AssessError>,
    ) -> Result<(), SessionError> {
        if !self.is_loading() {
            return Err(self.invalid("complete an assessment"));
        }

        self.state = match outcome {
            Ok(report) => {
                info!(
                    "Assessment completed: score={}, issues={}",
                    report.score,
                    report.issues.len()
                );
                SessionState::Report(report)
            }
            Err(err) => {
                warn!("Assessment failed: {}", err);
                SessionState::Error(err.to_string())
            }
        };
        Ok(())
    }

    /// Begin, await the assessor, and complete.
    ///
    /// Assessment failures end in `Error` rather than an `Err` return; only
    /// illegal transitions are returned as errors.
    pub async fn run_assessment(
        &mut self,
        assessor: &dyn Assessor,
        timeout: Option<Duration>,
    ) -> Result<&SessionState, SessionError> {
        let request = self.begin_assessment()?;

        let outcome = match timeout {
            Some(limit) => {
                assess_with_timeout(assessor, &request.content, &request.standard_name, limit)
                    .await
            }
            None => {
                assessor
                    .synthesize(&request.content, &request.standard_name)
                    .await
            }
        };

        self.complete_assessment(outcome)?;
        Ok(&self.state)
    }

    /// Highlighted document, only when the report has issues
    pub fn highlighted_content(&self) -> Option<Vec<Segment>> {
        self.report()
            .filter(|report| report.has_issues())
            .map(|report| highlight(&self.content, &report.issues))
    }

    /// Render the current report for download
    pub fn export(&self, format: ExportFormat) -> Result<String, SessionError> {
        let report = self.report().ok_or_else(|| self.invalid("export a report"))?;
        format
            .render(report)
            .map_err(|err| SessionError::Export(err.to_string()))
    }

    fn form_state(&self) -> SessionState {
        if self.content.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Editing
        }
    }

    fn ensure_not_loading(&self, action: &'static str) -> Result<(), SessionError> {
        if self.is_loading() {
            Err(self.invalid(action))
        } else {
            Ok(())
        }
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            state: self.state.to_string(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessor::MockAssessor;
    use async_trait::async_trait;

    struct FailingAssessor;

    #[async_trait]
    impl Assessor for FailingAssessor {
        async fn synthesize(
            &self,
            _content: &str,
            _standard_name: &str,
        ) -> Result<ComplianceReport, AssessError> {
            Err(AssessError::Unavailable("503".to_string()))
        }
    }

    fn ready_session(content: &str) -> AssessmentSession {
        let mut session = AssessmentSession::new();
        session.select_geography(Geography::US).unwrap();
        session.select_standard("hipaa").unwrap();
        session.set_content(content).unwrap();
        session
    }

    fn fast_assessor() -> MockAssessor {
        MockAssessor::with_delay(Duration::from_millis(1))
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = AssessmentSession::new();
        assert_eq!(session.state(), &SessionState::Idle);
        assert!(!session.can_assess());
    }

    #[test]
    fn test_content_moves_between_idle_and_editing() {
        let mut session = AssessmentSession::new();
        session.set_content("Hello.").unwrap();
        assert_eq!(session.state(), &SessionState::Editing);

        session.clear_content().unwrap();
        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(session.content(), "");
    }

    #[test]
    fn test_changing_geography_resets_standard() {
        let mut session = ready_session("Text.");
        assert!(session.can_assess());

        session.select_geography(Geography::EMEA).unwrap();
        assert!(session.standard().is_none());
        assert!(!session.can_assess());
    }

    #[test]
    fn test_standard_requires_geography() {
        let mut session = AssessmentSession::new();
        assert_eq!(
            session.select_standard("hipaa").unwrap_err(),
            SessionError::MissingGeography
        );
    }

    #[test]
    fn test_standard_must_belong_to_geography() {
        let mut session = AssessmentSession::new();
        session.select_geography(Geography::LATAM).unwrap();
        let err = session.select_standard("hipaa").unwrap_err();
        assert!(matches!(err, SessionError::UnknownStandard { .. }));

        let standard = session.select_standard("lgpd").unwrap();
        assert_eq!(standard.name, "LGPD (Brazil)");
    }

    #[test]
    fn test_begin_reports_missing_inputs() {
        let mut session = AssessmentSession::new();
        assert_eq!(
            session.begin_assessment().unwrap_err(),
            SessionError::MissingGeography
        );

        session.select_geography(Geography::US).unwrap();
        assert_eq!(
            session.begin_assessment().unwrap_err(),
            SessionError::MissingStandard
        );

        session.select_standard("hipaa").unwrap();
        assert_eq!(
            session.begin_assessment().unwrap_err(),
            SessionError::MissingContent
        );
        assert_eq!(session.state(), &SessionState::Idle);
    }

    #[test]
    fn test_whitespace_content_can_be_assessed() {
        let mut session = ready_session("   ");
        assert!(session.can_assess());
        let request = session.begin_assessment().unwrap();
        assert_eq!(request.content, "   ");
        assert_eq!(request.standard_name, "HIPAA");
    }

    #[test]
    fn test_loading_blocks_resubmission_and_edits() {
        let mut session = ready_session("Text.");
        session.begin_assessment().unwrap();

        assert!(session.is_loading());
        assert!(!session.can_assess());
        assert!(matches!(
            session.begin_assessment(),
            Err(SessionError::InvalidTransition { .. })
        ));
        assert!(session.set_content("other").is_err());
        assert!(session.select_geography(Geography::EMEA).is_err());
        assert_eq!(session.content(), "Text.");
    }

    #[test]
    fn test_complete_requires_loading() {
        let mut session = ready_session("Text.");
        let err = session
            .complete_assessment(Err(AssessError::Rejected("x".to_string())))
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidTransition {
                state: "EDITING".to_string(),
                action: "complete an assessment",
            }
        );
    }

    #[test]
    fn test_failure_moves_to_error_without_report() {
        let mut session = ready_session("Text.");
        session.begin_assessment().unwrap();
        session
            .complete_assessment(Err(AssessError::Timeout(2000)))
            .unwrap();

        assert_eq!(session.error(), Some("Assessment timeout after 2000ms"));
        assert!(session.report().is_none());

        session.dismiss_error().unwrap();
        assert_eq!(session.state(), &SessionState::Editing);
        assert!(session.can_assess());
    }

    #[test]
    fn test_content_stays_editable_after_failure() {
        let mut session = ready_session("Text.");
        session.begin_assessment().unwrap();
        session
            .complete_assessment(Err(AssessError::Timeout(5)))
            .unwrap();

        session.set_content("Revised text.").unwrap();
        assert_eq!(session.state(), &SessionState::Editing);
        assert_eq!(session.content(), "Revised text.");
        assert!(session.error().is_none());

        session.begin_assessment().unwrap();
        session
            .complete_assessment(Err(AssessError::Timeout(5)))
            .unwrap();

        session.clear_content().unwrap();
        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(session.content(), "");
        assert!(!session.can_assess());
    }

    #[test]
    fn test_edit_content_discards_report() {
        let mut session = ready_session("Text.");
        session.begin_assessment().unwrap();
        session
            .complete_assessment(Ok(crate::synthesizer::synthesize_report("Text.", "HIPAA")))
            .unwrap();
        assert!(session.report().is_some());
        assert!(session.set_content("new").is_err());
        assert!(session.clear_content().is_err());

        session.edit_content().unwrap();
        assert!(session.report().is_none());
        assert_eq!(session.state(), &SessionState::Editing);
        assert_eq!(session.content(), "Text.");
    }

    #[test]
    fn test_edit_content_is_rejected_without_outcome() {
        let mut session = ready_session("Text.");
        assert!(session.edit_content().is_err());
        assert!(session.dismiss_error().is_err());
    }

    #[test]
    fn test_export_needs_report() {
        let session = ready_session("Text.");
        assert!(session.export(ExportFormat::Json).is_err());
    }

    #[tokio::test]
    async fn test_run_assessment_produces_report() {
        let mut session = ready_session("We keep logs. Logs are shared.");
        let state = session.run_assessment(&fast_assessor(), None).await.unwrap();
        assert!(matches!(state, SessionState::Report(_)));

        let report = session.report().unwrap();
        assert_eq!(report.issues.len(), 2);
        assert!(report.summary.contains("'HIPAA'"));

        let segments = session.highlighted_content().unwrap();
        let flagged: Vec<&str> = segments
            .iter()
            .filter(|s| s.is_flagged())
            .map(Segment::text)
            .collect();
        assert_eq!(flagged, vec!["We keep logs.", "Logs are shared."]);

        let text = session.export(ExportFormat::Text).unwrap();
        assert!(text.contains("Issue #2:"));
    }

    #[tokio::test]
    async fn test_run_assessment_captures_failure() {
        let mut session = ready_session("Text.");
        let state = session.run_assessment(&FailingAssessor, None).await.unwrap();

        assert_eq!(
            state,
            &SessionState::Error("Assessment service unavailable: 503".to_string())
        );
    }

    #[tokio::test]
    async fn test_run_assessment_times_out() {
        let slow = MockAssessor::with_delay(Duration::from_secs(5));
        let mut session = ready_session("Text.");
        session
            .run_assessment(&slow, Some(Duration::from_millis(10)))
            .await
            .unwrap();

        assert_eq!(session.error(), Some("Assessment timeout after 10ms"));
    }

    #[tokio::test]
    async fn test_reassess_from_report_replaces_it() {
        let mut session = ready_session("First. Second.");
        session.run_assessment(&fast_assessor(), None).await.unwrap();
        session.run_assessment(&fast_assessor(), None).await.unwrap();

        assert!(session.report().is_some());
    }
}
