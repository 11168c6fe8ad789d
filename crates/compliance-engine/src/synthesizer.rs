//! Mock report synthesis
//!
//! Produces a canned assessment for a standard and anchors its issues in the
//! submitted document so they can be highlighted. No compliance reasoning
//! happens here.

use shared_types::{ComplianceIssue, ComplianceReport};
use tracing::debug;

use crate::patterns::{char_len, leading_excerpt, split_sentences, trailing_excerpt};

/// Score every synthesized report carries
pub const TEMPLATE_SCORE: u8 = 65;

/// Content longer than this (in characters) gets a leading excerpt
pub const LEADING_FALLBACK_MIN_LEN: usize = 20;

/// Content longer than this (in characters) keeps a second, trailing issue
pub const TRAILING_FALLBACK_MIN_LEN: usize = 80;

/// The fixed report returned for empty content and used as the base otherwise
pub fn template_report(standard_name: &str) -> ComplianceReport {
    ComplianceReport {
        score: TEMPLATE_SCORE,
        summary: format!(
            "This is a mock assessment for the '{}' standard. The document shows a foundational \
             understanding of compliance but lacks specific safeguards for sensitive information \
             and does not include a clear notice of practices. Several clauses are too vague.",
            standard_name
        ),
        issues: vec![
            ComplianceIssue {
                non_compliant_text: "All patient data is kept confidential.".to_string(),
                reason: "This statement is too broad. The selected standard requires specifying \
                         *how* data is kept confidential, including technical, physical, and \
                         administrative safeguards."
                    .to_string(),
                suggestion: "Replace with 'All sensitive information is protected through \
                             administrative, physical, and technical safeguards, including access \
                             controls, encryption of data at rest and in transit, and regular \
                             staff training.'"
                    .to_string(),
            },
            ComplianceIssue {
                non_compliant_text:
                    "We may share your information with partners for marketing purposes."
                        .to_string(),
                reason: "Sharing personal information for marketing purposes requires explicit, \
                         opt-in user consent under most data privacy regulations. This statement \
                         implies sharing without explicit authorization."
                    .to_string(),
                suggestion: "Remove this clause or rephrase to: 'We will not use or disclose your \
                             personal information for marketing purposes without your prior \
                             written authorization.'"
                    .to_string(),
            },
        ],
        recommendations: vec![
            "Incorporate a dedicated 'Notice of Privacy Practices' or 'Data Usage Policy' section \
             that is easily accessible."
                .to_string(),
            "Explicitly mention the encryption standards used for protecting electronic records."
                .to_string(),
            "Add a clause regarding third-party data sharing agreements for any vendors who may \
             handle user data."
                .to_string(),
        ],
    }
}

/// Build the mock report for `content`.
///
/// Whitespace-only content yields the template untouched. Otherwise the first
/// issue points at the first sentence (or a leading excerpt) and the second
/// issue at the second sentence (or a trailing excerpt of long content). Short
/// single-sentence content keeps only the first issue.
pub fn synthesize_report(content: &str, standard_name: &str) -> ComplianceReport {
    let mut report = template_report(standard_name);

    if content.trim().is_empty() {
        debug!("Empty content, returning template report");
        return report;
    }

    let sentences = split_sentences(content);
    let len = char_len(content);

    let primary = if let Some(first) = sentences.first() {
        first.trim()
    } else if len > LEADING_FALLBACK_MIN_LEN {
        leading_excerpt(content)
    } else {
        content.trim()
    };
    report.issues[0].non_compliant_text = primary.to_string();

    let secondary = if let Some(second) = sentences.get(1) {
        Some(second.trim())
    } else if len > TRAILING_FALLBACK_MIN_LEN {
        Some(trailing_excerpt(content))
    } else {
        None
    };
    match secondary {
        Some(text) => report.issues[1].non_compliant_text = text.to_string(),
        None => {
            report.issues.truncate(1);
        }
    }

    debug!(
        sentences = sentences.len(),
        issues = report.issues.len(),
        "Synthesized report"
    );

    report
}
