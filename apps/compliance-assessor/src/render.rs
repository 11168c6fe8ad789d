//! Terminal rendering of assessment results

use shared_types::{ComplianceReport, ScoreBand, Segment};

/// Opening marker around flagged text
pub const FLAG_OPEN: &str = "[[";
/// Closing marker around flagged text
pub const FLAG_CLOSE: &str = "]]";

/// Render the document with flagged text marked inline.
///
/// Each flagged occurrence gets a numbered note, and its suggestion is listed
/// under the document.
pub fn render_highlighted(segments: &[Segment]) -> String {
    let mut body = String::new();
    let mut notes = Vec::new();

    for segment in segments {
        match segment {
            Segment::Plain { text } => body.push_str(text),
            Segment::Flagged { text, suggestion } => {
                notes.push(suggestion.as_str());
                body.push_str(&format!(
                    "{}{}{}^{}",
                    FLAG_OPEN,
                    text,
                    FLAG_CLOSE,
                    notes.len()
                ));
            }
        }
    }

    if notes.is_empty() {
        return body;
    }

    let mut out = body;
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("\nSuggestions:\n");
    for (i, suggestion) in notes.iter().enumerate() {
        out.push_str(&format!("  ^{} {}\n", i + 1, suggestion));
    }
    out
}

pub fn band_label(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Good => "good",
        ScoreBand::Fair => "fair",
        ScoreBand::Poor => "poor",
    }
}

/// One-line score summary, e.g. "Compliance Score: 65/100 (poor)"
pub fn score_line(report: &ComplianceReport) -> String {
    format!(
        "Compliance Score: {}/100 ({})",
        report.score,
        band_label(report.band())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(text: &str) -> Segment {
        Segment::Plain {
            text: text.to_string(),
        }
    }

    fn flagged(text: &str, suggestion: &str) -> Segment {
        Segment::Flagged {
            text: text.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    #[test]
    fn test_plain_document_is_unchanged() {
        assert_eq!(render_highlighted(&[plain("Just text.")]), "Just text.");
    }

    #[test]
    fn test_flagged_text_is_marked_and_noted() {
        let segments = vec![
            plain(""),
            flagged("We sell data.", "Stop selling data."),
            plain(" Thanks."),
        ];
        let rendered = render_highlighted(&segments);

        assert_eq!(
            rendered,
            "[[We sell data.]]^1 Thanks.\n\nSuggestions:\n  ^1 Stop selling data.\n"
        );
    }

    #[test]
    fn test_each_occurrence_gets_its_own_note() {
        let segments = vec![flagged("a", "x"), plain(" "), flagged("a", "x")];
        let rendered = render_highlighted(&segments);

        assert!(rendered.starts_with("[[a]]^1 [[a]]^2\n"));
        assert!(rendered.contains("  ^2 x\n"));
    }

    #[test]
    fn test_score_line() {
        let report = ComplianceReport {
            score: 92,
            summary: String::new(),
            issues: vec![],
            recommendations: vec![],
        };
        assert_eq!(score_line(&report), "Compliance Score: 92/100 (good)");
    }
}
