//! Report export as pretty JSON or a plain-text document

use shared_types::ComplianceReport;

use crate::error::ExportError;

/// Title line of the plain-text export
pub const TEXT_TITLE: &str = "AI Healthcare Compliance Assessment Report";

/// Output format for a downloaded report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl ExportFormat {
    /// Parse "txt"/"text" or "json" (case-insensitive)
    pub fn parse(s: &str) -> Result<Self, ExportError> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Text => "compliance_report.txt",
            ExportFormat::Json => "compliance_report.json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Json => "application/json",
        }
    }

    /// Render the report in this format
    pub fn render(&self, report: &ComplianceReport) -> Result<String, ExportError> {
        match self {
            ExportFormat::Text => Ok(to_text(report)),
            ExportFormat::Json => to_json(report),
        }
    }
}

/// Pretty-printed JSON with two-space indentation
pub fn to_json(report: &ComplianceReport) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Fixed plain-text layout.
///
/// The issues and recommendations blocks are only written when non-empty.
pub fn to_text(report: &ComplianceReport) -> String {
    let mut out = format!("{}\n", TEXT_TITLE);
    out.push_str(&format!("{}\n\n", "=".repeat(41)));
    out.push_str(&format!(
        "Overall Compliance Score: {}/100\n\n",
        report.score
    ));
    out.push_str(&format!("Summary:\n{}\n\n", report.summary));

    if !report.issues.is_empty() {
        out.push_str(&format!("Compliance Issues:\n{}\n", "-".repeat(18)));
        for (i, issue) in report.issues.iter().enumerate() {
            out.push_str(&format!("\nIssue #{}:\n", i + 1));
            out.push_str(&format!("  - Text: \"{}\"\n", issue.non_compliant_text));
            out.push_str(&format!("  - Reason: {}\n", issue.reason));
            out.push_str(&format!("  - Suggestion: {}\n", issue.suggestion));
        }
    }

    if !report.recommendations.is_empty() {
        out.push_str(&format!(
            "\n\nGeneral Recommendations:\n{}\n",
            "-".repeat(24)
        ));
        for (i, rec) in report.recommendations.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, rec));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::ComplianceIssue;

    fn sample_report() -> ComplianceReport {
        ComplianceReport {
            score: 72,
            summary: "Mostly fine.".to_string(),
            issues: vec![ComplianceIssue {
                non_compliant_text: "We sell data.".to_string(),
                reason: "No consent.".to_string(),
                suggestion: "Remove it.".to_string(),
            }],
            recommendations: vec!["Add a notice.".to_string(), "Encrypt backups.".to_string()],
        }
    }

    #[test]
    fn test_json_layout() {
        let json = to_json(&sample_report()).unwrap();
        let expected = r#"{
  "score": 72,
  "summary": "Mostly fine.",
  "issues": [
    {
      "nonCompliantText": "We sell data.",
      "reason": "No consent.",
      "suggestion": "Remove it."
    }
  ],
  "recommendations": [
    "Add a notice.",
    "Encrypt backups."
  ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_text_layout() {
        let text = to_text(&sample_report());
        let expected = "AI Healthcare Compliance Assessment Report\n\
=========================================\n\
\n\
Overall Compliance Score: 72/100\n\
\n\
Summary:\n\
Mostly fine.\n\
\n\
Compliance Issues:\n\
------------------\n\
\n\
Issue #1:\n  \
- Text: \"We sell data.\"\n  \
- Reason: No consent.\n  \
- Suggestion: Remove it.\n\
\n\
\n\
General Recommendations:\n\
------------------------\n\
1. Add a notice.\n\
2. Encrypt backups.\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_text_omits_empty_sections() {
        let report = ComplianceReport {
            issues: vec![],
            recommendations: vec![],
            ..sample_report()
        };
        let text = to_text(&report);

        assert!(!text.contains("Compliance Issues:"));
        assert!(!text.contains("General Recommendations:"));
        assert!(text.ends_with("Summary:\nMostly fine.\n\n"));
    }

    #[test]
    fn test_text_with_only_recommendations() {
        let report = ComplianceReport {
            issues: vec![],
            ..sample_report()
        };
        let text = to_text(&report);

        assert!(!text.contains("Compliance Issues:"));
        assert!(text.contains("General Recommendations:"));
    }

    #[test]
    fn test_format_parsing_and_metadata() {
        assert_eq!(ExportFormat::parse("TXT").unwrap(), ExportFormat::Text);
        assert_eq!(ExportFormat::parse("json").unwrap(), ExportFormat::Json);
        assert!(matches!(
            ExportFormat::parse("pdf"),
            Err(ExportError::UnknownFormat(_))
        ));

        assert_eq!(ExportFormat::Json.file_name(), "compliance_report.json");
        assert_eq!(ExportFormat::Text.mime_type(), "text/plain");
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let report = sample_report();
        assert_eq!(
            ExportFormat::Text.render(&report).unwrap(),
            to_text(&report)
        );
        assert_eq!(
            ExportFormat::Json.render(&report).unwrap(),
            to_json(&report).unwrap()
        );
    }
}
