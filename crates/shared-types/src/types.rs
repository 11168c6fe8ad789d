/// Highest score an assessment can report
pub const MAX_SCORE: u8 = 100;

/// A regulatory standard a document can be assessed against
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Standard {
    pub id: String, // e.g., "hipaa"
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceIssue {
    pub non_compliant_text: String, // Verbatim excerpt of the assessed document
    pub reason: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComplianceReport {
    pub score: u8, // 0..=MAX_SCORE
    pub summary: String,
    pub issues: Vec<ComplianceIssue>, // Presentation order, first issue is primary
    pub recommendations: Vec<String>,
}

impl ComplianceReport {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Coarse rating used when presenting a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => ScoreBand::Good,
            70..=89 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }
}

/// One piece of a highlighted document.
///
/// Concatenating the text of every segment, in order, yields the document
/// the segments were produced from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Plain { text: String },
    Flagged { text: String, suggestion: String },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text } | Segment::Flagged { text, .. } => text,
        }
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Segment::Plain { .. } => None,
            Segment::Flagged { suggestion, .. } => Some(suggestion),
        }
    }

    pub fn is_flagged(&self) -> bool {
        matches!(self, Segment::Flagged { .. })
    }
}
