//! Geographies used to scope the standards catalog

use serde::{Deserialize, Serialize};

/// Regions a user can pick before choosing a standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Geography {
    US,
    LATAM,
    EMEA,
    JAPAC,
}

impl Geography {
    /// Get the display name shown in region pickers
    pub fn name(&self) -> &'static str {
        match self {
            Geography::US => "United States",
            Geography::LATAM => "Latin America",
            Geography::EMEA => "EMEA (Europe, Middle East, and Africa)",
            Geography::JAPAC => "JAPAC (Japan and Asia-Pacific)",
        }
    }

    /// Short code (e.g., "EMEA")
    pub fn code(&self) -> &'static str {
        match self {
            Geography::US => "US",
            Geography::LATAM => "LATAM",
            Geography::EMEA => "EMEA",
            Geography::JAPAC => "JAPAC",
        }
    }

    /// Parse from code or display name (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        let normalized = s.trim().to_uppercase();
        Self::all()
            .into_iter()
            .find(|geo| geo.code() == normalized || geo.name().to_uppercase() == normalized)
    }

    /// All geographies in picker order
    pub fn all() -> Vec<Self> {
        vec![
            Geography::US,
            Geography::LATAM,
            Geography::EMEA,
            Geography::JAPAC,
        ]
    }
}

impl std::fmt::Display for Geography {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
