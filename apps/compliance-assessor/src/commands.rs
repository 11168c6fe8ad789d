//! Subcommand handlers

use std::path::{Path, PathBuf};
use std::time::Duration;

use compliance_engine::{
    standards_for, AssessmentSession, Assessor, AssessorConfig, ExportFormat, Geography,
    MockAssessor, SessionState,
};
use tracing::info;

use crate::error::CliError;
use crate::input::{self, DocumentSource};
use crate::render::{render_highlighted, score_line};

/// Arguments of the `assess` subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct AssessArgs {
    /// Geography code or name (US, LATAM, EMEA, JAPAC)
    #[arg(short, long)]
    pub geography: String,

    /// Standard id within the geography (e.g., "hipaa")
    #[arg(short, long)]
    pub standard: String,

    /// Document to assess (.txt, .md, .html); reads stdin when neither
    /// --file nor --text is given
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Document text given inline
    #[arg(long)]
    pub text: Option<String>,

    /// Report format: "txt" or "json"
    #[arg(long, default_value = "txt")]
    pub format: String,

    /// Write the report to this file (or into this directory) instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also print the document with flagged passages marked
    #[arg(long)]
    pub highlight: bool,

    /// Simulated assessment latency in milliseconds
    #[arg(long, default_value_t = compliance_engine::assessor::DEFAULT_SYNTHESIS_DELAY_MS)]
    pub delay_ms: u64,

    /// Give up on the assessment after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

/// Parse a geography argument
pub fn parse_geography(value: &str) -> Result<Geography, CliError> {
    Geography::parse_code(value).ok_or_else(|| CliError::UnknownGeography(value.to_string()))
}

/// Handler: `geographies`
pub fn list_geographies() -> String {
    Geography::all()
        .into_iter()
        .map(|geo| format!("{:<6} {}\n", geo.code(), geo.name()))
        .collect()
}

/// Handler: `standards`
pub fn list_standards(geography: &str) -> Result<String, CliError> {
    let geography = parse_geography(geography)?;
    Ok(standards_for(geography)
        .iter()
        .map(|s| format!("{:<20} {} - {}\n", s.id, s.name, s.description))
        .collect())
}

/// Drive a session from selection to a finished assessment.
///
/// A failed assessment is returned as [`CliError::Assessment`].
pub async fn assess_document(
    assessor: &dyn Assessor,
    geography: &str,
    standard_id: &str,
    content: String,
    timeout: Option<Duration>,
) -> anyhow::Result<AssessmentSession> {
    let mut session = AssessmentSession::new();
    session.select_geography(parse_geography(geography)?)?;
    session.select_standard(standard_id)?;
    session.set_content(content)?;

    if let SessionState::Error(message) = session.run_assessment(assessor, timeout).await? {
        return Err(CliError::Assessment(message.clone()).into());
    }

    Ok(session)
}

/// Handler: `assess`
pub async fn assess(args: &AssessArgs) -> anyhow::Result<()> {
    let format = ExportFormat::parse(&args.format)?;

    let source = match (&args.file, &args.text) {
        (Some(path), _) => DocumentSource::File(path.as_path()),
        (None, Some(text)) => DocumentSource::Inline(text.as_str()),
        (None, None) => DocumentSource::Stdin,
    };
    let content = input::load(source)?;

    let assessor = MockAssessor::new(AssessorConfig {
        synthesis_delay: Duration::from_millis(args.delay_ms),
    });
    let timeout = args.timeout_ms.map(Duration::from_millis);

    let session =
        assess_document(&assessor, &args.geography, &args.standard, content, timeout).await?;

    if args.highlight {
        if let Some(segments) = session.highlighted_content() {
            println!("{}", render_highlighted(&segments));
        }
    }

    let exported = session.export(format)?;
    match &args.output {
        Some(path) => {
            let target = output_path(path, format);
            std::fs::write(&target, exported)?;
            if let Some(report) = session.report() {
                println!("{}", score_line(report));
            }
            println!("Report written to {}", target.display());
            info!("Exported {} report to {}", format.mime_type(), target.display());
        }
        None => print!("{}", exported),
    }

    Ok(())
}

/// Directories receive the format's default file name
fn output_path(path: &Path, format: ExportFormat) -> PathBuf {
    if path.is_dir() {
        path.join(format.file_name())
    } else {
        path.to_path_buf()
    }
}
