//! Healthcare Compliance Assessor
//!
//! Command-line front end for the compliance engine:
//!
//! - Geography and standard listing
//! - Document assessment (mock service with simulated latency)
//! - Highlighted findings and TXT/JSON report export
//!
//! Logs go to stderr so reports printed to stdout can be piped.

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;
mod input;
mod render;

use commands::AssessArgs;

/// Command-line arguments for the compliance assessor
#[derive(Parser, Debug)]
#[command(name = "compliance-assessor")]
#[command(
    version,
    about = "Assess healthcare documents against regional compliance standards"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported geographies
    Geographies,

    /// List the standards available in a geography
    Standards {
        /// Geography code or name (US, LATAM, EMEA, JAPAC)
        #[arg(short, long)]
        geography: String,
    },

    /// Assess a document and export the report
    Assess(AssessArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting compliance-assessor v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Geographies => print!("{}", commands::list_geographies()),
        Command::Standards { geography } => print!("{}", commands::list_standards(&geography)?),
        Command::Assess(assess_args) => commands::assess(&assess_args).await?,
    }

    Ok(())
}
