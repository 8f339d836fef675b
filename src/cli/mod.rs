use crate::errors::AppResult;
use clap::Parser;

pub mod commands;

/// Lightning LSP Routing Statistics
#[derive(Parser)]
#[command(name = "lsp-routing-stats")]
#[command(about = "Monthly routing fee and volume report for a Lightning LSP node")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub report: commands::report::ReportCommand,
}

pub fn run() -> AppResult<()> {
    // Logs go to stderr so the report on stdout stays clean.
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();
    cli.report.run()
}
