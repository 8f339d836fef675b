use crate::analysis::{
    analyse_lsp_stats, format_lsp_report, format_report_banner, format_window_header,
};
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::snapshot::LspNodeData;
use crate::utils::time::month_window;
use chrono::{Local, TimeZone};
use clap::Args;
use std::fmt::Display;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct ReportCommand {
    /// Config file (defaults to ./lsp-stats.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reporting month as YYYY-MM (overrides config)
    #[arg(long)]
    month: Option<String>,

    /// Gzipped listforwards snapshot (overrides config)
    #[arg(long)]
    forwards: Option<PathBuf>,

    /// Gzipped listpeerchannels snapshot (overrides config)
    #[arg(long)]
    channels: Option<PathBuf>,

    /// Gzipped listclosedchannels snapshot (overrides config)
    #[arg(long)]
    closed_channels: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl ReportCommand {
    pub fn run(&self) -> AppResult<()> {
        let app_config = self.resolve_config()?;

        if self.print_config {
            print!("{}", app_config.to_toml()?);
            return Ok(());
        }

        let output = generate_report(&app_config, &Local)?;
        print!("{}", output);
        Ok(())
    }

    /// Config file and environment first, then CLI arguments on top
    fn resolve_config(&self) -> AppResult<AppConfig> {
        let mut app_config = match &self.config {
            Some(path) => AppConfig::load_from(path)?,
            None => AppConfig::load()?,
        };
        info!("Configuration loaded successfully");

        if let Some(month) = &self.month {
            app_config.report.month = month.clone();
        }
        if let Some(path) = &self.forwards {
            app_config.paths.forwards = path.clone();
        }
        if let Some(path) = &self.channels {
            app_config.paths.channels = path.clone();
        }
        if let Some(path) = &self.closed_channels {
            app_config.paths.closed_channels = path.clone();
        }
        Ok(app_config)
    }
}

/// Build the full report text for the configured month in timezone `tz`.
///
/// Nothing is returned unless every step succeeds, so a failed run never
/// prints a partial report.
pub fn generate_report<Tz>(app_config: &AppConfig, tz: &Tz) -> AppResult<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let month = &app_config.report.month;
    let window = month_window(month, tz)?;
    info!("Reporting window for {}: {} to {}", month, window.start, window.end);

    let node = LspNodeData::load(&app_config.node, &app_config.paths)?;
    let report = analyse_lsp_stats(&window.report_window(), &node, &app_config.routing_peers)?;

    let mut output = format_window_header(&window.start, &window.end);
    output.push_str(&format_report_banner(month));
    output.push_str(&format_lsp_report(
        &node.name,
        &report,
        &app_config.routing_peers,
    ));
    Ok(output)
}
