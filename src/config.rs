use crate::errors::{AppError, AppResult};
use crate::types::RoutingPeer;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "lsp-stats";

/// Application configuration loaded from lsp-stats.toml or environment variables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub report: ReportConfig,
    pub paths: PathsConfig,
    pub node: NodeConfig,
    pub routing_peers: Vec<RoutingPeer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Reporting month as YYYY-MM, interpreted in local time
    pub month: String,
}

/// Gzipped JSON snapshots of the node's forwards and channels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    pub forwards: PathBuf,
    pub channels: PathBuf,
    pub closed_channels: PathBuf,
}

/// Identity of the LSP node being reported on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub name: String,
    pub pubkey: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            report: ReportConfig {
                month: "2024-04".to_string(),
            },
            paths: PathsConfig {
                forwards: PathBuf::from("breezc-listforwards-settled-2024-05-06.json.gz"),
                channels: PathBuf::from("breezc-listpeerchannels-2024-05-06.json.gz"),
                closed_channels: PathBuf::from("breezc-listclosedchannels-2024-05-06.json.gz"),
            },
            node: NodeConfig {
                name: "breezc".to_string(),
                pubkey: "02c811e575be2df47d8b48dab3d3f1c9b0f6e16d0d40b5ed78253308fc2bd7170d"
                    .to_string(),
            },
            routing_peers: vec![
                RoutingPeer::new(
                    "BreezR",
                    "02442d4249f9a93464aaf8cd8d522faa869356707b5f1537a8d6def2af50058c5b",
                ),
                RoutingPeer::new(
                    "Breez",
                    "031015a7839468a3c266d662d5bb21ea4cea24226936e2864a7ca4f2c3939836e0",
                ),
            ],
        }
    }
}

impl AppConfig {
    /// Load configuration from lsp-stats.toml (if present) and environment variables
    pub fn load() -> AppResult<Self> {
        Self::build(File::with_name(DEFAULT_CONFIG_FILE).required(false))
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        Self::build(File::from(path).required(true))
    }

    /// Layering: compiled-in defaults, then the file, then LSP_STATS_* env vars.
    /// Nested keys use a double underscore, e.g. LSP_STATS_REPORT__MONTH.
    fn build(file: File<config::FileSourceFile, config::FileFormat>) -> AppResult<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix("LSP_STATS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.node.name.trim().is_empty() {
            return Err(AppError::Config("node.name must not be empty".to_string()));
        }
        if self.node.pubkey.trim().is_empty() {
            return Err(AppError::Config(
                "node.pubkey must not be empty".to_string(),
            ));
        }
        if self.routing_peers.is_empty() {
            return Err(AppError::Config(
                "at least one routing peer must be configured".to_string(),
            ));
        }
        if let Some(peer) = self.routing_peers.iter().find(|p| p.pubkey.is_empty()) {
            return Err(AppError::Config(format!(
                "routing peer '{}' has an empty pubkey",
                peer.name
            )));
        }
        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> AppResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
