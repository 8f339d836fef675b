use super::reader::{read_channels, read_closed_channels, read_forwards};
use crate::analysis::ChannelDirectory;
use crate::config::{NodeConfig, PathsConfig};
use crate::errors::AppResult;
use crate::types::{Channel, Forward};
use tracing::info;

/// One LSP node's forwards, merged channel list and derived channel directory
#[derive(Debug, Clone)]
pub struct LspNodeData {
    pub name: String,
    pub pubkey: String,
    pub forwards: Vec<Forward>,
    /// Open channels followed by closed channels
    pub channels: Vec<Channel>,
    pub directory: ChannelDirectory,
}

impl LspNodeData {
    pub fn new(
        name: impl Into<String>,
        pubkey: impl Into<String>,
        forwards: Vec<Forward>,
        channels: Vec<Channel>,
    ) -> Self {
        let directory = ChannelDirectory::build(&channels);
        Self {
            name: name.into(),
            pubkey: pubkey.into(),
            forwards,
            channels,
            directory,
        }
    }

    /// Load forwards, open channels and closed channels from their snapshots
    pub fn load(node: &NodeConfig, paths: &PathsConfig) -> AppResult<Self> {
        let forwards = read_forwards(&paths.forwards)?;
        let mut channels = read_channels(&paths.channels)?;
        channels.extend(read_closed_channels(&paths.closed_channels)?);

        let data = Self::new(&node.name, &node.pubkey, forwards, channels);
        info!(
            "{}: {} forwards, {} channels, {} channel identifiers",
            data.name,
            data.forwards.len(),
            data.channels.len(),
            data.directory.len()
        );
        Ok(data)
    }
}
