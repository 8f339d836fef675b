//! Channel records from `listpeerchannels` and `listclosedchannels`

use serde::{Deserialize, Serialize};

/// Top-level `listpeerchannels` document
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ListPeerChannelsResponse {
    pub channels: Vec<Channel>,
}

/// Top-level `listclosedchannels` document
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ListClosedChannelsResponse {
    pub closedchannels: Vec<Channel>,
}

/// A channel the node has, or had, with a peer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Absent until the funding transaction confirms
    #[serde(default)]
    pub short_channel_id: Option<String>,
    #[serde(default)]
    pub alias: Option<ChannelAlias>,
    pub peer_id: String,
}

/// Pre-confirmation identifiers for a channel
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelAlias {
    #[serde(default)]
    pub local: Option<String>,
    #[serde(default)]
    pub remote: Option<String>,
}

impl Channel {
    /// Short channel id, if present and non-empty
    pub fn short_channel_id(&self) -> Option<&str> {
        self.short_channel_id
            .as_deref()
            .filter(|scid| !scid.is_empty())
    }

    /// Local alias, if the channel carries one
    pub fn local_alias(&self) -> Option<&str> {
        self.alias
            .as_ref()
            .and_then(|alias| alias.local.as_deref())
            .filter(|alias| !alias.is_empty())
    }
}
