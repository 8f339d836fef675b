//! Input record types for node snapshots
//!
//! These mirror the JSON shapes produced by the node's `listforwards`,
//! `listpeerchannels` and `listclosedchannels` commands. Only the fields the
//! statistics pass needs are modelled; everything else is ignored on decode.

pub mod channel;
pub mod forward;

pub use channel::{Channel, ChannelAlias, ListClosedChannelsResponse, ListPeerChannelsResponse};
pub use forward::{Forward, ListForwardsResponse};

use serde::{Deserialize, Serialize};

/// A node whose peer-to-peer traffic through the LSP is tracked separately
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingPeer {
    pub name: String,
    pub pubkey: String,
}

impl RoutingPeer {
    pub fn new(name: impl Into<String>, pubkey: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pubkey: pubkey.into(),
        }
    }
}
