//! Channel identifier to peer lookup
//!
//! Forwards name channels by short channel id, or by local alias for channels
//! that were used before their funding transaction confirmed. The directory maps
//! both to the counterparty's pubkey.

use crate::types::Channel;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Mapping from channel identifier (short id or local alias) to peer pubkey
#[derive(Debug, Default, Clone)]
pub struct ChannelDirectory {
    peers: HashMap<String, String>,
}

impl ChannelDirectory {
    /// Build the directory from the merged open and closed channel list.
    ///
    /// Later channels overwrite earlier ones that claim the same identifier.
    /// Remote aliases are never indexed.
    pub fn build<'a, I>(channels: I) -> Self
    where
        I: IntoIterator<Item = &'a Channel>,
    {
        let mut directory = Self::default();
        let mut channel_count = 0usize;

        for channel in channels {
            channel_count += 1;
            if let Some(scid) = channel.short_channel_id() {
                directory.register(scid, &channel.peer_id);
            }
            if let Some(alias) = channel.local_alias() {
                directory.register(alias, &channel.peer_id);
            }
        }

        debug!(
            "Built channel directory: {} identifiers from {} channels",
            directory.len(),
            channel_count
        );
        directory
    }

    fn register(&mut self, identifier: &str, peer: &str) {
        if let Some(previous) = self
            .peers
            .insert(identifier.to_string(), peer.to_string())
        {
            if previous != peer {
                warn!(
                    "Channel identifier {} reassigned from peer {} to {}",
                    identifier, previous, peer
                );
            }
        }
    }

    /// Peer pubkey for a channel identifier
    pub fn peer_for(&self, identifier: &str) -> Option<&str> {
        self.peers.get(identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}
