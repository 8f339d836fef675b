//! Forward records from `listforwards`

use serde::{Deserialize, Serialize};

/// Top-level `listforwards` document
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ListForwardsResponse {
    pub forwards: Vec<Forward>,
}

/// One settled routing event through the node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forward {
    pub in_channel: String,
    pub out_channel: String,
    pub fee_msat: u64,
    pub out_msat: u64,
    /// Unix epoch seconds with sub-second precision
    pub received_time: f64,
}
