//! Monthly LSP routing statistics
//!
//! Folds every in-window forward into overall totals (with a variant that
//! leaves out probable channel opens) and into a subtotal restricted to
//! forwards whose both legs are routing peers.

use super::classifier::{is_probable_channel_open, resolve_peers, ReportWindow};
use crate::errors::AppResult;
use crate::snapshot::LspNodeData;
use crate::types::{Forward, RoutingPeer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Totals across all in-window forwards
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LspStats {
    pub count: u64,
    pub amount_msat: u64,
    pub fee_msat: u64,
    pub count_excluding_opens: u64,
    pub amount_msat_excluding_opens: u64,
    pub fee_msat_excluding_opens: u64,
}

impl LspStats {
    fn record(&mut self, forward: &Forward, probable_open: bool) {
        self.count += 1;
        self.amount_msat += forward.out_msat;
        self.fee_msat += forward.fee_msat;

        if !probable_open {
            self.count_excluding_opens += 1;
            self.amount_msat_excluding_opens += forward.out_msat;
            self.fee_msat_excluding_opens += forward.fee_msat;
        }
    }
}

/// Totals for forwards exchanged between routing peers only
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingStats {
    pub count: u64,
    pub amount_msat: u64,
    pub fee_msat: u64,
}

impl RoutingStats {
    fn record(&mut self, forward: &Forward) {
        self.count += 1;
        self.amount_msat += forward.out_msat;
        self.fee_msat += forward.fee_msat;
    }
}

/// Result of one statistics pass over a node's forwards
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LspStatsReport {
    pub totals: LspStats,
    pub routing: RoutingStats,
}

/// Run the statistics pass for forwards received in `window`.
///
/// Fails on the first in-window forward whose incoming or outgoing channel is
/// missing from the node's channel directory; no partial result is returned.
pub fn analyse_lsp_stats(
    window: &ReportWindow,
    node: &LspNodeData,
    routing_peers: &[RoutingPeer],
) -> AppResult<LspStatsReport> {
    let routing_lookup: HashSet<&str> =
        routing_peers.iter().map(|p| p.pubkey.as_str()).collect();

    let mut report = LspStatsReport::default();
    let mut outside_window = 0usize;

    for forward in &node.forwards {
        if !window.contains(forward.received_time) {
            outside_window += 1;
            continue;
        }

        report.totals.record(forward, is_probable_channel_open(forward));

        let peers = resolve_peers(forward, &node.directory)?;
        if routing_lookup.contains(peers.in_peer) && routing_lookup.contains(peers.out_peer) {
            report.routing.record(forward);
        }
    }

    debug!(
        "{}: {} forwards in window, {} outside, {} probable opens, {} between routing peers",
        node.name,
        report.totals.count,
        outside_window,
        report.totals.count - report.totals.count_excluding_opens,
        report.routing.count
    );

    Ok(report)
}
