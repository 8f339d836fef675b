//! Per-forward classification
//!
//! Decides whether a forward falls inside the reporting window, whether it
//! looks like a channel open paid for through a routed payment, and which peers
//! sit on either side of it.

use crate::analysis::directory::ChannelDirectory;
use crate::errors::{AppError, AppResult};
use crate::types::Forward;

/// Fee rate, in ppm, at or above which a forward may be a channel open
pub const OPEN_FEE_RATE_PPM_THRESHOLD: u64 = 3999;

/// Minimum forwarded amount for the channel open heuristic (500 sat)
pub const OPEN_MIN_AMOUNT_MSAT: u64 = 500_000;

/// Half-open time window `[start, end)` in Unix epoch seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportWindow {
    start: f64,
    end: f64,
}

impl ReportWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn contains(&self, timestamp: f64) -> bool {
        timestamp >= self.start && timestamp < self.end
    }
}

/// Fee rate in parts per million, or `None` for a zero-amount forward
pub fn fee_rate_ppm(fee_msat: u64, out_msat: u64) -> Option<u64> {
    if out_msat == 0 {
        return None;
    }
    let ppm = u128::from(fee_msat) * 1_000_000 / u128::from(out_msat);
    Some(u64::try_from(ppm).unwrap_or(u64::MAX))
}

/// True when the fee rate is at least 3999 ppm and at least 500 sat moved.
/// Zero-amount forwards never match.
pub fn is_probable_channel_open(forward: &Forward) -> bool {
    match fee_rate_ppm(forward.fee_msat, forward.out_msat) {
        Some(ppm) => {
            ppm >= OPEN_FEE_RATE_PPM_THRESHOLD && forward.out_msat >= OPEN_MIN_AMOUNT_MSAT
        }
        None => false,
    }
}

/// Peers on the incoming and outgoing legs of a forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardPeers<'a> {
    pub in_peer: &'a str,
    pub out_peer: &'a str,
}

/// Resolve both legs of a forward. Fails on the first unknown channel.
pub fn resolve_peers<'a>(
    forward: &Forward,
    directory: &'a ChannelDirectory,
) -> AppResult<ForwardPeers<'a>> {
    let lookup = |channel: &str| {
        directory
            .peer_for(channel)
            .ok_or_else(|| AppError::UnknownChannel {
                channel: channel.to_string(),
            })
    };

    Ok(ForwardPeers {
        in_peer: lookup(&forward.in_channel)?,
        out_peer: lookup(&forward.out_channel)?,
    })
}
