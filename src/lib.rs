//! Lightning LSP Routing Statistics
//!
//! Monthly fee and volume totals for an LSP node, computed from gzipped JSON
//! snapshots of its forwards and channels.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod snapshot;
pub mod types;
pub mod utils;
