//! Routing statistics for an LSP node
//!
//! ## Overview
//!
//! - **Channel directory** - channel identifier to peer pubkey lookup
//! - **Classifier** - reporting window, channel open heuristic, peer resolution
//! - **LSP stats** - the single pass that accumulates totals
//! - **Reports** - fixed-layout console output
//!
//! ## Usage
//!
//! ```rust
//! use lsp_routing_stats::analysis::{analyse_lsp_stats, format_lsp_report, ReportWindow};
//! use lsp_routing_stats::snapshot::LspNodeData;
//! use lsp_routing_stats::types::{Channel, Forward, RoutingPeer};
//!
//! let channels = vec![Channel {
//!     short_channel_id: Some("100x1x0".to_string()),
//!     alias: None,
//!     peer_id: "02aa".to_string(),
//! }];
//! let forwards = vec![Forward {
//!     in_channel: "100x1x0".to_string(),
//!     out_channel: "100x1x0".to_string(),
//!     fee_msat: 50,
//!     out_msat: 2_000_000,
//!     received_time: 150.0,
//! }];
//! let node = LspNodeData::new("lsp", "02ff", forwards, channels);
//! let peers = vec![RoutingPeer::new("peer", "02aa")];
//!
//! let report = analyse_lsp_stats(&ReportWindow::new(100.0, 200.0), &node, &peers).unwrap();
//! assert_eq!(report.routing.count, 1);
//! print!("{}", format_lsp_report(&node.name, &report, &peers));
//! ```

pub mod classifier;
pub mod directory;
pub mod lsp_stats;
pub mod reports;

pub use classifier::{is_probable_channel_open, ReportWindow};
pub use directory::ChannelDirectory;
pub use lsp_stats::{analyse_lsp_stats, LspStats, LspStatsReport, RoutingStats};
pub use reports::{format_lsp_report, format_report_banner, format_window_header};
