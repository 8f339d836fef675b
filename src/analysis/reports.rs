//! Console report formatting
//!
//! Fixed-layout text; the data lines are comma separated so they can be pasted
//! straight into a spreadsheet.

use super::lsp_stats::LspStatsReport;
use crate::types::RoutingPeer;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

const STAR_RULE: &str = "*********************************************************";
const DASH_RULE: &str = "---------------------------------------------------------";

/// Header for the six overall columns
pub const TOTALS_HEADER: &str = "count,amount_msat,fee_msat,count_excluding_opens,amount_msat_excluding_opens,fee_msat_excluding_opens";

/// Header for the routing-peer columns
pub const ROUTING_HEADER: &str = "count,amount_msat,fee_msat";

/// Reporting window and the snapshot freshness reminder
pub fn format_window_header<Tz>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "start: {}\nend:   {}\nDID YOU MAKE SURE THE CHANNELS AND FORWARDS ARE UP-TO-DATE?\n",
        start, end
    )
}

/// Banner printed once per run above the node sections
pub fn format_report_banner(month: &str) -> String {
    let mut output = String::new();
    output.push_str("\n\n");
    output.push_str(STAR_RULE);
    output.push('\n');
    output.push_str(&format!(
        "*****************  Report for {}   *****************\n",
        month
    ));
    output.push_str(STAR_RULE);
    output.push_str("\n\n\n");
    output
}

/// Format the statistics of one LSP node
pub fn format_lsp_report(
    node_name: &str,
    report: &LspStatsReport,
    routing_peers: &[RoutingPeer],
) -> String {
    let totals = &report.totals;
    let routing = &report.routing;
    let routing_names = routing_peers
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut output = String::new();
    output.push_str(&format!("{}\n", STAR_RULE));
    output.push_str(&format!("LSP node stats - {}\n", node_name));
    output.push_str(&format!("{}\n", DASH_RULE));

    output.push_str("Totals all routing\n");
    output.push_str("Includes all forwards, but fees for probable channel opens are excluded.\n");
    output.push_str(&format!("{}\n", TOTALS_HEADER));
    output.push_str(&format!(
        "{},{},{},{},{},{}\n",
        totals.count,
        totals.amount_msat,
        totals.fee_msat,
        totals.count_excluding_opens,
        totals.amount_msat_excluding_opens,
        totals.fee_msat_excluding_opens
    ));
    output.push_str(&format!("{}\n", DASH_RULE));

    output.push_str(&format!(
        "Routing to/from only routing nodes '{}'\n",
        routing_names
    ));
    output.push_str(&format!("{}\n", ROUTING_HEADER));
    output.push_str(&format!(
        "{},{},{}\n",
        routing.count, routing.amount_msat, routing.fee_msat
    ));
    output.push_str(&format!("{}\n", DASH_RULE));
    output.push_str(&format!("{}\n", STAR_RULE));

    output
}
