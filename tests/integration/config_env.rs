//! Environment variable configuration tests
//!
//! These mutate process environment, so they run serially.

use lsp_routing_stats::config::AppConfig;
use std::env;

#[test]
#[serial_test::serial]
fn test_env_overrides_month_and_paths() {
    env::set_var("LSP_STATS_REPORT__MONTH", "2024-07");
    env::set_var("LSP_STATS_PATHS__FORWARDS", "/data/fwd.json.gz");

    let config = AppConfig::load();

    env::remove_var("LSP_STATS_REPORT__MONTH");
    env::remove_var("LSP_STATS_PATHS__FORWARDS");

    let config = config.unwrap();
    assert_eq!(config.report.month, "2024-07");
    assert_eq!(
        config.paths.forwards,
        std::path::PathBuf::from("/data/fwd.json.gz")
    );
    assert_eq!(config.node, AppConfig::default().node);
    assert_eq!(config.routing_peers, AppConfig::default().routing_peers);
}

#[test]
#[serial_test::serial]
fn test_defaults_without_env() {
    let config = AppConfig::load().unwrap();
    assert_eq!(config, AppConfig::default());
}
