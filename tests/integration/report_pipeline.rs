//! Report pipeline tests
//!
//! Writes snapshot fixtures to disk and runs the same code path as the binary,
//! with UTC standing in for local time.

use chrono::Utc;
use lsp_routing_stats::cli::commands::report::generate_report;
use lsp_routing_stats::errors::AppError;
use serde_json::json;

use crate::common::{forward_json, SnapshotFixture, APRIL_START, MAY_START, PEER_A};

fn data_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| line.chars().next().is_some_and(|c| c.is_ascii_digit()))
        .collect()
}

#[test]
fn test_example_scenario() -> anyhow::Result<()> {
    let fixture = SnapshotFixture::new()?;
    fixture.write_example_channels()?;
    fixture.write_forwards(vec![forward_json(
        "100x1x0",
        "102x3x0",
        50,
        2_000_000,
        APRIL_START + 3600.0,
    )])?;

    let output = generate_report(&fixture.config(), &Utc)?;

    assert!(output.starts_with("start: 2024-04-01 00:00:00 UTC\nend:   2024-05-01 00:00:00 UTC\n"));
    assert!(output.contains("Report for 2024-04"));
    assert!(output.contains("LSP node stats - testlsp"));
    assert!(output.contains("Routing to/from only routing nodes 'Alpha, Charlie'"));
    assert_eq!(
        data_lines(&output),
        vec!["1,2000000,50,1,2000000,50", "1,2000000,50"]
    );
    Ok(())
}

#[test]
fn test_mixed_month() -> anyhow::Result<()> {
    let fixture = SnapshotFixture::new()?;
    fixture.write_example_channels()?;
    fixture.write_forwards(vec![
        // routing peer to routing peer, at the window start
        forward_json("100x1x0", "102x3x0", 50, 2_000_000, APRIL_START),
        // probable channel open via the alias-only channel
        forward_json("101x2x0", "100x1x0", 10_000, 1_000_000, APRIL_START + 10.0),
        // zero-amount forward
        forward_json("102x3x0", "101x2x0", 0, 0, APRIL_START + 20.0),
        // exactly at the window end
        forward_json("100x1x0", "102x3x0", 999, 999_999, MAY_START),
        // previous month, references a channel we no longer know
        forward_json("404x0x0", "100x1x0", 1, 1_000, APRIL_START - 1.0),
    ])?;

    let output = generate_report(&fixture.config(), &Utc)?;

    assert_eq!(
        data_lines(&output),
        vec!["3,3000000,10050,2,2000000,50", "1,2000000,50"]
    );
    Ok(())
}

#[test]
fn test_unknown_channel_produces_no_report() -> anyhow::Result<()> {
    let fixture = SnapshotFixture::new()?;
    fixture.write_example_channels()?;
    fixture.write_forwards(vec![
        forward_json("100x1x0", "102x3x0", 50, 2_000_000, APRIL_START + 1.0),
        forward_json("100x1x0", "777x7x7", 50, 2_000_000, APRIL_START + 2.0),
    ])?;

    match generate_report(&fixture.config(), &Utc) {
        Err(AppError::UnknownChannel { channel }) => assert_eq!(channel, "777x7x7"),
        other => panic!("expected unknown channel error, got {:?}", other.map(|_| ())),
    }
    Ok(())
}

#[test]
fn test_remote_alias_does_not_resolve() -> anyhow::Result<()> {
    let fixture = SnapshotFixture::new()?;
    fixture.write_example_channels()?;
    fixture.write_forwards(vec![forward_json(
        "555x5x5",
        "100x1x0",
        1,
        1_000,
        APRIL_START + 1.0,
    )])?;

    let result = generate_report(&fixture.config(), &Utc);
    assert!(
        matches!(result, Err(AppError::UnknownChannel { ref channel }) if channel == "555x5x5")
    );
    Ok(())
}

#[test]
fn test_closed_channel_overrides_open_on_collision() -> anyhow::Result<()> {
    let fixture = SnapshotFixture::new()?;
    fixture.write_channels(vec![
        json!({"short_channel_id": "100x1x0", "peer_id": "02unrelated"}),
        json!({"short_channel_id": "200x1x0", "peer_id": PEER_A}),
    ])?;
    fixture.write_closed_channels(vec![json!({"short_channel_id": "100x1x0", "peer_id": PEER_A})])?;
    fixture.write_forwards(vec![forward_json(
        "100x1x0",
        "200x1x0",
        5,
        10_000,
        APRIL_START + 1.0,
    )])?;

    let output = generate_report(&fixture.config(), &Utc)?;
    assert_eq!(data_lines(&output)[1], "1,10000,5");
    Ok(())
}

#[test]
fn test_missing_snapshot_names_file() -> anyhow::Result<()> {
    let fixture = SnapshotFixture::new()?;
    fixture.write_example_channels()?;

    let err = generate_report(&fixture.config(), &Utc).unwrap_err();
    assert!(matches!(err, AppError::SnapshotRead { .. }));
    assert!(err.to_string().contains("forwards.json.gz"));
    Ok(())
}

#[test]
fn test_corrupt_closed_channels_snapshot() -> anyhow::Result<()> {
    let fixture = SnapshotFixture::new()?;
    fixture.write_example_channels()?;
    fixture.write_forwards(vec![])?;
    std::fs::write(fixture.path("closed.json.gz"), b"not gzip at all")?;

    let err = generate_report(&fixture.config(), &Utc).unwrap_err();
    assert!(matches!(err, AppError::Decompression { .. }));
    assert!(err.to_string().contains("closed.json.gz"));
    Ok(())
}
