//! Assertions on `--format json` timeline output.

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Assert the active prayer key (`null` when before Fajr)
pub fn assert_active(json: &Value, expected: Option<&str>) -> Result<()> {
    let active = json["content"]["active"].as_str();
    if active != expected {
        bail!("Expected active {:?}, got {:?}", expected, active);
    }
    Ok(())
}

/// Assert the next prayer key and clock-time
pub fn assert_next(json: &Value, label: &str, clock_time: &str) -> Result<()> {
    let next = json["content"]["next"]
        .as_object()
        .context("Expected 'content.next' object in JSON")?;

    let got = (
        next.get("label").and_then(Value::as_str),
        next.get("clock_time").and_then(Value::as_str),
    );
    if got != (Some(label), Some(clock_time)) {
        bail!("Expected next {} at {}, got {:?}", label, clock_time, got);
    }
    Ok(())
}

/// Assert the timeline mode (`live` or `inspect`)
pub fn assert_mode(json: &Value, expected: &str) -> Result<()> {
    let mode = json["content"]["mode"]
        .as_str()
        .context("Expected 'content.mode' in JSON")?;
    if mode != expected {
        bail!("Expected mode {}, got {}", expected, mode);
    }
    Ok(())
}
