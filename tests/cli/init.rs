use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["catalogsRoot"], ".");
    assert_eq!(parsed["includes"], serde_json::json!(["**/*.ts"]));
    assert_eq!(parsed["checkAccelerators"], true);
    assert!(parsed.get("ignoreContexts").is_some());

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert!(test.root().join(".tsglotrc.json").exists());
    assert_config_content(&test.read_file(".tsglotrc.json")?)?;

    Ok(())
}

#[test]
fn test_init_existing_config() -> Result<()> {
    let test = CliTest::with_file(".tsglotrc.json", "{}\n")?;

    assert_cmd_snapshot!(test.command().arg("init"));
    assert_eq!(test.read_file(".tsglotrc.json")?, "{}\n");

    Ok(())
}

#[test]
fn test_init_with_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/.keep", "")?;

    assert_cmd_snapshot!(test.command().args(["init", "--path", "app"]));
    assert_config_content(&test.read_file("app/.tsglotrc.json")?)?;

    Ok(())
}
