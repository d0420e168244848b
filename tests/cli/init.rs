use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("dictionaryPath").is_some(),
        "Config should have 'dictionaryPath' field"
    );
    assert_eq!(parsed["functions"], serde_json::json!(["$t", "t"]));
    assert_eq!(parsed["suggestedPath"], "./src/i18n/zh-CN.json");

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Created .keyseekrc.json\n");

    assert!(test.root().join(".keyseekrc.json").exists());
    let content = test.read_file(".keyseekrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keyseekrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: .keyseekrc.json already exists\n");
    assert_eq!(test.read_file(".keyseekrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/i18n/zh-CN.json", r#"{"home": {"title": "首页"}}"#)?;

    // No dictionaryPath yet and stdin is not a terminal, so nothing is asked.
    let output = test.command().arg("load").output()?;
    assert_eq!(output.status.code(), Some(1));

    let output = test
        .command()
        .args(["load", "--dictionary", "./src/i18n/zh-CN.json"])
        .output()?;
    assert!(
        output.status.success(),
        "Load should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
