use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .langcellrc.json"));
    assert!(test.root().join(".langcellrc.json").exists());

    let content = test.read_file(".langcellrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["messagesRoot"], "./messages");
    assert_eq!(parsed["defaultLocale"], "en");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langcellrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: .langcellrc.json already exists"));
    assert_eq!(test.read_file(".langcellrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("messages/en.json", r#"{"title": "Hello"}"#)?;

    let output = test.t_command("title").output()?;

    assert!(
        output.status.success(),
        "t should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(stdout(&output), "Hello\n");

    Ok(())
}
