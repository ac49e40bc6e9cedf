use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_locales_lists_files_and_marks_default() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("id", json!({ "greeting": "Halo" })),
        ("en", json!({ "greeting": "Hi" })),
    ])?;
    test.write_file(".langcellrc.json", r#"{ "defaultLocale": "id" }"#)?;

    let output = test.command().arg("locales").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "en\nid (default)\n");

    Ok(())
}

#[test]
fn test_locales_default_locale_override() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("id", json!({})),
        ("en", json!({})),
    ])?;

    let output = test
        .command()
        .args(["locales", "--default-locale", "id"])
        .output()?;

    assert_eq!(stdout(&output), "en\nid (default)\n");

    Ok(())
}

#[test]
fn test_locales_missing_messages_dir_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("locales").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does not exist"));

    Ok(())
}

#[test]
fn test_locales_default_without_file_is_error() -> Result<()> {
    let test = CliTest::with_messages(&[("id", json!({}))])?;

    let output = test.command().arg("locales").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No messages file for default locale \"en\""));

    Ok(())
}
