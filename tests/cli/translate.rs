use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_messages(&[
        (
            "id",
            json!({
                "greeting": "Halo",
                "greet": "Halo {name}",
                "item": "satu barang",
                "item_plural": "{count} barang",
                "nav": { "home": "Beranda" }
            }),
        ),
        (
            "en",
            json!({
                "greeting": "Hi",
                "greet": "Hello {name}",
                "item": "one item",
                "item_plural": "{count} items"
            }),
        ),
    ])?;
    test.write_file(".langcellrc.json", r#"{ "defaultLocale": "id" }"#)?;
    Ok(test)
}

#[test]
fn test_translate_default_locale() -> Result<()> {
    let test = project()?;

    let output = test.t_command("nav.home").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Beranda\n");

    Ok(())
}

#[test]
fn test_translate_lazy_locale() -> Result<()> {
    let test = project()?;

    let output = test.t_command("greeting").args(["--lang", "en"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Hi\n");

    Ok(())
}

#[test]
fn test_translate_lang_from_query() -> Result<()> {
    let test = project()?;

    let output = test
        .t_command("greeting")
        .args(["--query", "?page=2&lang=en"])
        .output()?;

    assert_eq!(stdout(&output), "Hi\n");

    Ok(())
}

#[test]
fn test_translate_unknown_lang_falls_back_to_default() -> Result<()> {
    let test = project()?;

    let output = test.t_command("greeting").args(["--lang", "fr"]).output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Halo\n");
    assert!(stderr(&output).contains("locale \"fr\" is not available, using \"id\""));

    Ok(())
}

#[test]
fn test_translate_params() -> Result<()> {
    let test = project()?;

    let output = test
        .t_command("greet")
        .args(["--lang", "en", "-p", "name=Ana"])
        .output()?;

    insta::assert_snapshot!(stdout(&output), @"Hello Ana");

    Ok(())
}

#[test]
fn test_translate_plural() -> Result<()> {
    let test = project()?;

    let one = test
        .t_command("item")
        .args(["--lang", "en", "--count", "1"])
        .output()?;
    let five = test
        .t_command("item")
        .args(["--lang", "en", "--count", "5"])
        .output()?;

    assert_eq!(stdout(&one), "one item\n");
    assert_eq!(stdout(&five), "5 items\n");

    Ok(())
}

#[test]
fn test_translate_missing_key_prints_key() -> Result<()> {
    let test = project()?;

    let output = test.t_command("no.such.key").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "no.such.key\n");
    assert!(stderr(&output).contains("key \"no.such.key\" not found in locale id"));

    Ok(())
}

#[test]
fn test_translate_broken_locale_file_is_error() -> Result<()> {
    let test = project()?;
    test.write_file("messages/ja.json", "{ broken")?;

    let output = test.t_command("greeting").args(["--lang", "ja"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load locale \"ja\""));

    Ok(())
}

#[test]
fn test_translate_rejects_malformed_param() -> Result<()> {
    let test = project()?;

    let output = test.t_command("greet").args(["-p", "name"]).output()?;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("expected NAME=VALUE"));

    Ok(())
}
