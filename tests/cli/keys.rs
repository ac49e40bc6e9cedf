use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_keys_lists_placeholders() -> Result<()> {
    let test = CliTest::with_messages(&[(
        "en",
        json!({
            "title": "Hello",
            "greet": "Hello {name}",
            "cart": { "items": "{count} items for {name}" }
        }),
    )])?;

    let output = test.command().arg("keys").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "cart.items  count, name\ngreet       name\ntitle\n"
    );

    Ok(())
}

#[test]
fn test_keys_of_lazy_locale() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("en", json!({ "title": "Hello" })),
        ("id", json!({ "judul": "Halo", "sapa": "Halo {nama}" })),
    ])?;

    let output = test.command().args(["keys", "--lang", "id"]).output()?;

    assert_eq!(stdout(&output), "judul\nsapa   nama\n");

    Ok(())
}

#[test]
fn test_keys_skips_empty_messages() -> Result<()> {
    let test = CliTest::with_messages(&[(
        "en",
        json!({ "title": "Hello", "blank": "", "nav": { "home": "" } }),
    )])?;

    let output = test.command().arg("keys").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "title\n");

    Ok(())
}
