use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CLEAN_HE, CliTest, KATVAN_HE};

#[test]
fn test_lookup_translation() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", KATVAN_HE)?;

    assert_cmd_snapshot!(
        test.lookup_command()
            .args(["Copy", "--context", "katvan::Editor"])
    );

    Ok(())
}

#[test]
fn test_lookup_numerus_form() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", KATVAN_HE)?;

    assert_cmd_snapshot!(test.lookup_command().args([
        "%n Suggestion(s)",
        "--context",
        "katvan::SpellChecker",
        "-n",
        "3",
    ]));

    assert_cmd_snapshot!(test.lookup_command().args([
        "%n Suggestion(s)",
        "--context",
        "katvan::SpellChecker",
        "-n",
        "1",
    ]));

    Ok(())
}

#[test]
fn test_lookup_unfinished_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", KATVAN_HE)?;

    assert_cmd_snapshot!(
        test.lookup_command()
            .args(["Paste", "--context", "katvan::Editor"])
    );

    Ok(())
}

#[test]
fn test_lookup_wrong_context() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", KATVAN_HE)?;

    assert_cmd_snapshot!(
        test.lookup_command()
            .args(["Copy", "--context", "katvan::MainWindow"])
    );

    Ok(())
}

#[test]
fn test_lookup_fills_arguments() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", CLEAN_HE)?;

    assert_cmd_snapshot!(test.lookup_command().args([
        "Line %1 of %2",
        "--context",
        "katvan::Editor",
        "--arg",
        "4",
        "--arg",
        "9",
    ]));

    Ok(())
}

#[test]
fn test_lookup_reports_broken_catalogs() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", KATVAN_HE)?;
    test.write_file("katvan_ar.ts", "<TS version=\"2.1\" language=\"ar\">\n<context>\n")?;

    assert_cmd_snapshot!(
        test.lookup_command()
            .args(["Copy", "--context", "katvan::Editor"])
    );

    Ok(())
}

#[test]
fn test_lookup_requires_context() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", KATVAN_HE)?;

    insta::with_settings!({filters => vec![(r"Usage: .*", "Usage: [USAGE]")]}, {
        assert_cmd_snapshot!(test.lookup_command().arg("Copy"));
    });

    Ok(())
}
