use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CLEAN_HE, CliTest, KATVAN_HE};

#[test]
fn test_reports_catalog_issues() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", KATVAN_HE)?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_file("translations/katvan_he.ts", CLEAN_HE)?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_selected_rules_only() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", KATVAN_HE)?;

    // Unfinished messages are warnings, so this exits 0
    assert_cmd_snapshot!(test.check_command().arg("unfinished"));

    Ok(())
}

#[test]
fn test_numerus_form_count() -> Result<()> {
    let test = CliTest::with_file(
        "katvan_ar.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ar">
<context>
    <name>katvan::SpellChecker</name>
    <message numerus="yes">
        <source>%n Suggestion(s)</source>
        <translation>
            <numerusform>%n اقتراح</numerusform>
            <numerusform>%n اقتراحات</numerusform>
        </translation>
    </message>
</context>
</TS>
"#,
    )?;

    assert_cmd_snapshot!(test.check_command().arg("numerus-forms"));

    Ok(())
}

#[test]
fn test_numerus_with_empty_form() -> Result<()> {
    let test = CliTest::with_file(
        "katvan_he.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="he">
<context>
    <name>katvan::SpellChecker</name>
    <message numerus="yes">
        <source>%n Suggestion(s)</source>
        <translation>
            <numerusform>הצעה אחת</numerusform>
            <numerusform></numerusform>
        </translation>
    </message>
</context>
</TS>
"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_typescript_sources_skipped() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", CLEAN_HE)?;
    test.write_file("web/index.ts", "export const answer = 42;\n")?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_parse_error_reported() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", CLEAN_HE)?;
    test.write_file(
        "broken_he.ts",
        r#"<TS version="2.1" language="he">
<context>
    <name>katvan::Editor</name>
    <message>
        <translation>העתק</translation>
    </message>
</context>
</TS>
"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_config_ignore_contexts() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", KATVAN_HE)?;
    test.write_file(
        ".tsglotrc.json",
        r#"{
  "ignoreContexts": ["katvan::SpellChecker"]
}"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_config_catalogs_root() -> Result<()> {
    let test = CliTest::with_file("translations/katvan_he.ts", KATVAN_HE)?;
    test.write_file("other/katvan_ar.ts", CLEAN_HE)?;
    test.write_file(".tsglotrc.json", r#"{ "catalogsRoot": "translations" }"#)?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_accelerators_disabled() -> Result<()> {
    let test = CliTest::with_file(
        "katvan_he.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="he">
<context>
    <name>katvan::MainWindow</name>
    <message>
        <source>&amp;File</source>
        <translation>קובץ</translation>
    </message>
</context>
</TS>
"#,
    )?;

    assert_cmd_snapshot!(test.check_command().arg("accelerator"));

    test.write_file(".tsglotrc.json", r#"{ "checkAccelerators": false }"#)?;
    assert_cmd_snapshot!(test.check_command().arg("accelerator"));

    Ok(())
}

#[test]
fn test_missing_catalogs_root() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command().args(["--catalogs-root", "missing"]));

    Ok(())
}

#[test]
fn test_explicit_project_path() -> Result<()> {
    let test = CliTest::with_file("app/katvan_he.ts", CLEAN_HE)?;

    assert_cmd_snapshot!(
        test.check_command()
            .arg("--path")
            .arg(test.root().join("app"))
    );

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"));

    Ok(())
}
