use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CLEAN_HE, CliTest, KATVAN_HE};

/// The `Old Command` entry of `KATVAN_HE`, as lupdate lays it out.
const OLD_COMMAND: &str = r#"    <message>
        <source>Old Command</source>
        <translation type="vanished">פקודה ישנה</translation>
    </message>
"#;

#[test]
fn test_clean_dry_run() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", KATVAN_HE)?;

    assert_cmd_snapshot!(test.clean_command());

    // Dry run leaves the catalog untouched
    assert_eq!(test.read_file("katvan_he.ts")?, KATVAN_HE);

    Ok(())
}

#[test]
fn test_clean_apply() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", KATVAN_HE)?;

    assert_cmd_snapshot!(test.clean_command().arg("--apply"));

    // Only the stale entry is cut, the rest of the file is kept as is
    assert_eq!(
        test.read_file("katvan_he.ts")?,
        KATVAN_HE.replace(OLD_COMMAND, "")
    );

    assert_cmd_snapshot!(test.clean_command());

    Ok(())
}

#[test]
fn test_clean_apply_keeps_untouched_messages() -> Result<()> {
    let catalog = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="he">
<context>
    <name>katvan::MainWindow</name>
    <message>
        <location filename="../katvan_mainwindow.cpp" line="211"/>
        <source>Save</source>
        <oldsource>Save File</oldsource>
        <translation variants="yes">
            <lengthvariant>שמור קובץ</lengthvariant>
            <lengthvariant>שמור</lengthvariant>
        </translation>
    </message>
    <message>
        <source>Prev</source>
        <translation type="vanished">הקודם</translation>
    </message>
</context>
<context>
    <name>katvan::SearchBar</name>
    <message>
        <source>Close</source>
        <translation type="obsolete">סגור</translation>
    </message>
</context>
</TS>
"#;
    let test = CliTest::with_file("katvan_he.ts", catalog)?;

    assert_cmd_snapshot!(test.clean_command().arg("--apply"));

    let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="he">
<context>
    <name>katvan::MainWindow</name>
    <message>
        <location filename="../katvan_mainwindow.cpp" line="211"/>
        <source>Save</source>
        <oldsource>Save File</oldsource>
        <translation variants="yes">
            <lengthvariant>שמור קובץ</lengthvariant>
            <lengthvariant>שמור</lengthvariant>
        </translation>
    </message>
</context>
</TS>
"#;
    assert_eq!(test.read_file("katvan_he.ts")?, expected);

    Ok(())
}

#[test]
fn test_clean_nothing_to_do() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", CLEAN_HE)?;

    assert_cmd_snapshot!(test.clean_command().arg("--apply"));
    assert_eq!(test.read_file("katvan_he.ts")?, CLEAN_HE);

    Ok(())
}

#[test]
fn test_clean_ignored_context_kept() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", KATVAN_HE)?;
    test.write_file(".tsglotrc.json", r#"{ "ignoreContexts": ["katvan::Editor"] }"#)?;

    assert_cmd_snapshot!(test.clean_command().arg("--apply"));
    assert_eq!(test.read_file("katvan_he.ts")?, KATVAN_HE);

    Ok(())
}
