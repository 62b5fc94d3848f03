use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CLEAN_HE, CliTest, KATVAN_HE};

#[test]
fn test_stats_table() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", KATVAN_HE)?;

    assert_cmd_snapshot!(test.stats_command());

    Ok(())
}

#[test]
fn test_stats_json() -> Result<()> {
    let test = CliTest::with_file("katvan_he.ts", KATVAN_HE)?;
    test.write_file("katvan_ar.ts", &CLEAN_HE.replace("language=\"he\"", "language=\"ar\""))?;

    assert_cmd_snapshot!(test.stats_command().arg("--json"));

    Ok(())
}

#[test]
fn test_stats_no_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.stats_command());

    Ok(())
}
