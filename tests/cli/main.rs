use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod clean;
mod init;
mod lookup;
mod stats;

const BIN_NAME: &str = "tsglot";

/// Hebrew catalog with one message per rule of interest.
pub const KATVAN_HE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="he" sourcelanguage="en">
<context>
    <name>katvan::Editor</name>
    <message>
        <location filename="../editor.cpp" line="120"/>
        <source>Copy</source>
        <translation>העתק</translation>
    </message>
    <message>
        <location filename="../editor.cpp" line="130"/>
        <source>Paste</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Old Command</source>
        <translation type="vanished">פקודה ישנה</translation>
    </message>
</context>
<context>
    <name>katvan::SpellChecker</name>
    <message numerus="yes">
        <location filename="../spell_checker.cpp" line="88"/>
        <source>%n Suggestion(s)</source>
        <translation>
            <numerusform>הצעה אחת</numerusform>
            <numerusform>%n הצעות</numerusform>
        </translation>
    </message>
    <message>
        <source>Line %1 of %2</source>
        <translation>שורה %1</translation>
    </message>
</context>
</TS>
"#;

/// Hebrew catalog without any issue.
pub const CLEAN_HE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="he">
<context>
    <name>katvan::Editor</name>
    <message>
        <source>Copy</source>
        <translation>העתק</translation>
    </message>
    <message>
        <source>Line %1 of %2</source>
        <translation>שורה %1 מתוך %2</translation>
    </message>
</context>
</TS>
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd.env("TSGLOT_DISABLE_TIMING", "1"); // Disable timing for stable snapshots
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn clean_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("clean");
        cmd
    }

    pub fn stats_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("stats");
        cmd
    }

    pub fn lookup_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("lookup");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
