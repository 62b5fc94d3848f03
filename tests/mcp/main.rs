use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;


/// Test fixture for MCP integration tests
///
/// Manages a temporary Qt project with a translations/ directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("translations"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with catalogs
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_catalogs(vec![
    ///     ("katvan_he.ts", catalog("he", &[("katvan::Editor", "Copy", "העתק")])),
    /// ])?;
    /// ```
    pub fn with_catalogs(catalogs: Vec<(&str, String)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (name, content) in catalogs {
            fixture.write_catalog(name, &content)?;
        }
        Ok(fixture)
    }

    /// Write a catalog to translations/<name>
    pub fn write_catalog(&self, name: &str, content: &str) -> Result<()> {
        let path = self.project_root.join("translations").join(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
        Ok(())
    }

    /// Write a .tsglotrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".tsglotrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Render a catalog with one plain message per (context, source, translation).
///
/// An empty translation is written as `type="unfinished"`.
pub fn catalog(language: &str, messages: &[(&str, &str, &str)]) -> String {
    let mut out = format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n<TS version=\"2.1\" language=\"{}\">\n",
        language
    );
    for (context, source, translation) in messages {
        let translation = if translation.is_empty() {
            "<translation type=\"unfinished\"></translation>".to_string()
        } else {
            format!("<translation>{}</translation>", translation)
        };
        out.push_str(&format!(
            "<context>\n    <name>{}</name>\n    <message>\n        <source>{}</source>\n        {}\n    </message>\n</context>\n",
            context, source, translation
        ));
    }
    out.push_str("</TS>\n");
    out
}

/// Hebrew catalog with unfinished, placeholder and identical issues
pub fn fixture_with_issues() -> Result<McpTestFixture> {
    McpTestFixture::with_catalogs(vec![(
        "katvan_he.ts",
        catalog(
            "he",
            &[
                ("katvan::Editor", "Copy", "העתק"),
                ("katvan::Editor", "Paste", ""),
                ("katvan::Editor", "Cut", ""),
                ("katvan::StatusBar", "Line %1 of %2", "שורה %1"),
                ("katvan::AboutDialog", "Toggle Text Direction", "Toggle Text Direction"),
            ],
        ),
    )])
}

/// Hebrew and German catalogs for the same messages
pub fn fixture_multi_language() -> Result<McpTestFixture> {
    McpTestFixture::with_catalogs(vec![
        (
            "katvan_he.ts",
            catalog(
                "he",
                &[("katvan::Editor", "Copy", "העתק"), ("katvan::Editor", "Paste", "הדבק")],
            ),
        ),
        (
            "katvan_de.ts",
            catalog(
                "de",
                &[("katvan::Editor", "Copy", "Kopieren"), ("katvan::Editor", "Paste", "")],
            ),
        ),
    ])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
