use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::issues::{Issue, Report, ReportLocation};

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub catalogs_root: String,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_contexts: Vec<String>,
    pub ignore_texts: Vec<String>,
    pub check_accelerators: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            catalogs_root: c.catalogs_root,
            includes: c.includes,
            ignores: c.ignores,
            ignore_contexts: c.ignore_contexts,
            ignore_texts: c.ignore_texts,
            check_accelerators: c.check_accelerators,
        }
    }
}

// ============================================================
// Catalog Types (get_catalogs)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCatalogsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

/// Result of get_catalogs operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogsResult {
    pub catalogs_dir: String,
    pub catalogs: Vec<CatalogInfo>,
    /// Files that looked like catalogs but could not be parsed
    pub parse_errors: Vec<ParseErrorItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub file_path: String,
    pub language: String,
    pub source_language: Option<String>,
    pub context_count: usize,
    pub message_count: usize,
    pub finished_count: usize,
    pub unfinished_count: usize,
    pub stale_count: usize,
    /// Finished share of live messages, in percent
    pub completion: f64,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Scan Types (scan_overview, scan_issues)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

/// Result of scan_overview operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub catalog_count: usize,
    pub message_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// One entry per rule, in report order
    pub rules: Vec<RuleStats>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleStats {
    pub rule: String,
    pub severity: String,
    pub total_count: usize,
    pub file_count: usize,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only return issues of this rule (e.g. "unfinished", "numerus-forms")
    pub rule: Option<String>,
    /// Page size (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of issues to skip
    pub offset: Option<u32>,
}

/// Result of scan_issues operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuesScanResult {
    pub total_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    /// 0 for file-level issues
    pub line: usize,
    pub context: Option<String>,
    pub source: Option<String>,
    pub translation: Option<String>,
    pub message: String,
    pub details: Option<String>,
    pub hint: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        let (file_path, line, context, source, translation) = match issue.location() {
            ReportLocation::Message(ctx) => (
                ctx.location.file_path.clone(),
                ctx.location.line,
                Some(ctx.context.clone()),
                Some(ctx.source.clone()),
                Some(ctx.value.clone()),
            ),
            ReportLocation::File { path, line } => (path.to_string(), line, None, None, None),
        };

        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity().to_string(),
            file_path,
            line,
            context,
            source,
            translation,
            message: issue.message(),
            details: issue.details(),
            hint: issue.hint().map(String::from),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// Lookup Types (lookup)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Context name (e.g. "katvan::Editor")
    pub context: String,
    /// Source text of the message
    pub source: String,
    /// Disambiguation comment
    pub comment: Option<String>,
    /// Count selecting the numerus form, substituted for %n
    pub count: Option<i64>,
    /// Restrict the lookup to catalogs of this language
    pub language: Option<String>,
}

/// Result of lookup operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub context: String,
    pub source: String,
    /// Translated text, or the source text when not found
    pub text: String,
    pub found: bool,
}
