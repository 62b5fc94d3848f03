use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::debug;

use crate::{
    cli::{
        args::CommonArgs,
        commands::check::{CheckRule, run_checks},
    },
    config::load_config,
    core::{CatalogStats, CheckContext},
    issues::{Issue, Rule, Severity},
};

use super::types::{
    CatalogInfo, CatalogsResult, ConfigDto, ConfigValues, GetCatalogsParams, GetConfigParams,
    IssueItem, IssuesScanResult, LookupParams, LookupResult, Pagination, ParseErrorItem,
    RuleStats, ScanIssuesParams, ScanOverviewParams, ScanOverviewResult,
};

#[derive(Clone)]
pub struct TsglotMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TsglotMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TsglotMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tsglot configuration
    #[tool(description = "Get the current tsglot configuration (.tsglotrc.json or defaults).")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        json_result(&config_dto)
    }

    /// List catalogs with their translation progress
    #[tool(
        description = "List the Qt Linguist .ts catalogs of the project with language and translation progress."
    )]
    pub async fn get_catalogs(
        &self,
        params: Parameters<GetCatalogsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let catalogs = ctx
            .catalogs()
            .iter()
            .map(|catalog| {
                let stats = CatalogStats::from_catalog(catalog);
                CatalogInfo {
                    file_path: stats.file_path,
                    language: stats.language,
                    source_language: catalog.source_language.clone(),
                    context_count: stats.contexts,
                    message_count: stats.messages,
                    finished_count: stats.finished,
                    unfinished_count: stats.unfinished,
                    stale_count: stats.stale,
                    completion: stats.completion,
                }
            })
            .collect();

        let parse_errors = ctx
            .parse_errors()
            .iter()
            .map(|e| ParseErrorItem {
                file_path: e.file_path.clone(),
                error: e.error.clone(),
            })
            .collect();

        let result = CatalogsResult {
            catalogs_dir: ctx.catalogs_dir.to_string_lossy().to_string(),
            catalogs,
            parse_errors,
        };

        json_result(&result)
    }

    /// Get statistics of all catalog issues
    #[tool(
        description = "Get issue counts per rule (unfinished, vanished, numerus-forms, placeholder, accelerator, duplicate, identical, language, parse-error)."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;
        let issues = all_issues(&ctx);

        let rules = Rule::ALL
            .into_iter()
            .map(|rule| {
                let matching: Vec<&Issue> = issues.iter().filter(|i| i.rule() == rule).collect();
                let files: HashSet<&str> = matching.iter().map(|i| i.file_path()).collect();
                RuleStats {
                    rule: rule.to_string(),
                    severity: rule.severity().to_string(),
                    total_count: matching.len(),
                    file_count: files.len(),
                }
            })
            .collect();

        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();

        let overview = ScanOverviewResult {
            catalog_count: ctx.catalogs().len(),
            message_count: ctx.message_count(),
            error_count,
            warning_count: issues.len() - error_count,
            rules,
        };

        json_result(&overview)
    }

    /// Get detailed issue list
    #[tool(
        description = "Get catalog issues, optionally filtered by rule. Returns paginated list."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let rule = match params.0.rule.as_deref() {
            Some(name) => Some(Rule::from_name(name).ok_or_else(|| {
                McpError::invalid_params(format!("Unknown rule: {}", name), None)
            })?),
            None => None,
        };
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = load_context(&params.0.project_root_path)?;

        let all_items: Vec<IssueItem> = all_issues(&ctx)
            .iter()
            .filter(|i| rule.is_none_or(|rule| i.rule() == rule))
            .map(IssueItem::from)
            .collect();

        let total_count = all_items.len();

        // Apply pagination
        let paginated: Vec<IssueItem> = all_items.into_iter().skip(offset).take(limit).collect();

        let has_more = offset + paginated.len() < total_count;

        let scan_result = IssuesScanResult {
            total_count,
            items: paginated,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        json_result(&scan_result)
    }

    /// Resolve a source text the way the application would
    #[tool(
        description = "Resolve a (context, source, comment) message to its translation, picking the numerus form for count. Falls back to the source text when no finished translation exists."
    )]
    pub async fn lookup(&self, params: Parameters<LookupParams>) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path)?;

        let translator = ctx.translator(params.language.as_deref());
        let comment = params.comment.as_deref();
        let found = translator
            .lookup(&params.context, &params.source, comment, params.count)
            .is_some();
        let text = translator.translate(&params.context, &params.source, comment, params.count);

        let result = LookupResult {
            context: params.context,
            source: params.source,
            text,
            found,
        };

        json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for TsglotMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tsglot MCP helps AI agents maintain Qt Linguist (.ts) translation catalogs.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_catalogs - List catalogs with language and progress\n\
                 3. scan_overview - Get issue counts per rule\n\
                 4. scan_issues - Get detailed issues, optionally for one rule (paginated)\n\
                 5. lookup - Resolve a source text to its translation\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix errors first (placeholder, numerus-forms, duplicate, parse-error)\n\
                 3. Then translate unfinished messages\n\
                 4. Finally review warnings (identical, accelerator, vanished)\n\n\
                 Stale (vanished/obsolete) entries can be removed with `tsglot clean --apply`."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn load_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    let common = CommonArgs {
        path: PathBuf::from(project_root_path),
        catalogs_root: None,
        verbose: false,
    };
    CheckContext::new(&common)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

/// Every rule plus parse errors, in report order.
fn all_issues(ctx: &CheckContext) -> Vec<Issue> {
    let mut issues = run_checks(ctx, &CheckRule::all());
    issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));
    issues.sort();
    debug!(issues = issues.len(), "scanned catalogs");
    issues
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TsglotMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
