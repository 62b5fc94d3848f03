use rmcp::{handler::server::wrapper::Parameters, model::ErrorCode};
use serde_json::{Value, json};
use tsglot::mcp::{
    TsglotMcpServer,
    types::{ScanIssuesParams, ScanOverviewParams},
};

use crate::{
    McpTestFixture, assert_pagination, catalog, extract_tool_result_json, fixture_with_issues,
};

fn rule_stats<'a>(overview: &'a Value, rule: &str) -> &'a Value {
    overview["rules"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["rule"] == rule)
        .unwrap_or_else(|| panic!("missing stats for {rule}"))
}

// ============================================================================
// scan_overview tests
// ============================================================================

#[tokio::test]
async fn test_scan_overview_counts() {
    let fixture = fixture_with_issues().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogCount"], 1);
    assert_eq!(json_result["messageCount"], 5);
    assert_eq!(json_result["errorCount"], 1);
    assert_eq!(json_result["warningCount"], 3);

    let unfinished = rule_stats(&json_result, "unfinished");
    assert_eq!(unfinished["totalCount"], 2);
    assert_eq!(unfinished["fileCount"], 1);
    assert_eq!(unfinished["severity"], "warning");

    let placeholder = rule_stats(&json_result, "placeholder");
    assert_eq!(placeholder["totalCount"], 1);
    assert_eq!(placeholder["severity"], "error");

    assert_eq!(rule_stats(&json_result, "identical")["totalCount"], 1);
    assert_eq!(rule_stats(&json_result, "duplicate")["totalCount"], 0);
    assert_eq!(rule_stats(&json_result, "parse-error")["totalCount"], 0);
}

#[tokio::test]
async fn test_scan_overview_clean_project() {
    let fixture = McpTestFixture::with_catalogs(vec![(
        "katvan_he.ts",
        catalog("he", &[("katvan::Editor", "Copy", "העתק")]),
    )])
    .unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["errorCount"], 0);
    assert_eq!(json_result["warningCount"], 0);
    assert_eq!(json_result["rules"].as_array().unwrap().len(), 9);
}

// ============================================================================
// scan_issues tests
// ============================================================================

#[tokio::test]
async fn test_scan_issues_all() {
    let fixture = fixture_with_issues().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: None,
        limit: None,
        offset: None,
    });

    let result = server.scan_issues(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 4);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 4);
    assert_pagination(&json_result, 0, 50, false);
}

#[tokio::test]
async fn test_scan_issues_by_rule() {
    let fixture = fixture_with_issues().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: Some("placeholder".to_string()),
        limit: None,
        offset: None,
    });

    let result = server.scan_issues(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    let item = &json_result["items"][0];
    assert_eq!(item["rule"], "placeholder");
    assert_eq!(item["severity"], "error");
    assert_eq!(item["context"], "katvan::StatusBar");
    assert_eq!(item["source"], "Line %1 of %2");
    assert_eq!(item["translation"], "שורה %1");
    assert_eq!(item["details"], "missing %2");
    assert!(item["filePath"].as_str().unwrap().ends_with("katvan_he.ts"));
    assert!(item["line"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_scan_issues_pagination() {
    let fixture = fixture_with_issues().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: Some("unfinished".to_string()),
        limit: Some(1),
        offset: None,
    });

    let result = server.scan_issues(params).await.unwrap();
    let first_page = extract_tool_result_json(&result);

    assert_eq!(first_page["totalCount"], 2);
    assert_eq!(first_page["items"][0]["source"], "Paste");
    assert_pagination(&first_page, 0, 1, true);

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: Some("unfinished".to_string()),
        limit: Some(1),
        offset: Some(1),
    });

    let result = server.scan_issues(params).await.unwrap();
    let second_page = extract_tool_result_json(&result);

    assert_eq!(second_page["items"][0]["source"], "Cut");
    assert_pagination(&second_page, 1, 1, false);
}

#[tokio::test]
async fn test_scan_issues_limit_capped() {
    let fixture = fixture_with_issues().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: None,
        limit: Some(500),
        offset: None,
    });

    let result = server.scan_issues(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 100, false);
}

#[tokio::test]
async fn test_scan_issues_unknown_rule() {
    let fixture = fixture_with_issues().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: Some("hardcoded".to_string()),
        limit: None,
        offset: None,
    });

    let err = server.scan_issues(params).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("Unknown rule: hardcoded"));
}

#[tokio::test]
async fn test_scan_issues_respects_ignore_texts() {
    let fixture = fixture_with_issues().unwrap();
    fixture
        .write_config(&json!({ "ignoreTexts": ["Toggle Text Direction"] }))
        .unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rule: Some("identical".to_string()),
        limit: None,
        offset: None,
    });

    let result = server.scan_issues(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
}

#[tokio::test]
async fn test_scan_issues_accelerators_disabled() {
    let fixture = McpTestFixture::with_catalogs(vec![(
        "katvan_he.ts",
        catalog("he", &[("katvan::MainWindow", "&amp;File", "קובץ")]),
    )])
    .unwrap();
    let server = TsglotMcpServer::new();

    let params = || {
        Parameters(ScanIssuesParams {
            project_root_path: fixture.root(),
            rule: Some("accelerator".to_string()),
            limit: None,
            offset: None,
        })
    };

    let result = server.scan_issues(params()).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["totalCount"], 1);

    fixture
        .write_config(&json!({ "checkAccelerators": false }))
        .unwrap();
    let result = server.scan_issues(params()).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["totalCount"], 0);
}
