use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tsglot::mcp::{
    TsglotMcpServer,
    types::{GetCatalogsParams, GetConfigParams},
};

use crate::{McpTestFixture, catalog, extract_tool_result_json, fixture_multi_language};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["catalogsRoot"], ".");
    assert_eq!(json_result["config"]["includes"], json!(["**/*.ts"]));
    assert_eq!(json_result["config"]["checkAccelerators"], true);
}

#[tokio::test]
async fn test_get_config_from_tsglotrc() {
    let fixture = McpTestFixture::new().unwrap();

    fixture
        .write_config(&json!({
            "catalogsRoot": "translations",
            "ignoreContexts": ["QPlatformTheme"],
            "checkAccelerators": false
        }))
        .unwrap();

    let server = TsglotMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["catalogsRoot"], "translations");
    assert_eq!(json_result["config"]["ignoreContexts"], json!(["QPlatformTheme"]));
    assert_eq!(json_result["config"]["checkAccelerators"], false);
}

// ============================================================================
// get_catalogs tests
// ============================================================================

#[tokio::test]
async fn test_get_catalogs() {
    let fixture = fixture_multi_language().unwrap();
    fixture
        .write_config(&json!({ "catalogsRoot": "translations" }))
        .unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(
        json_result["catalogsDir"],
        fixture.root_path().join("translations").to_string_lossy().as_ref()
    );

    let catalogs = json_result["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 2);

    // Sorted by path: katvan_de.ts before katvan_he.ts
    assert_eq!(catalogs[0]["language"], "de");
    assert_eq!(catalogs[0]["messageCount"], 2);
    assert_eq!(catalogs[0]["finishedCount"], 1);
    assert_eq!(catalogs[0]["unfinishedCount"], 1);
    assert_eq!(catalogs[0]["completion"], 50.0);

    assert_eq!(catalogs[1]["language"], "he");
    assert_eq!(catalogs[1]["completion"], 100.0);
    assert!(catalogs[1]["filePath"].as_str().unwrap().ends_with("katvan_he.ts"));

    assert!(json_result["parseErrors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_catalogs_reports_parse_errors() {
    let fixture = McpTestFixture::with_catalogs(vec![(
        "katvan_he.ts",
        catalog("he", &[("katvan::Editor", "Copy", "העתק")]),
    )])
    .unwrap();
    fixture
        .write_catalog("broken_he.ts", "<TS version=\"2.1\" language=\"he\">\n<context>\n</TS>\n")
        .unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogs"].as_array().unwrap().len(), 1);
    let errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]["filePath"].as_str().unwrap().ends_with("broken_he.ts"));
}

#[tokio::test]
async fn test_get_catalogs_missing_root() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "catalogsRoot": "missing" }))
        .unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await;
    assert!(result.is_err());
}
