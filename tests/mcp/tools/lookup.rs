use rmcp::handler::server::wrapper::Parameters;
use tsglot::mcp::{TsglotMcpServer, types::LookupParams};

use crate::{McpTestFixture, extract_tool_result_json, fixture_multi_language};

fn lookup_params(fixture: &McpTestFixture, source: &str) -> LookupParams {
    LookupParams {
        project_root_path: fixture.root(),
        context: "katvan::Editor".to_string(),
        source: source.to_string(),
        comment: None,
        count: None,
        language: None,
    }
}

#[tokio::test]
async fn test_lookup_by_language() {
    let fixture = fixture_multi_language().unwrap();
    let server = TsglotMcpServer::new();

    let mut params = lookup_params(&fixture, "Copy");
    params.language = Some("de".to_string());

    let result = server.lookup(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["found"], true);
    assert_eq!(json_result["text"], "Kopieren");
    assert_eq!(json_result["context"], "katvan::Editor");

    let mut params = lookup_params(&fixture, "Copy");
    params.language = Some("he_IL".to_string());

    let result = server.lookup(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "העתק");
}

#[tokio::test]
async fn test_lookup_unfinished_falls_back() {
    let fixture = fixture_multi_language().unwrap();
    let server = TsglotMcpServer::new();

    let mut params = lookup_params(&fixture, "Paste");
    params.language = Some("de".to_string());

    let result = server.lookup(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["found"], false);
    assert_eq!(json_result["text"], "Paste");
}

#[tokio::test]
async fn test_lookup_unknown_source() {
    let fixture = fixture_multi_language().unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .lookup(Parameters(lookup_params(&fixture, "Save As...")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["found"], false);
    assert_eq!(json_result["text"], "Save As...");
    assert_eq!(json_result["source"], "Save As...");
}
