use keyseek::mcp::{KeyseekMcpServer, types::JumpParams};
use rmcp::{ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult};
use serde_json::Value;

use crate::{assert_location, extract_tool_result_json, fixture_vue_page, loaded_server, search};

async fn try_jump(
    server: &KeyseekMcpServer,
    key: &str,
    pick: Option<u32>,
) -> Result<CallToolResult, McpError> {
    server
        .jump(Parameters(JumpParams {
            file_path: "src/App.vue".to_string(),
            key: key.to_string(),
            pick,
        }))
        .await
}

async fn jump(server: &KeyseekMcpServer, key: &str, pick: Option<u32>) -> Value {
    extract_tool_result_json(&try_jump(server, key, pick).await.unwrap())
}

#[tokio::test]
async fn test_jump_single() {
    let fixture = fixture_vue_page().unwrap();
    let server = loaded_server(&fixture).await;

    let json_result = jump(&server, "home.subtitle", None).await;

    assert_eq!(json_result["outcome"], "single");
    assert_location(&json_result["selected"], 2, 11);
    assert_eq!(json_result["candidates"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_jump_multiple() {
    let fixture = fixture_vue_page().unwrap();
    let server = loaded_server(&fixture).await;

    let json_result = jump(&server, "home.title", None).await;

    assert_eq!(json_result["outcome"], "multiple");
    assert!(json_result.get("selected").is_none());

    let candidates = json_result["candidates"].as_array().unwrap();
    assert_eq!(candidates.len(), 2);
    assert_location(&candidates[0]["location"], 1, 12);
    assert_eq!(candidates[0]["lineText"], "<h1>{{ $t('home.title') }}</h1>");
    assert_location(&candidates[1]["location"], 5, 17);
    assert_eq!(candidates[1]["lineText"], "const fallback = 'home.title';");
}

#[tokio::test]
async fn test_jump_pick() {
    let fixture = fixture_vue_page().unwrap();
    let server = loaded_server(&fixture).await;

    let json_result = jump(&server, "home.title", Some(2)).await;
    assert_location(&json_result["selected"], 5, 17);

    // Picking again is harmless and gives the same answer.
    let json_result = jump(&server, "home.title", Some(2)).await;
    assert_location(&json_result["selected"], 5, 17);
}

#[tokio::test]
async fn test_jump_pick_out_of_range() {
    let fixture = fixture_vue_page().unwrap();
    let server = loaded_server(&fixture).await;

    assert!(try_jump(&server, "home.title", Some(3)).await.is_err());
    assert!(try_jump(&server, "home.title", Some(0)).await.is_err());
    assert!(try_jump(&server, "home.subtitle", Some(2)).await.is_err());
}

#[tokio::test]
async fn test_jump_key_not_used() {
    let fixture = fixture_vue_page().unwrap();
    let server = loaded_server(&fixture).await;

    let json_result = jump(&server, "nav.home", None).await;

    assert_eq!(json_result["outcome"], "keyNotUsed");
    assert_eq!(
        json_result["message"],
        "Key \"nav.home\" is not used in src/App.vue."
    );
}

#[tokio::test]
async fn test_jump_after_edit_reports_missing_text() {
    let fixture = fixture_vue_page().unwrap();
    let server = loaded_server(&fixture).await;

    let json_result = search(&server, "src/App.vue", None).await;
    assert_eq!(json_result["outcome"], "used");

    fixture
        .write_file("src/App.vue", "<template>\n  <h1>{{ $t('home.title') }}</h1>\n</template>\n")
        .unwrap();

    let json_result = jump(&server, "home.subtitle", None).await;
    assert_eq!(json_result["outcome"], "noTextualMatch");
    assert_eq!(
        json_result["message"],
        "Key \"home.subtitle\" is used in src/App.vue but no quoted occurrence was found."
    );
}

#[tokio::test]
async fn test_jump_before_load() {
    let fixture = fixture_vue_page().unwrap();
    let server = KeyseekMcpServer::new();
    let path = fixture.root_path().join("src/App.vue");

    let result = server
        .jump(Parameters(JumpParams {
            file_path: path.to_string_lossy().to_string(),
            key: "home.title".to_string(),
            pick: None,
        }))
        .await
        .unwrap();

    assert_eq!(extract_tool_result_json(&result)["outcome"], "noDictionary");
}
