use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use keyseek::mcp::{
    KeyseekMcpServer,
    types::{LoadDictionaryParams, SearchParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::{Value, json};
use tempfile::TempDir;


/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a dictionary at `src/i18n/zh-CN.json`
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        // Stops config discovery at the project
        fs::create_dir_all(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with a dictionary and a config pointing at it
    pub fn with_dictionary(content: &Value) -> Result<Self> {
        let fixture = Self::new()?;
        fixture.write_dictionary(content)?;
        fixture.write_config(&json!({"dictionaryPath": "./src/i18n/zh-CN.json"}))?;
        Ok(fixture)
    }

    pub fn write_dictionary(&self, content: &Value) -> Result<()> {
        let json_str = serde_json::to_string_pretty(content)
            .context("Failed to serialize dictionary JSON")?;
        self.write_file("src/i18n/zh-CN.json", &format!("{}\n", json_str))
    }

    /// Write a .keyseekrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let json_str = serde_json::to_string_pretty(content)?;
        self.write_file(".keyseekrc.json", &format!("{}\n", json_str))
    }

    /// Write a source file relative to the project root
    pub fn write_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
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

/// A project with a nested dictionary and a Vue page using it
pub fn fixture_vue_page() -> Result<McpTestFixture> {
    let fixture = McpTestFixture::with_dictionary(&json!({
        "home": {
            "title": "首页",
            "subtitle": "欢迎"
        },
        "nav": {
            "home": "@:home.title"
        }
    }))?;
    fixture.write_file(
        "src/App.vue",
        "<template>\n  <h1>{{ $t('home.title') }}</h1>\n  <p>{{ $t('home.subtitle') }}</p>\n</template>\n<script>\nconst fallback = 'home.title';\n</script>\n",
    )?;
    Ok(fixture)
}

// ============================================================================
// Call Helpers
// ============================================================================

/// Create a server and load the fixture's dictionary into it
pub async fn loaded_server(fixture: &McpTestFixture) -> KeyseekMcpServer {
    let server = KeyseekMcpServer::new();
    let result = server
        .load_dictionary(Parameters(LoadDictionaryParams {
            root_path: fixture.root(),
            dictionary_path: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["success"], true, "load failed: {}", json_result);
    server
}

pub async fn search(server: &KeyseekMcpServer, file_path: &str, filter: Option<&str>) -> Value {
    let result = server
        .search(Parameters(SearchParams {
            file_path: file_path.to_string(),
            filter: filter.map(str::to_string),
        }))
        .await
        .unwrap();
    extract_tool_result_json(&result)
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert a 0-based location in a tool result
pub fn assert_location(location: &Value, line: u64, column: u64) {
    assert_eq!(location["line"].as_u64().unwrap(), line, "line mismatch");
    assert_eq!(
        location["column"].as_u64().unwrap(),
        column,
        "column mismatch"
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
