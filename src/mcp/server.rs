use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

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
    config::{Config, FileSettings},
    core::{CallPattern, DictionaryStore, NoPrompt, Session, load_dictionary, resolve_path},
    outcome::{JumpOutcome, SearchOutcome},
};

use super::types::{
    CandidateItem, JumpParams, JumpResult, LoadDictionaryParams, LoadDictionaryResult,
    LocationDto, SearchItem, SearchParams, SearchResult,
};

/// State shared by all requests of one server.
#[derive(Debug, Default)]
struct ServerState {
    store: DictionaryStore,
    /// Root of the last load; relative document paths are joined to it.
    root: Option<PathBuf>,
    pattern: CallPattern,
    /// Keys reported by the last search of each document.
    enumerated: HashMap<PathBuf, HashSet<String>>,
}

impl ServerState {
    fn document_path(&self, raw: &str) -> PathBuf {
        match &self.root {
            Some(root) => resolve_path(root, raw),
            None => PathBuf::from(raw),
        }
    }
}

#[derive(Clone)]
pub struct KeyseekMcpServer {
    state: Arc<Mutex<ServerState>>,
    tool_router: ToolRouter<Self>,
}

impl Default for KeyseekMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl KeyseekMcpServer {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ServerState::default())),
            tool_router: Self::tool_router(),
        }
    }

    /// Load the translation dictionary of a project
    #[tool(
        description = "Load and flatten the JSON translation dictionary of a project. Uses dictionaryPath from .keyseekrc.json unless overridden. Must be called before search and jump."
    )]
    pub async fn load_dictionary(
        &self,
        params: Parameters<LoadDictionaryParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = PathBuf::from(&params.0.root_path);

        let (outcome, pattern, root) = if root.is_dir() {
            let mut settings = FileSettings::load(&root)
                .map_err(|e| {
                    McpError::internal_error(format!("Failed to load config: {:#}", e), None)
                })?
                .with_override(params.0.dictionary_path.clone());
            let pattern = settings.config.call_pattern();
            let outcome = load_dictionary(Some(&root), &mut settings, &mut NoPrompt);
            (outcome, pattern, Some(root))
        } else {
            let mut config = Config {
                dictionary_path: params.0.dictionary_path.clone(),
                ..Config::default()
            };
            let pattern = config.call_pattern();
            let outcome = load_dictionary(None, &mut config, &mut NoPrompt);
            (outcome, pattern, None)
        };

        {
            let mut state = self.lock()?;
            state.store.apply(&outcome);
            state.root = root;
            state.pattern = pattern;
            state.enumerated.clear();
        }

        let result = LoadDictionaryResult {
            success: outcome.is_success(),
            path: outcome.dictionary.path.to_string_lossy().to_string(),
            entry_count: outcome.dictionary.entries.len(),
            error: outcome.error.as_ref().map(ToString::to_string),
            warnings: outcome.warnings.iter().map(ToString::to_string).collect(),
        };
        to_tool_result(&result)
    }

    /// List the dictionary keys used in a document
    #[tool(
        description = "List the dictionary keys called in a document, in order of first use, with their display values and positions. Optional filter matches value or key."
    )]
    pub async fn search(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut state = self.lock()?;
        let path = state.document_path(&params.0.file_path);
        let text = read_document(&path)?;

        let mut session = Session::from_store(&state.store, state.pattern.clone());
        let mut outcome = session.search(&text);
        state
            .enumerated
            .insert(path, session.enumerated().map(str::to_string).collect());

        if let Some(filter) = &params.0.filter {
            outcome = outcome.filtered(filter);
        }

        let result = match &outcome {
            SearchOutcome::Used(hits) => SearchResult {
                outcome: "used".to_string(),
                message: None,
                items: hits.iter().map(SearchItem::from).collect(),
            },
            other => {
                let notice = other.notice(&params.0.file_path);
                SearchResult {
                    outcome: notice.as_ref().map_or("none", |n| n.code()).to_string(),
                    message: notice.map(|n| n.to_string()),
                    items: Vec::new(),
                }
            }
        };
        to_tool_result(&result)
    }

    /// Find the quoted occurrences of a key in a document
    #[tool(
        description = "Find where a dictionary key is quoted in a document. Returns the position directly when there is one occurrence, otherwise a candidate list; pass pick (1-based) to select one."
    )]
    pub async fn jump(&self, params: Parameters<JumpParams>) -> Result<CallToolResult, McpError> {
        let state = self.lock()?;
        let path = state.document_path(&params.0.file_path);
        let text = read_document(&path)?;
        let key = &params.0.key;

        let enumerated = state.enumerated.get(&path).cloned().unwrap_or_default();
        let session =
            Session::from_store(&state.store, state.pattern.clone()).with_enumerated(enumerated);
        let outcome = session.jump(&text, key);
        debug!(key = %key, outcome = ?outcome, "jump");

        let pick = params.0.pick.map(|n| n as usize);
        let result = match outcome {
            JumpOutcome::Single(m) => {
                if pick.is_some_and(|n| n != 1) {
                    return Err(pick_out_of_range(pick, 1));
                }
                JumpResult {
                    outcome: "single".to_string(),
                    message: None,
                    selected: Some(LocationDto::from(m.position())),
                    candidates: vec![CandidateItem::from(&m)],
                }
            }
            JumpOutcome::Multiple(candidates) => {
                let items = candidates.iter().map(CandidateItem::from).collect();
                let count = candidates.len();
                let selected = match pick {
                    Some(n) => Some(
                        n.checked_sub(1)
                            .and_then(|i| candidates.select(i))
                            .ok_or_else(|| pick_out_of_range(pick, count))?,
                    ),
                    None => None,
                };
                JumpResult {
                    outcome: "multiple".to_string(),
                    message: None,
                    selected: selected.map(LocationDto::from),
                    candidates: items,
                }
            }
            other => {
                let notice = other.notice(key, &params.0.file_path);
                JumpResult {
                    outcome: notice.as_ref().map_or("none", |n| n.code()).to_string(),
                    message: notice.map(|n| n.to_string()),
                    candidates: Vec::new(),
                    selected: None,
                }
            }
        };
        to_tool_result(&result)
    }
}

impl KeyseekMcpServer {
    fn lock(&self) -> Result<MutexGuard<'_, ServerState>, McpError> {
        self.state
            .lock()
            .map_err(|_| McpError::internal_error("Server state is poisoned", None))
    }
}

fn read_document(path: &Path) -> Result<String, McpError> {
    fs::read_to_string(path).map_err(|e| {
        McpError::invalid_params(format!("Failed to read {}: {}", path.display(), e), None)
    })
}

fn pick_out_of_range(pick: Option<usize>, count: usize) -> McpError {
    McpError::invalid_params(
        format!(
            "pick {} is out of range, expected 1..={}",
            pick.unwrap_or(0),
            count
        ),
        None,
    )
}

fn to_tool_result<T: Serialize>(result: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(result).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for KeyseekMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Keyseek MCP finds which translation keys a document uses and where.\n\n\
                 Available tools:\n\
                 1. load_dictionary - Load the project's JSON dictionary (required first)\n\
                 2. search - List dictionary keys called in a document with their values\n\
                 3. jump - Locate the quoted occurrences of one key in a document\n\n\
                 Positions are 0-based lines and columns; offsets count characters.\n\
                 Call search before jump so a key that disappeared after an edit is\n\
                 reported as noTextualMatch instead of keyNotUsed."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = KeyseekMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
