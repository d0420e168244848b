//! Resolving, reading and flattening the dictionary file.
//!
//! Resolution order:
//! 1. configured path (absolute as-is, relative joined to the root)
//! 2. if unset or the file does not exist, ask through a [`PathPrompt`],
//!    re-asking until an existing file is given or the user declines
//! 3. a path obtained from the prompt is written back through [`Settings`]
//!
//! Nothing here returns `Err`. Every failure ends up in [`LoadOutcome`] next
//! to an empty dictionary, so callers can tell the user and carry on.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::dictionary::{Dictionary, flatten};

/// Path proposed by the prompt when nothing is configured.
pub const DEFAULT_SUGGESTED_PATH: &str = "./src/i18n/zh-CN.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No root directory is available to resolve the dictionary path against.")]
    NoWorkspaceRoot,

    #[error("No dictionary path was provided.")]
    PathUnresolved,

    #[error("Failed to read dictionary file {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse dictionary file {}: {source}", .path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to save dictionary path to configuration: {message}")]
    ConfigPersistFailure { message: String },
}

impl LoadError {
    /// Whether the load still produced usable entries despite this error.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LoadError::ConfigPersistFailure { .. })
    }
}

/// Where the configured dictionary path comes from and goes back to.
pub trait Settings {
    fn dictionary_path(&self) -> Option<String>;

    /// Path proposed to the user when asking.
    fn suggested_path(&self) -> String {
        DEFAULT_SUGGESTED_PATH.to_string()
    }

    fn save_dictionary_path(&mut self, path: &str) -> anyhow::Result<()>;
}

/// Interactive source of a dictionary path.
pub trait PathPrompt {
    /// Ask for a path. `None` or an empty answer means the user declined.
    fn ask(&mut self, suggested: &str) -> Option<String>;

    /// Tell the user the last answer did not point at a file.
    fn reject(&mut self, path: &Path);
}

/// A prompt that always declines. Used when no one can answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPrompt;

impl PathPrompt for NoPrompt {
    fn ask(&mut self, _suggested: &str) -> Option<String> {
        None
    }

    fn reject(&mut self, _path: &Path) {}
}

/// Flattened entries together with the file they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedDictionary {
    pub entries: Dictionary,
    /// Absolute (or root-joined) path of the source file.
    pub path: PathBuf,
}

/// Result of a load attempt.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub dictionary: LoadedDictionary,
    /// The failure that stopped the load, if any.
    pub error: Option<LoadError>,
    /// Problems that did not stop the load.
    pub warnings: Vec<LoadError>,
}

impl LoadOutcome {
    fn failed(path: PathBuf, error: LoadError) -> Self {
        Self {
            dictionary: LoadedDictionary {
                entries: Dictionary::new(),
                path,
            },
            error: Some(error),
            warnings: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Join `raw` to `root` unless it is already absolute.
pub fn resolve_path(root: &Path, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Resolve the dictionary path, then read, parse and flatten the file.
pub fn load_dictionary(
    root: Option<&Path>,
    settings: &mut dyn Settings,
    prompt: &mut dyn PathPrompt,
) -> LoadOutcome {
    let Some(root) = root else {
        warn!("no root directory, dictionary not loaded");
        return LoadOutcome::failed(PathBuf::new(), LoadError::NoWorkspaceRoot);
    };

    let mut saved = settings.dictionary_path().filter(|p| !p.is_empty());
    let mut resolved = saved.as_deref().map(|raw| resolve_path(root, raw));
    let mut prompted = false;

    while !resolved.as_deref().is_some_and(Path::is_file) {
        let suggested = saved.clone().unwrap_or_else(|| settings.suggested_path());
        let input = prompt.ask(&suggested).filter(|input| !input.trim().is_empty());
        let Some(input) = input else {
            debug!("dictionary path prompt declined");
            return match resolved {
                Some(path) => LoadOutcome::failed(path.clone(), missing_file(path)),
                None => LoadOutcome::failed(PathBuf::new(), LoadError::PathUnresolved),
            };
        };

        let input = input.trim().to_string();
        let candidate = resolve_path(root, &input);
        if !candidate.is_file() {
            prompt.reject(&candidate);
        }
        resolved = Some(candidate);
        saved = Some(input);
        prompted = true;
    }

    let (Some(path), Some(raw)) = (resolved, saved) else {
        return LoadOutcome::failed(PathBuf::new(), LoadError::PathUnresolved);
    };

    let mut warnings = Vec::new();
    if prompted && let Err(e) = settings.save_dictionary_path(&raw) {
        warn!(error = %e, "could not persist dictionary path");
        warnings.push(LoadError::ConfigPersistFailure {
            message: format!("{:#}", e),
        });
    }

    let mut outcome = read_dictionary(&path);
    outcome.warnings.extend(warnings);
    outcome
}

/// A configured or entered path that does not name a file.
fn missing_file(path: PathBuf) -> LoadError {
    LoadError::FileUnreadable {
        path,
        source: io::Error::new(io::ErrorKind::NotFound, "not an existing file"),
    }
}

/// Read and flatten a dictionary file at a known path.
pub fn read_dictionary(path: &Path) -> LoadOutcome {
    let path = path.to_path_buf();

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(source) => {
            return LoadOutcome::failed(path.clone(), LoadError::FileUnreadable { path, source });
        }
    };

    let tree: Value = match serde_json::from_str(&content) {
        Ok(tree) => tree,
        Err(source) => {
            return LoadOutcome::failed(path.clone(), LoadError::ParseFailure { path, source });
        }
    };

    let entries = flatten(&tree);
    info!(path = %path.display(), entries = entries.len(), "dictionary loaded");

    LoadOutcome {
        dictionary: LoadedDictionary { entries, path },
        error: None,
        warnings: Vec::new(),
    }
}
