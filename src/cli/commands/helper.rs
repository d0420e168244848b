use std::{
    env, fs,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::{args::CommonArgs, prompt::TerminalPrompt};
use crate::{
    config::{Config, FileSettings},
    core::{CallPattern, DictionaryStore, LoadOutcome, NoPrompt, PathPrompt, load_dictionary},
};

/// A dictionary load ready to be searched.
pub struct LoadedContext {
    pub outcome: LoadOutcome,
    pub store: DictionaryStore,
    pub pattern: CallPattern,
}

/// Project root from `--root` or the current directory. `None` when the
/// directory does not exist.
pub fn resolve_root(root: Option<&Path>) -> Option<PathBuf> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => env::current_dir().ok()?,
    };
    root.is_dir().then_some(root)
}

/// Load the dictionary the way every command does.
///
/// The path is asked for only when stdin is a terminal and `--no-prompt` is
/// absent. Piped input is never read as an answer.
pub fn load(common: &CommonArgs) -> Result<LoadedContext> {
    if common.no_prompt || !io::stdin().is_terminal() {
        debug!("dictionary path prompt disabled");
        load_with_prompt(common, &mut NoPrompt)
    } else {
        load_with_prompt(common, &mut TerminalPrompt::stdio())
    }
}

/// Configuration priority: CLI arguments > config file > defaults.
pub fn load_with_prompt(common: &CommonArgs, prompt: &mut dyn PathPrompt) -> Result<LoadedContext> {
    let root = resolve_root(common.root.as_deref());
    debug!(root = ?root, "resolved project root");

    let (outcome, pattern) = match root {
        Some(root) => {
            let mut settings =
                FileSettings::load(&root)?.with_override(common.dictionary.clone());
            if common.verbose && !settings.path().exists() {
                eprintln!(
                    "Note: no {} found, using defaults",
                    crate::config::CONFIG_FILE_NAME
                );
            }
            let pattern = settings.config.call_pattern();
            let outcome = load_dictionary(Some(&root), &mut settings, prompt);
            (outcome, pattern)
        }
        None => {
            let mut config = Config::default();
            let outcome = load_dictionary(None, &mut config, prompt);
            (outcome, config.call_pattern())
        }
    };

    let mut store = DictionaryStore::new();
    store.apply(&outcome);

    Ok(LoadedContext {
        outcome,
        store,
        pattern,
    })
}

pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// A path as the user wrote it, for messages.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
