//! One search-then-jump interaction over a dictionary snapshot.
//!
//! ```text
//! Idle -> search() -> NoUsage | Used(hits)
//!      -> jump(key) -> KeyNotUsed | NotFound | Single | Multiple(candidates)
//!      -> candidates.preview(i)* -> candidates.select(i)
//! ```
//!
//! Each step ends the session when it yields nothing. A caller starts over
//! with a new search rather than retrying inside the session.

use std::{collections::HashSet, sync::Arc};

use tracing::debug;

use super::{
    loader::LoadedDictionary,
    locator::{CallPattern, Occurrences, find_used_keys, locate_occurrences},
    store::DictionaryStore,
};
use crate::outcome::{Candidates, JumpOutcome, SearchHit, SearchOutcome};

#[derive(Debug, Clone)]
pub struct Session {
    dictionary: Option<Arc<LoadedDictionary>>,
    pattern: CallPattern,
    /// Keys reported by the last `search`, used to tell a stale selection
    /// apart from a key that was never used.
    enumerated: HashSet<String>,
}

impl Session {
    pub fn new(dictionary: Option<Arc<LoadedDictionary>>, pattern: CallPattern) -> Self {
        Self {
            dictionary,
            pattern,
            enumerated: HashSet::new(),
        }
    }

    /// Start a session on the store's current snapshot.
    pub fn from_store(store: &DictionaryStore, pattern: CallPattern) -> Self {
        Self::new(store.snapshot(), pattern)
    }

    /// Restore keys enumerated by a search made earlier, e.g. in another
    /// request handled by the same server.
    pub fn with_enumerated<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enumerated = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn enumerated(&self) -> impl Iterator<Item = &str> {
        self.enumerated.iter().map(String::as_str)
    }

    /// Dictionary keys used in `text`, with their display values.
    pub fn search(&mut self, text: &str) -> SearchOutcome {
        let dictionary = match self.loaded() {
            Ok(dictionary) => dictionary,
            Err(outcome) => return outcome,
        };

        let used = find_used_keys(text, &dictionary.entries, &self.pattern);
        self.enumerated = used.iter().map(|u| u.key.clone()).collect();

        if used.is_empty() {
            return SearchOutcome::NoUsage;
        }

        let hits = used
            .into_iter()
            .filter_map(|u| {
                let value = dictionary.entries.get(&u.key)?.to_string();
                Some(SearchHit {
                    key: u.key,
                    value,
                    position: u.first,
                })
            })
            .collect();
        SearchOutcome::Used(hits)
    }

    /// Quoted occurrences of `key` in `text`.
    pub fn jump(&self, text: &str, key: &str) -> JumpOutcome {
        if let Err(outcome) = self.loaded() {
            return match outcome {
                SearchOutcome::EmptyDictionary { path } => JumpOutcome::EmptyDictionary { path },
                _ => JumpOutcome::NoDictionary,
            };
        }

        match locate_occurrences(text, key) {
            Occurrences::NotFound if self.enumerated.contains(key) => {
                debug!(key, "previously used key no longer found");
                JumpOutcome::NotFound
            }
            Occurrences::NotFound => JumpOutcome::KeyNotUsed,
            Occurrences::Single(m) => JumpOutcome::Single(m),
            Occurrences::Multiple(matches) => JumpOutcome::Multiple(Candidates::new(matches)),
        }
    }

    fn loaded(&self) -> Result<Arc<LoadedDictionary>, SearchOutcome> {
        match &self.dictionary {
            None => Err(SearchOutcome::NoDictionary),
            Some(d) if d.entries.is_empty() => Err(SearchOutcome::EmptyDictionary {
                path: d.path.clone(),
            }),
            Some(d) => Ok(Arc::clone(d)),
        }
    }
}
