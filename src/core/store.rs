use std::sync::Arc;

use super::loader::{LoadOutcome, LoadedDictionary};

/// Owned cache of the last loaded dictionary.
///
/// Starts empty, is replaced wholesale on every load and is only read while
/// searching. Readers hold an `Arc` snapshot, so a reload never changes the
/// data under a search that already started; the newest load simply wins for
/// the next caller.
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    current: Option<Arc<LoadedDictionary>>,
}

impl DictionaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, dictionary: LoadedDictionary) -> Arc<LoadedDictionary> {
        let dictionary = Arc::new(dictionary);
        self.current = Some(Arc::clone(&dictionary));
        dictionary
    }

    /// Store the result of a load. A failed load leaves nothing loaded, so
    /// searches report a missing dictionary rather than an empty one.
    pub fn apply(&mut self, outcome: &LoadOutcome) -> Option<Arc<LoadedDictionary>> {
        if outcome.is_success() {
            Some(self.replace(outcome.dictionary.clone()))
        } else {
            self.clear();
            None
        }
    }

    pub fn snapshot(&self) -> Option<Arc<LoadedDictionary>> {
        self.current.clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
