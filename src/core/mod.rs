//! Text-analysis core.
//!
//! - `dictionary`: nested JSON → flat dotted keys, with linked-message aliases
//! - `loader`: dictionary path resolution and file loading
//! - `store`: owned cache of the loaded dictionary
//! - `locator`: call-pattern and quoted-literal search of keys in a document
//! - `position`: byte offset → character offset, line and column
//! - `session`: search then jump over one dictionary snapshot

pub mod dictionary;
pub mod loader;
pub mod locator;
pub mod position;
pub mod session;
pub mod store;

pub use dictionary::{ALIAS_MARKER, Dictionary, flatten};
pub use loader::{
    LoadError, LoadOutcome, LoadedDictionary, NoPrompt, PathPrompt, Settings, load_dictionary,
    read_dictionary, resolve_path,
};
pub use locator::{
    CallPattern, DEFAULT_FUNCTIONS, OccurrenceMatch, Occurrences, UsedKey, escape_pattern,
    find_used_keys, locate_occurrences,
};
pub use position::{LineIndex, Position};
pub use session::Session;
pub use store::DictionaryStore;
