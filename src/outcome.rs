//! Results of search and jump requests, and the messages shown for the
//! outcomes where nothing can be offered.
//!
//! Every "nothing" case has its own [`Notice`] so the user can tell an
//! unloaded dictionary from an empty one, and a key that is not used from a
//! key whose text no longer appears after an edit.

use std::{fmt, path::PathBuf};

use serde::Serialize;

use crate::core::{OccurrenceMatch, Position};

/// A dictionary key used in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub key: String,
    pub value: String,
    /// Start of the first call referencing the key.
    pub position: Position,
}

impl SearchHit {
    /// Case-insensitive containment on either the display value or the key.
    pub fn matches_filter(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.value.to_lowercase().contains(&query)
            || self.key.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Nothing has been loaded yet.
    NoDictionary,
    /// A dictionary file was loaded but produced no entries.
    EmptyDictionary { path: PathBuf },
    /// None of the dictionary keys is used in the document.
    NoUsage,
    /// Used keys in order of first use.
    Used(Vec<SearchHit>),
}

impl SearchOutcome {
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            SearchOutcome::Used(hits) => hits,
            _ => &[],
        }
    }

    /// Keep only hits matching `query`. An outcome left with no hits
    /// stays `Used` with an empty list; the filter hid them, the document
    /// still uses them.
    pub fn filtered(self, query: &str) -> Self {
        match self {
            SearchOutcome::Used(hits) => {
                SearchOutcome::Used(hits.into_iter().filter(|h| h.matches_filter(query)).collect())
            }
            other => other,
        }
    }

    pub fn notice(&self, document: &str) -> Option<Notice> {
        match self {
            SearchOutcome::NoDictionary => Some(Notice::NoDictionary),
            SearchOutcome::EmptyDictionary { path } => {
                Some(Notice::EmptyDictionary { path: path.clone() })
            }
            SearchOutcome::NoUsage => Some(Notice::NoUsage {
                document: document.to_string(),
            }),
            SearchOutcome::Used(_) => None,
        }
    }
}

/// Quoted occurrences of one key offered for disambiguation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    matches: Vec<OccurrenceMatch>,
}

impl Candidates {
    pub fn new(matches: Vec<OccurrenceMatch>) -> Self {
        Self { matches }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OccurrenceMatch> {
        self.matches.iter()
    }

    pub fn as_slice(&self) -> &[OccurrenceMatch] {
        &self.matches
    }

    /// Position of the highlighted candidate. Has no side effects, so it can
    /// be called for every highlight change and abandoned at any time.
    pub fn preview(&self, index: usize) -> Option<Position> {
        self.matches.get(index).map(OccurrenceMatch::position)
    }

    /// Confirm a candidate, ending the disambiguation.
    pub fn select(self, index: usize) -> Option<Position> {
        self.preview(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpOutcome {
    NoDictionary,
    EmptyDictionary { path: PathBuf },
    /// The key is neither called nor quoted anywhere in the document.
    KeyNotUsed,
    /// The key was reported as used earlier in this session but no quoted
    /// occurrence exists in the text now, e.g. after the document was edited.
    NotFound,
    Single(OccurrenceMatch),
    Multiple(Candidates),
}

impl JumpOutcome {
    /// The position to jump to without asking, if there is exactly one.
    pub fn direct(&self) -> Option<Position> {
        match self {
            JumpOutcome::Single(m) => Some(m.position()),
            _ => None,
        }
    }

    pub fn notice(&self, key: &str, document: &str) -> Option<Notice> {
        match self {
            JumpOutcome::NoDictionary => Some(Notice::NoDictionary),
            JumpOutcome::EmptyDictionary { path } => {
                Some(Notice::EmptyDictionary { path: path.clone() })
            }
            JumpOutcome::KeyNotUsed => Some(Notice::KeyNotUsed {
                key: key.to_string(),
                document: document.to_string(),
            }),
            JumpOutcome::NotFound => Some(Notice::NoTextualMatch {
                key: key.to_string(),
                document: document.to_string(),
            }),
            JumpOutcome::Single(_) | JumpOutcome::Multiple(_) => None,
        }
    }
}

/// A user-facing explanation of why there is nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NoDictionary,
    EmptyDictionary { path: PathBuf },
    NoUsage { document: String },
    KeyNotUsed { key: String, document: String },
    NoTextualMatch { key: String, document: String },
}

impl Notice {
    /// Stable identifier used in machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            Notice::NoDictionary => "noDictionary",
            Notice::EmptyDictionary { .. } => "emptyDictionary",
            Notice::NoUsage { .. } => "noUsage",
            Notice::KeyNotUsed { .. } => "keyNotUsed",
            Notice::NoTextualMatch { .. } => "noTextualMatch",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoDictionary => write!(
                f,
                "No dictionary loaded. Check the dictionary path in {}.",
                crate::config::CONFIG_FILE_NAME
            ),
            Notice::EmptyDictionary { path } => {
                write!(f, "Dictionary at {} contains no entries.", path.display())
            }
            Notice::NoUsage { document } => {
                write!(f, "No dictionary keys are used in {}.", document)
            }
            Notice::KeyNotUsed { key, document } => {
                write!(f, "Key \"{}\" is not used in {}.", key, document)
            }
            Notice::NoTextualMatch { key, document } => write!(
                f,
                "Key \"{}\" is used in {} but no quoted occurrence was found.",
                key, document
            ),
        }
    }
}
