//! Occurrence search of dictionary keys inside a document.
//!
//! Two strengths of matching are used:
//!
//! - **Call pattern** (`find_used_keys`): the key must appear as the quoted
//!   first argument of a translation function, e.g. `$t('home.title')`.
//!   Plain substring containment is not enough, otherwise a key `name`
//!   would be reported for a document that only mentions `username`.
//! - **Quoted literal** (`locate_occurrences`): any `'key'` or `"key"`,
//!   regardless of what surrounds it. Used once a key is known to matter.

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use super::{
    dictionary::Dictionary,
    position::{LineIndex, Position, display_line},
};

/// Characters with special meaning in a regex that may show up in keys.
const PATTERN_SPECIAL_CHARS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Translation functions recognised when no configuration says otherwise.
pub const DEFAULT_FUNCTIONS: &[&str] = &["$t", "t"];

/// Escape `text` so it matches literally when embedded in a regex.
pub fn escape_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if PATTERN_SPECIAL_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// The call-style reference that makes a key count as used.
///
/// Matches `<function>(` followed by the quoted key and then `)` or `,`,
/// so extra arguments like `$t('count', { n })` are accepted.
#[derive(Debug, Clone)]
pub struct CallPattern {
    /// Alternation of escaped function names, ready to embed.
    callee: String,
}

impl CallPattern {
    pub fn new<S: AsRef<str>>(functions: &[S]) -> Self {
        let alternatives: Vec<String> = functions
            .iter()
            .map(|f| f.as_ref())
            .filter(|f| !f.is_empty())
            .map(|f| {
                let starts_with_word = f.chars().next().is_some_and(is_word_char);
                if starts_with_word {
                    format!(r"\b{}", escape_pattern(f))
                } else {
                    escape_pattern(f)
                }
            })
            .collect();
        Self {
            callee: alternatives.join("|"),
        }
    }

    /// Build the regex matching any call with a quoted first argument.
    ///
    /// Group 1 holds a single-quoted argument, group 2 a double-quoted one.
    pub fn call_regex(&self) -> Option<Regex> {
        if self.callee.is_empty() {
            return None;
        }
        let source = format!(r#"(?:{})\(\s*(?:'([^']*)'|"([^"]*)")\s*[,)]"#, self.callee);
        match Regex::new(&source) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!(callee = %self.callee, error = %e, "translation functions cannot form a pattern");
                None
            }
        }
    }
}

impl Default for CallPattern {
    fn default() -> Self {
        Self::new(DEFAULT_FUNCTIONS)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A dictionary key referenced by the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsedKey {
    pub key: String,
    /// Where the first call referencing the key starts.
    pub first: Position,
}

/// Keys of `dictionary` used in `text` through `pattern`, ordered by the
/// offset of their first use. Unused keys are left out entirely.
///
/// The document is scanned once for calls, and each quoted argument is looked
/// up in the dictionary, so the cost does not grow with the dictionary size.
/// A key containing its own delimiting quote is never matched.
pub fn find_used_keys(text: &str, dictionary: &Dictionary, pattern: &CallPattern) -> Vec<UsedKey> {
    let Some(regex) = pattern.call_regex() else {
        return Vec::new();
    };
    let index = LineIndex::new(text);

    let mut first_use: HashMap<&str, usize> = HashMap::new();
    let mut start = 0;
    while let Some(caps) = regex.captures_at(text, start) {
        let Some(call) = caps.get(0) else { break };
        if let Some(argument) = caps.get(1).or_else(|| caps.get(2))
            && dictionary.contains_key(argument.as_str())
        {
            first_use.entry(argument.as_str()).or_insert(call.start());
        }
        // Step one character so calls nested in another call's arguments
        // are still seen.
        start = call.start()
            + text[call.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
    }

    let mut found: Vec<(usize, &str)> = first_use
        .into_iter()
        .map(|(key, byte_offset)| (byte_offset, key))
        .collect();
    found.sort();

    debug!(
        used = found.len(),
        total = dictionary.len(),
        "matched dictionary keys against document"
    );

    found
        .into_iter()
        .map(|(byte_offset, key)| UsedKey {
            key: key.to_string(),
            first: index.position_at(byte_offset),
        })
        .collect()
}

/// One quoted occurrence of a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceMatch {
    pub key: String,
    /// Byte offset of the opening quote.
    #[serde(skip)]
    pub byte_offset: usize,
    pub position: Position,
    /// Trimmed text of the containing line, cut for display.
    pub line_text: String,
}

impl OccurrenceMatch {
    /// Jump target of this occurrence. Pure, so it may be called for every
    /// highlighted candidate without rescanning the document.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// All quoted occurrences of a key in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Occurrences {
    /// The key does not appear in quotes anywhere.
    NotFound,
    /// Exactly one occurrence; jump straight to it.
    Single(OccurrenceMatch),
    /// Two or more occurrences in increasing offset order.
    Multiple(Vec<OccurrenceMatch>),
}

impl Occurrences {
    pub fn len(&self) -> usize {
        match self {
            Occurrences::NotFound => 0,
            Occurrences::Single(_) => 1,
            Occurrences::Multiple(matches) => matches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Occurrences::NotFound)
    }

    pub fn into_vec(self) -> Vec<OccurrenceMatch> {
        match self {
            Occurrences::NotFound => Vec::new(),
            Occurrences::Single(m) => vec![m],
            Occurrences::Multiple(matches) => matches,
        }
    }
}

/// Find every `'key'` or `"key"` in `text`.
pub fn locate_occurrences(text: &str, key: &str) -> Occurrences {
    let escaped = escape_pattern(key);
    let regex = match Regex::new(&format!(r#"'{0}'|"{0}""#, escaped)) {
        Ok(regex) => regex,
        Err(e) => {
            warn!(key, error = %e, "cannot search for key");
            return Occurrences::NotFound;
        }
    };

    let index = LineIndex::new(text);
    let mut matches: Vec<OccurrenceMatch> = regex
        .find_iter(text)
        .map(|m| {
            let position = index.position_at(m.start());
            OccurrenceMatch {
                key: key.to_string(),
                byte_offset: m.start(),
                position,
                line_text: display_line(index.line_text(position.line)),
            }
        })
        .collect();

    debug!(key, count = matches.len(), "located quoted occurrences");

    match matches.len() {
        0 => Occurrences::NotFound,
        1 => Occurrences::Single(matches.remove(0)),
        _ => Occurrences::Multiple(matches),
    }
}
