use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    core::{OccurrenceMatch, Position},
    outcome::SearchHit,
};

// ============================================================
// load_dictionary
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoadDictionaryParams {
    /// Project root used to find .keyseekrc.json and resolve relative paths
    pub root_path: String,
    /// Dictionary path overriding the configured one
    pub dictionary_path: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoadDictionaryResult {
    pub success: bool,
    /// Resolved dictionary file, empty when no path could be resolved
    pub path: String,
    pub entry_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub warnings: Vec<String>,
}

// ============================================================
// search
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Document to search, absolute or relative to the loaded root
    pub file_path: String,
    /// Keep only keys whose value or key contains this text (case-insensitive)
    pub filter: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// "used", or the reason nothing was found
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    pub key: String,
    pub value: String,
    pub location: LocationDto,
}

impl From<&SearchHit> for SearchItem {
    fn from(hit: &SearchHit) -> Self {
        Self {
            key: hit.key.clone(),
            value: hit.value.clone(),
            location: LocationDto::from(hit.position),
        }
    }
}

// ============================================================
// jump
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JumpParams {
    pub file_path: String,
    pub key: String,
    /// 1-based candidate to select when the key occurs more than once
    pub pick: Option<u32>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JumpResult {
    /// "single", "multiple", or the reason nothing was found
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub candidates: Vec<CandidateItem>,
    /// Position to jump to: the only match, or the picked candidate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<LocationDto>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateItem {
    pub location: LocationDto,
    /// Trimmed line text, truncated for display
    pub line_text: String,
}

impl From<&OccurrenceMatch> for CandidateItem {
    fn from(m: &OccurrenceMatch) -> Self {
        Self {
            location: LocationDto::from(m.position()),
            line_text: m.line_text.clone(),
        }
    }
}

/// 0-based position in the document, offset in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl From<Position> for LocationDto {
    fn from(p: Position) -> Self {
        Self {
            offset: p.offset,
            line: p.line,
            column: p.column,
        }
    }
}
