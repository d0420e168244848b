//! Offset to line/column conversion for document text.

use serde::Serialize;

/// Maximum number of characters shown for a line in a candidate list.
pub const MAX_LINE_DISPLAY_WIDTH: usize = 80;

/// Marker appended to line text cut at [`MAX_LINE_DISPLAY_WIDTH`].
pub const ELLIPSIS: &str = "\u{2026}"; // …

/// A location inside a document.
///
/// `offset` counts characters (Unicode scalar values) from the start of the
/// document. `line` and `column` are 0-based; `column` also counts characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// Line start table for a single document.
///
/// Built once per document so each lookup is a binary search instead of a
/// rescan from the beginning of the text.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offsets where each line starts. Line 0 starts at offset 0.
    line_starts: Vec<usize>,
    /// Character offsets of the same line starts.
    line_char_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        let mut line_char_starts = vec![0];
        for (chars, (i, c)) in text.char_indices().enumerate() {
            if c == '\n' {
                line_starts.push(i + 1);
                line_char_starts.push(chars + 1);
            }
        }
        Self {
            text,
            line_starts,
            line_char_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 0-based line containing `byte_offset`.
    pub fn line_of(&self, byte_offset: usize) -> usize {
        match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        }
    }

    /// Convert a byte offset (as reported by `regex`) to a [`Position`].
    ///
    /// Offsets past the end of the text are clamped to the end.
    pub fn position_at(&self, byte_offset: usize) -> Position {
        let byte_offset = self.floor_char_boundary(byte_offset.min(self.text.len()));
        let line = self.line_of(byte_offset);
        let line_start = self.line_starts[line];
        let column = self.text[line_start..byte_offset].chars().count();
        Position {
            offset: self.line_char_starts[line] + column,
            line,
            column,
        }
    }

    /// Raw text of a 0-based line, without its line terminator.
    pub fn line_text(&self, line: usize) -> &'a str {
        let Some(&start) = self.line_starts.get(line) else {
            return "";
        };
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        self.text[start..end].trim_end_matches('\r')
    }

    fn floor_char_boundary(&self, mut index: usize) -> usize {
        while !self.text.is_char_boundary(index) {
            index -= 1;
        }
        index
    }
}

/// Trim a line and cut it to [`MAX_LINE_DISPLAY_WIDTH`] characters, appending
/// [`ELLIPSIS`] when something was removed.
pub fn display_line(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.chars().count() <= MAX_LINE_DISPLAY_WIDTH {
        return trimmed.to_string();
    }
    let mut shown: String = trimmed.chars().take(MAX_LINE_DISPLAY_WIDTH).collect();
    shown.push_str(ELLIPSIS);
    shown
}
