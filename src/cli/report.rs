//! Report formatting and printing utilities.
//!
//! Locations are printed as `path:line:col` with 1-based line and column so
//! terminals and editors can open them directly. Separate from core logic to
//! allow keyseek to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, InitSummary, JumpSummary, LoadSummary, SearchSummary,
};
use crate::core::{LoadError, LoadOutcome, Position};
use crate::outcome::{JumpOutcome, Notice, SearchOutcome};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    if let Some(load) = &result.load {
        print_load_diagnostics_to(load, verbose, &mut io::stderr().lock());
    }

    let stdout = &mut io::stdout().lock();
    match &result.summary {
        CommandSummary::Load(summary) => print_load_to(summary, result.load.as_ref(), stdout),
        CommandSummary::Search(summary) => print_search_to(summary, stdout),
        CommandSummary::Jump(summary) => print_jump_to(summary, stdout),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// `path:line:col`, 1-based.
pub fn format_location(document: &str, position: &Position) -> String {
    format!("{}:{}:{}", document, position.line + 1, position.column + 1)
}

/// Print errors and warnings from loading the dictionary.
pub fn print_load_diagnostics_to<W: Write>(outcome: &LoadOutcome, verbose: bool, writer: &mut W) {
    if let Some(error) = &outcome.error {
        let _ = writeln!(writer, "{} {}", "error:".bold().red(), error);
        if let Some(hint) = load_error_hint(error) {
            let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
        }
    }
    for warning in &outcome.warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
    if verbose && outcome.is_success() {
        let _ = writeln!(
            writer,
            "Loaded {} from {}",
            pluralize(outcome.dictionary.entries.len(), "entry", "entries"),
            outcome.dictionary.path.display()
        );
    }
}

fn load_error_hint(error: &LoadError) -> Option<&'static str> {
    match error {
        LoadError::NoWorkspaceRoot => Some("pass an existing directory with --root"),
        LoadError::PathUnresolved => {
            Some("set \"dictionaryPath\" in .keyseekrc.json or pass --dictionary <PATH>")
        }
        LoadError::ParseFailure { .. } => Some("the dictionary must be a JSON object"),
        LoadError::FileUnreadable { source, .. } if source.kind() == io::ErrorKind::NotFound => {
            Some("fix \"dictionaryPath\" in .keyseekrc.json or pass --dictionary <PATH>")
        }
        LoadError::FileUnreadable { .. } | LoadError::ConfigPersistFailure { .. } => None,
    }
}

pub fn print_notice_to<W: Write>(notice: &Notice, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.yellow(), notice.to_string().yellow());
}

pub fn print_load_to<W: Write>(summary: &LoadSummary, load: Option<&LoadOutcome>, writer: &mut W) {
    if !load.is_some_and(LoadOutcome::is_success) {
        return;
    }
    if summary.entry_count == 0 {
        print_notice_to(
            &Notice::EmptyDictionary {
                path: summary.path.clone(),
            },
            writer,
        );
        return;
    }
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Loaded {} from {}",
            pluralize(summary.entry_count, "entry", "entries"),
            summary.path.display()
        )
        .green()
    );
}

pub fn print_search_to<W: Write>(summary: &SearchSummary, writer: &mut W) {
    let hits = match &summary.outcome {
        SearchOutcome::Used(hits) => hits,
        other => {
            if let Some(notice) = other.notice(&summary.document) {
                print_notice_to(&notice, writer);
            }
            return;
        }
    };

    let locations: Vec<String> = hits
        .iter()
        .map(|hit| format_location(&summary.document, &hit.position))
        .collect();
    let location_width = max_width(locations.iter().map(String::as_str));
    let key_width = max_width(hits.iter().map(|hit| hit.key.as_str()));

    for (hit, location) in hits.iter().zip(&locations) {
        let _ = writeln!(
            writer,
            "{}  {}  {}",
            pad(location, location_width).blue(),
            pad(&hit.key, key_width).cyan(),
            hit.value
        );
    }

    let matching = match &summary.filter {
        Some(filter) => format!(" matching \"{}\"", filter),
        None => String::new(),
    };
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} used in {}{}",
            pluralize(hits.len(), "key", "keys"),
            summary.document,
            matching
        )
        .green()
    );
}

pub fn print_jump_to<W: Write>(summary: &JumpSummary, writer: &mut W) {
    if let Some(position) = &summary.selected {
        let _ = writeln!(writer, "{}", format_location(&summary.document, position));
        return;
    }

    match &summary.outcome {
        JumpOutcome::Single(m) => {
            let _ = writeln!(writer, "{}", format_location(&summary.document, &m.position()));
        }
        JumpOutcome::Multiple(candidates) => {
            let _ = writeln!(
                writer,
                "\"{}\" occurs {} times in {}:",
                summary.key.cyan(),
                candidates.len(),
                summary.document
            );

            let locations: Vec<String> = candidates
                .iter()
                .map(|m| format_location(&summary.document, &m.position()))
                .collect();
            let location_width = max_width(locations.iter().map(String::as_str));
            let number_width = candidates.len().to_string().len();

            for (i, (m, location)) in candidates.iter().zip(&locations).enumerate() {
                let _ = writeln!(
                    writer,
                    "  [{:>width$}] {}  {}",
                    i + 1,
                    pad(location, location_width).blue(),
                    m.line_text.dimmed(),
                    width = number_width
                );
            }
            let _ = writeln!(
                writer,
                "Run with {} to choose one.",
                "--pick <N>".cyan()
            );
        }
        other => {
            if let Some(notice) = other.notice(&summary.key, &summary.document) {
                print_notice_to(&notice, writer);
            }
        }
    }
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        Some(error) => eprintln!("Error: {}", error),
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        ),
    }
}

fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

fn max_width<'a>(items: impl Iterator<Item = &'a str>) -> usize {
    items.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Left-align by display width, so CJK text lines up.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}
