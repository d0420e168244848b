use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use colored::Colorize;

use crate::core::PathPrompt;

/// Asks for the dictionary path on a line-based terminal.
///
/// An empty answer accepts the suggested path, end of input declines.
pub struct TerminalPrompt<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> PathPrompt for TerminalPrompt<R, W> {
    fn ask(&mut self, suggested: &str) -> Option<String> {
        let _ = write!(
            self.writer,
            "Dictionary JSON path (absolute, or relative to the project root) [{}]: ",
            suggested.cyan()
        );
        let _ = self.writer.flush();

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => {
                let _ = writeln!(self.writer);
                None
            }
            Ok(_) => {
                let answer = line.trim();
                if answer.is_empty() {
                    Some(suggested.to_string())
                } else {
                    Some(answer.to_string())
                }
            }
        }
    }

    fn reject(&mut self, path: &Path) {
        let _ = writeln!(
            self.writer,
            "{} {} does not exist or is not a file; enter another path",
            "warning:".bold().yellow(),
            path.display()
        );
    }
}
