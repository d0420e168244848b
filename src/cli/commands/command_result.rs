use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::{
    core::{LoadOutcome, Position},
    outcome::{JumpOutcome, SearchOutcome},
};

#[derive(Debug)]
pub enum CommandSummary {
    Load(LoadSummary),
    Search(SearchSummary),
    Jump(JumpSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct LoadSummary {
    pub path: PathBuf,
    pub entry_count: usize,
}

#[derive(Debug)]
pub struct SearchSummary {
    /// The document as the user named it.
    pub document: String,
    pub outcome: SearchOutcome,
    /// Set when `--filter` was given.
    pub filter: Option<String>,
}

#[derive(Debug)]
pub struct JumpSummary {
    pub document: String,
    pub key: String,
    pub outcome: JumpOutcome,
    /// Position confirmed with `--pick`.
    pub selected: Option<Position>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// Set when the file already existed and nothing was written.
    pub error: Option<String>,
}

/// Result of running keyseek commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// The dictionary load behind this command, for reporting its errors
    /// and warnings. `None` for commands that do not load one.
    pub load: Option<LoadOutcome>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, load: Option<LoadOutcome>) -> Self {
        Self { summary, load }
    }

    /// `Failure` whenever the command ends with nothing to offer.
    pub fn exit_status(&self) -> ExitStatus {
        let produced = match &self.summary {
            CommandSummary::Load(summary) => {
                self.load.as_ref().is_some_and(LoadOutcome::is_success) && summary.entry_count > 0
            }
            CommandSummary::Search(summary) => matches!(summary.outcome, SearchOutcome::Used(_)),
            CommandSummary::Jump(summary) => match summary.outcome {
                JumpOutcome::Single(_) | JumpOutcome::Multiple(_) => true,
                _ => false,
            },
            CommandSummary::Init(summary) => summary.error.is_none(),
        };

        if produced {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}
