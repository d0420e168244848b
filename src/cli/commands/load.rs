use anyhow::Result;

use super::super::args::LoadCommand;
use super::{CommandResult, CommandSummary, LoadSummary, helper};

pub fn load(cmd: LoadCommand) -> Result<CommandResult> {
    let ctx = helper::load(&cmd.common)?;

    let summary = LoadSummary {
        path: ctx.outcome.dictionary.path.clone(),
        entry_count: ctx.outcome.dictionary.entries.len(),
    };

    Ok(CommandResult::new(
        CommandSummary::Load(summary),
        Some(ctx.outcome),
    ))
}
