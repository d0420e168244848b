use anyhow::Result;
use tracing::debug;

use super::super::args::SearchCommand;
use super::{CommandResult, CommandSummary, SearchSummary, helper};
use crate::core::Session;

pub fn search(cmd: SearchCommand) -> Result<CommandResult> {
    let ctx = helper::load(&cmd.common)?;
    let text = helper::read_document(&cmd.file)?;

    let mut session = Session::from_store(&ctx.store, ctx.pattern);
    let mut outcome = session.search(&text);
    debug!(hits = outcome.hits().len(), "search finished");

    if let Some(filter) = &cmd.filter {
        outcome = outcome.filtered(filter);
    }

    let summary = SearchSummary {
        document: helper::display_path(&cmd.file),
        outcome,
        filter: cmd.filter,
    };

    Ok(CommandResult::new(
        CommandSummary::Search(summary),
        Some(ctx.outcome),
    ))
}
