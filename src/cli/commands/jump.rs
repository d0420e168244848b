use anyhow::{Result, bail};

use super::super::args::JumpCommand;
use super::{CommandResult, CommandSummary, JumpSummary, helper};
use crate::{core::Session, outcome::JumpOutcome};

pub fn jump(cmd: JumpCommand) -> Result<CommandResult> {
    let ctx = helper::load(&cmd.common)?;
    let text = helper::read_document(&cmd.file)?;

    let mut session = Session::from_store(&ctx.store, ctx.pattern);
    // Same order as an editor: enumerate used keys, then locate the chosen one.
    session.search(&text);
    let outcome = session.jump(&text, &cmd.key);

    let selected = match (cmd.pick, &outcome) {
        (None, _) => None,
        (Some(pick), JumpOutcome::Single(m)) if pick == 1 => Some(m.position()),
        (Some(pick), JumpOutcome::Multiple(candidates)) => {
            // The list stays in the summary for printing; the pick is final.
            match candidates.clone().select(pick as usize - 1) {
                Some(position) => Some(position),
                None => bail!(
                    "--pick {} is out of range: \"{}\" occurs {} times",
                    pick,
                    cmd.key,
                    candidates.len()
                ),
            }
        }
        (Some(pick), JumpOutcome::Single(_)) => {
            bail!("--pick {} is out of range: \"{}\" occurs once", pick, cmd.key)
        }
        (Some(_), _) => None,
    };

    let summary = JumpSummary {
        document: helper::display_path(&cmd.file),
        key: cmd.key,
        outcome,
        selected,
    };

    Ok(CommandResult::new(
        CommandSummary::Jump(summary),
        Some(ctx.outcome),
    ))
}
