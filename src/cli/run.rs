use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, jump::jump, load::load, search::search},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` describing what the command found
/// - `Err` if the command fails (e.g., invalid config, unreadable source file)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Load(cmd)) => load(cmd),
        Some(Command::Search(cmd)) => search(cmd),
        Some(Command::Jump(cmd)) => jump(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
