//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `load`: Resolve and load the dictionary, report how many entries it has
//! - `search`: List dictionary keys used in a file, in order of first use
//! - `jump`: Locate the quoted occurrences of one key in a file
//! - `init`: Initialize keyseek configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Load(cmd)) => cmd.common.verbose,
            Some(Command::Search(cmd)) => cmd.common.verbose,
            Some(Command::Jump(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands that read the dictionary.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root that relative paths and the config file are resolved from
    /// (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Dictionary JSON file (overrides config file)
    #[arg(long, env = "KEYSEEK_DICTIONARY")]
    pub dictionary: Option<String>,

    /// Never ask for a dictionary path interactively
    #[arg(long)]
    pub no_prompt: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct LoadCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Source file to search
    pub file: PathBuf,

    /// Only show keys whose text or name contains this (case-insensitive)
    #[arg(long)]
    pub filter: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct JumpCommand {
    /// Source file to search
    pub file: PathBuf,

    /// Dictionary key to locate, e.g. `home.title`
    pub key: String,

    /// Choose the Nth occurrence (1-based) when the key occurs more than once
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub pick: Option<u32>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the dictionary and report how many entries it contains
    Load(LoadCommand),
    /// List the dictionary keys used in a file, in order of first use
    Search(SearchCommand),
    /// Find where a key is used in a file
    Jump(JumpCommand),
    /// Initialize a new .keyseekrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
