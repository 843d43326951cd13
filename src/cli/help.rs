//! CLI command-name contract for logging.

use crate::cli::parse::{Commands, NodesCommands};

/// Command name string for log records (e.g. "nodes.list", "eval").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Nodes { command } => format!("nodes.{}", nodes_command_name(command)),
        Commands::Manifest => "manifest".to_string(),
        Commands::Config => "config".to_string(),
        Commands::Eval { .. } => "eval".to_string(),
        Commands::Concat { .. } => "concat".to_string(),
    }
}

pub fn nodes_command_name(command: &NodesCommands) -> &'static str {
    match command {
        NodesCommands::List { .. } => "list",
        NodesCommands::Show { .. } => "show",
    }
}
