//! CLI domain: parse, route, help, output, and presentation only.
//! No node logic; the route table dispatches to the registry.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, NodesCommands};
pub use presentation::{
    format_config, format_definition_json, format_definition_text, format_manifest,
    format_node_list_json, format_node_list_text, format_outputs_json, format_outputs_text,
};
pub use route::{parse_arg, RunContext};
