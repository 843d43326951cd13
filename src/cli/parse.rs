//! CLI parse: clap types for nodepack. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// nodepack - text nodes for node-based image-generation editors
#[derive(Parser)]
#[command(name = "nodepack")]
#[command(about = "Inspect and evaluate the nodes this pack registers with a host editor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (for config/config.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Registered node commands (list, show)
    Nodes {
        #[command(subcommand)]
        command: NodesCommands,
    },
    /// Print the registration manifest a host consumes (JSON)
    Manifest,
    /// Print the effective configuration (TOML)
    Config,
    /// Evaluate a registered node with host-style arguments
    Eval {
        /// Node id (see `nodes list`)
        node_id: String,
        /// Input as KEY=VALUE; VALUE is parsed as JSON when valid, else taken as text
        #[arg(long = "arg", value_name = "KEY=VALUE")]
        args: Vec<String>,
        /// JSON object of inputs, applied before --arg entries
        #[arg(long)]
        args_json: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Concatenate texts with the text concatenator node
    Concat {
        /// Delimiter placed between texts (default from config)
        #[arg(long)]
        delimiter: Option<String>,
        /// Zero-based index of the text to output individually (default from config)
        #[arg(long, allow_negative_numbers = true)]
        index: Option<i64>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
        /// Texts, in slot order
        texts: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum NodesCommands {
    /// List registered nodes
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show a node's declared inputs and outputs
    Show {
        /// Node id
        node_id: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}
