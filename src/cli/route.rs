//! CLI route: single route table and run context. Dispatches to the registry and presentation.

use crate::cli::command_name;
use crate::cli::parse::{Commands, NodesCommands};
use crate::cli::presentation::{
    format_config, format_definition_json, format_definition_text, format_manifest,
    format_node_list_json, format_node_list_text, format_outputs_json, format_outputs_text,
};
use crate::config::{ConfigLoader, NodepackConfig};
use crate::error::NodeError;
use crate::node::{NodeArgs, NodeDefinition};
use crate::registry::{self, NodeRegistry};
use crate::text::slots::slot_key;
use crate::text::TEXT_CONCATENATOR_ID;
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: loaded configuration and the node registry.
pub struct RunContext {
    registry: &'static NodeRegistry,
    config: NodepackConfig,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, NodeError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::with_config(workspace_root, config))
    }

    pub fn with_config(workspace_root: PathBuf, config: NodepackConfig) -> Self {
        Self {
            registry: registry::global(),
            config,
            workspace_root,
        }
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, NodeError> {
        let started = Instant::now();
        let name = command_name(command);
        let result = self.execute_inner(command);
        info!(
            command = %name,
            workspace = %self.workspace_root.display(),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, NodeError> {
        match command {
            Commands::Nodes { command } => self.handle_nodes(command),
            Commands::Manifest => format_manifest(&self.registry.manifest()),
            Commands::Config => format_config(&self.config),
            Commands::Eval {
                node_id,
                args,
                args_json,
                format,
            } => self.handle_eval(node_id, args, args_json.as_deref(), format),
            Commands::Concat {
                delimiter,
                index,
                format,
                texts,
            } => self.handle_concat(delimiter.as_deref(), *index, texts, format),
        }
    }

    fn handle_nodes(&self, command: &NodesCommands) -> Result<String, NodeError> {
        match command {
            NodesCommands::List { format } => match format.as_str() {
                "json" => format_node_list_json(self.registry),
                _ => Ok(format_node_list_text(self.registry)),
            },
            NodesCommands::Show { node_id, format } => {
                let node = self.registry.get_or_error(node_id)?;
                match format.as_str() {
                    "json" => format_definition_json(node.definition()),
                    _ => Ok(format_definition_text(node.definition())),
                }
            }
        }
    }

    fn handle_eval(
        &self,
        node_id: &str,
        raw_args: &[String],
        args_json: Option<&str>,
        format: &str,
    ) -> Result<String, NodeError> {
        let node = self.registry.get_or_error(node_id)?;
        let definition = node.definition();

        let mut args = match args_json {
            Some(json) => parse_args_json(node_id, json)?,
            None => NodeArgs::new(),
        };
        for raw in raw_args {
            let (key, value) = parse_arg(node_id, raw)?;
            args.insert(key, value);
        }
        fill_required_defaults(definition, &mut args);

        let outputs = self.registry.evaluate(node_id, &args)?;
        present_outputs(definition, &outputs, format)
    }

    fn handle_concat(
        &self,
        delimiter: Option<&str>,
        index: Option<i64>,
        texts: &[String],
        format: &str,
    ) -> Result<String, NodeError> {
        let defaults = &self.config.text_concatenator;
        let mut args = NodeArgs::new()
            .with(
                "delimiter",
                delimiter.unwrap_or(defaults.delimiter.as_str()),
            )
            .with("index", index.unwrap_or(defaults.index));
        for (i, text) in texts.iter().enumerate() {
            args.insert(slot_key(i + 1), text.as_str());
        }

        let node = self.registry.get_or_error(TEXT_CONCATENATOR_ID)?;
        let outputs = self.registry.evaluate(TEXT_CONCATENATOR_ID, &args)?;
        present_outputs(node.definition(), &outputs, format)
    }
}

fn present_outputs(
    definition: &NodeDefinition,
    outputs: &[Value],
    format: &str,
) -> Result<String, NodeError> {
    match format {
        "json" => format_outputs_json(definition, outputs),
        _ => Ok(format_outputs_text(definition, outputs)),
    }
}

/// Parse a `KEY=VALUE` argument. VALUE is JSON when it parses as JSON, text otherwise.
pub fn parse_arg(node_id: &str, raw: &str) -> Result<(String, Value), NodeError> {
    let (key, raw_value) = raw.split_once('=').ok_or_else(|| NodeError::InvalidInput {
        node: node_id.to_string(),
        input: raw.to_string(),
        reason: "expected KEY=VALUE".to_string(),
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(NodeError::InvalidInput {
            node: node_id.to_string(),
            input: raw.to_string(),
            reason: "empty input name".to_string(),
        });
    }
    let value: Value =
        serde_json::from_str(raw_value).unwrap_or_else(|_| Value::String(raw_value.to_string()));
    Ok((key.to_string(), value))
}

fn parse_args_json(node_id: &str, json: &str) -> Result<NodeArgs, NodeError> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Object(map) => Ok(NodeArgs::from_map(map)),
        _ => Err(NodeError::InvalidInput {
            node: node_id.to_string(),
            input: "--args-json".to_string(),
            reason: "expected a JSON object".to_string(),
        }),
    }
}

/// Supply declared defaults for required inputs the caller left out
fn fill_required_defaults(definition: &NodeDefinition, args: &mut NodeArgs) {
    let mut filled = Map::new();
    for spec in &definition.required {
        if !args.contains_key(&spec.name) {
            filled.insert(spec.name.clone(), spec.kind.default_value());
        }
    }
    if !filled.is_empty() {
        debug!(
            node_id = %definition.id,
            inputs = ?filled.keys().collect::<Vec<_>>(),
            "Using declared defaults"
        );
    }
    for (name, value) in filled {
        args.insert(name, value);
    }
}
