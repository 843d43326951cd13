//! Evaluation output presentation, keyed by declared output names.

use crate::error::NodeError;
use crate::node::NodeDefinition;
use serde_json::{Map, Value};

fn named<'a>(definition: &'a NodeDefinition, outputs: &'a [Value]) -> Vec<(String, &'a Value)> {
    outputs
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let name = definition
                .outputs
                .get(i)
                .map(|spec| spec.name.clone())
                .unwrap_or_else(|| format!("output_{}", i));
            (name, value)
        })
        .collect()
}

/// One `name: value` line per output; strings are printed verbatim
pub fn format_outputs_text(definition: &NodeDefinition, outputs: &[Value]) -> String {
    named(definition, outputs)
        .into_iter()
        .map(|(name, value)| match value {
            Value::String(s) => format!("{}: {}", name, s),
            other => format!("{}: {}", name, other),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_outputs_json(
    definition: &NodeDefinition,
    outputs: &[Value],
) -> Result<String, NodeError> {
    let mut map = Map::new();
    for (name, value) in named(definition, outputs) {
        map.insert(name, value.clone());
    }
    Ok(serde_json::to_string_pretty(&Value::Object(map))?)
}
