//! Text pack: the text concatenator node and its registration table.

pub mod concat;
pub mod slots;

pub use concat::{concatenate, Concatenated};
pub use slots::{SlotSet, SLOT_CEILING, SLOT_PREFIX};

use crate::error::NodeError;
use crate::node::{InputSpec, Node, NodeArgs, NodeDefinition, NodeOutputs, OutputSpec, ValueKind};
use crate::registry::NodeMappings;
use serde_json::Value;
use std::sync::Arc;

pub const TEXT_CONCATENATOR_ID: &str = "TextConcatenator";
pub const DEFAULT_DELIMITER: &str = ", ";
pub const DEFAULT_INDEX: i64 = 0;

/// Joins a variable number of text inputs and exposes one of them by index
pub struct TextConcatenator {
    definition: NodeDefinition,
}

impl TextConcatenator {
    pub fn new() -> Self {
        let definition = NodeDefinition::new(
            TEXT_CONCATENATOR_ID,
            "Text Concatenator",
            "text",
            "concatenate",
        )
        .with_description(
            "Concatenates any number of text inputs with a delimiter and outputs the input at the given index.",
        )
        .with_required(vec![
            InputSpec::string("delimiter", DEFAULT_DELIMITER, true),
            InputSpec::int("index", DEFAULT_INDEX, 0, 999, 1),
        ])
        .with_dynamic_inputs(SLOT_PREFIX, ValueKind::String)
        .with_outputs(vec![
            OutputSpec::new("combined_text", ValueKind::String),
            OutputSpec::new("indexed_text", ValueKind::String),
        ]);
        Self { definition }
    }
}

impl Default for TextConcatenator {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for TextConcatenator {
    fn definition(&self) -> &NodeDefinition {
        &self.definition
    }

    fn evaluate(&self, args: &NodeArgs) -> Result<NodeOutputs, NodeError> {
        let delimiter = args.require_str(TEXT_CONCATENATOR_ID, "delimiter")?;
        let index = args.require_int(TEXT_CONCATENATOR_ID, "index")?;
        let slots = SlotSet::from_args(args);

        let Concatenated { combined, indexed } = concatenate(delimiter, index, &slots);
        Ok(vec![Value::String(combined), Value::String(indexed)])
    }
}

/// Registration table for the text pack
pub fn mappings() -> NodeMappings {
    let mut mappings = NodeMappings::new();
    let node = TextConcatenator::new();
    let display_name = node.definition().display_name.clone();
    mappings.add(Arc::new(node), &display_name);
    mappings
}
