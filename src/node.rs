//! Node model: declared metadata, host argument bag, and the evaluation trait.
//!
//! A node is a unit of computation the host graph editor instantiates and
//! invokes. The host reads a node's [`NodeDefinition`] to build its UI, then
//! calls [`Node::evaluate`] with a [`NodeArgs`] bag holding one value per
//! connected or configured input.

use crate::error::NodeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered node outputs, positionally matching [`NodeDefinition::outputs`]
pub type NodeOutputs = Vec<Value>;

/// Primitive value kinds understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueKind {
    String,
    Int,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "STRING",
            ValueKind::Int => "INT",
        }
    }
}

/// Input widget description, consumed by the host for UI generation only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum InputKind {
    String {
        default: String,
        multiline: bool,
    },
    Int {
        default: i64,
        min: i64,
        max: i64,
        step: i64,
    },
}

impl InputKind {
    pub fn value_kind(&self) -> ValueKind {
        match self {
            InputKind::String { .. } => ValueKind::String,
            InputKind::Int { .. } => ValueKind::Int,
        }
    }

    /// Declared default as a host value
    pub fn default_value(&self) -> Value {
        match self {
            InputKind::String { default, .. } => Value::String(default.clone()),
            InputKind::Int { default, .. } => Value::from(*default),
        }
    }
}

/// A named input declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    pub name: String,
    #[serde(flatten)]
    pub kind: InputKind,
}

impl InputSpec {
    pub fn string(name: &str, default: &str, multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            kind: InputKind::String {
                default: default.to_string(),
                multiline,
            },
        }
    }

    pub fn int(name: &str, default: i64, min: i64, max: i64, step: i64) -> Self {
        Self {
            name: name.to_string(),
            kind: InputKind::Int {
                default,
                min,
                max,
                step,
            },
        }
    }
}

/// A named output declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ValueKind,
}

impl OutputSpec {
    pub fn new(name: &str, kind: ValueKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

/// Inputs the front-end adds at runtime as `<prefix>1`, `<prefix>2`, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicInputs {
    pub prefix: String,
    #[serde(rename = "type")]
    pub kind: ValueKind,
}

/// Declared node metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub id: String,
    pub display_name: String,
    pub category: String,
    /// Entry-point name advertised to the host
    pub function: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub required: Vec<InputSpec>,
    #[serde(default)]
    pub optional: Vec<InputSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_inputs: Option<DynamicInputs>,
    #[serde(default)]
    pub outputs: Vec<OutputSpec>,
}

impl NodeDefinition {
    pub fn new(id: &str, display_name: &str, category: &str, function: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            category: category.to_string(),
            function: function.to_string(),
            description: String::new(),
            required: Vec::new(),
            optional: Vec::new(),
            dynamic_inputs: None,
            outputs: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_required(mut self, inputs: Vec<InputSpec>) -> Self {
        self.required = inputs;
        self
    }

    pub fn with_optional(mut self, inputs: Vec<InputSpec>) -> Self {
        self.optional = inputs;
        self
    }

    pub fn with_dynamic_inputs(mut self, prefix: &str, kind: ValueKind) -> Self {
        self.dynamic_inputs = Some(DynamicInputs {
            prefix: prefix.to_string(),
            kind,
        });
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<OutputSpec>) -> Self {
        self.outputs = outputs;
        self
    }

    /// Look up a declared input (required or optional) by name
    pub fn input(&self, name: &str) -> Option<&InputSpec> {
        self.required
            .iter()
            .chain(self.optional.iter())
            .find(|spec| spec.name == name)
    }

    pub fn output_names(&self) -> Vec<&str> {
        self.outputs.iter().map(|o| o.name.as_str()).collect()
    }
}

/// Host-supplied argument bag: input name to host value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeArgs {
    values: Map<String, Value>,
}

impl NodeArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder form of [`NodeArgs::insert`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn require(&self, node: &str, input: &str) -> Result<&Value, NodeError> {
        self.values.get(input).ok_or_else(|| NodeError::MissingInput {
            node: node.to_string(),
            input: input.to_string(),
        })
    }

    /// Fetch a required string input
    pub fn require_str(&self, node: &str, input: &str) -> Result<&str, NodeError> {
        match self.require(node, input)? {
            Value::String(s) => Ok(s.as_str()),
            other => Err(invalid(node, input, "a string", other)),
        }
    }

    /// Fetch a required integer input.
    ///
    /// Unsigned values above `i64::MAX` saturate; fractional numbers and
    /// non-numbers are rejected.
    pub fn require_int(&self, node: &str, input: &str) -> Result<i64, NodeError> {
        let value = self.require(node, input)?;
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(i)
                } else if n.as_u64().is_some() {
                    Ok(i64::MAX)
                } else {
                    Err(invalid(node, input, "an integer", value))
                }
            }
            other => Err(invalid(node, input, "an integer", other)),
        }
    }
}

impl From<Map<String, Value>> for NodeArgs {
    fn from(values: Map<String, Value>) -> Self {
        Self::from_map(values)
    }
}

fn invalid(node: &str, input: &str, expected: &str, got: &Value) -> NodeError {
    let kind = match got {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    NodeError::InvalidInput {
        node: node.to_string(),
        input: input.to_string(),
        reason: format!("expected {}, got {}", expected, kind),
    }
}

/// A node the host can evaluate.
///
/// Evaluation is synchronous and must not keep state between calls.
pub trait Node: Send + Sync {
    fn definition(&self) -> &NodeDefinition;

    fn evaluate(&self, args: &NodeArgs) -> Result<NodeOutputs, NodeError>;

    fn id(&self) -> &str {
        &self.definition().id
    }
}
