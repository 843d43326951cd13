//! Node registry: merged registration tables handed to the host.
//!
//! Each pack contributes a [`NodeMappings`] (id to node, id to display label).
//! Packs merge in order and the result is read-only once built.

use crate::error::NodeError;
use crate::node::{Node, NodeArgs, NodeDefinition, NodeOutputs};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Directory of front-end assets advertised to the host
pub const WEB_DIRECTORY: &str = "js";

/// One pack's registration tables
#[derive(Clone, Default)]
pub struct NodeMappings {
    class_mappings: BTreeMap<String, Arc<dyn Node>>,
    display_name_mappings: BTreeMap<String, String>,
}

impl NodeMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node under its definition id
    pub fn add(&mut self, node: Arc<dyn Node>, display_name: &str) {
        let id = node.id().to_string();
        self.display_name_mappings
            .insert(id.clone(), display_name.to_string());
        self.class_mappings.insert(id, node);
    }

    pub fn node(&self, id: &str) -> Option<&Arc<dyn Node>> {
        self.class_mappings.get(id)
    }

    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.display_name_mappings.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.class_mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.class_mappings.is_empty()
    }

    /// Merge `other` into `self`; entries from `other` win on id collisions.
    /// Returns the ids that were replaced.
    pub fn merge(&mut self, other: NodeMappings) -> Vec<String> {
        let mut replaced = Vec::new();
        for (id, node) in other.class_mappings {
            if self.class_mappings.insert(id.clone(), node).is_some() {
                replaced.push(id);
            }
        }
        self.display_name_mappings
            .extend(other.display_name_mappings);
        replaced
    }
}

impl std::fmt::Debug for NodeMappings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeMappings")
            .field("nodes", &self.class_mappings.keys().collect::<Vec<_>>())
            .field("display_names", &self.display_name_mappings)
            .finish()
    }
}

/// Serializable registration surface for a host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub web_directory: String,
    pub display_names: BTreeMap<String, String>,
    pub nodes: Vec<NodeDefinition>,
}

/// Merged, read-only node registry
#[derive(Debug)]
pub struct NodeRegistry {
    mappings: NodeMappings,
}

impl NodeRegistry {
    /// Merge packs in order into a registry
    pub fn from_packs<I>(packs: I) -> Self
    where
        I: IntoIterator<Item = NodeMappings>,
    {
        let mut mappings = NodeMappings::new();
        for pack in packs {
            for id in mappings.merge(pack) {
                debug!(node_id = %id, "Node registration replaced by later pack");
            }
        }
        debug!(nodes = mappings.len(), "Node registry built");
        Self { mappings }
    }

    /// Registry of every pack shipped with this crate
    pub fn builtin() -> Self {
        Self::from_packs([crate::text::mappings()])
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Node>> {
        self.mappings.node(id)
    }

    pub fn get_or_error(&self, id: &str) -> Result<&Arc<dyn Node>, NodeError> {
        self.get(id)
            .ok_or_else(|| NodeError::UnknownNode(id.to_string()))
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        self.mappings.class_mappings.keys().map(String::as_str).collect()
    }

    /// Display label for `id`, falling back to the id itself
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.mappings.display_name(id).unwrap_or(id)
    }

    pub fn definitions(&self) -> Vec<&NodeDefinition> {
        self.mappings
            .class_mappings
            .values()
            .map(|node| node.definition())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn web_directory(&self) -> &'static str {
        WEB_DIRECTORY
    }

    /// Evaluate the node registered under `id`
    pub fn evaluate(&self, id: &str, args: &NodeArgs) -> Result<NodeOutputs, NodeError> {
        let node = self.get_or_error(id)?;
        debug!(node_id = %id, inputs = args.len(), "Evaluating node");
        node.evaluate(args)
    }

    pub fn manifest(&self) -> Manifest {
        Manifest {
            web_directory: WEB_DIRECTORY.to_string(),
            display_names: self.mappings.display_name_mappings.clone(),
            nodes: self.definitions().into_iter().cloned().collect(),
        }
    }
}

/// Process-wide built-in registry, built on first use
pub fn global() -> &'static NodeRegistry {
    static REGISTRY: OnceLock<NodeRegistry> = OnceLock::new();
    REGISTRY.get_or_init(NodeRegistry::builtin)
}
