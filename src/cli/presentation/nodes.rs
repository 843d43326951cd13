//! Node presentation: list, show, manifest.

use crate::error::NodeError;
use crate::node::{InputKind, InputSpec, NodeDefinition};
use crate::registry::{Manifest, NodeRegistry};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde_json::json;

pub fn format_node_list_text(registry: &NodeRegistry) -> String {
    if registry.is_empty() {
        return "No nodes registered.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Display Name", "Category", "Outputs"]);
    for definition in registry.definitions() {
        table.add_row(vec![
            definition.id.clone(),
            registry.display_name(&definition.id).to_string(),
            definition.category.clone(),
            definition.output_names().join(", "),
        ]);
    }
    format!("{}\n\nTotal: {} node(s)", table, registry.len())
}

pub fn format_node_list_json(registry: &NodeRegistry) -> Result<String, NodeError> {
    let nodes: Vec<_> = registry
        .definitions()
        .into_iter()
        .map(|definition| {
            json!({
                "id": definition.id,
                "display_name": registry.display_name(&definition.id),
                "category": definition.category,
            })
        })
        .collect();
    let out = json!({ "nodes": nodes, "total": registry.len() });
    Ok(serde_json::to_string_pretty(&out)?)
}

pub fn format_definition_text(definition: &NodeDefinition) -> String {
    let mut output = format!("Node: {}\n", definition.id);
    output.push_str(&format!("Display name: {}\n", definition.display_name));
    output.push_str(&format!("Category: {}\n", definition.category));
    output.push_str(&format!("Function: {}\n", definition.function));
    if !definition.description.is_empty() {
        output.push_str(&format!("\n{}\n", definition.description));
    }

    push_inputs(&mut output, "Required inputs", &definition.required);
    push_inputs(&mut output, "Optional inputs", &definition.optional);

    if let Some(dynamic) = &definition.dynamic_inputs {
        output.push_str(&format!(
            "\nDynamic inputs: {}1, {}2, ... ({})\n",
            dynamic.prefix,
            dynamic.prefix,
            dynamic.kind.as_str()
        ));
    }

    output.push_str("\nOutputs:\n");
    for (i, spec) in definition.outputs.iter().enumerate() {
        output.push_str(&format!("  {}. {:<16} {}\n", i, spec.name, spec.kind.as_str()));
    }
    output.trim_end().to_string()
}

fn push_inputs(output: &mut String, title: &str, inputs: &[InputSpec]) {
    if inputs.is_empty() {
        return;
    }
    output.push_str(&format!("\n{}:\n", title));
    for spec in inputs {
        let detail = match &spec.kind {
            InputKind::String { default, multiline } => {
                let mut d = format!("default={:?}", default);
                if *multiline {
                    d.push_str(" multiline");
                }
                d
            }
            InputKind::Int {
                default,
                min,
                max,
                step,
            } => format!("default={} range=[{}, {}] step={}", default, min, max, step),
        };
        output.push_str(&format!(
            "  {:<16} {:<7} {}\n",
            spec.name,
            spec.kind.value_kind().as_str(),
            detail
        ));
    }
}

pub fn format_definition_json(definition: &NodeDefinition) -> Result<String, NodeError> {
    Ok(serde_json::to_string_pretty(definition)?)
}

pub fn format_manifest(manifest: &Manifest) -> Result<String, NodeError> {
    Ok(serde_json::to_string_pretty(manifest)?)
}
