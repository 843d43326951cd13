//! CLI presentation: text and json formatters per command family.

mod config;
mod nodes;
mod outputs;

pub use config::format_config;
pub use nodes::{
    format_definition_json, format_definition_text, format_manifest, format_node_list_json,
    format_node_list_text,
};
pub use outputs::{format_outputs_json, format_outputs_text};
