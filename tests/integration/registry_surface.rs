//! Integration tests for the registration surface handed to a host

use nodepack::node::{InputKind, ValueKind};
use nodepack::registry::{self, Manifest, NodeMappings, NodeRegistry};
use nodepack::text;

#[test]
fn test_manifest_round_trips_through_json() {
    let manifest = registry::global().manifest();
    let json = serde_json::to_string(&manifest).unwrap();
    let back: Manifest = serde_json::from_str(&json).unwrap();

    assert_eq!(back.web_directory, "js");
    assert_eq!(back.nodes.len(), 1);
    let def = &back.nodes[0];
    assert_eq!(def.id, "TextConcatenator");
    assert_eq!(def.function, "concatenate");
    assert_eq!(def.category, "text");
    assert_eq!(def.output_names(), vec!["combined_text", "indexed_text"]);
    assert_eq!(
        def.input("index").unwrap().kind,
        InputKind::Int {
            default: 0,
            min: 0,
            max: 999,
            step: 1
        }
    );
    assert_eq!(
        def.input("delimiter").unwrap().kind,
        InputKind::String {
            default: ", ".to_string(),
            multiline: true
        }
    );
    let dynamic = def.dynamic_inputs.as_ref().unwrap();
    assert_eq!(dynamic.prefix, "text_");
    assert_eq!(dynamic.kind, ValueKind::String);
}

#[test]
fn test_packs_merge_in_order() {
    let registry = NodeRegistry::from_packs([text::mappings(), NodeMappings::new(), text::mappings()]);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.display_name("TextConcatenator"), "Text Concatenator");
}

#[test]
fn test_global_registry_is_shared() {
    let first = registry::global();
    let second = registry::global();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.ids(), second.ids());
}
