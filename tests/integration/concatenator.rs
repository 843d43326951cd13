//! Integration tests for the text concatenator, through the public API and the registry

use nodepack::error::NodeError;
use nodepack::node::NodeArgs;
use nodepack::registry;
use nodepack::text::{concatenate, SlotSet, SLOT_CEILING};
use serde_json::{json, Value};

fn evaluate(args: &NodeArgs) -> Result<Vec<Value>, NodeError> {
    registry::global().evaluate("TextConcatenator", args)
}

#[test]
fn test_end_to_end_through_registry() {
    let args = NodeArgs::new()
        .with("delimiter", ", ")
        .with("index", 1)
        .with("text_1", "red")
        .with("text_2", "green")
        .with("text_3", "blue");
    assert_eq!(
        evaluate(&args).unwrap(),
        vec![json!("red, green, blue"), json!("green")]
    );
}

#[test]
fn test_gap_stops_collection() {
    let args = NodeArgs::new()
        .with("delimiter", ",")
        .with("index", 1)
        .with("text_1", "a")
        .with("text_3", "c");
    assert_eq!(evaluate(&args).unwrap(), vec![json!("a"), json!("")]);
}

#[test]
fn test_null_slot_does_not_stop_collection() {
    let args = NodeArgs::new()
        .with("delimiter", ",")
        .with("index", 0)
        .with("text_1", "a")
        .with("text_2", Value::Null)
        .with("text_3", "c");
    assert_eq!(evaluate(&args).unwrap(), vec![json!("a,c"), json!("a")]);
}

#[test]
fn test_missing_first_slot_yields_empty_outputs() {
    let args = NodeArgs::new()
        .with("delimiter", " / ")
        .with("index", 0)
        .with("text_2", "b")
        .with("text_3", "c");
    assert_eq!(evaluate(&args).unwrap(), vec![json!(""), json!("")]);
}

#[test]
fn test_non_string_slot_values_are_rendered() {
    let args = NodeArgs::new()
        .with("delimiter", " ")
        .with("index", 2)
        .with("text_1", 1)
        .with("text_2", 2.5)
        .with("text_3", false);
    assert_eq!(
        evaluate(&args).unwrap(),
        vec![json!("1 2.5 false"), json!("false")]
    );
}

#[test]
fn test_arguments_deserialized_from_host_json() {
    let args: NodeArgs = serde_json::from_str(
        r#"{"delimiter": "\n", "index": 999, "text_1": "line one", "text_2": "line two"}"#,
    )
    .unwrap();
    assert_eq!(
        evaluate(&args).unwrap(),
        vec![json!("line one\nline two"), json!("")]
    );
}

#[test]
fn test_type_mismatch_propagates() {
    let args = NodeArgs::new()
        .with("delimiter", 5)
        .with("index", 0)
        .with("text_1", "a");
    match evaluate(&args) {
        Err(NodeError::InvalidInput { node, input, .. }) => {
            assert_eq!(node, "TextConcatenator");
            assert_eq!(input, "delimiter");
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_large_slot_sets_respect_ceiling() {
    let values: Vec<Option<String>> = (0..SLOT_CEILING + 10).map(|_| Some("x".to_string())).collect();
    let out = concatenate("", 0, &SlotSet::from_values(values));
    assert_eq!(out.combined.len(), SLOT_CEILING);
    assert_eq!(out.indexed, "x");
}
