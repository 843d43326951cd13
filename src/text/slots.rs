//! Slot sets: positional text inputs keyed by slot number.
//!
//! Slots are numbered from 1. A slot key may exist with no value (the host's
//! null); such a slot still continues the contiguous walk but contributes
//! nothing to the realized sequence.

use crate::node::NodeArgs;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Highest slot number the contiguous walk will visit
pub const SLOT_CEILING: usize = 4096;

/// Key prefix the front-end uses for dynamic text inputs
pub const SLOT_PREFIX: &str = "text_";

/// Ordered mapping of slot number to optional text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSet {
    slots: BTreeMap<usize, Option<String>>,
}

impl SlotSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build contiguous slots 1..=n from a list of optional values
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let slots = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i + 1, v.map(Into::into)))
            .collect();
        Self { slots }
    }

    /// Collect every `text_<n>` key from a host argument bag.
    ///
    /// All slot keys are kept, including those past a gap; the gap rule is
    /// applied by [`SlotSet::realize`].
    pub fn from_args(args: &NodeArgs) -> Self {
        let mut set = Self::new();
        for (key, value) in args.iter() {
            if let Some(number) = parse_slot_key(key) {
                set.insert(number, text_of(value));
            }
        }
        set
    }

    pub fn insert(&mut self, number: usize, value: Option<String>) {
        self.slots.insert(number, value);
    }

    pub fn contains(&self, number: usize) -> bool {
        self.slots.contains_key(&number)
    }

    /// Number of slot keys present, realized or not
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Walk slot numbers 1, 2, 3, ... while the key exists and collect the
    /// present values in order. The first missing number ends the walk.
    pub fn realize(&self) -> Vec<&str> {
        let mut realized = Vec::new();
        let mut number = 1;
        while let Some(value) = self.slots.get(&number) {
            if let Some(text) = value {
                realized.push(text.as_str());
            }
            if number == SLOT_CEILING {
                if self.slots.contains_key(&(number + 1)) {
                    warn!(
                        ceiling = SLOT_CEILING,
                        "Slot ceiling reached; later slots are not collected"
                    );
                }
                break;
            }
            number += 1;
        }
        realized
    }
}

/// Parse `text_<n>` into `n`. Zero, zero-padded, and non-numeric suffixes are not slots.
pub fn parse_slot_key(key: &str) -> Option<usize> {
    let suffix = key.strip_prefix(SLOT_PREFIX)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match suffix.parse::<usize>() {
        Ok(n) if n > 0 && slot_key(n) == key => Some(n),
        _ => None,
    }
}

/// Slot key for slot number `n`
pub fn slot_key(number: usize) -> String {
    format!("{}{}", SLOT_PREFIX, number)
}

/// Textual representation of a host value; `None` for the null sentinel
pub fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}
