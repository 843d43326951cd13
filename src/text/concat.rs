//! Delimited concatenation with index selection.

use crate::text::slots::SlotSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of [`concatenate`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concatenated {
    /// Realized sequence joined by the delimiter
    pub combined: String,
    /// Realized element at the requested index, or empty when out of range
    pub indexed: String,
}

/// Join the realized slot sequence with `delimiter` and pick element `index`.
///
/// Never fails: an empty sequence yields an empty `combined`, and any index
/// outside `0..len` yields an empty `indexed`.
pub fn concatenate(delimiter: &str, index: i64, slots: &SlotSet) -> Concatenated {
    let realized = slots.realize();
    let combined = realized.join(delimiter);
    let indexed = select(&realized, index).unwrap_or_default().to_string();

    debug!(
        slots = slots.len(),
        realized = realized.len(),
        index,
        "Concatenated text slots"
    );

    Concatenated { combined, indexed }
}

fn select<'a>(realized: &[&'a str], index: i64) -> Option<&'a str> {
    let index = usize::try_from(index).ok()?;
    realized.get(index).copied()
}
