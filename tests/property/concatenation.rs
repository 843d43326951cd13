//! Properties of delimited concatenation and index selection

use nodepack::text::{concatenate, SlotSet};
use proptest::prelude::*;

fn realized_of(values: &[Option<String>]) -> Vec<String> {
    values.iter().flatten().cloned().collect()
}

proptest! {
    /// Joining n values leaves exactly the values interleaved with n-1 delimiters
    #[test]
    fn combined_interleaves_delimiter(
        values in prop::collection::vec(".{0,8}", 1..12),
        delimiter in ".{0,4}",
    ) {
        let slots = SlotSet::from_values(values.iter().map(|v| Some(v.as_str())));
        let out = concatenate(&delimiter, 0, &slots);

        let mut expected = String::new();
        for (i, v) in values.iter().enumerate() {
            if i > 0 {
                expected.push_str(&delimiter);
            }
            expected.push_str(v);
        }
        prop_assert_eq!(out.combined, expected);
    }

    /// Null slots are skipped and every in-range index selects the matching realized value
    #[test]
    fn indexed_matches_realized_sequence(
        values in prop::collection::vec(prop::option::of("[a-z]{0,6}"), 0..12),
        index in -20i64..40,
    ) {
        let slots = SlotSet::from_values(values.clone());
        let realized = realized_of(&values);
        let out = concatenate(",", index, &slots);

        prop_assert_eq!(&out.combined, &realized.join(","));
        if index >= 0 && (index as usize) < realized.len() {
            prop_assert_eq!(&out.indexed, &realized[index as usize]);
        } else {
            prop_assert_eq!(out.indexed.as_str(), "");
        }
    }

    /// An empty realized sequence yields empty outputs for any delimiter and index
    #[test]
    fn empty_sequence_is_empty(
        nulls in 0usize..6,
        delimiter in ".{0,4}",
        index in any::<i64>(),
    ) {
        let slots = SlotSet::from_values(vec![None::<String>; nulls]);
        let out = concatenate(&delimiter, index, &slots);
        prop_assert_eq!(out.combined.as_str(), "");
        prop_assert_eq!(out.indexed.as_str(), "");
    }

    /// Slots after the first missing slot number are never collected
    #[test]
    fn gap_truncates(
        before in prop::collection::vec("[a-z]{1,4}", 0..6),
        after in prop::collection::vec("[A-Z]{1,4}", 1..6),
        gap in 1usize..4,
    ) {
        let mut slots = SlotSet::new();
        for (i, v) in before.iter().enumerate() {
            slots.insert(i + 1, Some(v.clone()));
        }
        let resume = before.len() + 1 + gap;
        for (i, v) in after.iter().enumerate() {
            slots.insert(resume + i, Some(v.clone()));
        }

        let out = concatenate("|", 0, &slots);
        prop_assert_eq!(out.combined, before.join("|"));
    }

    /// Evaluation is a pure function of its inputs
    #[test]
    fn repeated_evaluation_is_identical(
        values in prop::collection::vec(prop::option::of(".{0,6}"), 0..8),
        delimiter in ".{0,3}",
        index in -5i64..10,
    ) {
        let slots = SlotSet::from_values(values);
        prop_assert_eq!(
            concatenate(&delimiter, index, &slots),
            concatenate(&delimiter, index, &slots)
        );
    }
}
