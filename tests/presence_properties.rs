//! Property-based tests for the presence predicates

use std::collections::HashMap;

use presence::prelude::*;
use proptest::prelude::*;

fn nullish() -> impl Strategy<Value = Nullish<i32>> {
    prop_oneof![
        Just(Nullish::Undefined),
        Just(Nullish::Null),
        any::<i32>().prop_map(Nullish::Present),
    ]
}

/// A slot per key, or no entry at all.
fn record() -> impl Strategy<Value = HashMap<String, Nullish<i32>>> {
    prop::collection::hash_map("[a-d]", nullish(), 0..4)
}

proptest! {
    #[test]
    fn prop_is_present_is_defined_and_filled(value in nullish()) {
        prop_assert_eq!(is_present(&value), !value.is_undefined() && !value.is_null());
        prop_assert_eq!(is_present(&value), is_defined(&value) && is_filled(&value));
    }

    #[test]
    fn prop_is_defined_and_filled_single_checks(value in nullish()) {
        prop_assert_eq!(is_defined(&value), !value.is_undefined());
        prop_assert_eq!(is_filled(&value), !value.is_null());
    }

    #[test]
    fn prop_option_collapses(value in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(is_present(&value), value.is_some());
        prop_assert_eq!(is_defined(&value), value.is_some());
        prop_assert_eq!(is_filled(&value), value.is_some());
    }

    #[test]
    fn prop_filter_keeps_present_in_order(values in prop::collection::vec(nullish(), 0..20)) {
        let expected: Vec<i32> = values
            .iter()
            .filter_map(|v| match v {
                Nullish::Present(n) => Some(*n),
                _ => None,
            })
            .collect();
        let kept: Vec<i32> = values.into_iter().filter(is_present).filter_map(Nullish::present).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn prop_key_predicates_agree_with_slot(record in record(), key in "[a-d]") {
        let slot = record.get(&key);

        prop_assert_eq!(has_key(key.clone()).check(&record), slot.is_some());
        prop_assert_eq!(
            has_defined_key(key.clone()).check(&record),
            slot.is_some_and(|s| is_defined(s))
        );
        prop_assert_eq!(
            has_present_key(key.clone()).check(&record),
            slot.is_some_and(|s| is_present(s))
        );
    }

    #[test]
    fn prop_present_keys_is_conjunction(record in record(), keys in prop::collection::vec("[a-d]", 0..4)) {
        let expected = keys.iter().all(|k| has_present_key(k.clone()).check(&record));
        prop_assert_eq!(has_present_keys(keys).check(&record), expected);
    }

    #[test]
    fn prop_value_at_key_matches_present_slot(record in record(), key in "[a-d]", value in any::<i32>()) {
        let expected = record.get(&key) == Some(&Nullish::Present(value));
        prop_assert_eq!(has_value_at_key(key, value).check(&record), expected);
    }

    #[test]
    fn prop_predicates_are_idempotent(
        record in record(),
        key in "[a-d]",
        value in any::<i32>(),
        expected in nullish(),
        slot in nullish(),
    ) {
        let predicates = (
            has_key(key.clone()),
            has_defined_key(key.clone()),
            has_present_key(key.clone()),
            has_present_keys(vec![key.clone()]),
            has_value_at_key(key.clone(), value),
            has_nullish_value_at_key(key.clone(), expected),
        );
        prop_assert_eq!(predicates.0.check(&record), predicates.0.check(&record));
        prop_assert_eq!(predicates.1.check(&record), predicates.1.check(&record));
        prop_assert_eq!(predicates.2.check(&record), predicates.2.check(&record));
        prop_assert_eq!(predicates.3.check(&record), predicates.3.check(&record));
        prop_assert_eq!(predicates.4.check(&record), predicates.4.check(&record));
        prop_assert_eq!(predicates.5.check(&record), predicates.5.check(&record));

        prop_assert_eq!(present().check(&slot), present().check(&slot));
        prop_assert_eq!(defined().check(&slot), defined().check(&slot));
        prop_assert_eq!(filled().check(&slot), filled().check(&slot));
        prop_assert_eq!(is_present(&slot), is_present(&slot));
        prop_assert_eq!(is_defined(&slot), is_defined(&slot));
        prop_assert_eq!(is_filled(&slot), is_filled(&slot));
    }
}
