use gatecheck::MessageBag;
use proptest::prelude::*;

fn arb_entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z]{1,4}", ".{0,12}"), 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // Count equals the number of distinct (key, message) pairs inserted.
    #[test]
    fn count_matches_distinct_pairs(entries in arb_entries()) {
        let mut bag = MessageBag::new();
        let mut seen = std::collections::HashSet::new();
        for (key, message) in &entries {
            bag.add(key.clone(), message.clone());
            seen.insert((key.clone(), message.clone()));
        }
        prop_assert_eq!(bag.count(), seen.len());
        prop_assert_eq!(bag.any(), !seen.is_empty());
    }

    // Re-adding the whole bag to itself changes nothing.
    #[test]
    fn merge_is_idempotent(entries in arb_entries()) {
        let mut bag = MessageBag::new();
        for (key, message) in entries {
            bag.add(key, message);
        }
        let snapshot = bag.to_json();
        let copy = bag.clone();
        bag.merge(&copy);
        prop_assert_eq!(bag.to_json(), snapshot);
    }

    // first(key) is always the head of get(key), under any format.
    #[test]
    fn first_agrees_with_get(entries in arb_entries(), format in "[a-z :]{0,10}") {
        let mut bag = MessageBag::new();
        for (key, message) in &entries {
            bag.add(key.clone(), message.clone());
        }
        bag.set_format(format);
        for (key, _) in &entries {
            prop_assert_eq!(
                bag.first(Some(key.as_str())),
                bag.get(key).into_iter().next()
            );
        }
    }

    // Keys come back in first-insertion order.
    #[test]
    fn keys_preserve_insertion_order(entries in arb_entries()) {
        let mut bag = MessageBag::new();
        let mut expected: Vec<String> = Vec::new();
        for (key, message) in &entries {
            bag.add(key.clone(), message.clone());
            if !expected.contains(key) {
                expected.push(key.clone());
            }
        }
        let keys: Vec<String> = bag.keys().map(str::to_string).collect();
        prop_assert_eq!(keys, expected);
    }
}
