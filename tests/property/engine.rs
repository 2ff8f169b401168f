use gatecheck::Validator;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

/// Strategy for flat string records over a small key alphabet.
fn arb_record() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-d]", ".{0,8}", 0..5).prop_map(|m| {
        m.into_iter().map(|(k, v)| (k, Value::String(v))).collect()
    })
}

/// A rule expression drawn from the built-in catalog.
fn arb_expression() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("required".to_string()),
        Just("filled".to_string()),
        Just("alpha".to_string()),
        Just("email".to_string()),
        Just("numeric".to_string()),
        Just("required|min:2".to_string()),
        Just("sometimes|max:4".to_string()),
        Just("in:x,y".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    // fails() is always the exact negation of passes().
    #[test]
    fn fails_negates_passes(
        data in arb_record(),
        rules in prop::collection::vec(("[a-d]", arb_expression()), 1..4),
    ) {
        let mut v = Validator::from_json(Value::Object(data), rules)
            .expect("object input");
        let passed = v.passes().expect("catalog rules never config-error");
        prop_assert_eq!(v.fails().unwrap(), !passed);
        // And a bag exists exactly when something failed.
        prop_assert_eq!(v.messages().unwrap().any(), !passed);
    }

    // Every message-bag key is a declared attribute.
    #[test]
    fn failures_only_name_declared_attributes(
        data in arb_record(),
        rules in prop::collection::vec(("[a-d]", arb_expression()), 1..4),
    ) {
        let declared: Vec<String> = rules.iter().map(|(k, _)| k.clone()).collect();
        let mut v = Validator::from_json(Value::Object(data), rules)
            .expect("object input");
        let _ = v.passes().unwrap();
        let messages = v.messages().unwrap();
        for key in messages.keys() {
            prop_assert!(declared.iter().any(|d| d == key), "stray key {key}");
        }
    }

    // Evaluation is deterministic: revalidation reproduces the verdict.
    #[test]
    fn revalidation_is_stable(
        data in arb_record(),
        rules in prop::collection::vec(("[a-d]", arb_expression()), 1..4),
    ) {
        let mut v = Validator::from_json(Value::Object(data), rules)
            .expect("object input");
        let first = v.passes().unwrap();
        let bag = v.messages().unwrap().to_json();
        v.revalidate();
        prop_assert_eq!(v.passes().unwrap(), first);
        prop_assert_eq!(v.messages().unwrap().to_json(), bag);
    }

    // An attribute that satisfies `required` never fails it, whatever else
    // is in the record.
    #[test]
    fn present_nonempty_values_satisfy_required(
        data in arb_record(),
        value in "[a-z0-9]{1,8}",
    ) {
        let mut data = data;
        data.insert("target".to_string(), json!(value));
        let mut v = Validator::from_json(
            Value::Object(data),
            [("target", "required")],
        )
        .expect("object input");
        prop_assert!(v.passes().unwrap());
    }
}
