use gatecheck::{normalize_rule_name, parse_rule_expression};
use proptest::prelude::*;

/// Strategy for plausible rule names, including mixed case and dashes.
fn arb_rule_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_-]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // Arbitrary text never panics the expression parser.
    #[test]
    fn parser_tolerates_arbitrary_input(expr in ".{0,64}") {
        let _ = parse_rule_expression(&expr);
    }

    // Every parsed rule name is in normalized snake form already.
    #[test]
    fn parsed_names_are_normalized(expr in "[A-Za-z|:,_-]{0,32}") {
        for rule in parse_rule_expression(&expr) {
            prop_assert_eq!(normalize_rule_name(&rule.name), rule.name.clone());
            prop_assert!(!rule.name.is_empty());
        }
    }

    // Normalization is idempotent and always lowercase snake.
    #[test]
    fn normalization_is_idempotent(name in arb_rule_name()) {
        let once = normalize_rule_name(&name);
        prop_assert_eq!(normalize_rule_name(&once), once.clone());
        prop_assert!(!once.contains('-'));
        prop_assert_eq!(once.to_lowercase(), once);
    }

    // A single name:params segment keeps everything after the first colon
    // in the parameter blob.
    #[test]
    fn first_colon_splits_name_from_params(
        name in "[a-z][a-z_]{0,10}",
        blob in "[a-z0-9,:%]{1,20}",
    ) {
        let rules = parse_rule_expression(&format!("{name}:{blob}"));
        prop_assert_eq!(rules.len(), 1);
        prop_assert_eq!(&rules[0].name, &name);
        if name == "regex" {
            prop_assert_eq!(rules[0].params.clone(), vec![blob.clone()]);
        } else {
            prop_assert_eq!(rules[0].params.join(","), blob.clone());
        }
    }

    // Pipe-joined parameterless names come back in order.
    #[test]
    fn segments_survive_in_order(names in prop::collection::vec("[a-z][a-z_]{0,8}", 1..6)) {
        let rules = parse_rule_expression(&names.join("|"));
        let parsed: Vec<String> = rules.into_iter().map(|r| r.name).collect();
        prop_assert_eq!(parsed, names);
    }
}
