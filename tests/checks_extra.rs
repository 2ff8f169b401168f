use gatecheck::{FileUpload, Input, Validator};
use serde_json::{Value, json};

fn make(data: Value, rules: &[(&str, &str)]) -> Validator {
    Validator::from_json(data, rules.iter().copied()).expect("object input")
}

fn passes(data: Value, rules: &[(&str, &str)]) -> bool {
    make(data, rules).passes().expect("no config error")
}

fn file_validator(file: FileUpload, rules: &str) -> Validator {
    Validator::new(
        [("upload".to_string(), Input::File(file))],
        [("upload", rules)],
    )
}

// ─── Size family type selection ─────────────────────────────────────────────

#[test]
fn size_family_defaults_to_string_length() {
    assert!(!passes(json!({"name": "abc"}), &[("name", "min:5")]));
    assert!(passes(json!({"name": "abcde"}), &[("name", "min:5")]));
}

#[test]
fn numeric_tag_switches_between_to_the_numeric_value() {
    let rules = [("count", "numeric|between:1,10")];
    assert!(passes(json!({"count": 5}), &rules));
    assert!(!passes(json!({"count": 15}), &rules));

    let mut v = make(json!({"count": 15}), &rules);
    assert!(v.fails().unwrap());
    assert_eq!(
        v.messages().unwrap().first(Some("count")).as_deref(),
        Some("The count must be between 1 and 10."),
    );
}

#[test]
fn untagged_numbers_fall_back_to_their_string_length() {
    // Without a numeric tag, 15 sizes as the two-character string "15".
    assert!(passes(json!({"count": 15}), &[("count", "max:2")]));
}

#[test]
fn arrays_size_by_element_count_even_untagged() {
    assert!(passes(json!({"tags": ["a", "b", "c"]}), &[("tags", "size:3")]));
    assert!(!passes(json!({"tags": ["a"]}), &[("tags", "between:2,4")]));
}

#[test]
fn files_size_in_kilobytes() {
    let mut v = file_validator(FileUpload::new("big.bin", "/tmp/upl1", 3072), "max:2");
    assert!(v.fails().unwrap());
    assert_eq!(
        v.messages().unwrap().first(Some("upload")).as_deref(),
        Some("The upload may not be greater than 2 kilobytes."),
    );

    let mut v = file_validator(FileUpload::new("small.bin", "/tmp/upl2", 1024), "max:2");
    assert!(v.passes().unwrap());
}

// ─── Presence cross-field family ────────────────────────────────────────────

#[test]
fn required_with_triggers_on_any_present_parameter() {
    let rules = [("last", "required_with:first,middle")];
    assert!(!passes(json!({"first": "ann"}), &rules));
    assert!(passes(json!({}), &rules));
}

#[test]
fn required_with_all_needs_every_parameter_present() {
    let rules = [("last", "required_with_all:first,middle")];
    assert!(passes(json!({"first": "ann"}), &rules));
    assert!(!passes(json!({"first": "ann", "middle": "b"}), &rules));
}

#[test]
fn required_without_triggers_on_any_absent_parameter() {
    let rules = [("email", "required_without:phone")];
    assert!(!passes(json!({}), &rules));
    assert!(passes(json!({"phone": "555"}), &rules));
}

#[test]
fn required_without_all_triggers_only_when_all_absent() {
    let rules = [("email", "required_without_all:phone,fax")];
    assert!(!passes(json!({}), &rules));
    assert!(passes(json!({"fax": "555"}), &rules));
}

#[test]
fn same_and_different_compare_other_attributes() {
    assert!(passes(json!({"a": "x", "b": "x"}), &[("a", "same:b")]));
    assert!(!passes(json!({"a": "x", "b": "y"}), &[("a", "same:b")]));
    assert!(passes(json!({"a": "x", "b": "y"}), &[("a", "different:b")]));
    assert!(!passes(json!({"a": "x", "b": "x"}), &[("a", "different:b")]));
    // different requires the other attribute to exist at all.
    assert!(!passes(json!({"a": "x"}), &[("a", "different:b")]));
}

#[test]
fn accepted_takes_the_usual_affirmatives() {
    for value in [json!("yes"), json!("on"), json!("1"), json!("true"), json!(1), json!(true)] {
        assert!(passes(json!({"terms": value}), &[("terms", "accepted")]));
    }
    assert!(!passes(json!({"terms": "no"}), &[("terms", "accepted")]));
    assert!(!passes(json!({}), &[("terms", "accepted")]), "implicit");
}

#[test]
fn boolean_accepts_bools_and_binary_literals() {
    for value in [json!(true), json!(false), json!(0), json!(1), json!("0"), json!("1")] {
        assert!(passes(json!({"flag": value}), &[("flag", "boolean")]));
    }
    assert!(!passes(json!({"flag": "true"}), &[("flag", "boolean")]));
    assert!(!passes(json!({"flag": 2}), &[("flag", "boolean")]));
}

// ─── Shape family ───────────────────────────────────────────────────────────

#[test]
fn numeric_and_integer_checks() {
    assert!(passes(json!({"n": 1.5}), &[("n", "numeric")]));
    assert!(passes(json!({"n": "42"}), &[("n", "numeric")]));
    assert!(!passes(json!({"n": "4x"}), &[("n", "numeric")]));
    assert!(passes(json!({"n": 42}), &[("n", "integer")]));
    assert!(passes(json!({"n": "-7"}), &[("n", "integer")]));
    assert!(!passes(json!({"n": 1.5}), &[("n", "integer")]));
    assert!(!passes(json!({"n": "1.5"}), &[("n", "integer")]));
}

#[test]
fn digits_counts_exact_digit_strings() {
    assert!(passes(json!({"pin": "1234"}), &[("pin", "digits:4")]));
    assert!(passes(json!({"pin": 1234}), &[("pin", "digits:4")]));
    assert!(!passes(json!({"pin": "123"}), &[("pin", "digits:4")]));
    assert!(!passes(json!({"pin": "12a4"}), &[("pin", "digits:4")]));
    assert!(passes(json!({"pin": "12345"}), &[("pin", "digits_between:4,6")]));
    assert!(!passes(json!({"pin": "123"}), &[("pin", "digits_between:4,6")]));
}

// ─── Set family ─────────────────────────────────────────────────────────────

#[test]
fn in_and_not_in_match_stringified_values() {
    assert!(passes(json!({"size": "small"}), &[("size", "in:small,large")]));
    assert!(!passes(json!({"size": "medium"}), &[("size", "in:small,large")]));
    assert!(passes(json!({"n": 3}), &[("n", "in:1,2,3")]));
    assert!(passes(json!({"size": "medium"}), &[("size", "not_in:small,large")]));
    assert!(!passes(json!({"size": "small"}), &[("size", "not_in:small,large")]));
}

// ─── Format family ──────────────────────────────────────────────────────────

#[test]
fn alpha_family() {
    assert!(passes(json!({"s": "abc"}), &[("s", "alpha")]));
    assert!(!passes(json!({"s": "ab1"}), &[("s", "alpha")]));
    assert!(passes(json!({"s": "ab1"}), &[("s", "alpha_num")]));
    assert!(!passes(json!({"s": "ab-1"}), &[("s", "alpha_num")]));
    assert!(passes(json!({"s": "ab-1_c"}), &[("s", "alpha_dash")]));
    assert!(!passes(json!({"s": "ab c"}), &[("s", "alpha_dash")]));
}

#[test]
fn email_and_url_formats() {
    assert!(passes(json!({"e": "ann@example.com"}), &[("e", "email")]));
    assert!(!passes(json!({"e": "ann@localhost"}), &[("e", "email")]));
    assert!(!passes(json!({"e": "not-an-email"}), &[("e", "email")]));
    assert!(passes(json!({"u": "https://example.com/x"}), &[("u", "url")]));
    assert!(!passes(json!({"u": "example.com"}), &[("u", "url")]));
}

#[test]
fn ip_family() {
    assert!(passes(json!({"a": "192.168.0.1"}), &[("a", "ip")]));
    assert!(passes(json!({"a": "::1"}), &[("a", "ip")]));
    assert!(passes(json!({"a": "10.0.0.1"}), &[("a", "ipv4")]));
    assert!(!passes(json!({"a": "::1"}), &[("a", "ipv4")]));
    assert!(passes(json!({"a": "fe80::1"}), &[("a", "ipv6")]));
    assert!(!passes(json!({"a": "10.0.0.1"}), &[("a", "ipv6")]));
    // Short aliases.
    assert!(passes(json!({"a": "10.0.0.1"}), &[("a", "ip4")]));
    assert!(passes(json!({"a": "fe80::1"}), &[("a", "ip6")]));
    assert!(!passes(json!({"a": "999.0.0.1"}), &[("a", "ip")]));
}

#[test]
fn regex_strips_delimiters_and_honors_the_i_flag() {
    assert!(passes(json!({"s": "abc,def"}), &[("s", "regex:/^[a-z,]+$/")]));
    assert!(!passes(json!({"s": "abc1"}), &[("s", "regex:/^[a-z,]+$/")]));
    assert!(passes(json!({"s": "ABC"}), &[("s", "regex:/^[a-z]+$/i")]));
}

#[test]
fn invalid_regex_patterns_are_config_errors() {
    let mut v = make(json!({"s": "x"}), &[("s", "regex:/([/")]);
    assert!(v.passes().is_err());
}

// ─── File family ────────────────────────────────────────────────────────────

#[test]
fn image_checks_the_extension_allow_list() {
    let mut v = file_validator(FileUpload::new("photo.PNG", "/tmp/upl3", 10), "image");
    assert!(v.passes().unwrap());

    let mut v = file_validator(FileUpload::new("notes.txt", "/tmp/upl4", 10), "image");
    assert!(v.fails().unwrap());
}

#[test]
fn mimes_checks_against_declared_extensions() {
    let mut v = file_validator(FileUpload::new("cv.pdf", "/tmp/upl5", 10), "mimes:pdf,doc");
    assert!(v.passes().unwrap());

    let mut v = file_validator(FileUpload::new("cv.odt", "/tmp/upl6", 10), "mimes:pdf,doc");
    assert!(v.fails().unwrap());
}

#[test]
fn mimes_requires_a_valid_upload() {
    let mut failed = FileUpload::new("cv.pdf", "/tmp/upl7", 10);
    failed.error = true;
    let mut v = file_validator(failed, "mimes:pdf");
    assert!(v.fails().unwrap());

    let mut v = file_validator(FileUpload::new("cv.pdf", "", 0), "mimes:pdf");
    // Nothing uploaded: the rule is skipped (not present), so it passes.
    assert!(v.passes().unwrap());
}

#[test]
fn data_values_never_satisfy_file_rules() {
    assert!(!passes(json!({"upload": "photo.png"}), &[("upload", "image")]));
}

// ─── Date family ────────────────────────────────────────────────────────────

#[test]
fn date_accepts_common_layouts() {
    for value in ["2024-05-13", "2024-05-13 10:30:00", "2024-05-13T10:30:00Z", "13/05/2024"] {
        assert!(passes(json!({"d": value}), &[("d", "date")]), "{value}");
    }
    assert!(!passes(json!({"d": "not a date"}), &[("d", "date")]));
    assert!(!passes(json!({"d": 20240513}), &[("d", "date")]));
}

#[test]
fn date_format_matches_strftime_layouts() {
    assert!(passes(json!({"d": "2024/05/13"}), &[("d", "date_format:%Y/%m/%d")]));
    assert!(!passes(json!({"d": "2024-05-13"}), &[("d", "date_format:%Y/%m/%d")]));
    assert!(passes(json!({"t": "10:30"}), &[("t", "date_format:%H:%M")]));
}

#[test]
fn before_and_after_take_literal_dates() {
    assert!(passes(json!({"d": "2024-01-01"}), &[("d", "before:2024-02-01")]));
    assert!(!passes(json!({"d": "2024-03-01"}), &[("d", "before:2024-02-01")]));
    assert!(passes(json!({"d": "2024-03-01"}), &[("d", "after:2024-02-01")]));
}

#[test]
fn before_and_after_fall_back_to_attribute_operands() {
    let data = json!({"start": "2024-01-01", "end": "2024-02-01"});
    assert!(passes(data.clone(), &[("start", "before:end")]));
    assert!(passes(data.clone(), &[("end", "after:start")]));
    assert!(!passes(data, &[("end", "before:start")]));
}

#[test]
fn declared_date_format_governs_comparisons() {
    let data = json!({"start": "2024/01/01", "end": "2024/02/01"});
    let rules = [("start", "date_format:%Y/%m/%d|before:end")];
    assert!(passes(data.clone(), &rules));
    let rules = [("start", "date_format:%Y/%m/%d|after:end")];
    assert!(!passes(data, &rules));
}

#[test]
fn timezone_accepts_iana_zone_names() {
    assert!(passes(json!({"tz": "Europe/Madrid"}), &[("tz", "timezone")]));
    assert!(passes(json!({"tz": "UTC"}), &[("tz", "timezone")]));
    assert!(!passes(json!({"tz": "Mars/Olympus"}), &[("tz", "timezone")]));
}
