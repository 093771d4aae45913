use serin::{DecodeOptions, Delimiter, EncodeOptions, Error, Value};

fn strict() -> DecodeOptions {
    DecodeOptions::default()
}

fn lenient() -> DecodeOptions {
    DecodeOptions::new().with_strict(false)
}

fn json(input: &str) -> Value {
    serin::json::from_str(input).expect("test fixture is valid JSON")
}

#[test]
fn strict_inline_length_mismatch() {
    let err = serin::decode("nums[3]: 1,2", &strict()).unwrap_err();
    match err {
        Error::Mismatch {
            what,
            expected,
            actual,
            ..
        } => {
            assert!(what.contains("nums"), "diagnostic names the key: {what}");
            assert_eq!((expected, actual), (3, 2));
        }
        other => panic!("expected a mismatch error, got: {other}"),
    }
    assert_eq!(
        serin::decode("nums[3]: 1,2", &lenient()).unwrap(),
        json(r#"{"nums":[1,2]}"#)
    );
    assert!(serin::decode("nums[2]: 1,2,3", &strict()).is_err());
}

#[test]
fn strict_tabular_row_width_mismatch() {
    let text = "users[2]{id,name}:\n  1,Ali\n  2";
    let err = serin::decode(text, &strict()).unwrap_err();
    assert!(err.to_string().contains("row width"), "got: {err}");

    let value = serin::decode(text, &lenient()).unwrap();
    assert_eq!(
        value,
        json(r#"{"users":[{"id":1,"name":"Ali"},{"id":2,"name":null}]}"#)
    );
}

#[test]
fn lenient_tabular_drops_extra_cells() {
    let text = "users[1]{id,name}:\n  1,Ali,extra";
    assert!(serin::decode(text, &strict()).is_err());
    assert_eq!(
        serin::decode(text, &lenient()).unwrap(),
        json(r#"{"users":[{"id":1,"name":"Ali"}]}"#)
    );
}

#[test]
fn strict_tabular_row_count_mismatch() {
    let short = "users[2]{id,name}:\n  1,Ali";
    assert!(serin::decode(short, &strict()).is_err());
    assert_eq!(
        serin::decode(short, &lenient()).unwrap(),
        json(r#"{"users":[{"id":1,"name":"Ali"}]}"#)
    );

    let long = "users[1]{id,name}:\n  1,Ali\n  2,Sara";
    assert!(serin::decode(long, &strict()).is_err());
    assert_eq!(
        serin::decode(long, &lenient())
            .unwrap()
            .get("users")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(2)
    );
}

#[test]
fn strict_block_count_mismatch() {
    let text = "items[2]:\n  - 1";
    assert!(serin::decode(text, &strict()).is_err());
    assert_eq!(
        serin::decode(text, &lenient()).unwrap(),
        json(r#"{"items":[1]}"#)
    );
}

#[test]
fn strict_declared_elements_missing_entirely() {
    let err = serin::decode("items[2]:", &strict()).unwrap_err();
    match err {
        Error::Mismatch {
            expected, actual, ..
        } => assert_eq!((expected, actual), (2, 0)),
        other => panic!("expected a mismatch error, got: {other}"),
    }
    assert_eq!(
        serin::decode("items[2]:", &lenient()).unwrap(),
        json(r#"{"items":[]}"#)
    );
}

#[test]
fn strict_indentation_must_be_a_multiple() {
    let text = "a:\n   b: 1";
    let err = serin::decode(text, &strict()).unwrap_err();
    assert!(matches!(err, Error::Syntax { line: 2, .. }), "got: {err}");
    assert_eq!(
        serin::decode(text, &lenient()).unwrap(),
        json(r#"{"a":{"b":1}}"#)
    );
}

#[test]
fn strict_indent_jump_rejected() {
    let text = "a:\n    b: 1";
    assert!(serin::decode(text, &strict()).is_err());
    assert_eq!(
        serin::decode(text, &lenient()).unwrap(),
        json(r#"{"a":{"b":1}}"#)
    );
}

#[test]
fn strict_tab_indentation_rejected() {
    assert!(serin::decode("\ta: 1", &strict()).is_err());
    assert_eq!(
        serin::decode("\ta: 1", &lenient()).unwrap(),
        json(r#"{"a":1}"#)
    );
}

#[test]
fn unterminated_quote_is_fatal_in_both_modes() {
    for options in [strict(), lenient()] {
        let err = serin::decode("a: \"oops", &options).unwrap_err();
        assert!(matches!(err, Error::Syntax { .. }), "got: {err}");
    }
}

#[test]
fn strict_delimiter_cross_check() {
    let value = json(r#"{"tags":["a","b"]}"#);
    let encoded = serin::encode(&value, &EncodeOptions::new().with_delimiter(Delimiter::Pipe));
    assert_eq!(encoded, "tags[2|]: a|b");

    // configured comma disagrees with the self-documented pipe
    let err = serin::decode(&encoded, &strict()).unwrap_err();
    assert!(err.to_string().contains("delimiter"), "got: {err}");

    // lenient mode trusts the header's own declaration
    assert_eq!(serin::decode(&encoded, &lenient()).unwrap(), value);

    // matching configuration decodes in strict mode
    let options = DecodeOptions::new().with_delimiter(Delimiter::Pipe);
    assert_eq!(serin::decode(&encoded, &options).unwrap(), value);
}

#[test]
fn strict_duplicate_keys_rejected() {
    let text = "a: 1\na: 2";
    assert!(serin::decode(text, &strict()).is_err());
    assert_eq!(serin::decode(text, &lenient()).unwrap(), json(r#"{"a":2}"#));
}

#[test]
fn strict_duplicate_header_fields_rejected() {
    let err = serin::decode("t[1]{a,a}:\n  1,2", &strict()).unwrap_err();
    assert!(err.to_string().contains("duplicate field"), "got: {err}");
}

#[test]
fn strict_trailing_content_after_root() {
    assert!(serin::decode("42\nextra", &strict()).is_err());
    assert_eq!(serin::decode("42\nextra", &lenient()).unwrap(), json("42"));
}

#[test]
fn strict_text_after_tabular_header() {
    for options in [strict(), lenient()] {
        assert!(serin::decode("a[2]{x,y}: 1,2", &options).is_err());
    }
}

#[test]
fn malformed_bracket_key_is_lenient_only() {
    let text = "weird[stuff]: 1";
    assert!(serin::decode(text, &strict()).is_err());
    assert_eq!(
        serin::decode(text, &lenient()).unwrap(),
        json(r#"{"weird[stuff]":1}"#)
    );
}

#[test]
fn strict_nonzero_empty_tabular_header() {
    assert!(serin::decode("t[2]{}:", &strict()).is_err());
}

#[test]
fn strict_errors_report_line_numbers() {
    let text = "ok: 1\nrows[1]{a,b}:\n  1,2,3";
    match serin::decode(text, &strict()).unwrap_err() {
        Error::Mismatch { line, .. } => assert_eq!(line, 3),
        other => panic!("expected a mismatch error, got: {other}"),
    }
}
