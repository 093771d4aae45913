use serin::{Delimiter, EncodeOptions, Value};

fn encode_json(input: &str, options: &EncodeOptions) -> String {
    let value = serin::json::from_str(input).expect("test fixture is valid JSON");
    serin::encode(&value, options)
}

#[test]
fn encode_flat_object() {
    let out = encode_json(
        r#"{"id":123,"name":"Alice","active":true,"score":95.5}"#,
        &EncodeOptions::default(),
    );
    assert_eq!(out, "id: 123\nname: Alice\nactive: true\nscore: 95.5");
}

#[test]
fn encode_inline_primitive_array() {
    let out = encode_json(
        r#"{"tags":["programming","c++","serialization"]}"#,
        &EncodeOptions::default(),
    );
    assert_eq!(out, "tags[3]: programming,c++,serialization");
}

#[test]
fn encode_tabular_array() {
    let out = encode_json(
        r#"{"users":[{"id":1,"name":"Ali"},{"id":2,"name":"Sara"}]}"#,
        &EncodeOptions::default(),
    );
    assert_eq!(out, "users[2]{id,name}:\n  1,Ali\n  2,Sara");
}

#[test]
fn encode_nested_object() {
    let out = encode_json(
        r#"{"server":{"host":"localhost","port":8080},"debug":false}"#,
        &EncodeOptions::default(),
    );
    assert_eq!(out, "server:\n  host: localhost\n  port: 8080\ndebug: false");
}

#[test]
fn encode_mixed_array_blocks() {
    let out = encode_json(
        r#"{"items":[1,"two",{"a":1},[3]]}"#,
        &EncodeOptions::default(),
    );
    assert_eq!(out, "items[4]:\n  - 1\n  - two\n  - a: 1\n  - [1]: 3");
}

#[test]
fn encode_mixed_object_element_with_trailing_fields() {
    let out = encode_json(
        r#"{"items":[{"a":1,"b":{"c":2}},5]}"#,
        &EncodeOptions::default(),
    );
    assert_eq!(out, "items[2]:\n  - a: 1\n    b:\n      c: 2\n  - 5");
}

#[test]
fn encode_mixed_object_element_with_structured_first_field() {
    let out = encode_json(r#"{"items":[{"a":{"x":1},"b":2},7]}"#, &EncodeOptions::default());
    assert_eq!(out, "items[2]:\n  -\n    a:\n      x: 1\n    b: 2\n  - 7");
}

#[test]
fn encode_empty_collections() {
    assert_eq!(
        encode_json(r#"{"items":[]}"#, &EncodeOptions::default()),
        "items[0]{}:"
    );
    assert_eq!(encode_json(r#"{"meta":{}}"#, &EncodeOptions::default()), "meta:");
    assert_eq!(encode_json("{}", &EncodeOptions::default()), "");
    assert_eq!(encode_json("[]", &EncodeOptions::default()), "[0]{}:");
}

#[test]
fn encode_root_primitives() {
    let options = EncodeOptions::default();
    assert_eq!(serin::encode(&Value::Null, &options), "null");
    assert_eq!(serin::encode(&Value::from(42i64), &options), "42");
    assert_eq!(serin::encode(&Value::from("plain"), &options), "plain");
    assert_eq!(serin::encode(&Value::from("true"), &options), "\"true\"");
}

#[test]
fn encode_length_marker() {
    let options = EncodeOptions::new().with_length_marker(true);
    assert_eq!(
        encode_json(r#"{"tags":["a","b","c"]}"#, &options),
        "tags[#3]: a,b,c"
    );
    assert_eq!(encode_json(r#"{"items":[]}"#, &options), "items[#0]{}:");
}

#[test]
fn encode_pipe_delimiter_self_documents() {
    let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    assert_eq!(encode_json(r#"{"tags":["a","b"]}"#, &options), "tags[2|]: a|b");
    assert_eq!(
        encode_json(r#"{"users":[{"id":1,"name":"Ali"}]}"#, &options),
        "users[1|]{id|name}:\n  1|Ali"
    );
}

#[test]
fn encode_tab_delimiter_self_documents() {
    let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
    assert_eq!(
        encode_json(r#"{"tags":["a","b"]}"#, &options),
        "tags[2\t]: a\tb"
    );
}

#[test]
fn encode_custom_indent_width() {
    let options = EncodeOptions::new().with_indent(4);
    assert_eq!(
        encode_json(r#"{"a":{"b":{"c":1}}}"#, &options),
        "a:\n    b:\n        c: 1"
    );
}

#[test]
fn encode_quoting_rules() {
    let out = encode_json(
        r#"{"greeting":"Hello, World","word":"Hello","empty":"","looks_bool":"true","numeric":"30","dashy":"- x","colon":"a:b"}"#,
        &EncodeOptions::default(),
    );
    assert!(out.contains("greeting: \"Hello, World\""));
    assert!(out.contains("word: Hello"));
    assert!(out.contains("empty: \"\""));
    assert!(out.contains("looks_bool: \"true\""));
    assert!(out.contains("numeric: \"30\""));
    assert!(out.contains("dashy: \"- x\""));
    assert!(out.contains("colon: \"a:b\""));
}

#[test]
fn encode_escapes_control_characters() {
    let out = encode_json(r#"{"msg":"line1\nline2\ttabbed"}"#, &EncodeOptions::default());
    assert_eq!(out, "msg: \"line1\\nline2\\ttabbed\"");
    let out = encode_json(r#"{"msg":"bell\u0007"}"#, &EncodeOptions::default());
    assert_eq!(out, "msg: \"bell\\u0007\"");
}

#[test]
fn encode_quotes_keys_outside_identifier_charset() {
    let out = encode_json(r#"{"order count":3,"dotted.key":1}"#, &EncodeOptions::default());
    assert_eq!(out, "\"order count\": 3\ndotted.key: 1");
}

#[test]
fn encode_float_keeps_decimal_point() {
    let out = encode_json(r#"{"a":30.0,"b":2.50,"c":-0.5}"#, &EncodeOptions::default());
    assert_eq!(out, "a: 30.0\nb: 2.5\nc: -0.5");
}

#[test]
fn encode_no_trailing_newline() {
    let out = encode_json(r#"{"a":1,"b":2}"#, &EncodeOptions::default());
    assert!(!out.ends_with('\n'));
}
