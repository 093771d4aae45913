use serin::{DecodeOptions, EncodeOptions, Value};

#[test]
fn json_roundtrip_preserves_order() -> Result<(), Box<dyn std::error::Error>> {
    let text = r#"{"z":1,"a":[1,2],"m":{"y":null,"b":true}}"#;
    let value = serin::json::from_str(text)?;
    assert_eq!(serin::json::to_string(&value)?, text);
    Ok(())
}

#[test]
fn json_pretty_uses_requested_indent() -> Result<(), Box<dyn std::error::Error>> {
    let value = serin::json::from_str(r#"{"a":{"b":1}}"#)?;
    let pretty = serin::json::to_string_pretty(&value, 4)?;
    assert!(pretty.contains("\n    \"a\": {"));
    assert!(pretty.contains("\n        \"b\": 1"));
    // indent 0 falls back to the compact form
    assert_eq!(serin::json::to_string_pretty(&value, 0)?, r#"{"a":{"b":1}}"#);
    Ok(())
}

#[test]
fn json_to_toon_to_json_is_lossless() -> Result<(), Box<dyn std::error::Error>> {
    let text = r#"{"id":7,"tags":["a","b"],"rows":[{"x":1,"y":2},{"x":3,"y":4}],"meta":{"ok":true}}"#;
    let value = serin::json::from_str(text)?;
    let toon = serin::encode(&value, &EncodeOptions::default());
    let back = serin::decode(&toon, &DecodeOptions::default())?;
    let rendered: serde_json::Value = serde_json::from_str(&serin::json::to_string(&back)?)?;
    let original: serde_json::Value = serde_json::from_str(text)?;
    assert_eq!(rendered, original);
    Ok(())
}

#[test]
fn json_number_tags_survive() -> Result<(), Box<dyn std::error::Error>> {
    let value = serin::json::from_str(r#"{"i":30,"f":30.0}"#)?;
    assert_eq!(value.get("i").unwrap().as_i64(), Some(30));
    assert!(value.get("i").unwrap().as_f64().is_some());
    assert!(value.get("f").unwrap().as_i64().is_none());
    assert_eq!(serin::json::to_string(&value)?, r#"{"i":30,"f":30.0}"#);
    Ok(())
}

#[test]
fn json_file_io() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("doc.json");
    let value = serin::json::from_str(r#"{"a":1,"b":[true,null]}"#)?;
    serin::json::to_file(&value, &path, 2)?;
    let loaded = serin::json::from_file(&path)?;
    assert_eq!(loaded, value);
    Ok(())
}

#[test]
fn json_parse_errors_surface() {
    let err = serin::json::from_str("{not json").unwrap_err();
    assert!(matches!(err, serin::Error::Json(_)));
}

#[test]
fn invalid_json_numbers_are_rejected_not_mangled() {
    // serde_json owns number syntax; serin only sees the parsed result
    assert!(serin::json::from_str("[01]").is_err());
}

#[test]
fn deep_value_accessors() -> Result<(), Box<dyn std::error::Error>> {
    let value = serin::json::from_str(r#"{"a":{"b":[1,"x"]}}"#)?;
    let inner = value.get("a").and_then(|v| v.get("b")).unwrap();
    assert!(inner.is_array());
    assert_eq!(inner.as_array().unwrap()[1], Value::from("x"));
    Ok(())
}
