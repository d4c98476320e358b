use alloc::{string::String, vec, vec::Vec};

use rstest::rstest;

use crate::{Value, parse, parse_str};

fn obj(pairs: Vec<(&str, Value)>) -> Value {
    Value::Object(
        pairs
            .into_iter()
            .map(|(k, v)| (String::from(k), v))
            .collect(),
    )
}

#[test]
fn empty_object() {
    assert_eq!(parse_str("{}"), Ok(Value::Object(vec![])));
}

#[test]
fn empty_array() {
    assert_eq!(parse_str("[]"), Ok(Value::Array(vec![])));
}

#[rstest]
#[case("null", Value::Null)]
#[case("true", Value::Boolean(true))]
#[case("false", Value::Boolean(false))]
#[case("42", Value::Number(42.0))]
#[case("-0.5", Value::Number(-0.5))]
#[case(r#""hi""#, Value::String(String::from("hi")))]
fn top_level_scalars(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse_str(input), Ok(expected));
}

#[test]
fn object_pairs_keep_input_order() {
    let root = parse_str(r#"{"a":1,"b":[true,false,null]}"#).unwrap();
    assert_eq!(
        root,
        obj(vec![
            ("a", Value::Number(1.0)),
            (
                "b",
                Value::Array(vec![
                    Value::Boolean(true),
                    Value::Boolean(false),
                    Value::Null,
                ])
            ),
        ])
    );
}

#[test]
fn duplicate_keys_both_retained() {
    let root = parse_str(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(
        root,
        obj(vec![("a", Value::Number(1.0)), ("a", Value::Number(2.0))])
    );
    // Lookup is first match wins.
    assert_eq!(root.get("a"), Some(&Value::Number(1.0)));
}

#[test]
fn whitespace_between_every_token() {
    let root = parse(b" \n{ \t\"a\" : [ 1 , 2 ] ,\r\n\"b\" : { } } ").unwrap();
    assert_eq!(
        root,
        obj(vec![
            (
                "a",
                Value::Array(vec![Value::Number(1.0), Value::Number(2.0)])
            ),
            ("b", obj(vec![])),
        ])
    );
}

#[test]
fn deep_nesting() {
    let root = parse_str(r#"[[[{"k":[null]}]]]"#).unwrap();
    assert_eq!(
        root,
        Value::Array(vec![Value::Array(vec![Value::Array(vec![obj(vec![(
            "k",
            Value::Array(vec![Value::Null])
        )])])])])
    );
}

// The scanner is lenient; `f64` conversion decides what these mean.
#[rstest]
#[case("007", 7.0)]
#[case("1.", 1.0)]
#[case("-.5", -0.5)]
#[case("-0", 0.0)]
fn lenient_number_lexemes_convert(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(parse_str(input), Ok(Value::Number(expected)));
}

#[test]
fn string_values_carry_raw_escapes() {
    let root = parse_str(r#""line\nbreak""#).unwrap();
    assert_eq!(root.as_str(), Some(r"line\nbreak"));
}

#[test]
fn accessors() {
    let root = parse_str(r#"{"n":1,"s":"x","b":true,"z":null,"a":[]}"#).unwrap();
    assert!(root.is_object());
    assert_eq!(root.get("n").and_then(Value::as_f64), Some(1.0));
    assert_eq!(root.get("s").and_then(Value::as_str), Some("x"));
    assert_eq!(root.get("b").and_then(Value::as_bool), Some(true));
    assert!(root.get("z").is_some_and(Value::is_null));
    assert_eq!(root.get("a").and_then(Value::as_array), Some(&vec![]));
    assert_eq!(root.get("missing"), None);
}
