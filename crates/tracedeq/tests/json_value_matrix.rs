//! `serde_json::Value` documents: objects are maps, arrays are slices, and
//! every value is a dynamically typed slot.

#![cfg(feature = "serde_json")]

use serde_json::json;
use tracedeq::{deep_equal, Operand, Scalar};

// ---------------------------------------------------------------------------
// Equal documents
// ---------------------------------------------------------------------------

#[test]
fn equal_documents() {
    let cases = [
        json!(null),
        json!(true),
        json!(0),
        json!(-3),
        json!(2.5),
        json!("text"),
        json!([]),
        json!({}),
        json!({"a": [1, {"b": null}], "c": "d"}),
    ];
    for value in &cases {
        let copy = value.clone();
        assert!(deep_equal(value, &copy).is_equal(), "{value}");
    }
}

#[test]
fn object_key_order_does_not_matter() {
    let (x, y) = (json!({"a": 1, "b": 2}), json!({"b": 2, "a": 1}));
    assert!(deep_equal(&x, &y).is_equal());
}

// ---------------------------------------------------------------------------
// Divergences
// ---------------------------------------------------------------------------

#[test]
fn scalar_member() {
    let (x, y) = (json!({"a": 1}), json!({"a": 2}));
    let outcome = deep_equal(&x, &y);
    assert_eq!(outcome.trace(), &["a"]);
    assert_eq!(outcome.x(), Some(&Operand::Scalar(Scalar::Uint(1))));
    assert_eq!(outcome.y(), Some(&Operand::Scalar(Scalar::Uint(2))));
}

#[test]
fn nested_array_member() {
    let x = json!({"users": [{"name": "ann"}, {"name": "cy"}]});
    let y = json!({"users": [{"name": "ann"}, {"name": "bo"}]});
    let outcome = deep_equal(&x, &y);
    assert_eq!(outcome.trace(), &["users", "1", "name"]);
    assert_eq!(outcome.x(), Some(&Operand::Scalar(Scalar::Str("cy"))));
    assert_eq!(outcome.y(), Some(&Operand::Scalar(Scalar::Str("bo"))));
}

#[test]
fn array_length() {
    let (x, y) = (json!({"a": [1, 2]}), json!({"a": [1, 2, 3]}));
    let outcome = deep_equal(&x, &y);
    assert_eq!(outcome.trace(), &["a", "LENGTH"]);
    assert_eq!(outcome.x(), Some(&Operand::Len(2)));
    assert_eq!(outcome.y(), Some(&Operand::Len(3)));
}

#[test]
fn object_size() {
    let (x, y) = (json!({"a": 1}), json!({"a": 1, "b": 2}));
    assert_eq!(deep_equal(&x, &y).trace(), &["LENGTH"]);
}

#[test]
fn missing_member() {
    let (x, y) = (json!({"a": 1}), json!({"b": 1}));
    let outcome = deep_equal(&x, &y);
    assert_eq!(outcome.trace(), &["a"]);
    assert_eq!(outcome.y(), Some(&Operand::Missing));
}

#[test]
fn kind_change_is_a_type_mismatch() {
    let (x, y) = (json!({"a": 1}), json!({"a": "1"}));
    let outcome = deep_equal(&x, &y);
    assert_eq!(outcome.trace(), &["a", "TYPE"]);
    assert_eq!(
        outcome.x(),
        Some(&Operand::Type(std::any::type_name::<serde_json::Number>()))
    );
    assert_eq!(
        outcome.y(),
        Some(&Operand::Type(std::any::type_name::<String>()))
    );
}

#[test]
fn null_against_value() {
    let (x, y) = (json!({"a": null}), json!({"a": 7}));
    let outcome = deep_equal(&x, &y);
    assert_eq!(outcome.trace(), &["a"]);
    assert_eq!(outcome.x(), Some(&Operand::Nil));
    assert_eq!(outcome.y(), Some(&Operand::Scalar(Scalar::Uint(7))));
}

#[test]
fn integer_and_float_forms_differ() {
    let (x, y) = (json!(1), json!(1.0));
    let outcome = deep_equal(&x, &y);
    assert!(!outcome.is_equal());
    assert_eq!(outcome.y(), Some(&Operand::Scalar(Scalar::Float(1.0))));
}

#[test]
fn first_divergence_in_document_order() {
    let x = json!({"a": 1, "b": 1, "c": 1});
    let y = json!({"a": 1, "b": 2, "c": 2});
    assert_eq!(deep_equal(&x, &y).trace(), &["b"]);
}

#[test]
fn pointer_escapes_keys() {
    let (x, y) = (json!({"a/b": {"~": 1}}), json!({"a/b": {"~": 2}}));
    let outcome = deep_equal(&x, &y);
    assert_eq!(outcome.trace(), &["a/b", "~"]);
    assert_eq!(outcome.trace().to_json_pointer(), "/a~1b/~0");
}
