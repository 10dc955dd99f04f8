//! Tests for run-time element-kind-checked construction.

use kons::error::ListError;
use kons::ops::ListOps;
use kons::typed::{ElementKind, Value, list_of};
use rstest::rstest;

#[rstest]
fn test_homogeneous_construction_succeeds() {
    let numbers = list_of(ElementKind::Number)
        .of([Value::from(1), Value::from(2), Value::from(3)])
        .unwrap();
    assert_eq!(numbers.length(), 3);
    assert_eq!(numbers.join(","), "1,2,3");
}

#[rstest]
fn test_empty_construction_succeeds_for_any_kind() {
    assert!(list_of(ElementKind::Number).of([]).unwrap().is_empty());
    assert!(list_of(ElementKind::Text).of([]).unwrap().is_empty());
    assert!(list_of(ElementKind::Boolean).of([]).unwrap().is_empty());
}

#[rstest]
fn test_mismatch_reports_first_offending_value() {
    let result = list_of(ElementKind::Number).of([
        Value::from(1),
        Value::from("two"),
        Value::from(3),
    ]);
    assert_eq!(
        result,
        Err(ListError::TypeMismatch {
            expected: ElementKind::Number,
            actual: ElementKind::Text,
            index: 1,
        })
    );
}

#[rstest]
fn test_mismatch_fails_before_any_node_is_built() {
    // All-or-nothing: a trailing violation still rejects the whole input.
    let result = list_of(ElementKind::Text).of([
        Value::from("a"),
        Value::from("b"),
        Value::from(false),
    ]);
    assert_eq!(
        result,
        Err(ListError::TypeMismatch {
            expected: ElementKind::Text,
            actual: ElementKind::Boolean,
            index: 2,
        })
    );
}

#[rstest]
fn test_typed_list_supports_the_operation_suite() {
    let words = list_of(ElementKind::Text)
        .of([Value::from("a"), Value::from("b"), Value::from("c")])
        .unwrap();
    assert_eq!(words.reverse().join("-"), "c-b-a");
    assert_eq!(words.first(), Ok(&Value::from("a")));
}

#[rstest]
#[case(Value::from(1.5), ElementKind::Number)]
#[case(Value::from("text"), ElementKind::Text)]
#[case(Value::from(String::from("owned")), ElementKind::Text)]
#[case(Value::from(true), ElementKind::Boolean)]
fn test_value_kinds(#[case] value: Value, #[case] expected: ElementKind) {
    assert_eq!(value.kind(), expected);
}

#[rstest]
fn test_value_display() {
    assert_eq!(format!("{}", Value::from(1)), "1");
    assert_eq!(format!("{}", Value::from(2.5)), "2.5");
    assert_eq!(format!("{}", Value::from("text")), "text");
    assert_eq!(format!("{}", Value::from(false)), "false");
}
