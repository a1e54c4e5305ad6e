//! Integration tests for the prelude module and the string schema scenarios.
//!
//! Verifies that `use glint_validator::prelude::*` brings in everything a
//! text-input binding needs.

use glint_validator::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};

// ============================================================================
// CONCRETE SCENARIOS
// ============================================================================

#[test]
fn email_accepts_well_formed_address() {
    let result = StringSchema::new().email("Invalid email").parse("test@example.com");
    assert!(result.is_success());
    assert_eq!(result.data().map(String::as_str), Some("test@example.com"));
}

#[test]
fn email_rejects_plain_word() {
    let result = StringSchema::new().email("Invalid email").parse("invalid");
    assert!(result.is_failure());
    assert_eq!(result.error_message(), Some("Invalid email"));
}

#[test]
fn min_accepts_exact_length() {
    let result = StringSchema::new().min(5, "Too short").parse("hello");
    assert!(result.is_success());
    assert_eq!(result.into_data().as_deref(), Some("hello"));
}

#[test]
fn min_rejects_short_input() {
    let result = StringSchema::new().min(5, "Too short").parse("hi");
    assert!(result.is_failure());
    assert_eq!(result.error_message(), Some("Too short"));
}

#[test]
fn number_input_fails_type_check_first() {
    let result = StringSchema::new()
        .min(5, "short")
        .max(50, "long")
        .email("bad")
        .parse(42);
    assert!(result.is_failure());
    assert_eq!(result.error_message(), Some("Must be a string"));
}

// ============================================================================
// RULE PRECEDENCE TABLE
// ============================================================================

#[rstest]
#[case::not_a_string(json!(3.5), Some("Must be a string"))]
#[case::null(Value::Null, Some("Must be a string"))]
#[case::too_short(json!("a@b"), Some("short"))]
#[case::too_long_and_not_email(json!("abcdefghijk"), Some("long"))]
#[case::too_long_email(json!("abcdef@gh.ij"), Some("long"))]
#[case::not_email(json!("abcdefg"), Some("bad"))]
#[case::valid(json!("ab@cd.ef"), None)]
fn precedence(#[case] input: Value, #[case] expected: Option<&str>) {
    let schema = StringSchema::new().min(4, "short").max(10, "long").email("bad");
    let result = schema.evaluate(&input);
    assert_eq!(result.error_message(), expected);
    assert_eq!(result.is_success(), expected.is_none());
}

// ============================================================================
// RESULT SHAPE
// ============================================================================

#[test]
fn failure_has_single_value_entry() {
    let result = StringSchema::new().max(2, "Too long").check("abc");
    let errors = result.errors().expect("failure carries errors");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first(), Some((VALUE_KEY, "Too long")));
    assert!(result.data().is_none());
}

#[test]
fn success_has_no_errors() {
    let result = StringSchema::new().max(5, "Too long").check("abc");
    assert!(result.errors().is_none());
    assert_eq!(result.error_message(), None);
}

#[test]
fn into_result_works_with_question_mark() {
    fn normalize(schema: &StringSchema, raw: &str) -> Result<String, ErrorMap> {
        let value = schema.check(raw).into_result()?;
        Ok(value.to_lowercase())
    }

    let schema = StringSchema::new().email("Invalid email");
    assert_eq!(normalize(&schema, "A@B.C").unwrap(), "a@b.c");
    assert_eq!(
        normalize(&schema, "nope").unwrap_err().get(VALUE_KEY),
        Some("Invalid email")
    );
}
