//! String schema: min length, max length and email rules

use serde_json::Value;

use super::{VALUE_KEY, value_kind};
use crate::combinators::WithMessage;
use crate::foundation::{Schema, SchemaResult, Validate, ValidationError};
use crate::validators::{Email, LengthMode, MaxLength, MinLength};

/// Message reported for non-string input.
pub const NOT_A_STRING: &str = "Must be a string";

/// Rule set for string values.
///
/// Rules run in a fixed order and stop at the first failure:
///
/// 1. type check (non-string input fails with [`NOT_A_STRING`])
/// 2. minimum length
/// 3. maximum length
/// 4. email shape
///
/// Lengths count Unicode scalar values, so an emoji is one character; use
/// [`LengthMode::Utf16`] for the UTF-16 lengths JavaScript and Dart report.
///
/// Configuring a rule twice keeps only the latest limit and message. Limits
/// are not cross-checked, so `min(10, ..).max(5, ..)` builds a schema no
/// input can satisfy.
///
/// ```
/// use glint_validator::prelude::*;
///
/// let schema = StringSchema::new().min(5, "Too short");
/// assert_eq!(schema.parse("hello").data().map(String::as_str), Some("hello"));
/// assert_eq!(schema.parse("hi").error_message(), Some("Too short"));
/// ```
///
/// The `set_*` methods configure in place and hand back the same reference:
///
/// ```
/// use glint_validator::prelude::*;
///
/// let mut schema = StringSchema::new();
/// schema.set_min(2, "Too short").set_email("Invalid email");
/// assert!(schema.parse("a@b.c").is_success());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringSchema {
    min: Option<WithMessage<MinLength>>,
    max: Option<WithMessage<MaxLength>>,
    email: Option<WithMessage<Email>>,
    mode: LengthMode,
}

impl StringSchema {
    /// Creates a schema with no rules; any string passes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires at least `length` characters.
    pub fn min(mut self, length: usize, message: impl Into<String>) -> Self {
        self.set_min(length, message);
        self
    }

    /// Allows at most `length` characters.
    pub fn max(mut self, length: usize, message: impl Into<String>) -> Self {
        self.set_max(length, message);
        self
    }

    /// Requires an email-shaped string.
    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.set_email(message);
        self
    }

    /// Chooses how lengths are counted for both length rules.
    pub fn length_mode(mut self, mode: LengthMode) -> Self {
        self.set_length_mode(mode);
        self
    }

    /// In-place form of [`min`](Self::min).
    pub fn set_min(&mut self, length: usize, message: impl Into<String>) -> &mut Self {
        let rule = MinLength {
            min: length,
            mode: self.mode,
        };
        self.min = Some(WithMessage::new(rule, message));
        self
    }

    /// In-place form of [`max`](Self::max).
    pub fn set_max(&mut self, length: usize, message: impl Into<String>) -> &mut Self {
        let rule = MaxLength {
            max: length,
            mode: self.mode,
        };
        self.max = Some(WithMessage::new(rule, message));
        self
    }

    /// In-place form of [`email`](Self::email).
    pub fn set_email(&mut self, message: impl Into<String>) -> &mut Self {
        self.email = Some(WithMessage::new(Email, message));
        self
    }

    /// In-place form of [`length_mode`](Self::length_mode).
    pub fn set_length_mode(&mut self, mode: LengthMode) -> &mut Self {
        self.mode = mode;
        if let Some(rule) = &mut self.min {
            rule.inner_mut().mode = mode;
        }
        if let Some(rule) = &mut self.max {
            rule.inner_mut().mode = mode;
        }
        self
    }

    /// Configured minimum length and message.
    pub fn min_rule(&self) -> Option<(usize, &str)> {
        self.min.as_ref().map(|r| (r.inner().min, r.message()))
    }

    /// Configured maximum length and message.
    pub fn max_rule(&self) -> Option<(usize, &str)> {
        self.max.as_ref().map(|r| (r.inner().max, r.message()))
    }

    /// Configured email message.
    pub fn email_rule(&self) -> Option<&str> {
        self.email.as_ref().map(WithMessage::message)
    }

    /// Current length counting mode.
    pub fn mode(&self) -> LengthMode {
        self.mode
    }

    /// Runs the string rules in order, stopping at the first failure.
    pub fn validate_str(&self, input: &str) -> Result<(), ValidationError> {
        if let Some(rule) = &self.min {
            rule.validate(input)?;
        }
        if let Some(rule) = &self.max {
            rule.validate(input)?;
        }
        if let Some(rule) = &self.email {
            rule.validate(input)?;
        }
        Ok(())
    }
}

/// Extracts the text of a string value.
///
/// Anything else yields a `type_mismatch` error carrying [`NOT_A_STRING`].
pub fn expect_str(input: &Value) -> Result<&str, ValidationError> {
    input.as_str().ok_or_else(|| {
        ValidationError::type_mismatch(VALUE_KEY, "string", value_kind(input))
            .with_message(NOT_A_STRING)
    })
}

impl Schema for StringSchema {
    type Output = String;

    fn evaluate(&self, input: &Value) -> SchemaResult<String> {
        match expect_str(input).and_then(|text| self.validate_str(text).map(|()| text)) {
            Ok(text) => {
                tracing::trace!(len = text.len(), "string schema passed");
                SchemaResult::success(text.to_owned())
            }
            Err(error) => {
                tracing::debug!(code = %error.code, "string rule failed");
                SchemaResult::single(VALUE_KEY, error.message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::SchemaExt;
    use serde_json::json;

    #[test]
    fn test_unconstrained_accepts_any_string() {
        let schema = StringSchema::new();
        assert!(schema.parse("").is_success());
        assert!(schema.parse("anything at all").is_success());
    }

    #[test]
    fn test_type_check_comes_first() {
        let schema = StringSchema::new()
            .min(5, "short")
            .max(50, "long")
            .email("bad");

        for input in [json!(42), json!(null), json!(true), json!(["a"]), json!({"a": 1})] {
            assert_eq!(schema.evaluate(&input).error_message(), Some(NOT_A_STRING));
        }
    }

    #[test]
    fn test_type_check_reports_mismatch() {
        let err = expect_str(&json!(42)).unwrap_err();
        assert_eq!(err.code, "type_mismatch");
        assert_eq!(err.message, NOT_A_STRING);
        assert_eq!(err.field.as_deref(), Some(VALUE_KEY));
        assert_eq!(err.param("expected"), Some("string"));
        assert_eq!(err.param("actual"), Some("number"));

        assert_eq!(expect_str(&json!("hi")), Ok("hi"));
    }

    #[test]
    fn test_failure_uses_value_key() {
        let result = StringSchema::new().min(3, "Too short").parse("ab");
        let errors = result.errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(VALUE_KEY), Some("Too short"));
    }

    #[test]
    fn test_max_reported_before_email() {
        let schema = StringSchema::new().max(3, "long").email("bad");
        assert_eq!(schema.parse("invalid").error_message(), Some("long"));
    }

    #[test]
    fn test_min_reported_before_max() {
        let schema = StringSchema::new().min(10, "short").max(5, "long");
        assert_eq!(schema.parse("abcdefg").error_message(), Some("short"));
        assert_eq!(schema.parse("abc").error_message(), Some("short"));
    }

    #[test]
    fn test_last_write_wins() {
        let schema = StringSchema::new()
            .min(2, "first")
            .min(5, "second");

        assert_eq!(schema.min_rule(), Some((5, "second")));
        assert_eq!(schema.parse("abc").error_message(), Some("second"));
    }

    #[test]
    fn test_set_methods_return_same_instance() {
        let mut schema = StringSchema::new();
        let original: *const StringSchema = &schema;
        let chained = schema.set_min(5, "a").set_max(10, "b");
        assert!(std::ptr::eq(original, chained));
        assert_eq!(schema.max_rule(), Some((10, "b")));
    }

    #[test]
    fn test_length_mode_applies_to_existing_rules() {
        let schema = StringSchema::new().max(5, "long").length_mode(LengthMode::Bytes);
        assert_eq!(schema.mode(), LengthMode::Bytes);
        assert_eq!(schema.parse("h\u{e9}llo").error_message(), Some("long"));

        let chars = StringSchema::new().max(5, "long");
        assert!(chars.parse("h\u{e9}llo").is_success());
    }

    #[test]
    fn test_utf16_mode_counts_code_units() {
        let faces = "\u{1f600}\u{1f600}";
        let chars = StringSchema::new().min(3, "short");
        assert_eq!(chars.parse(faces).error_message(), Some("short"));

        let utf16 = chars.length_mode(LengthMode::Utf16);
        assert!(utf16.parse(faces).is_success());
    }

    #[test]
    fn test_validate_str_keeps_rule_code() {
        let schema = StringSchema::new().email("Invalid email");
        let err = schema.validate_str("nope").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.message, "Invalid email");
        assert_eq!(schema.email_rule(), Some("Invalid email"));
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let schema = StringSchema::new().min(5, "Too short");
        assert_eq!(schema.parse("hi"), schema.parse("hi"));
        assert_eq!(schema.parse("hello"), schema.parse("hello"));
    }
}
