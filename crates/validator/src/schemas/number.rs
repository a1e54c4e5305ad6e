//! Number schema: lower bound, upper bound and integer rules

use serde_json::Value;

use super::{VALUE_KEY, value_kind};
use crate::combinators::WithMessage;
use crate::foundation::{Schema, SchemaResult, Validate, ValidationError};
use crate::validators::{Integer, Max, Min};

/// Message reported for non-number input.
pub const NOT_A_NUMBER: &str = "Must be a number";

/// Rule set for numeric values.
///
/// Same shape as [`StringSchema`](super::StringSchema): type check, then
/// minimum, maximum and integer rules, first failure wins, last write wins per
/// rule. Numeric strings such as `"42"` are not coerced.
///
/// ```
/// use glint_validator::prelude::*;
///
/// let age = NumberSchema::new().min(18.0, "Too young").int("Whole years only");
/// assert_eq!(age.parse(21).into_data(), Some(21.0));
/// assert_eq!(age.parse(17).error_message(), Some("Too young"));
/// assert_eq!(age.parse(20.5).error_message(), Some("Whole years only"));
/// assert_eq!(age.parse("21").error_message(), Some("Must be a number"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberSchema {
    min: Option<WithMessage<Min>>,
    max: Option<WithMessage<Max>>,
    int: Option<WithMessage<Integer>>,
}

impl NumberSchema {
    /// Creates a schema with no rules; any number passes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `value >= min`.
    pub fn min(mut self, min: f64, message: impl Into<String>) -> Self {
        self.set_min(min, message);
        self
    }

    /// Requires `value <= max`.
    pub fn max(mut self, max: f64, message: impl Into<String>) -> Self {
        self.set_max(max, message);
        self
    }

    /// Requires a value without fractional part.
    pub fn int(mut self, message: impl Into<String>) -> Self {
        self.set_int(message);
        self
    }

    /// In-place form of [`min`](Self::min).
    pub fn set_min(&mut self, min: f64, message: impl Into<String>) -> &mut Self {
        self.min = Some(WithMessage::new(Min::new(min), message));
        self
    }

    /// In-place form of [`max`](Self::max).
    pub fn set_max(&mut self, max: f64, message: impl Into<String>) -> &mut Self {
        self.max = Some(WithMessage::new(Max::new(max), message));
        self
    }

    /// In-place form of [`int`](Self::int).
    pub fn set_int(&mut self, message: impl Into<String>) -> &mut Self {
        self.int = Some(WithMessage::new(Integer, message));
        self
    }

    /// Configured lower bound and message.
    pub fn min_rule(&self) -> Option<(f64, &str)> {
        self.min.as_ref().map(|r| (r.inner().min, r.message()))
    }

    /// Configured upper bound and message.
    pub fn max_rule(&self) -> Option<(f64, &str)> {
        self.max.as_ref().map(|r| (r.inner().max, r.message()))
    }

    /// Configured integer message.
    pub fn int_rule(&self) -> Option<&str> {
        self.int.as_ref().map(WithMessage::message)
    }

    /// Runs the numeric rules in order, stopping at the first failure.
    pub fn validate_number(&self, input: f64) -> Result<(), ValidationError> {
        if let Some(rule) = &self.min {
            rule.validate(&input)?;
        }
        if let Some(rule) = &self.max {
            rule.validate(&input)?;
        }
        if let Some(rule) = &self.int {
            rule.validate(&input)?;
        }
        Ok(())
    }
}

/// Extracts a JSON number as `f64`.
///
/// Anything else yields a `type_mismatch` error carrying [`NOT_A_NUMBER`].
pub fn expect_number(input: &Value) -> Result<f64, ValidationError> {
    input.as_f64().ok_or_else(|| {
        ValidationError::type_mismatch(VALUE_KEY, "number", value_kind(input))
            .with_message(NOT_A_NUMBER)
    })
}

impl Schema for NumberSchema {
    type Output = f64;

    fn evaluate(&self, input: &Value) -> SchemaResult<f64> {
        match expect_number(input).and_then(|n| self.validate_number(n).map(|()| n)) {
            Ok(number) => SchemaResult::success(number),
            Err(error) => {
                tracing::debug!(code = %error.code, "number rule failed");
                SchemaResult::single(VALUE_KEY, error.message)
            }
        }
    }
}
