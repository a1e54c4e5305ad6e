//! The schema contract shared by every rule set

use serde_json::Value;

use super::SchemaResult;

/// A rule set that evaluates dynamically typed input.
///
/// Input arrives as a [`serde_json::Value`] because the host may hand over
/// anything (a number from a misconfigured widget, `null` from an empty form
/// slot). Each schema checks the input type first, then runs its rules, and
/// reports the outcome as a [`SchemaResult`].
///
/// Implementations must be pure: evaluating the same input twice yields equal
/// results.
pub trait Schema {
    /// The validated value carried by a successful result.
    type Output;

    /// Evaluates `input` against every configured rule.
    fn evaluate(&self, input: &Value) -> SchemaResult<Self::Output>;

    /// A schema-level error message, if the schema carries one.
    ///
    /// Concrete schemas report messages through [`SchemaResult`] instead, so
    /// the default is `None`.
    fn error_message(&self) -> Option<&str> {
        None
    }
}

/// Convenience entry points for [`Schema`] implementations.
pub trait SchemaExt: Schema {
    /// Converts `input` into a [`Value`] and evaluates it.
    ///
    /// ```
    /// use glint_validator::prelude::*;
    ///
    /// let schema = StringSchema::new().min(5, "Too short");
    /// assert!(schema.parse("hello").is_success());
    /// assert_eq!(schema.parse(42).error_message(), Some("Must be a string"));
    /// ```
    fn parse(&self, input: impl Into<Value>) -> SchemaResult<Self::Output> {
        self.evaluate(&input.into())
    }

    /// Evaluates a piece of text.
    fn check(&self, text: &str) -> SchemaResult<Self::Output> {
        self.evaluate(&Value::from(text))
    }
}

impl<S: Schema + ?Sized> SchemaExt for S {}

impl<S: Schema + ?Sized> Schema for &S {
    type Output = S::Output;

    fn evaluate(&self, input: &Value) -> SchemaResult<Self::Output> {
        (**self).evaluate(input)
    }

    fn error_message(&self) -> Option<&str> {
        (**self).error_message()
    }
}

impl<S: Schema + ?Sized> Schema for std::sync::Arc<S> {
    type Output = S::Output;

    fn evaluate(&self, input: &Value) -> SchemaResult<Self::Output> {
        (**self).evaluate(input)
    }

    fn error_message(&self) -> Option<&str> {
        (**self).error_message()
    }
}
