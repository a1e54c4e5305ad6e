//! Core traits for rule validators

use crate::combinators::WithMessage;
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every rule validator implements.
///
/// Generic over the input type so a rule is only ever applied to values it
/// understands. Rules report failure with a structured [`ValidationError`];
/// schemas decide how that error is surfaced to callers.
///
/// # Examples
///
/// ```
/// use glint_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "Must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("glint").is_ok());
/// assert!(NoSpaces.validate("gl int").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension methods available on every [`Validate`] implementation.
pub trait ValidateExt: Validate + Sized {
    /// Replaces the error message reported by this validator.
    ///
    /// The original code and params are kept so callers can still branch on
    /// the failing rule.
    ///
    /// ```
    /// use glint_validator::foundation::{Validate, ValidateExt};
    /// use glint_validator::validators::max_length;
    ///
    /// let rule = max_length(3).with_message("Keep it short");
    /// let err = rule.validate("glint").unwrap_err();
    /// assert_eq!(err.code, "max_length");
    /// assert_eq!(err.message, "Keep it short");
    /// ```
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
        assert!(AlwaysFails.validate("test").is_err());
    }

    #[test]
    fn test_with_message_only_touches_failures() {
        assert!(AlwaysValid.with_message("nope").validate("test").is_ok());

        let err = AlwaysFails.with_message("Custom").validate("test").unwrap_err();
        assert_eq!(err.code, "always_fails");
        assert_eq!(err.message, "Custom");
    }

    #[test]
    fn test_dyn_validator() {
        let rules: [&dyn Validate<Input = str>; 2] = [&AlwaysValid, &AlwaysFails];
        let failures = rules.iter().filter(|r| r.validate("x").is_err()).count();
        assert_eq!(failures, 1);
    }
}
