//! MESSAGE combinator - caller-supplied error messages

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a validator.
///
/// Schemas store every configured rule wrapped in `WithMessage`, so the message
/// the caller passed to `min`/`max`/`email` is what ends up in the result.
///
/// ```
/// use glint_validator::combinators::WithMessage;
/// use glint_validator::foundation::Validate;
/// use glint_validator::validators::MinLength;
///
/// let validator = WithMessage::new(MinLength::new(8), "Password must be at least 8 characters");
///
/// let result = validator.validate("short");
/// assert_eq!(result.unwrap_err().message, "Password must be at least 8 characters");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns a mutable reference to the inner validator.
    pub fn inner_mut(&mut self) -> &mut V {
        &mut self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|original| original.with_message(self.message.clone()))
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
