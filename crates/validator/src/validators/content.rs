//! String content validators

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// One `@`, a dot somewhere after it, no other `@`.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern is a valid regex")
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates a permissive `something@something.something` shape.
    ///
    /// Only `@` is excluded from the local and domain parts; no character
    /// classes are checked beyond that.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("", "email") }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================
