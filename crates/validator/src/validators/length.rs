//! String length validators
//!
//! By default length is measured in Unicode scalar values (chars).
//! [`LengthMode::Bytes`] counts raw UTF-8 bytes and [`LengthMode::Utf16`]
//! counts UTF-16 code units instead.

use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
    /// Count UTF-16 code units, as JavaScript and Dart string lengths do.
    Utf16,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
            LengthMode::Utf16 => input.encode_utf16().count(),
        }
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) { ValidationError::min_length("", self.min, self.mode.measure(input)) }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length validator that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) <= self.max }
    error(self, input) { ValidationError::max_length("", self.max, self.mode.measure(input)) }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length validator that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_min_length_valid() {
        let validator = MinLength::new(5);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hello world").is_ok());
    }

    #[test]
    fn test_min_length_invalid() {
        let validator = MinLength::new(5);
        assert!(validator.validate("hi").is_err());
        assert!(validator.validate("").is_err());
    }

    #[test]
    fn test_max_length_valid() {
        let validator = MaxLength::new(10);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("helloworld").is_ok());
    }

    #[test]
    fn test_max_length_invalid() {
        let validator = MaxLength::new(10);
        let err = validator.validate("verylongstring").unwrap_err();
        assert_eq!(err.code, "max_length");
        assert_eq!(err.param("actual"), Some("14"));
    }

    #[test]
    fn test_helper_functions() {
        assert!(min_length(5).validate("hello").is_ok());
        assert!(max_length(10).validate("hello").is_ok());
    }

    #[test]
    fn test_unicode_handling() {
        // Default mode counts Unicode chars, not bytes
        let validator = MinLength::new(5);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("\u{1f44b}\u{1f30d}").is_err()); // 2 chars < 5

        // Bytes mode counts raw bytes
        let byte_validator = MinLength::bytes(5);
        assert!(byte_validator.validate("\u{1f44b}\u{1f30d}").is_ok()); // 8 bytes >= 5

        assert!(MaxLength::new(5).validate("h\u{e9}llo").is_ok()); // 5 chars
        assert!(MaxLength::bytes(5).validate("h\u{e9}llo").is_err()); // 6 bytes
    }

    #[test]
    fn test_utf16_counts_surrogate_pairs() {
        let faces = "\u{1f600}\u{1f600}";
        assert_eq!(LengthMode::Chars.measure(faces), 2);
        assert_eq!(LengthMode::Utf16.measure(faces), 4);
        assert_eq!(LengthMode::Utf16.measure("h\u{e9}llo"), 5);

        let validator = MinLength { min: 3, mode: LengthMode::Utf16 };
        assert!(validator.validate(faces).is_ok());
        assert!(MinLength::new(3).validate(faces).is_err());
    }

    #[test]
    fn test_length_mode_serde() {
        let mode: LengthMode = serde_json::from_str("\"bytes\"").unwrap();
        assert_eq!(mode, LengthMode::Bytes);
        assert_eq!(serde_json::to_string(&LengthMode::Chars).unwrap(), "\"chars\"");
        let mode: LengthMode = serde_json::from_str("\"utf16\"").unwrap();
        assert_eq!(mode, LengthMode::Utf16);
    }
}
