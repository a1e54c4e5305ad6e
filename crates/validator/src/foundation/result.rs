//! Outcome of evaluating a schema

use super::ErrorMap;

/// The tagged outcome of one schema evaluation.
///
/// Exactly one variant is ever held: the validated value, or the errors that
/// explain why validation failed. Validation failure is an ordinary value, not
/// a Rust `Err`; use [`into_result`](Self::into_result) to switch to `?`-style
/// propagation.
///
/// ```
/// use glint_validator::foundation::SchemaResult;
///
/// let ok = SchemaResult::success("hello".to_string());
/// assert!(ok.is_success());
/// assert_eq!(ok.error_message(), None);
///
/// let failed: SchemaResult<String> = SchemaResult::single("value", "Too short");
/// assert_eq!(failed.data(), None);
/// assert_eq!(failed.error_message(), Some("Too short"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use = "validation result must be checked"]
pub enum SchemaResult<T> {
    /// All rules passed.
    Success(T),
    /// At least one rule failed.
    Failure(ErrorMap),
}

impl<T> SchemaResult<T> {
    /// Creates a successful result.
    pub fn success(data: T) -> Self {
        Self::Success(data)
    }

    /// Creates a failed result.
    pub fn failure(errors: ErrorMap) -> Self {
        Self::Failure(errors)
    }

    /// Creates a failed result with one entry.
    pub fn single(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failure(ErrorMap::single(key, message))
    }

    /// Returns true for [`Success`](Self::Success).
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true for [`Failure`](Self::Failure).
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The validated value, if successful.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// The error mapping, if failed.
    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// The first-inserted error message, if failed.
    pub fn error_message(&self) -> Option<&str> {
        self.errors().and_then(ErrorMap::first_message)
    }

    /// Consumes the result, returning the validated value.
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<T, ErrorMap> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(errors) => Err(errors),
        }
    }

    /// Maps the validated value, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SchemaResult<U> {
        match self {
            Self::Success(data) => SchemaResult::Success(f(data)),
            Self::Failure(errors) => SchemaResult::Failure(errors),
        }
    }
}

impl<T> From<SchemaResult<T>> for Result<T, ErrorMap> {
    fn from(result: SchemaResult<T>) -> Self {
        result.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let result = SchemaResult::success(7);
        assert!(result.is_success());
        assert!(!result.is_failure());
        assert_eq!(result.data(), Some(&7));
        assert!(result.errors().is_none());
        assert_eq!(result.error_message(), None);
    }

    #[test]
    fn test_failure_accessors() {
        let mut errors = ErrorMap::new();
        errors.insert("value", "first");
        errors.insert("other", "second");

        let result: SchemaResult<i32> = SchemaResult::failure(errors);
        assert!(result.is_failure());
        assert_eq!(result.data(), None);
        assert_eq!(result.errors().map(ErrorMap::len), Some(2));
        assert_eq!(result.error_message(), Some("first"));
    }

    #[test]
    fn test_map_and_into_result() {
        let doubled = SchemaResult::success(21).map(|n| n * 2);
        assert_eq!(doubled.into_result(), Ok(42));

        let failed: SchemaResult<i32> = SchemaResult::single("value", "bad");
        let mapped = failed.map(|n| n * 2);
        assert_eq!(mapped.error_message(), Some("bad"));

        let as_std: Result<i32, ErrorMap> = mapped.into();
        assert_eq!(as_std.unwrap_err().get("value"), Some("bad"));
    }

    #[test]
    fn test_into_data() {
        assert_eq!(SchemaResult::success("x").into_data(), Some("x"));
        assert_eq!(SchemaResult::<&str>::single("value", "bad").into_data(), None);
    }
}
