//! Numeric validators

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a number is at least `min`.
    #[derive(Copy, PartialEq)]
    pub Min { min: f64 } for f64;
    rule(self, input) { *input >= self.min }
    error(self, input) { ValidationError::too_small("", self.min, *input) }
    fn min(min: f64);
}

crate::validator! {
    /// Validates that a number is at most `max`.
    #[derive(Copy, PartialEq)]
    pub Max { max: f64 } for f64;
    rule(self, input) { *input <= self.max }
    error(self, input) { ValidationError::too_large("", self.max, *input) }
    fn max(max: f64);
}

crate::validator! {
    /// Validates that a number has no fractional part.
    pub Integer for f64;
    rule(input) { input.is_finite() && input.fract() == 0.0 }
    error(input) { ValidationError::not_integer("", *input) }
    fn integer();
}
