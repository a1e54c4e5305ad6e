//! Concrete schemas
//!
//! Every schema implements [`Schema`](crate::foundation::Schema). Failures are
//! always reported under the single [`VALUE_KEY`] entry.

pub mod any;
pub mod number;
pub mod string;

pub use any::AnySchema;
pub use number::NumberSchema;
pub use string::StringSchema;

use serde_json::Value;

/// Error key used by every single-value schema.
pub const VALUE_KEY: &str = "value";

/// Names the JSON type of `value` for `type_mismatch` params.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
