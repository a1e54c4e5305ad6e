//! Tagged dispatch over the concrete schemas

use serde_json::Value;

use super::{NumberSchema, StringSchema};
use crate::foundation::{Schema, SchemaResult};

/// Any concrete schema, chosen at runtime.
///
/// Lets heterogeneous schemas live in one collection (form fields, loaded
/// definitions). A successful evaluation returns the input value unchanged.
///
/// ```
/// use glint_validator::prelude::*;
/// use serde_json::json;
///
/// let schemas = [
///     AnySchema::from(StringSchema::new().email("Invalid email")),
///     AnySchema::from(NumberSchema::new().min(0.0, "Negative")),
/// ];
///
/// assert_eq!(schemas[0].parse("a@b.c").into_data(), Some(json!("a@b.c")));
/// assert_eq!(schemas[1].parse(-1).error_message(), Some("Negative"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AnySchema {
    /// A [`StringSchema`].
    String(StringSchema),
    /// A [`NumberSchema`].
    Number(NumberSchema),
}

impl AnySchema {
    /// Name of the wrapped schema kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
        }
    }

    /// Returns the wrapped [`StringSchema`], if any.
    pub fn as_string(&self) -> Option<&StringSchema> {
        match self {
            Self::String(schema) => Some(schema),
            Self::Number(_) => None,
        }
    }

    /// Returns the wrapped [`NumberSchema`], if any.
    pub fn as_number(&self) -> Option<&NumberSchema> {
        match self {
            Self::Number(schema) => Some(schema),
            Self::String(_) => None,
        }
    }
}

impl Schema for AnySchema {
    type Output = Value;

    fn evaluate(&self, input: &Value) -> SchemaResult<Value> {
        tracing::trace!(kind = self.kind(), "evaluating schema");
        match self {
            Self::String(schema) => schema.evaluate(input).map(Value::String),
            Self::Number(schema) => schema.evaluate(input).map(|_| input.clone()),
        }
    }
}

impl From<StringSchema> for AnySchema {
    fn from(schema: StringSchema) -> Self {
        Self::String(schema)
    }
}

impl From<NumberSchema> for AnySchema {
    fn from(schema: NumberSchema) -> Self {
        Self::Number(schema)
    }
}
