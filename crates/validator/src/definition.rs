//! Schema definitions loaded from configuration
//!
//! A [`SchemaDef`] is the serde form of a schema, tagged by `"type"`:
//!
//! ```json
//! {
//!   "type": "string",
//!   "min":   { "length": 5,  "message": "Too short" },
//!   "max":   { "length": 50, "message": "Too long" },
//!   "email": { "message": "Invalid email" }
//! }
//! ```
//!
//! Unlike the builder API, [`SchemaDef::build`] rejects definitions no input
//! could satisfy.

use serde::{Deserialize, Serialize};

use crate::schemas::{AnySchema, NumberSchema, StringSchema};
use crate::validators::LengthMode;

/// Errors raised while loading or building a schema definition.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// The definition is not valid JSON or does not match the expected shape.
    #[error("invalid schema definition: {0}")]
    Parse(#[from] serde_json::Error),

    /// A length limit of zero.
    #[error("{rule} length must be positive")]
    InvalidLength {
        /// `"min"` or `"max"`.
        rule: &'static str,
    },

    /// A lower bound above the upper bound.
    #[error("minimum {min} exceeds maximum {max}")]
    UnsatisfiableRange {
        /// Configured lower bound.
        min: String,
        /// Configured upper bound.
        max: String,
    },

    /// A numeric bound that is NaN or infinite.
    #[error("{rule} bound must be finite")]
    NonFiniteBound {
        /// `"min"` or `"max"`.
        rule: &'static str,
    },
}

/// A length limit with its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LengthRuleDef {
    /// The limit, counted per the schema's length mode.
    pub length: usize,
    /// Message reported when the limit is violated.
    pub message: String,
}

/// A numeric bound with its message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundDef {
    /// The bound (inclusive).
    pub value: f64,
    /// Message reported when the bound is violated.
    pub message: String,
}

/// A flag rule that only carries a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageDef {
    /// Message reported when the rule fails.
    pub message: String,
}

/// Serde form of [`StringSchema`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StringDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<LengthRuleDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<LengthRuleDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<MessageDef>,
    #[serde(default)]
    pub length_mode: LengthMode,
}

/// Serde form of [`NumberSchema`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<BoundDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<BoundDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int: Option<MessageDef>,
}

/// Serde form of [`AnySchema`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaDef {
    /// `"type": "string"`
    String(StringDef),
    /// `"type": "number"`
    Number(NumberDef),
}

impl SchemaDef {
    /// Parses a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the schema, rejecting unsatisfiable limits.
    pub fn build(&self) -> Result<AnySchema, DefinitionError> {
        let schema = match self {
            Self::String(def) => AnySchema::String(def.build()?),
            Self::Number(def) => AnySchema::Number(def.build()?),
        };
        tracing::debug!(kind = schema.kind(), "built schema from definition");
        Ok(schema)
    }
}

impl StringDef {
    /// Builds the [`StringSchema`].
    pub fn build(&self) -> Result<StringSchema, DefinitionError> {
        if let Some(rule) = &self.min {
            ensure_positive("min", rule.length)?;
        }
        if let Some(rule) = &self.max {
            ensure_positive("max", rule.length)?;
        }
        if let (Some(min), Some(max)) = (&self.min, &self.max) {
            if min.length > max.length {
                return Err(DefinitionError::UnsatisfiableRange {
                    min: min.length.to_string(),
                    max: max.length.to_string(),
                });
            }
        }

        let mut schema = StringSchema::new().length_mode(self.length_mode);
        if let Some(rule) = &self.min {
            schema.set_min(rule.length, rule.message.clone());
        }
        if let Some(rule) = &self.max {
            schema.set_max(rule.length, rule.message.clone());
        }
        if let Some(rule) = &self.email {
            schema.set_email(rule.message.clone());
        }
        Ok(schema)
    }
}

impl NumberDef {
    /// Builds the [`NumberSchema`].
    pub fn build(&self) -> Result<NumberSchema, DefinitionError> {
        if let Some(bound) = &self.min {
            ensure_finite("min", bound.value)?;
        }
        if let Some(bound) = &self.max {
            ensure_finite("max", bound.value)?;
        }
        if let (Some(min), Some(max)) = (&self.min, &self.max) {
            if min.value > max.value {
                return Err(DefinitionError::UnsatisfiableRange {
                    min: min.value.to_string(),
                    max: max.value.to_string(),
                });
            }
        }

        let mut schema = NumberSchema::new();
        if let Some(bound) = &self.min {
            schema.set_min(bound.value, bound.message.clone());
        }
        if let Some(bound) = &self.max {
            schema.set_max(bound.value, bound.message.clone());
        }
        if let Some(rule) = &self.int {
            schema.set_int(rule.message.clone());
        }
        Ok(schema)
    }
}

impl AnySchema {
    /// Parses and builds a schema from a JSON definition.
    ///
    /// ```
    /// use glint_validator::prelude::*;
    ///
    /// let schema = AnySchema::from_json(
    ///     r#"{ "type": "string", "email": { "message": "Invalid email" } }"#,
    /// )?;
    /// assert_eq!(schema.parse("invalid").error_message(), Some("Invalid email"));
    /// # Ok::<(), glint_validator::definition::DefinitionError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        SchemaDef::from_json(json)?.build()
    }
}

fn ensure_positive(rule: &'static str, length: usize) -> Result<(), DefinitionError> {
    if length == 0 {
        Err(DefinitionError::InvalidLength { rule })
    } else {
        Ok(())
    }
}

fn ensure_finite(rule: &'static str, value: f64) -> Result<(), DefinitionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DefinitionError::NonFiniteBound { rule })
    }
}
