//! Prelude module for convenient imports.
//!
//! ```
//! use glint_validator::prelude::*;
//!
//! let schema = StringSchema::new().min(5, "Too short");
//! assert!(schema.parse("hello").is_success());
//! ```

pub use crate::foundation::{
    ErrorMap, Schema, SchemaExt, SchemaResult, Validate, ValidateExt, ValidationError,
};

pub use crate::schemas::{AnySchema, NumberSchema, StringSchema, VALUE_KEY};

pub use crate::validators::{Email, Integer, LengthMode, Max, MaxLength, Min, MinLength};

pub use crate::combinators::WithMessage;

pub use crate::definition::{DefinitionError, SchemaDef};
