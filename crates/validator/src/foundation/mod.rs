//! Core validation types and traits
//!
//! This module contains the building blocks shared by every rule and schema:
//!
//! - **Rule traits**: [`Validate`], [`ValidateExt`]
//! - **Rule errors**: [`ValidationError`]
//! - **Schema contract**: [`Schema`], [`SchemaExt`]
//! - **Outcomes**: [`SchemaResult`], [`ErrorMap`]
//!
//! # Architecture
//!
//! Rules are small, typed validators (`Input = str`, `Input = f64`) that return
//! a structured [`ValidationError`]. Schemas accept a dynamically typed
//! [`serde_json::Value`], check its type, run their configured rules in a fixed
//! order and report the first failure as a [`SchemaResult::Failure`].
//!
//! ```
//! use glint_validator::foundation::{Validate, ValidateExt};
//! use glint_validator::validators::min_length;
//!
//! let rule = min_length(5).with_message("Too short");
//! assert_eq!(rule.validate("hi").unwrap_err().message, "Too short");
//! ```

pub mod error;
pub mod error_map;
pub mod result;
pub mod schema;
pub mod traits;

pub use error::ValidationError;
pub use error_map::ErrorMap;
pub use result::SchemaResult;
pub use schema::{Schema, SchemaExt};
pub use traits::{Validate, ValidateExt};
