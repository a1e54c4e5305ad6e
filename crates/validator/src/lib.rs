//! # glint-validator
//!
//! A small, chainable schema validation engine for text input.
//!
//! ## Quick Start
//!
//! ```
//! use glint_validator::prelude::*;
//!
//! let schema = StringSchema::new()
//!     .min(5, "Too short")
//!     .max(50, "Too long")
//!     .email("Invalid email");
//!
//! let ok = schema.parse("test@example.com");
//! assert!(ok.is_success());
//! assert_eq!(ok.data().map(String::as_str), Some("test@example.com"));
//!
//! let bad = schema.parse("hi");
//! assert_eq!(bad.error_message(), Some("Too short"));
//!
//! let wrong_type = schema.parse(42);
//! assert_eq!(wrong_type.error_message(), Some("Must be a string"));
//! ```
//!
//! ## Layers
//!
//! - [`validators`]: single-rule [`Validate`](foundation::Validate) implementations
//!   such as [`MinLength`](validators::MinLength) and [`Email`](validators::Email).
//! - [`combinators`]: [`WithMessage`](combinators::WithMessage) for caller-supplied messages.
//! - [`schemas`]: [`StringSchema`](schemas::StringSchema), [`NumberSchema`](schemas::NumberSchema)
//!   and the tagged [`AnySchema`](schemas::AnySchema), all implementing
//!   [`Schema`](foundation::Schema).
//! - [`definition`]: serde-loadable schema definitions.

pub mod combinators;
pub mod definition;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schemas;
pub mod validators;
