//! # glint-field
//!
//! Headless text-field binding for glint schemas.
//!
//! A [`TextField`] owns the current text and a shared schema. Depending on its
//! [`ValidationTrigger`] it evaluates on every change or only on submit, and
//! exposes the message a host toolkit should render under the input.
//!
//! ```
//! use glint_field::{TextField, ValidationTrigger};
//! use glint_validator::prelude::*;
//!
//! let mut email = TextField::new(StringSchema::new().email("Invalid email"));
//!
//! email.set_text("invalid");
//! assert_eq!(email.error_message(), Some("Invalid email"));
//!
//! email.set_text("test@example.com");
//! assert_eq!(email.error_message(), None);
//! ```

mod field;
mod form;

pub use field::{TextField, ValidationTrigger};
pub use form::{Form, FormError};
