//! Built-in rule validators
//!
//! - **String length**: [`MinLength`], [`MaxLength`] (see [`LengthMode`])
//! - **String format**: [`Email`]
//! - **Numeric**: [`Min`], [`Max`], [`Integer`]

pub mod content;
pub mod length;
pub mod numeric;

pub use content::{Email, email};
pub use length::{LengthMode, MaxLength, MinLength, max_length, min_length};
pub use numeric::{Integer, Max, Min, integer, max, min};
