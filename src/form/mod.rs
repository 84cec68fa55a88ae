//! Field formatting and validation for the card form.
//!
//! Raw keystroke input goes through one of the [formatter] functions and only
//! the normalized result is ever stored in a [FieldSet].

pub mod fields;
pub mod formatter;

pub use fields::{FieldSet, compute_validity};
