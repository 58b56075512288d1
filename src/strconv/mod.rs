//! Conversions to and from string representations of basic data types.
//!
//! This is the crate the embedded search index documents. The item
//! names here (`parse_int`, `NumError`, `NumErrorCause::InvalidBase`, ...)
//! are the ones the index lists.

mod atoi;
mod errors;

pub use atoi::{parse_int, parse_uint};
pub use errors::{NumError, NumErrorCause};
