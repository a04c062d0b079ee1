//! Form field parsing.
//!
//! Converts the free text of each form field into a number, substituting
//! zero whenever the text is not a number.

mod input_parser;

pub use input_parser::{ParsedForm, parse_field, parse_form, parse_number};
