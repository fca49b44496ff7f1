//! vCard content-line parsing.
//!
//! Splits physical lines into property name, parameters, and payload
//! segments, honouring backslash-escaped delimiters throughout. Folded
//! continuation lines are deliberately not merged; each physical line is
//! treated as a complete logical line.

mod lexer;
mod values;

pub use lexer::{ContentLine, parse_content_line, split_unescaped};
pub use values::{AddressParts, display_name, parse_address};
