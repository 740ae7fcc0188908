//! List pattern templates.
//!
//! A list pattern is a string such as `"{0}, and {1}"`: connective text with
//! exactly one `{0}` and one `{1}` placeholder. This module parses pattern
//! strings, validates them, and substitutes values while reporting where each
//! substitution lands.

pub mod ast;
mod error;
mod table;
mod template;

pub use ast::{Segment, Slot, Template};
pub use error::TemplateError;
pub use table::{Pattern, PatternTable, RawPatternTable, Substitution};
pub use template::parse_template;
