//! Pattern-driven list formatting.
//!
//! Joins an ordered list of items into a single string ("A, B, and C") using
//! four locale templates, and optionally splits the result back into
//! [`Span`]s that separate connective text from the original items.
//!
//! # Example
//!
//! ```
//! use conjoin::{ListFormat, ListFormatOptions, ListType, PatternStore, Span};
//!
//! let store = PatternStore::with_english();
//! let options = ListFormatOptions::builder()
//!     .locale("en")
//!     .list_type(ListType::Disjunction)
//!     .build();
//! let format = ListFormat::try_new(options, &store).unwrap();
//!
//! assert_eq!(format.format(&["tea", "coffee", "juice"]), "tea, coffee, or juice");
//! assert_eq!(
//!     format.format_to_parts(&["tea", "coffee"]).unwrap(),
//!     vec![
//!         Span::Element("tea".into()),
//!         Span::Literal(" or ".into()),
//!         Span::Element("coffee".into()),
//!     ]
//! );
//! ```

mod error;
mod joiner;
mod list_format;
pub mod pattern;
pub mod provider;
mod resolver;
mod spans;
pub mod types;

pub use error::{FormatError, compute_suggestions};
pub use joiner::join;
pub use list_format::{
    DEFAULT_LOCALE, ListFormat, ListFormatOptions, ResolvedOptions, canonicalize_locale,
};
pub use pattern::{Pattern, PatternTable, RawPatternTable};
pub use provider::{Fallback, PatternProvider, PatternStore};
pub use resolver::{resolve_pattern_key, resolve_pattern_key_str};
pub use spans::extract_spans;
pub use types::{JoinResult, ListType, PatternKey, Span, Style};
