mod join_result;
mod list_type;
mod pattern_key;
mod span;
mod style;

pub use join_result::JoinResult;
pub use list_type::ListType;
pub use pattern_key::PatternKey;
pub use span::Span;
pub use style::Style;
