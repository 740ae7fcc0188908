//! Parsed form of a list pattern string.

/// A parsed pattern string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Connective text, with `{{` and `}}` escapes already resolved.
    Literal(String),
    /// A positional placeholder.
    Placeholder(Slot),
}

/// The two positional placeholders of a list pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// `{0}`: the accumulated list, or the first item.
    First,
    /// `{1}`: the item being added.
    Second,
}

impl Template {
    /// Number of placeholders for `slot` in this template.
    pub fn count(&self, slot: Slot) -> usize {
        self.segments
            .iter()
            .filter(|segment| **segment == Segment::Placeholder(slot))
            .count()
    }
}
