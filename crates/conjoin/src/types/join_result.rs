/// The output of [`join`](crate::join): the formatted text and the byte
/// offset at which each item begins within it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JoinResult {
    text: String,
    offsets: Vec<usize>,
}

impl JoinResult {
    /// Create a join result from formatted text and per-item byte offsets.
    ///
    /// No validation happens here; [`extract_spans`](crate::extract_spans)
    /// checks the offsets against the items it is given.
    pub fn new(text: impl Into<String>, offsets: Vec<usize>) -> Self {
        Self {
            text: text.into(),
            offsets,
        }
    }

    /// The formatted list.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of each item within [`text`](Self::text), in item order.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Consume the result, keeping only the formatted text.
    pub fn into_text(self) -> String {
        self.text
    }
}
