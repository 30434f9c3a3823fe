/// A byte range `[start, end)` into a [`Document`].
///
/// Offsets produced by the remover always fall on character boundaries: markers
/// are found by literal substring search and the only characters consumed past
/// the closing marker are ASCII line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "span start {start} is after end {end}");
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// The full text of the target file, held in memory for one run.
///
/// A document is never edited in place; [`Document::without`] builds the
/// rewritten copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text covered by `span`
    pub fn slice(&self, span: Span) -> &str {
        &self.text[span.start..span.end]
    }

    /// Copy of this document with `span` cut out: prefix `[0, start)` joined
    /// to suffix `[end, len)`.
    pub fn without(&self, span: Span) -> Document {
        let mut text = String::with_capacity(self.text.len() - span.len());
        text.push_str(&self.text[..span.start]);
        text.push_str(&self.text[span.end..]);
        Document { text }
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
