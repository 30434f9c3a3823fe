//! Locating and cutting out the marker-delimited block.
//!
//! The block runs from the first start marker, through the first middle
//! marker at or after it, up to and including the first closing marker after
//! that. Line breaks directly following the closing marker go with it so the
//! removal does not leave a blank line behind.

use crate::document::{Document, Span};
use crate::error::ExciseError;
use crate::markers::{MarkerKind, Markers, MatchPolicy};

/// Result of a successful excision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excision {
    /// Range removed from the input document
    pub span: Span,
    /// The rewritten document
    pub output: Document,
}

/// Find the span to remove without modifying anything.
pub fn locate_span(
    document: &Document,
    markers: &Markers,
    policy: MatchPolicy,
) -> Result<Span, ExciseError> {
    let text = document.as_str();

    let start = find_from(text, markers, MarkerKind::Start, 0)?;
    if policy == MatchPolicy::Strict {
        ensure_unique(text, markers, MarkerKind::Start, 0)?;
    }

    let middle = find_from(text, markers, MarkerKind::Middle, start)?;
    if policy == MatchPolicy::Strict {
        ensure_unique(text, markers, MarkerKind::Middle, start)?;
    }

    let closing = find_from(text, markers, MarkerKind::Closing, middle)?;
    let end = skip_line_breaks(text, closing + markers.closing().len());

    log::debug!("start marker at {start}, middle marker at {middle}, closing marker at {closing}");

    Ok(Span::new(start, end))
}

/// Locate the block and build the document without it.
pub fn excise(
    document: &Document,
    markers: &Markers,
    policy: MatchPolicy,
) -> Result<Excision, ExciseError> {
    let span = locate_span(document, markers, policy)?;
    let output = document.without(span);
    Ok(Excision { span, output })
}

fn find_from(
    text: &str,
    markers: &Markers,
    kind: MarkerKind,
    from: usize,
) -> Result<usize, ExciseError> {
    let marker = markers.get(kind);
    text[from..]
        .find(marker)
        .map(|offset| from + offset)
        .ok_or_else(|| ExciseError::MarkerNotFound {
            kind,
            marker: marker.to_string(),
        })
}

fn ensure_unique(
    text: &str,
    markers: &Markers,
    kind: MarkerKind,
    from: usize,
) -> Result<(), ExciseError> {
    let marker = markers.get(kind);
    let occurrences = text[from..].matches(marker).count();
    if occurrences > 1 {
        return Err(ExciseError::AmbiguousMarker {
            kind,
            marker: marker.to_string(),
            occurrences,
        });
    }
    Ok(())
}

/// Advance past any run of `\r` / `\n` starting at `pos`
fn skip_line_breaks(text: &str, pos: usize) -> usize {
    let trailing = text.as_bytes()[pos..]
        .iter()
        .take_while(|&&b| b == b'\r' || b == b'\n')
        .count();
    pos + trailing
}
