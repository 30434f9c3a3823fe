use std::fmt;

use crate::error::ExciseError;

/// Opening of the promo header block in the profile screen
pub const DEFAULT_START_MARKER: &str = r#"<div className="absolute w-full h"#;
pub const DEFAULT_MIDDLE_MARKER: &str = r#"<Link href="/anuncio""#;
pub const DEFAULT_CLOSING_MARKER: &str = "</Link>";

/// Which of the three markers something refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Start,
    Middle,
    Closing,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MarkerKind::Start => "start",
            MarkerKind::Middle => "middle",
            MarkerKind::Closing => "closing",
        };
        f.write_str(name)
    }
}

/// How repeated markers are treated when locating the block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Act on the first qualifying occurrence of each marker.
    #[default]
    FirstMatch,
    /// Require the start marker to be unique in the document, and the middle
    /// marker to be unique from the start marker onward.
    Strict,
}

impl MatchPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            MatchPolicy::Strict
        } else {
            MatchPolicy::FirstMatch
        }
    }
}

/// The three literal markers delimiting the block to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    start: String,
    middle: String,
    closing: String,
}

impl Markers {
    pub fn new(
        start: impl Into<String>,
        middle: impl Into<String>,
        closing: impl Into<String>,
    ) -> Result<Self, ExciseError> {
        let markers = Self {
            start: start.into(),
            middle: middle.into(),
            closing: closing.into(),
        };

        for kind in [MarkerKind::Start, MarkerKind::Middle, MarkerKind::Closing] {
            if markers.get(kind).is_empty() {
                return Err(ExciseError::EmptyMarker(kind));
            }
        }

        Ok(markers)
    }

    pub fn get(&self, kind: MarkerKind) -> &str {
        match kind {
            MarkerKind::Start => &self.start,
            MarkerKind::Middle => &self.middle,
            MarkerKind::Closing => &self.closing,
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn middle(&self) -> &str {
        &self.middle
    }

    pub fn closing(&self) -> &str {
        &self.closing
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            middle: DEFAULT_MIDDLE_MARKER.to_string(),
            closing: DEFAULT_CLOSING_MARKER.to_string(),
        }
    }
}
