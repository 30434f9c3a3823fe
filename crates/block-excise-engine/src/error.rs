use crate::markers::MarkerKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExciseError {
    #[error("{kind} marker not found: {marker:?}")]
    MarkerNotFound { kind: MarkerKind, marker: String },

    #[error("{kind} marker {marker:?} occurs {occurrences} times, expected exactly once")]
    AmbiguousMarker {
        kind: MarkerKind,
        marker: String,
        occurrences: usize,
    },

    #[error("{0} marker must not be empty")]
    EmptyMarker(MarkerKind),
}

impl ExciseError {
    /// The marker this error is about
    pub fn kind(&self) -> MarkerKind {
        match self {
            ExciseError::MarkerNotFound { kind, .. } => *kind,
            ExciseError::AmbiguousMarker { kind, .. } => *kind,
            ExciseError::EmptyMarker(kind) => *kind,
        }
    }
}
