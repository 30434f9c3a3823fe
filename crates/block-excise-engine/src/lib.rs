pub mod document;
pub mod error;
pub mod io;
pub mod markers;
pub mod remover;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::{Document, Span};
pub use error::ExciseError;
pub use io::{IoError, RunError};
pub use markers::*;
pub use remover::{Excision, excise, locate_span};
