use crate::document::Document;
use crate::error::ExciseError;
use crate::markers::{Markers, MatchPolicy};
use crate::remover::{Excision, excise};
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid project root: {0}")]
    InvalidRoot(String),
}

/// Anything that can stop a run before the file is rewritten
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Excise(#[from] ExciseError),
}

/// Read the target file into a document
pub fn read_document(relative_path: &RelativePath, root: &Path) -> Result<Document, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let text = fs::read_to_string(&absolute_path).map_err(IoError::Io)?;
    Ok(Document::new(text))
}

/// Overwrite the target file with `document`
pub fn write_document(
    relative_path: &RelativePath,
    root: &Path,
    document: &Document,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);
    fs::write(&absolute_path, document.as_str()).map_err(IoError::Io)
}

pub fn validate_root(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidRoot(format!(
            "{} is not an existing directory",
            path.display()
        )));
    }

    Ok(())
}

/// Read the target, cut out the block and write the result back.
///
/// The file is only written once the whole span has been located, so any
/// error leaves it untouched.
pub fn excise_file(
    relative_path: &RelativePath,
    root: &Path,
    markers: &Markers,
    policy: MatchPolicy,
) -> Result<Excision, RunError> {
    let document = read_document(relative_path, root)?;
    let excision = excise(&document, markers, policy)?;
    write_document(relative_path, root, &excision.output)?;

    log::debug!(
        "rewrote {} ({} -> {} bytes)",
        relative_path,
        document.len(),
        excision.output.len()
    );

    Ok(excision)
}
