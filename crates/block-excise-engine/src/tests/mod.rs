use relative_path::RelativePath;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary project root
pub fn create_test_root() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file under the root, including any parent directories
pub fn create_test_file(root: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = RelativePath::new(relative).to_path(root.path());
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
