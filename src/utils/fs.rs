use crate::error::{Result, SeleneError};
use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
pub fn expand_home(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = input
        .strip_prefix("~/")
        .or_else(|| input.strip_prefix("~\\"))
    {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

/// Creates `path` and its parents. Succeeds if it already is a directory.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(|e| create_dir_error(path, e))
}

fn create_dir_error(path: &Path, e: std::io::Error) -> SeleneError {
    match e.kind() {
        std::io::ErrorKind::PermissionDenied => SeleneError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => SeleneError::DirectoryCreation {
            path: path.to_path_buf(),
            source: e,
        },
    }
}

/// Keeps only the final component of a user-supplied filename.
pub fn sanitize_filename(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Path::new(trimmed)
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
}
