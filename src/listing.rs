//! First-level listing of the projects root.
//!
//! Backs the sidebar of the original tool: only the immediate entries of the
//! root are shown, in sorted order, with no recursion. The presentation
//! layer decorates every entry with a folder icon regardless of whether it
//! is a file or a directory — that quirk is deliberate and preserved.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("path does not exist: {0}")]
    MissingRoot(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Sorted first-level entry names of `root`.
pub fn list_entries(root: &Path) -> Result<Vec<String>, ListingError> {
    if !root.exists() {
        return Err(ListingError::MissingRoot(root.to_path_buf()));
    }

    let mut entries: Vec<String> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();

    entries.sort();
    Ok(entries)
}
