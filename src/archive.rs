//! Zip archive creation for project folders.
//!
//! Produces the downloadable artifact of a successful submission: a zip of
//! the configured project directory, written into that directory's parent.
//! Entries are stored under a top-level directory named after the folder, so
//! extracting the archive reproduces the folder itself:
//!
//! ```text
//! docs/
//! ├── project_1/           # source folder
//! │   ├── dossier.md
//! │   └── img/plot.png
//! └── project_1.zip        # archive → project_1/dossier.md, project_1/img/plot.png
//! ```
//!
//! An existing archive at the destination path is overwritten without
//! warning; there is no versioning and no cleanup.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("source folder does not exist: {0}")]
    MissingSource(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Zip `folder` into `<folder.parent>/<base_name>.zip` and return the
/// archive's path.
///
/// Directory entries are written explicitly so empty directories survive
/// extraction. Entry names always use forward slashes.
pub fn zip_folder(folder: &Path, base_name: &str) -> Result<PathBuf, ArchiveError> {
    if !folder.is_dir() {
        return Err(ArchiveError::MissingSource(folder.to_path_buf()));
    }

    let parent = folder.parent().unwrap_or(Path::new(""));
    let dest = parent.join(format!("{base_name}.zip"));
    let prefix = folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| base_name.to_string());

    let file = File::create(&dest)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for entry in WalkDir::new(folder).follow_links(false) {
        let entry = entry?;
        let path = entry.path();
        let rel = path.strip_prefix(folder).unwrap_or(path);
        let name = if rel.as_os_str().is_empty() {
            prefix.clone()
        } else {
            format!("{}/{}", prefix, rel.to_string_lossy().replace('\\', "/"))
        };

        if path.is_dir() {
            zip.add_directory(name, options)?;
        } else {
            zip.start_file(name, options)?;
            let mut f = File::open(path)?;
            io::copy(&mut f, &mut zip)?;
        }
    }

    zip.finish()?;
    Ok(dest)
}
