//! CLI output formatting.
//!
//! Each surface has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! # Output Format
//!
//! ## List
//!
//! ```text
//! Projects in projects
//! 📂 project_1
//! 📂 project_2
//! ```
//!
//! ## Submit
//!
//! ```text
//! Dossier generated from github source
//!     Archive: docs/project_1.zip
//!     Download name: project_1.zip
//!     Report: docs/project_1/dossier.md
//! ```
//!
//! ## Preview
//!
//! ```text
//! # Report title
//! [image] img/plot.png
//! ⚠ Image not found: img/missing.png
//! ```

use crate::preview::{ImageRef, Segment};
use crate::submit::SubmissionResult;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// List
// ============================================================================

/// Every entry gets the folder icon, file or not — sidebar behavior carried
/// over from the original tool.
pub fn format_listing(root: &Path, entries: &[String]) -> Vec<String> {
    let mut lines = vec![format!("Projects in {}", root.display())];
    if entries.is_empty() {
        lines.push(format!("{}(empty)", indent(1)));
    }
    for entry in entries {
        lines.push(format!("📂 {entry}"));
    }
    lines
}

pub fn print_listing(root: &Path, entries: &[String]) {
    for line in format_listing(root, entries) {
        println!("{line}");
    }
}

// ============================================================================
// Submit
// ============================================================================

pub fn format_submission(result: &SubmissionResult) -> Vec<String> {
    if !result.success {
        return vec![format!("error: {}", result.message)];
    }

    let mut lines = vec![result.message.clone()];
    if let Some(zip_path) = result.zip_path() {
        lines.push(format!("{}Archive: {zip_path}", indent(1)));
    }
    if let Some(zip_name) = result.zip_name() {
        lines.push(format!("{}Download name: {zip_name}", indent(1)));
    }
    if let Some(file_path) = result.file_path() {
        lines.push(format!("{}Report: {file_path}", indent(1)));
    }
    lines
}

pub fn print_submission(result: &SubmissionResult) {
    for line in format_submission(result) {
        println!("{line}");
    }
}

// ============================================================================
// Preview
// ============================================================================

pub fn format_preview(segments: &[Segment]) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => {
                if !text.trim().is_empty() {
                    lines.extend(text.trim_matches('\n').lines().map(String::from));
                }
            }
            Segment::Image(ImageRef::Remote(url)) => {
                lines.push(format!("[image] {url}"));
            }
            Segment::Image(ImageRef::Local(path)) => {
                lines.push(format!("[image] {}", path.display()));
            }
            Segment::Image(ImageRef::Missing(target)) => {
                lines.push(format!("⚠ Image not found: {target}"));
            }
        }
    }
    lines
}

pub fn print_preview(segments: &[Segment]) {
    for line in format_preview(segments) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn listing_decorates_every_entry_with_folder_icon() {
        let lines = format_listing(
            Path::new("projects"),
            &["a_dir".to_string(), "b_file.txt".to_string()],
        );

        assert_eq!(lines[0], "Projects in projects");
        assert_eq!(lines[1], "📂 a_dir");
        assert_eq!(lines[2], "📂 b_file.txt");
    }

    #[test]
    fn empty_listing_marked() {
        let lines = format_listing(Path::new("projects"), &[]);
        assert_eq!(lines[1], "    (empty)");
    }

    #[test]
    fn failed_submission_formats_as_error() {
        let result = SubmissionResult {
            success: false,
            message: "Text input cannot be empty".to_string(),
            data: Default::default(),
        };

        let lines = format_submission(&result);
        assert_eq!(lines, vec!["error: Text input cannot be empty"]);
    }

    #[test]
    fn successful_submission_lists_paths() {
        let mut data = std::collections::BTreeMap::new();
        data.insert("zip_path".to_string(), "docs/project_1.zip".to_string());
        data.insert("zip_name".to_string(), "project_1.zip".to_string());
        data.insert(
            "file_path".to_string(),
            "docs/project_1/dossier.md".to_string(),
        );
        let result = SubmissionResult {
            success: true,
            message: "Dossier generated from github source".to_string(),
            data,
        };

        let lines = format_submission(&result);
        assert_eq!(lines[0], "Dossier generated from github source");
        assert_eq!(lines[1], "    Archive: docs/project_1.zip");
        assert_eq!(lines[2], "    Download name: project_1.zip");
        assert_eq!(lines[3], "    Report: docs/project_1/dossier.md");
    }

    #[test]
    fn preview_warning_line_per_missing_image() {
        let segments = vec![
            Segment::Text("before".to_string()),
            Segment::Image(ImageRef::Missing("a.png".to_string())),
            Segment::Text(String::new()),
            Segment::Image(ImageRef::Missing("b.png".to_string())),
            Segment::Text("after".to_string()),
        ];

        let lines = format_preview(&segments);
        assert_eq!(
            lines,
            vec![
                "before",
                "⚠ Image not found: a.png",
                "⚠ Image not found: b.png",
                "after",
            ]
        );
    }

    #[test]
    fn preview_local_and_remote_image_lines() {
        let segments = vec![
            Segment::Image(ImageRef::Remote("https://example.com/a.png".to_string())),
            Segment::Image(ImageRef::Local(PathBuf::from("img/plot.png"))),
        ];

        let lines = format_preview(&segments);
        assert_eq!(lines[0], "[image] https://example.com/a.png");
        assert_eq!(lines[1], "[image] img/plot.png");
    }
}
