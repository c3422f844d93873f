//! Markdown report preview.
//!
//! Splits a report document on the inline image syntax `![alt](path)` and
//! resolves each reference so the presentation layer can interleave text
//! blocks with images. References are treated identically wherever they
//! appear — there is no code-fence or escaping awareness, matching the
//! report format this tool consumes.
//!
//! Resolution rules:
//! - `http://` / `https://` URLs are remote fetches;
//! - anything else is a local path, resolved against a base directory
//!   (the working directory in production, a temp dir in tests);
//! - a local path that does not exist degrades to an inline warning instead
//!   of aborting the render.
//!
//! The document itself is read-only; a missing report file propagates as a
//! read error.
//!
//! The optional HTML rendering runs each text block through pulldown-cmark
//! and assembles the page with maud.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use pulldown_cmark::{html as md_html, Parser};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A document slice before image resolution: either a text block or the raw
/// target of an image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSegment {
    Text(String),
    Image(String),
}

/// A resolved image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Absolute http/https URL, fetched by the viewer.
    Remote(String),
    /// Existing local file, path already resolved against the base dir.
    Local(PathBuf),
    /// Local reference that did not resolve; rendered as a warning.
    Missing(String),
}

/// A renderable document slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Image(ImageRef),
}

/// Split markdown on `![alt](path)` references.
///
/// Pure function. Segments strictly alternate text / image / text / … /
/// text, so a document with N references yields N image segments and N+1
/// text segments (possibly empty ones, which renderers skip).
pub fn split_segments(markdown: &str) -> Vec<RawSegment> {
    // Same pattern the report format has always used.
    let pattern = Regex::new(r"!\[.*?\]\((.*?)\)").expect("image pattern is valid");

    let mut segments = Vec::new();
    let mut last = 0;
    for caps in pattern.captures_iter(markdown) {
        let whole = caps.get(0).expect("match 0 always present");
        let target = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        segments.push(RawSegment::Text(markdown[last..whole.start()].to_string()));
        segments.push(RawSegment::Image(target.to_string()));
        last = whole.end();
    }
    segments.push(RawSegment::Text(markdown[last..].to_string()));
    segments
}

fn is_remote(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Resolve raw image references against `base_dir`.
pub fn resolve(segments: Vec<RawSegment>, base_dir: &Path) -> Vec<Segment> {
    segments
        .into_iter()
        .map(|segment| match segment {
            RawSegment::Text(text) => Segment::Text(text),
            RawSegment::Image(target) => {
                let image = if is_remote(&target) {
                    ImageRef::Remote(target)
                } else {
                    let local = base_dir.join(&target);
                    if local.exists() {
                        ImageRef::Local(local)
                    } else {
                        ImageRef::Missing(target)
                    }
                };
                Segment::Image(image)
            }
        })
        .collect()
}

/// Read the report file and return its resolved segments.
///
/// A missing report file is a hard error here — only missing *images* degrade
/// to warnings.
pub fn load_preview(report_path: &Path, base_dir: &Path) -> Result<Vec<Segment>, PreviewError> {
    let content = fs::read_to_string(report_path)?;
    Ok(resolve(split_segments(&content), base_dir))
}

/// Render one markdown text block to an HTML fragment.
fn markdown_to_html(text: &str) -> String {
    let parser = Parser::new(text);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// Render resolved segments as a standalone HTML preview page.
pub fn render_html(title: &str, segments: &[Segment]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (PreEscaped(PREVIEW_CSS)) }
            }
            body {
                main {
                    @for segment in segments {
                        @match segment {
                            Segment::Text(text) => {
                                @if !text.trim().is_empty() {
                                    (PreEscaped(markdown_to_html(text)))
                                }
                            }
                            Segment::Image(ImageRef::Remote(url)) => {
                                img src=(url) alt="";
                            }
                            Segment::Image(ImageRef::Local(path)) => {
                                img src=(path.to_string_lossy()) alt="";
                            }
                            Segment::Image(ImageRef::Missing(target)) => {
                                p class="warning" { "Image not found: " (target) }
                            }
                        }
                    }
                }
            }
        }
    }
}

const PREVIEW_CSS: &str = "\
main { max-width: 48rem; margin: 2rem auto; font-family: system-ui, sans-serif; }
img { max-width: 100%; }
.warning { background: #fff3cd; border: 1px solid #ffe69c; padding: 0.5rem 1rem; }
";
