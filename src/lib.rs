//! # Dossier
//!
//! A small interactive tool for packaging a project folder into a
//! downloadable zip dossier and previewing its markdown report.
//!
//! # Architecture
//!
//! Two collaborating pieces:
//!
//! ```text
//! 1. Presentation   clap CLI (list / submit / preview / gen-config)
//! 2. Processing     validate → delay → dispatch → archive → SubmissionResult
//! ```
//!
//! The processing core lives in this library so the whole workflow is
//! callable and testable without the CLI: the processor takes explicit
//! configuration (no hardcoded paths), the simulated work delay is
//! injectable, and the outcome of every attempt is a single serializable
//! [`submit::SubmissionResult`] held by the caller — success flag, a
//! human-readable message, and a payload of output paths. Nothing else
//! crosses the submission boundary.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`submit`] | Input validation and the submission workflow |
//! | [`archive`] | Zips the project folder into its parent directory |
//! | [`preview`] | Splits the report on `![alt](path)` and resolves images |
//! | [`listing`] | First-level listing of the projects root |
//! | [`config`] | `config.toml` loading, defaults, validation |
//! | [`output`] | CLI output formatting — pure `format_*` functions |
//!
//! # Design Decisions
//!
//! ## One Dispatch Path
//!
//! The github and local source types currently produce identical output;
//! they differ only in the result's `source_type` tag and success message.
//! Rather than two near-duplicate handlers, [`submit::Processor`] runs a
//! single parameterized path. Real divergence, when it arrives, goes into
//! that one function.
//!
//! ## Failure Is a Result, Not an Error
//!
//! [`submit::Processor::handle_submission`] never returns `Err`. Validation
//! rejections and archive failures both come back as a failure-flavored
//! `SubmissionResult`, so the presentation layer has exactly one rendering
//! path and nothing propagates past the submission boundary.
//!
//! ## Graceful Preview Degradation
//!
//! A report that references missing images still renders: each unresolved
//! reference becomes an inline warning in place of the image. Only a missing
//! report *file* is a hard error.

pub mod archive;
pub mod config;
pub mod listing;
pub mod output;
pub mod preview;
pub mod submit;
