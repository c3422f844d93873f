//! Submission validation and processing.
//!
//! The core workflow behind the submit form: validate the two inputs,
//! simulate the long-running processing step, build the project archive, and
//! return a uniform [`SubmissionResult`] the presentation layer can render
//! and hold. The result object is the only state that crosses the submission
//! boundary — no session flags, no partial payloads.
//!
//! ```text
//! Idle → Validating → (Rejected | Processing) → (Succeeded | Failed)
//! ```
//!
//! The github and local branches of the original were copy-paste duplicates;
//! dispatch here is a single path where the source tag only affects the
//! result's metadata and success message.

use crate::archive;
use crate::config::DossierConfig;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Origin category selected for a submission.
///
/// Currently a label only: both variants archive the same configured folder.
/// The variants exist so genuine behavioral divergence has somewhere to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Github,
    Local,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Github => "github",
            Source::Local => "local",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Source::Github),
            "local" => Ok(Source::Local),
            "" => Err(ValidationError::MissingSource),
            other => Err(ValidationError::InvalidSource(other.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Source must be selected")]
    MissingSource,
    #[error("Invalid source '{0}'. Must be one of: github, local")]
    InvalidSource(String),
    #[error("Text input cannot be empty")]
    EmptyText,
}

/// Validate raw form inputs, returning the parsed source on acceptance.
///
/// Text gets no length limit and no sanitization — it only has to contain
/// something other than whitespace.
pub fn validate(source: &str, text: &str) -> Result<Source, ValidationError> {
    let source = source.parse::<Source>()?;
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Ok(source)
}

/// Outcome of one submission attempt.
///
/// Constructed exactly once per attempt and never mutated afterwards. On
/// success, `data` carries `source_type`, `input_value`,
/// `processed_timestamp`, `zip_path`, `zip_name` and `file_path`; on failure
/// it is empty and `message` explains why.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    pub data: BTreeMap<String, String>,
}

impl SubmissionResult {
    fn succeeded(message: impl Into<String>, data: BTreeMap<String, String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: BTreeMap::new(),
        }
    }

    /// Path of the produced archive, present on success.
    pub fn zip_path(&self) -> Option<&str> {
        self.data.get("zip_path").map(String::as_str)
    }

    /// Suggested download filename, present on success.
    pub fn zip_name(&self) -> Option<&str> {
        self.data.get("zip_name").map(String::as_str)
    }

    /// Path of the markdown report, present on success.
    pub fn file_path(&self) -> Option<&str> {
        self.data.get("file_path").map(String::as_str)
    }
}

/// Runs the submission workflow against a fixed configuration.
pub struct Processor {
    config: DossierConfig,
    delay: Duration,
}

impl Processor {
    /// Processor with the delay taken from the config's
    /// `processing.work_delay_ms`.
    pub fn new(config: DossierConfig) -> Self {
        let delay = Duration::from_millis(config.processing.work_delay_ms);
        Self { config, delay }
    }

    /// Override the simulated work delay. Tests pass `Duration::ZERO`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Handle one submission attempt end to end.
    ///
    /// Never returns an error: validation failures and archive failures both
    /// come back as a failure-flavored [`SubmissionResult`], so the caller
    /// has a single rendering path.
    pub fn handle_submission(&self, source: &str, text: &str) -> SubmissionResult {
        let source = match validate(source, text) {
            Ok(source) => source,
            Err(e) => return SubmissionResult::failed(e.to_string()),
        };

        // Simulated long-running work; blocks the whole interaction.
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        self.process(source, text)
    }

    fn process(&self, source: Source, text: &str) -> SubmissionResult {
        let base_name = self.config.archive_base_name();

        let zip_path = match archive::zip_folder(&self.config.project_dir, &base_name) {
            Ok(path) => path,
            Err(e) => {
                return SubmissionResult::failed(format!(
                    "Error generating the dossier: {e}"
                ));
            }
        };

        let mut data = BTreeMap::new();
        data.insert("source_type".to_string(), source.to_string());
        data.insert("input_value".to_string(), text.to_string());
        data.insert(
            "processed_timestamp".to_string(),
            chrono::Local::now().to_rfc3339(),
        );
        data.insert(
            "zip_path".to_string(),
            zip_path.to_string_lossy().to_string(),
        );
        data.insert("zip_name".to_string(), format!("{base_name}.zip"));
        data.insert(
            "file_path".to_string(),
            self.config.report_path().to_string_lossy().to_string(),
        );

        let message = match source {
            Source::Github => "Dossier generated from github source",
            Source::Local => "Dossier generated from local source",
        };
        SubmissionResult::succeeded(message, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn test_config(tmp: &TempDir) -> DossierConfig {
        let project = tmp.path().join("project_1");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("dossier.md"), "# Dossier\n").unwrap();

        DossierConfig {
            projects_root: tmp.path().to_path_buf(),
            project_dir: project,
            report_file: "dossier.md".to_string(),
            ..DossierConfig::default()
        }
    }

    fn test_processor(tmp: &TempDir) -> Processor {
        Processor::new(test_config(tmp)).with_delay(Duration::ZERO)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn empty_source_rejected() {
        assert_eq!(validate("", "hello"), Err(ValidationError::MissingSource));
    }

    #[test]
    fn unknown_source_rejected_naming_allowed_set() {
        let err = validate("gitlab", "hello").unwrap_err();
        assert!(err.to_string().contains("github, local"));
    }

    #[test]
    fn empty_text_rejected() {
        assert_eq!(validate("github", ""), Err(ValidationError::EmptyText));
    }

    #[test]
    fn whitespace_text_rejected_even_with_valid_source() {
        assert_eq!(validate("local", "   \t\n"), Err(ValidationError::EmptyText));
    }

    #[test]
    fn valid_inputs_accepted() {
        assert_eq!(validate("github", "repo-url"), Ok(Source::Github));
        assert_eq!(validate("local", "some value"), Ok(Source::Local));
    }

    #[test]
    fn source_parse_is_case_sensitive() {
        assert!(matches!(
            "GitHub".parse::<Source>(),
            Err(ValidationError::InvalidSource(_))
        ));
    }

    // =========================================================================
    // Processor
    // =========================================================================

    #[test]
    fn rejected_submission_has_no_side_effects() {
        let tmp = TempDir::new().unwrap();
        let processor = test_processor(&tmp);

        let result = processor.handle_submission("github", "   ");

        assert!(!result.success);
        assert_eq!(result.message, "Text input cannot be empty");
        assert!(result.data.is_empty());
        assert!(!tmp.path().join("project_1.zip").exists());
    }

    #[test]
    fn successful_submission_paths_exist() {
        let tmp = TempDir::new().unwrap();
        let processor = test_processor(&tmp);

        let result = processor.handle_submission("github", "my input");

        assert!(result.success, "unexpected failure: {}", result.message);
        assert!(Path::new(result.zip_path().unwrap()).exists());
        assert!(Path::new(result.file_path().unwrap()).is_file());
        assert_eq!(result.zip_name(), Some("project_1.zip"));
    }

    #[test]
    fn payload_carries_source_tag_and_input() {
        let tmp = TempDir::new().unwrap();
        let processor = test_processor(&tmp);

        let result = processor.handle_submission("local", "dossier notes");

        assert_eq!(result.data["source_type"], "local");
        assert_eq!(result.data["input_value"], "dossier notes");
        assert!(result.data.contains_key("processed_timestamp"));
    }

    #[test]
    fn both_sources_produce_identical_paths() {
        let tmp = TempDir::new().unwrap();
        let processor = test_processor(&tmp);

        let github = processor.handle_submission("github", "x");
        let local = processor.handle_submission("local", "x");

        assert_eq!(github.zip_path(), local.zip_path());
        assert_eq!(github.file_path(), local.file_path());
        assert_ne!(github.data["source_type"], local.data["source_type"]);
    }

    #[test]
    fn resubmission_overwrites_same_archive() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(&tmp);
        let processor = Processor::new(config.clone()).with_delay(Duration::ZERO);

        let first = processor.handle_submission("github", "x");
        fs::write(config.project_dir.join("extra.txt"), "later").unwrap();
        let second = processor.handle_submission("github", "x");

        assert_eq!(first.zip_path(), second.zip_path());

        // The archive now reflects the folder's state at the second call.
        let file = fs::File::open(second.zip_path().unwrap()).unwrap();
        let archive = zip::ZipArchive::new(file).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert!(names.contains(&"project_1/extra.txt"));
    }

    #[test]
    fn archive_failure_becomes_failure_result() {
        let tmp = TempDir::new().unwrap();
        let config = DossierConfig {
            projects_root: tmp.path().to_path_buf(),
            project_dir: tmp.path().join("does_not_exist"),
            ..DossierConfig::default()
        };
        let processor = Processor::new(config).with_delay(Duration::ZERO);

        let result = processor.handle_submission("github", "x");

        assert!(!result.success);
        assert!(result.message.contains("Error generating the dossier"));
        assert!(result.message.contains("does_not_exist"));
        assert!(result.data.is_empty());
    }

    #[test]
    fn delay_comes_from_config() {
        let config = DossierConfig {
            project_dir: PathBuf::from("unused"),
            ..DossierConfig::default()
        };
        let processor = Processor::new(config);
        assert_eq!(processor.delay, Duration::from_millis(3000));
    }

    #[test]
    fn result_serializes_to_json() {
        let tmp = TempDir::new().unwrap();
        let processor = test_processor(&tmp);

        let result = processor.handle_submission("github", "x");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["source_type"], "github");
    }
}
