//! Tool configuration module.
//!
//! Handles loading and validating `config.toml`. The original deployment
//! hardwired its project and report paths; here they are explicit
//! configuration so tests can point the processor at temporary directories.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! projects_root = "projects"       # Directory listed by `dossier list`
//! project_dir = "docs/project_1"   # Folder that gets archived on submit
//! report_file = "dossier.md"       # Report file inside project_dir
//!
//! [processing]
//! work_delay_ms = 3000             # Simulated processing delay
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the archived folder
//! project_dir = "docs/project_2"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `config.toml`.
///
/// All fields have defaults matching the original deployment layout. User
/// config files need only specify the values they want to override. Unknown
/// keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DossierConfig {
    /// Directory whose first-level entries are shown by the `list` command.
    pub projects_root: PathBuf,
    /// The folder archived on every successful submission.
    pub project_dir: PathBuf,
    /// Report filename, resolved inside `project_dir`.
    pub report_file: String,
    /// Processing behaviour (simulated work delay).
    pub processing: ProcessingConfig,
}

impl Default for DossierConfig {
    fn default() -> Self {
        Self {
            projects_root: PathBuf::from("projects"),
            project_dir: PathBuf::from("docs/project_1"),
            report_file: "dossier.md".to_string(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl DossierConfig {
    /// Full path of the report file inside the project directory.
    pub fn report_path(&self) -> PathBuf {
        self.project_dir.join(&self.report_file)
    }

    /// Base name used for the archive, taken from the project directory name.
    pub fn archive_base_name(&self) -> String {
        self.project_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "project".to_string())
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "report_file must not be empty".into(),
            ));
        }
        if self.project_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "project_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Processing behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Simulated work delay in milliseconds, applied before dispatch.
    /// Tests set this to 0 to run synchronously.
    pub work_delay_ms: u64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self { work_delay_ms: 3000 }
    }
}

/// Load `config.toml` from the given path, falling back to stock defaults
/// when the file does not exist. The parsed config is validated before it is
/// returned.
pub fn load_config(path: &Path) -> Result<DossierConfig, ConfigError> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        DossierConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Dossier Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory whose first-level entries are shown by `dossier list`.
projects_root = "projects"

# Folder that gets archived on every successful submission. The archive is
# written next to this folder (in its parent directory) and named after it.
project_dir = "docs/project_1"

# Report filename, resolved inside project_dir, shown by `dossier preview`.
report_file = "dossier.md"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Simulated work delay in milliseconds, applied before the archive is built.
work_delay_ms = 3000
"##
}
