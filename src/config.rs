//! Configuration management
//!
//! Settings come from, in order of precedence: command-line flags, an
//! explicit `--config` file, `./gradebook.toml`, the user-level
//! `~/.config/gradebook/config.toml`, and finally built-in defaults.
//!
//! ```toml
//! [data]
//! students = "data/students.txt"
//! assignments = "data/assignments.txt"
//! submissions = "data/submissions/"
//!
//! [grading]
//! total_points = 1000
//! groups = "lenient"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::loader::GroupPolicy;
use crate::paths;
use crate::query::DEFAULT_TOTAL_POINTS;

/// Top-level gradebook configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Where the input files live
    #[serde(default)]
    pub data: DataPaths,
    /// Grading policy
    #[serde(default)]
    pub grading: GradingConfig,
}

/// Locations of the three input sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    /// Roster file
    pub students: PathBuf,
    /// Assignment catalog file
    pub assignments: PathBuf,
    /// Directory of submission files
    pub submissions: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            students: PathBuf::from(paths::DEFAULT_STUDENTS),
            assignments: PathBuf::from(paths::DEFAULT_ASSIGNMENTS),
            submissions: PathBuf::from(paths::DEFAULT_SUBMISSIONS),
        }
    }
}

/// Grading policy settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    /// Points the course is graded out of (course convention: 1000)
    pub total_points: f64,
    /// Handling of a trailing partial assignment group
    pub groups: GroupPolicy,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            total_points: DEFAULT_TOTAL_POINTS,
            groups: GroupPolicy::default(),
        }
    }
}

impl GradebookConfig {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        if !(config.grading.total_points.is_finite() && config.grading.total_points > 0.0) {
            anyhow::bail!("grading.total_points must be a positive number");
        }
        Ok(config)
    }

    /// Load config from an explicit file; any failure is an error
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Load config from `explicit` if given, otherwise from the first of the
    /// local and global config files that exists, otherwise defaults
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        for candidate in [paths::local_config(), paths::global_config()] {
            if candidate.is_file() {
                log::debug!("Using config {}", candidate.display());
                return Self::load_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
