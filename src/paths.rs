//! Centralized path definitions for gradebook
//!
//! ## Data Layout
//!
//! ```text
//! data/
//! ├── students.txt          # Roster, one "IIIName" line per student
//! ├── assignments.txt       # Catalog, name / id / points triplets
//! └── submissions/          # One "student|assignment|percent" file each
//!     ├── 001-A1.txt
//!     └── 002-A1.txt
//! ```
//!
//! ## Configuration
//!
//! ```text
//! ./gradebook.toml                  # Project-local, checked first
//! ~/.config/gradebook/config.toml   # User-level fallback
//! ```

use std::path::PathBuf;

/// Default roster file
pub const DEFAULT_STUDENTS: &str = "data/students.txt";

/// Default assignment catalog file
pub const DEFAULT_ASSIGNMENTS: &str = "data/assignments.txt";

/// Default submissions directory
pub const DEFAULT_SUBMISSIONS: &str = "data/submissions/";

/// Project-local configuration filename
pub const LOCAL_CONFIG: &str = "gradebook.toml";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global config directory (`~/.config/gradebook`).
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config")).join("gradebook")
}

/// Get path to the global config file.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get path to the project-local config file in the working directory.
#[must_use]
pub fn local_config() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG)
}
