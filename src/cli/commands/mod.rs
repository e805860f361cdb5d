//! Command implementations

mod config;
mod interactive;
mod query;

pub use config::show_config;
pub use interactive::interactive;
pub use query::query;

use anyhow::Context;
use gradebook::config::GradebookConfig;
use gradebook::gradebook::GradeBook;

/// Load the grade book described by the config
fn load_book(config: &GradebookConfig) -> anyhow::Result<GradeBook> {
    GradeBook::load(&config.data, config.grading.groups).context("failed to load grade book")
}
