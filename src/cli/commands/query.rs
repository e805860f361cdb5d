//! Non-interactive queries

use gradebook::config::GradebookConfig;
use gradebook::menu::{QueryKind, QueryOptions, run_query};

/// Load the grade book and run a single query
pub fn query(
    config: &GradebookConfig,
    kind: QueryKind,
    name: &str,
    opts: &QueryOptions,
) -> anyhow::Result<()> {
    let book = super::load_book(config)?;
    println!("{}", run_query(&book, kind, name.trim(), opts));
    Ok(())
}
