//! Interactive menu on the terminal

use std::io;

use gradebook::config::GradebookConfig;
use gradebook::menu::{QueryOptions, run_menu};

/// Load the grade book, then show the menu on stdin/stdout
pub fn interactive(config: &GradebookConfig, opts: &QueryOptions) -> anyhow::Result<()> {
    let book = super::load_book(config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(&book, opts, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
