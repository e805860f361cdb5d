//! Show the effective configuration

use gradebook::config::GradebookConfig;
use gradebook::output::OutputMode;

/// Print the configuration after file and flag overrides
pub fn show_config(config: &GradebookConfig, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputMode::Human => print!("{}", config.to_toml()?),
    }
    Ok(())
}
