//! CLI definitions and entry point

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use gradebook::config::GradebookConfig;
use gradebook::loader::GroupPolicy;
use gradebook::menu::{QueryKind, QueryOptions};
use gradebook::output::OutputMode;

/// gradebook - Student grades and assignment statistics from flat files
#[derive(Parser, Debug)]
#[command(
    name = "gradebook",
    version,
    about = "Student grades and assignment statistics from flat files",
    long_about = "Load a roster, an assignment catalog and a directory of submissions,\n\
                  then report a student's grade, an assignment's statistics or an\n\
                  assignment's score histogram.\n\n\
                  Without a subcommand an interactive menu is shown."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./gradebook.toml, then ~/.config/gradebook/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Roster file
    #[arg(long, global = true)]
    pub students: Option<PathBuf>,

    /// Assignment catalog file
    #[arg(long, global = true)]
    pub assignments: Option<PathBuf>,

    /// Directory of submission files
    #[arg(long, global = true)]
    pub submissions: Option<PathBuf>,

    /// Fail on an incomplete trailing assignment group instead of dropping it
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a student's overall grade
    Grade {
        /// Student name (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Show min / avg / max for an assignment
    Stats {
        /// Assignment name (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Show a histogram of an assignment's scores
    Graph {
        /// Assignment name (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

impl Cli {
    /// Config file values with command-line overrides applied
    fn effective_config(&self) -> anyhow::Result<GradebookConfig> {
        let mut config = GradebookConfig::load(self.config.as_deref())?;

        if let Some(path) = &self.students {
            config.data.students.clone_from(path);
        }
        if let Some(path) = &self.assignments {
            config.data.assignments.clone_from(path);
        }
        if let Some(path) = &self.submissions {
            config.data.submissions.clone_from(path);
        }
        if self.strict {
            config.grading.groups = GroupPolicy::Strict;
        }

        Ok(config)
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    if let Some(Command::Version) = cli.command {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION")
                })
            );
        } else {
            println!("gradebook v{}", env!("CARGO_PKG_VERSION"));
        }
        return Ok(());
    }

    let config = cli.effective_config()?;
    let opts = QueryOptions {
        total_points: config.grading.total_points,
        mode: output_mode,
        color: output_mode == OutputMode::Human && std::io::stdout().is_terminal(),
    };

    match cli.command {
        Some(Command::Grade { name }) => {
            commands::query(&config, QueryKind::StudentGrade, &name.join(" "), &opts)
        },
        Some(Command::Stats { name }) => {
            commands::query(&config, QueryKind::AssignmentStats, &name.join(" "), &opts)
        },
        Some(Command::Graph { name }) => {
            commands::query(&config, QueryKind::AssignmentGraph, &name.join(" "), &opts)
        },
        Some(Command::Config) => commands::show_config(&config, output_mode),
        Some(Command::Version) => Ok(()),
        None => commands::interactive(&config, &opts),
    }
}
