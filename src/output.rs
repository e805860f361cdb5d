//! Output formatting for human and JSON modes
//!
//! Query results render either as the plain text the interactive menu
//! prints, or as machine-parseable JSON. A query miss renders as its
//! message in human mode and as `{"error": ...}` in JSON mode.

use serde::Serialize;

use crate::error::QueryMiss;
use crate::query::{DistributionReport, GradeReport, StatsReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A query report that can be shown to the user
pub trait Render: Serialize {
    /// Human-readable text, optionally with terminal colours
    fn render_human(&self, color: bool) -> String;
}

impl Render for GradeReport {
    fn render_human(&self, _color: bool) -> String {
        self.to_string()
    }
}

impl Render for StatsReport {
    fn render_human(&self, _color: bool) -> String {
        self.to_string()
    }
}

impl Render for DistributionReport {
    fn render_human(&self, color: bool) -> String {
        self.render(color)
    }
}

/// JSON body for a query that produced no value
#[derive(Debug, Serialize)]
struct MissData {
    error: String,
}

/// Render the outcome of a query
#[must_use]
pub fn render_outcome<T: Render>(
    outcome: &Result<T, QueryMiss>,
    mode: OutputMode,
    color: bool,
) -> String {
    match (outcome, mode) {
        (Ok(report), OutputMode::Human) => report.render_human(color),
        (Ok(report), OutputMode::Json) => to_json(report),
        (Err(miss), OutputMode::Human) => miss.to_string(),
        (Err(miss), OutputMode::Json) => to_json(&MissData {
            error: miss.to_string(),
        }),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
