//! Text histogram of percent scores
//!
//! The layout is fixed: ten buckets of width 5 covering 50 to 100, with axis
//! ticks every 10. Buckets are half-open `[lo, lo + 5)` except the last,
//! which also includes 100. Scores outside `[50, 100]` (and NaN) fall in no
//! bucket and are only counted in [`Histogram::outside`].
//!
//! ```text
//!  50 |███ 3
//!     |█ 1
//!  60 |
//!  ...
//!  90 |██ 2
//!     |█ 1
//! 100 +
//! ```

use std::fmt::{self, Write as _};

use colored::Colorize;
use serde::Serialize;

/// Lowest bucket edge
pub const LOW: f64 = 50.0;

/// Highest bucket edge
pub const HIGH: f64 = 100.0;

/// Width of one bucket
pub const BUCKET_WIDTH: f64 = 5.0;

/// Number of buckets between [`LOW`] and [`HIGH`]
pub const BUCKETS: usize = 10;

/// Axis tick marks
pub const TICKS: [u32; 6] = [50, 60, 70, 80, 90, 100];

/// Widest bar, in characters
const MAX_BAR: usize = 40;

/// Bucketed counts of a set of scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Histogram {
    /// Scores per bucket, lowest bucket first
    pub counts: [usize; BUCKETS],
    /// Scores that fell outside every bucket
    pub outside: usize,
}

impl Histogram {
    /// Bucket a set of scores
    #[must_use]
    pub fn from_scores(scores: &[f64]) -> Self {
        let mut histogram = Self::default();
        for &score in scores {
            match bucket_of(score) {
                Some(idx) => histogram.counts[idx] += 1,
                None => histogram.outside += 1,
            }
        }
        histogram
    }

    /// Lower edge of bucket `idx`
    #[must_use]
    pub fn lower_edge(idx: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let offset = idx as f64 * BUCKET_WIDTH;
        LOW + offset
    }

    /// Total number of scores that landed in a bucket
    #[must_use]
    pub fn bucketed(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Render the histogram, optionally with coloured bars
    #[must_use]
    pub fn render(&self, color: bool) -> String {
        let peak = self.counts.iter().copied().max().unwrap_or(0);
        let mut out = String::new();

        for (idx, &count) in self.counts.iter().enumerate() {
            let bar = "█".repeat(bar_len(count, peak));
            let bar = if color { bar.green().to_string() } else { bar };
            let count = if count == 0 { String::new() } else { format!(" {count}") };
            let _ = writeln!(out, "{} |{bar}{count}", axis_label(Self::lower_edge(idx)));
        }
        let _ = write!(out, "{} +", axis_label(HIGH));

        if self.outside > 0 {
            let note = format!("{} score(s) outside 50-100 not shown", self.outside);
            let note = if color { note.yellow().to_string() } else { note };
            let _ = write!(out, "\n{note}");
        }
        out
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// Bucket index for a score, if it lies in `[LOW, HIGH]`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bucket_of(score: f64) -> Option<usize> {
    if !(LOW..=HIGH).contains(&score) {
        return None;
    }
    let idx = ((score - LOW) / BUCKET_WIDTH).floor() as usize;
    Some(idx.min(BUCKETS - 1))
}

/// Right-aligned tick label, blank between ticks
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn axis_label(edge: f64) -> String {
    let edge = edge as u32;
    if TICKS.contains(&edge) { format!("{edge:>3}") } else { "   ".to_string() }
}

fn bar_len(count: usize, peak: usize) -> usize {
    if peak == 0 {
        return 0;
    }
    (count * MAX_BAR).div_ceil(peak)
}
