use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::scoring::SubjectScore;
use crate::stats::{MeanDisplay, Summary};

/// Shown instead of statistics when both inputs are empty.
pub const NO_SUBJECTS: &str = "No subjects found.";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the two console summary lines (average, most common)
pub fn format_summary(summary: Option<&Summary>, display: MeanDisplay, use_colors: bool) -> String {
    let Some(summary) = summary else {
        return NO_SUBJECTS.to_string();
    };

    let mean = display.apply(summary.mean);
    if use_colors {
        format!(
            "Average # of inconsistencies: {}\nMost common # of inconsistencies: {}",
            mean.bold(),
            summary.mode.bold()
        )
    } else {
        format!(
            "Average # of inconsistencies: {}\nMost common # of inconsistencies: {}",
            mean, summary.mode
        )
    }
}

/// Machine-readable summary for scripting
#[derive(Debug, Serialize, PartialEq)]
pub struct SummaryReport {
    pub subjects: usize,
    pub mean: Option<f64>,
    pub mean_display: Option<u64>,
    pub mode: Option<usize>,
}

impl SummaryReport {
    pub fn new(summary: Option<&Summary>, display: MeanDisplay) -> Self {
        Self {
            subjects: summary.map_or(0, |s| s.subjects),
            mean: summary.map(|s| s.mean),
            mean_display: summary.map(|s| display.apply(s.mean)),
            mode: summary.map(|s| s.mode),
        }
    }
}

/// Format the summary as a single JSON object (no colors)
pub fn format_summary_json(summary: Option<&Summary>, display: MeanDisplay) -> serde_json::Result<String> {
    serde_json::to_string(&SummaryReport::new(summary, display))
}

/// Format one subject's breakdown (for verbose mode)
///
/// ```text
/// Subject 3: 2 inconsistencies
///   order: 2 > 1 > 0
///   item 2 before item 1
///   item 1 before item 0
/// ```
pub fn format_subject_detail(score: &SubjectScore, use_colors: bool) -> String {
    let order = score
        .order
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" > ");

    let header = format!("Subject {}: {} inconsistencies", score.subject, score.count());
    let mut lines = vec![
        if use_colors && score.count() > 0 {
            header.yellow().to_string()
        } else {
            header
        },
        format!("  order: {}", order),
    ];
    lines.extend(
        score
            .inconsistent_pairs
            .iter()
            .map(|(a, b)| format!("  item {} before item {}", a, b)),
    );
    lines.join("\n")
}
