pub mod formatter;
pub mod writer;

pub use formatter::{
    format_subject_detail, format_summary, format_summary_json, should_use_colors, SummaryReport,
};
pub use writer::{write_counts, DEFAULT_FILENAME};
