use serde::{Deserialize, Serialize};

/// What to do when the two inputs yield a different number of subjects.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RowCountPolicy {
    /// Refuse to score and report both row counts.
    #[default]
    Fail,
    /// Stop at the shorter input and drop the surplus rows silently.
    Truncate,
}

/// Options controlling a whole scoring run.
///
/// Example YAML (as part of the main config file):
/// ```yaml
/// row_count_mismatch: truncate
/// parallel: true
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreOptions {
    pub row_count_policy: RowCountPolicy,
    /// Score subjects on the rayon thread pool
    pub parallel: bool,
}
