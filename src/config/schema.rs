use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::RowCountPolicy;
use crate::stats::MeanDisplay;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output path used when none is given on the command line
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// How the mean is displayed: "truncate" (default) or "round"
    #[serde(default)]
    pub mean: MeanDisplay,

    /// Behavior when the inputs have different row counts: "fail" (default) or "truncate"
    #[serde(default)]
    pub row_count_mismatch: RowCountPolicy,

    /// Score subjects in parallel
    #[serde(default)]
    pub parallel: bool,
}
