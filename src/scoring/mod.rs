pub mod config;
pub mod engine;
pub mod error;
pub mod validation;

pub use config::{RowCountPolicy, ScoreOptions};
pub use engine::{score_all, score_subject, score_subject_detailed, RankRow, SubjectScore};
pub use error::ScoringError;
pub use validation::validate_rows;
