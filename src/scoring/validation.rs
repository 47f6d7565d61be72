use super::config::RowCountPolicy;
use super::engine::{paired_subjects, RankRow};
use super::error::ScoringError;

/// Check the shape of both inputs before scoring.
/// Returns all validation errors at once (not just the first).
pub fn validate_rows(
    categorical_rows: &[RankRow],
    numerical_rows: &[RankRow],
    policy: RowCountPolicy,
) -> Result<(), Vec<ScoringError>> {
    let mut errors = Vec::new();

    if let Err(e) = paired_subjects(categorical_rows.len(), numerical_rows.len(), policy) {
        errors.push(e);
    }

    for (subject, (cat, num)) in categorical_rows.iter().zip(numerical_rows).enumerate() {
        if cat.len() != num.len() {
            errors.push(ScoringError::Validation {
                subject,
                categorical_len: cat.len(),
                numerical_len: num.len(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
