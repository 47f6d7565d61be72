use thiserror::Error;

/// Shape errors raised while pairing categorical rows with numerical rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error(
        "subject {subject}: categorical row has {categorical_len} items but numerical row has {numerical_len}"
    )]
    Validation {
        subject: usize,
        categorical_len: usize,
        numerical_len: usize,
    },
    #[error(
        "row count mismatch: {categorical_rows} categorical rows vs {numerical_rows} numerical rows"
    )]
    RowCountMismatch {
        categorical_rows: usize,
        numerical_rows: usize,
    },
}

impl ScoringError {
    /// Subject index the error refers to, if it is tied to a single subject.
    pub fn subject(&self) -> Option<usize> {
        match self {
            ScoringError::Validation { subject, .. } => Some(*subject),
            ScoringError::RowCountMismatch { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_subject() {
        let err = ScoringError::Validation {
            subject: 7,
            categorical_len: 3,
            numerical_len: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("subject 7"));
        assert!(msg.contains("3 items"));
        assert!(msg.contains("has 4"));
        assert_eq!(err.subject(), Some(7));
    }

    #[test]
    fn test_row_count_mismatch_has_no_subject() {
        let err = ScoringError::RowCountMismatch {
            categorical_rows: 2,
            numerical_rows: 5,
        };
        assert_eq!(err.subject(), None);
        assert!(err.to_string().contains("2 categorical rows vs 5 numerical rows"));
    }
}
