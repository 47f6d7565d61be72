use std::cmp::Ordering;

use rayon::prelude::*;

use super::config::{RowCountPolicy, ScoreOptions};
use super::error::ScoringError;

/// One subject's ranking: one integer per item, item identity is the column.
pub type RankRow = Vec<i64>;

/// Full result for one subject, kept around for verbose reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectScore {
    pub subject: usize,
    /// Item indices ordered by descending numerical value (stable on ties)
    pub order: Vec<usize>,
    /// Adjacent pairs `(a, b)` of `order` where the categorical row ranks `a` below `b`
    pub inconsistent_pairs: Vec<(usize, usize)>,
}

impl SubjectScore {
    pub fn count(&self) -> usize {
        self.inconsistent_pairs.len()
    }
}

fn check_lengths(subject: usize, categorical: &[i64], numerical: &[i64]) -> Result<(), ScoringError> {
    if categorical.len() != numerical.len() {
        return Err(ScoringError::Validation {
            subject,
            categorical_len: categorical.len(),
            numerical_len: numerical.len(),
        });
    }
    Ok(())
}

/// Item indices sorted by descending numerical value.
///
/// `sort_by` is stable, so items with equal numerical values stay in column order.
fn numerical_order(numerical: &[i64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..numerical.len()).collect();
    order.sort_by(|&a, &b| numerical[b].cmp(&numerical[a]));
    order
}

/// `a` precedes `b` numerically; the pair is inconsistent when the categorical
/// value of `a` is strictly greater (smaller categorical means higher precedence).
fn is_inconsistent(categorical: &[i64], a: usize, b: usize) -> bool {
    categorical[a].cmp(&categorical[b]) == Ordering::Greater
}

/// Count the inconsistent adjacent pairs for one subject.
///
/// The result is always in `[0, N-1]` for `N` items; rows with fewer than two
/// items score 0.
pub fn score_subject(subject: usize, categorical: &[i64], numerical: &[i64]) -> Result<usize, ScoringError> {
    check_lengths(subject, categorical, numerical)?;

    let count = numerical_order(numerical)
        .windows(2)
        .filter(|pair| is_inconsistent(categorical, pair[0], pair[1]))
        .count();
    Ok(count)
}

/// Same as [`score_subject`] but keeps the derived order and the offending pairs.
pub fn score_subject_detailed(
    subject: usize,
    categorical: &[i64],
    numerical: &[i64],
) -> Result<SubjectScore, ScoringError> {
    check_lengths(subject, categorical, numerical)?;

    let order = numerical_order(numerical);
    let inconsistent_pairs = order
        .windows(2)
        .filter(|pair| is_inconsistent(categorical, pair[0], pair[1]))
        .map(|pair| (pair[0], pair[1]))
        .collect();

    Ok(SubjectScore {
        subject,
        order,
        inconsistent_pairs,
    })
}

/// Number of subjects to score under the given policy.
pub(crate) fn paired_subjects(
    categorical_rows: usize,
    numerical_rows: usize,
    policy: RowCountPolicy,
) -> Result<usize, ScoringError> {
    if categorical_rows != numerical_rows && policy == RowCountPolicy::Fail {
        return Err(ScoringError::RowCountMismatch {
            categorical_rows,
            numerical_rows,
        });
    }
    Ok(categorical_rows.min(numerical_rows))
}

/// Score every subject, pairing row `i` of `categorical_rows` with row `i` of
/// `numerical_rows`. Counts are returned in subject order.
pub fn score_all(
    categorical_rows: &[RankRow],
    numerical_rows: &[RankRow],
    options: ScoreOptions,
) -> Result<Vec<usize>, ScoringError> {
    let subjects = paired_subjects(
        categorical_rows.len(),
        numerical_rows.len(),
        options.row_count_policy,
    )?;
    let categorical_rows = &categorical_rows[..subjects];
    let numerical_rows = &numerical_rows[..subjects];

    if options.parallel {
        // Collect per-subject results first so the reported error is the
        // lowest failing subject, as in the sequential path.
        let results: Vec<Result<usize, ScoringError>> = categorical_rows
            .par_iter()
            .zip(numerical_rows.par_iter())
            .enumerate()
            .map(|(subject, (cat, num))| score_subject(subject, cat, num))
            .collect();
        results.into_iter().collect()
    } else {
        categorical_rows
            .iter()
            .zip(numerical_rows)
            .enumerate()
            .map(|(subject, (cat, num))| score_subject(subject, cat, num))
            .collect()
    }
}
