use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How the mean is turned into the integer shown on the console.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MeanDisplay {
    /// Drop the fractional part (1.75 -> 1)
    #[default]
    Truncate,
    /// Round half away from zero (1.5 -> 2)
    Round,
}

impl MeanDisplay {
    pub fn apply(self, mean: f64) -> u64 {
        match self {
            MeanDisplay::Truncate => mean.trunc() as u64,
            MeanDisplay::Round => mean.round() as u64,
        }
    }
}

/// Aggregate figures over all subject counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub subjects: usize,
    pub mean: f64,
    pub mode: usize,
}

pub fn mean(counts: &[usize]) -> Option<f64> {
    if counts.is_empty() {
        return None;
    }
    let total: usize = counts.iter().sum();
    Some(total as f64 / counts.len() as f64)
}

/// Most frequent count. On a tie the value seen first wins.
pub fn mode(counts: &[usize]) -> Option<usize> {
    let mut frequencies: HashMap<usize, usize> = HashMap::new();
    for &count in counts {
        *frequencies.entry(count).or_default() += 1;
    }

    let mut best: Option<(usize, usize)> = None;
    for &count in counts {
        let freq = frequencies[&count];
        match best {
            Some((_, best_freq)) if freq <= best_freq => {}
            _ => best = Some((count, freq)),
        }
    }
    best.map(|(value, _)| value)
}

/// Mean and mode over the counts, or `None` when there are no subjects.
pub fn summarize(counts: &[usize]) -> Option<Summary> {
    Some(Summary {
        subjects: counts.len(),
        mean: mean(counts)?,
        mode: mode(counts)?,
    })
}
