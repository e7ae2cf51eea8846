//! Summary statistics over final scores.

use crate::core::record::Roster;
use crate::error::{Error, Result};

/// Summary of a roster's final scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation (divides by `n`).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Summarize the final scores of `roster`.
///
/// Min and max are computed over all records, so roster order does not
/// matter.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the roster is empty.
pub fn summarize(roster: &Roster) -> Result<Summary> {
    if roster.is_empty() {
        return Err(Error::InvalidInput(
            "cannot summarize an empty roster".to_string(),
        ));
    }

    let scores: Vec<f64> = roster.records().iter().map(|r| r.final_score()).collect();
    // Safe: roster sizes are far below 2^52
    #[allow(clippy::cast_precision_loss)]
    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(Summary {
        count: scores.len(),
        mean,
        std_dev: variance.sqrt(),
        min,
        max,
    })
}
