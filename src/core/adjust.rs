//! Two-pass score adjustment.
//!
//! Pass one lifts every failing record to the passing floor. Pass two ranks
//! the roster and pulls each record toward the score its rank would have
//! under a normal distribution with mean 75 and standard deviation 8.
//! Neither pass ever lowers a score.

use crate::core::quantile::quantile;
use crate::core::record::Roster;
use tracing::{debug, info};

/// Final score every student is lifted to in the floor pass.
pub const PASSING_SCORE: f64 = 60.0;

/// Mean of the target distribution.
pub const TARGET_MEAN: f64 = 75.0;

/// Standard deviation of the target distribution.
pub const TARGET_STD_DEV: f64 = 8.0;

/// Highest daily score the curve pass may assign.
pub const MAX_DAILY_SCORE: f64 = 100.0;

/// Highest final score a curve target may ask for.
const MAX_TARGET_SCORE: f64 = 100.0;

/// Result of [`adjust`].
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    /// Records ascending by their final score as it stood after the floor
    /// pass. Curve raises do not re-sort, so later values may be out of order.
    pub roster: Roster,

    /// Records raised by the passing floor.
    pub floor_raised: usize,

    /// Records raised toward the target distribution.
    pub curve_raised: usize,
}

/// Adjust `roster` and return it in rank order.
#[must_use]
pub fn adjust(mut roster: Roster) -> Adjustment {
    let floor_raised = apply_passing_floor(&mut roster);
    roster.sort_by_final_score();
    let curve_raised = apply_curve(&mut roster);

    info!(
        students = roster.len(),
        floor_raised, curve_raised, "adjustment complete"
    );

    Adjustment {
        roster,
        floor_raised,
        curve_raised,
    }
}

/// Lift every final score below [`PASSING_SCORE`] to exactly the floor.
///
/// The required daily score is not capped here; a low enough peer-review
/// total can push it above [`MAX_DAILY_SCORE`].
fn apply_passing_floor(roster: &mut Roster) -> usize {
    let mut raised = 0;
    for record in roster.records_mut() {
        if record.final_score() >= PASSING_SCORE {
            continue;
        }
        let required = record.daily_required_for(PASSING_SCORE);
        if record.raise_daily_score(required) {
            debug!(id = %record.id, daily = required, "raised to passing floor");
            raised += 1;
        }
    }
    raised
}

/// Raise each record of an already-sorted roster toward its rank's target.
fn apply_curve(roster: &mut Roster) -> usize {
    // Ranks map to (i + 1) / (n + 1), which never reaches 0 or 1.
    // Safe: roster sizes are far below 2^52
    #[allow(clippy::cast_precision_loss)]
    let slots = (roster.len() + 1) as f64;
    let mut raised = 0;

    for (rank, record) in roster.records_mut().iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let target = target_score((rank + 1) as f64 / slots);
        if target <= record.final_score() {
            continue;
        }
        let required = record.daily_required_for(target);
        if required > MAX_DAILY_SCORE {
            continue;
        }
        if record.raise_daily_score(required) {
            debug!(id = %record.id, rank, target, daily = required, "raised toward curve");
            raised += 1;
        }
    }
    raised
}

/// Final score at `percentile` of the target distribution, clamped to the
/// passing floor and the maximum score.
#[must_use]
pub fn target_score(percentile: f64) -> f64 {
    let z = quantile(percentile);
    (TARGET_MEAN + z * TARGET_STD_DEV).clamp(PASSING_SCORE, MAX_TARGET_SCORE)
}
