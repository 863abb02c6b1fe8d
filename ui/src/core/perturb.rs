//! Confusion-matrix "resampling" noise applied by the Refresh Matrix action.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::core::analyzer::{ConfusionMatrix, DerivedMetrics};

/// Offset range for the diagonal (correct) cells.
pub const DIAGONAL_JITTER: RangeInclusive<i64> = -10..=10;
/// Offset range for the off-diagonal (error) cells.
pub const ERROR_JITTER: RangeInclusive<i64> = -3..=3;

/// Nudge every cell by a bounded uniform offset, clamping at zero, and
/// recompute the derived metrics from the new cells.
pub fn perturb<R: Rng + ?Sized>(
    matrix: &ConfusionMatrix,
    rng: &mut R,
) -> (ConfusionMatrix, DerivedMetrics) {
    let next = ConfusionMatrix {
        true_negative: jitter(matrix.true_negative, DIAGONAL_JITTER, rng),
        false_positive: jitter(matrix.false_positive, ERROR_JITTER, rng),
        false_negative: jitter(matrix.false_negative, ERROR_JITTER, rng),
        true_positive: jitter(matrix.true_positive, DIAGONAL_JITTER, rng),
    };
    (next, next.metrics())
}

fn jitter<R: Rng + ?Sized>(value: u64, range: RangeInclusive<i64>, rng: &mut R) -> u64 {
    let offset = rng.gen_range(range);
    if offset >= 0 {
        value.saturating_add(offset.unsigned_abs())
    } else {
        value.saturating_sub(offset.unsigned_abs())
    }
}
