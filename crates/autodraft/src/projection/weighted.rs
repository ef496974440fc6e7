// Recency-weighted points-per-game projection.
//
// weights[0] applies to the season immediately before `current_year`,
// weights[1] to the one before that, and so on. Weight belonging to a missing
// season is removed from the total, and the weighted sum is rescaled by the
// weight that was actually spent.

use crate::projection::history::YearHistory;

/// Project one player's points per game for `current_year`.
///
/// Returns 0.0 for a player with no seasons inside the lookback window. When
/// the unspent weight leaves nothing positive to rescale by, the raw weighted
/// sum is returned as-is.
pub fn project(history: &YearHistory, current_year: i32, weights: &[f64]) -> f64 {
    let mut used_weight = 1.0;
    let mut sum = 0.0;

    for (i, &weight) in weights.iter().enumerate() {
        match lookback_season(current_year, i).and_then(|season| history.get(&season)) {
            Some(line) => sum += weight * line.points_per_game,
            None => used_weight -= weight,
        }
    }

    if used_weight > 0.0 {
        sum * (1.0 / used_weight)
    } else {
        sum
    }
}

/// The season `offset + 1` years before `current_year`, or `None` when that
/// falls outside the `i32` range (treated as a missing season).
fn lookback_season(current_year: i32, offset: usize) -> Option<i32> {
    let back = i32::try_from(offset).ok()?.checked_add(1)?;
    current_year.checked_sub(back)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
