// Projects every player in the history index once.

use tracing::debug;

use crate::projection::history::PlayerHistoryIndex;
use crate::projection::identity::PlayerIdentity;
use crate::projection::weighted;

/// One player's projected points per game.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRecord {
    pub identity: PlayerIdentity,
    pub points_per_game: f64,
}

/// Build one `ProjectionRecord` per player in `index`, sorted by identity.
///
/// Players with no seasons in the lookback window are still emitted, with a
/// projection of 0.0.
pub fn project_all(
    index: &PlayerHistoryIndex,
    current_year: i32,
    weights: &[f64],
) -> Vec<ProjectionRecord> {
    let mut records: Vec<ProjectionRecord> = index
        .iter()
        .map(|(identity, history)| {
            let points_per_game = weighted::project(history, current_year, weights);
            debug!(
                "{}: {} season(s) on file, projected {:.4} ppg",
                identity,
                history.len(),
                points_per_game
            );
            ProjectionRecord {
                identity: identity.clone(),
                points_per_game,
            }
        })
        .collect();

    records.sort_by(|a, b| a.identity.cmp(&b.identity));
    records
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
