// Per-player season history, keyed by identity and then by season year.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use tracing::warn;

use crate::projection::identity::PlayerIdentity;
use crate::stats::season::SeasonStatLine;

/// Season year → stat line for a single player.
pub type YearHistory = BTreeMap<i32, SeasonStatLine>;

/// What to do when a player already has a stat line for a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Keep the later line and log a warning.
    #[default]
    Warn,
    /// Fail the run.
    Reject,
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("duplicate stat line for {identity} in season {year}")]
    DuplicateSeason { identity: PlayerIdentity, year: i32 },
}

/// Every player seen so far, each with their year-indexed history.
#[derive(Debug, Default)]
pub struct PlayerHistoryIndex {
    players: HashMap<PlayerIdentity, YearHistory>,
    policy: DuplicatePolicy,
}

impl PlayerHistoryIndex {
    pub fn new(policy: DuplicatePolicy) -> Self {
        PlayerHistoryIndex {
            players: HashMap::new(),
            policy,
        }
    }

    /// Insert `line` as `identity`'s stat line for `year`, creating the
    /// player's history on first sight.
    pub fn record(
        &mut self,
        identity: PlayerIdentity,
        year: i32,
        line: SeasonStatLine,
    ) -> Result<(), HistoryError> {
        match self.players.entry(identity) {
            Entry::Vacant(slot) => {
                slot.insert(BTreeMap::from([(year, line)]));
            }
            Entry::Occupied(mut slot) => {
                if slot.get().contains_key(&year) {
                    match self.policy {
                        DuplicatePolicy::Reject => {
                            return Err(HistoryError::DuplicateSeason {
                                identity: slot.key().clone(),
                                year,
                            });
                        }
                        DuplicatePolicy::Warn => {
                            warn!(
                                "duplicate stat line for {} in season {}, using latest",
                                slot.key(),
                                year
                            );
                        }
                    }
                }
                slot.get_mut().insert(year, line);
            }
        }
        Ok(())
    }

    /// Number of distinct players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, identity: &PlayerIdentity) -> Option<&YearHistory> {
        self.players.get(identity)
    }

    /// Iterate all players. Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerIdentity, &YearHistory)> {
        self.players.iter()
    }

    /// Total number of (player, season) entries held.
    pub fn season_count(&self) -> usize {
        self.players.values().map(BTreeMap::len).sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
