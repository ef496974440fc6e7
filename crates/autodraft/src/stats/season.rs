// Season stat file loading.
//
// Season files are headerless, comma-delimited, with one player per row and a
// fixed positional schema. A bad row is fatal for the whole file. Quotes are
// ordinary characters: `"Smith"` and `Smith` are different names.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Number of columns in a season stat row.
pub const SEASON_FIELDS: usize = 20;

/// One player's totals for one season, in file column order.
///
/// Only `points_per_game` feeds the projection; the other columns are kept
/// so a row is loaded whole or not at all.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeasonStatLine {
    pub name: String,
    pub first_name: String,
    pub position: String,
    pub team: String,
    pub games_played: i32,
    pub goals: i32,
    pub assists: i32,
    pub points: i32,
    pub points_per_game: f64,
    pub plus_minus: i32,
    pub penalty_minutes: i32,
    pub hits: i32,
    pub blocked_shots: i32,
    pub powerplay_goals: i32,
    pub powerplay_assists: i32,
    pub shorthanded_goals: i32,
    pub shorthanded_assists: i32,
    pub game_winning_goals: i32,
    pub shots_on_goal: i32,
    pub shot_percentage: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum SeasonFileError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: {source}")]
    Row { line: u64, source: csv::Error },
}

/// Parse season stat rows from any reader. Blank lines are ignored.
pub fn load_season_lines<R: Read>(rdr: R) -> Result<Vec<SeasonStatLine>, SeasonFileError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(rdr);

    let mut lines = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != SEASON_FIELDS {
            return Err(SeasonFileError::FieldCount {
                line,
                expected: SEASON_FIELDS,
                found: record.len(),
            });
        }
        let stat_line = record
            .deserialize::<SeasonStatLine>(None)
            .map_err(|source| SeasonFileError::Row { line, source })?;
        lines.push(stat_line);
    }
    Ok(lines)
}

/// Load every stat line from a season file.
pub fn load_season_file(path: &Path) -> Result<Vec<SeasonStatLine>, SeasonFileError> {
    let file = std::fs::File::open(path).map_err(|e| SeasonFileError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_season_lines(file)
}

/// Minimal stat line for tests that only care about identity and rate.
#[cfg(test)]
pub(crate) fn test_line(name: &str, first_name: &str, points_per_game: f64) -> SeasonStatLine {
    SeasonStatLine {
        name: name.to_string(),
        first_name: first_name.to_string(),
        position: "C".to_string(),
        team: "TST".to_string(),
        games_played: 82,
        goals: 0,
        assists: 0,
        points: 0,
        points_per_game,
        plus_minus: 0,
        penalty_minutes: 0,
        hits: 0,
        blocked_shots: 0,
        powerplay_goals: 0,
        powerplay_assists: 0,
        shorthanded_goals: 0,
        shorthanded_assists: 0,
        game_winning_goals: 0,
        shots_on_goal: 0,
        shot_percentage: 0.0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
