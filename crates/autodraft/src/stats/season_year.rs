// Season year extraction from season file names (e.g. "stats2016.csv" -> 2016).

use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SeasonYearError {
    #[error("no digits in file name {name:?}")]
    NoDigits { name: String },

    #[error("digits {digits:?} in file name {name:?} are not a valid year")]
    OutOfRange {
        name: String,
        digits: String,
        source: std::num::ParseIntError,
    },
}

/// Derive a season year from a file path.
///
/// Every non-digit character of the file name is dropped and the remaining
/// digits are read as one integer, so "nhl-2016-17.csv" yields 201617.
/// Directory components are ignored.
pub fn season_year(path: &Path) -> Result<i32, SeasonYearError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let digits: String = name.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(SeasonYearError::NoDigits { name });
    }

    digits
        .parse::<i32>()
        .map_err(|source| SeasonYearError::OutOfRange {
            name,
            digits,
            source,
        })
}
