// Expected stats output: one `name,first_name,points_per_game` row per player.
// Names are written verbatim, never quoted.

use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::projection::assembler::ProjectionRecord;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "ExpectedStats.csv";

/// On-disk row shape for a projection.
#[derive(Debug, Serialize)]
struct ExpectedStatLine<'a> {
    name: &'a str,
    first_name: &'a str,
    points_per_game: f64,
}

impl<'a> From<&'a ProjectionRecord> for ExpectedStatLine<'a> {
    fn from(record: &'a ProjectionRecord) -> Self {
        ExpectedStatLine {
            name: &record.identity.family_name,
            first_name: &record.identity.given_name,
            points_per_game: record.points_per_game,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExpectedFileError {
    #[error("failed to create file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Write projections as headerless CSV rows, in the order given.
pub fn write_expected_lines<W: Write>(
    wtr: W,
    records: &[ProjectionRecord],
) -> Result<(), ExpectedFileError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(wtr);
    for record in records {
        writer.serialize(ExpectedStatLine::from(record))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Create (or truncate) `path` and write projections to it.
pub fn write_expected_file(
    path: &Path,
    records: &[ProjectionRecord],
) -> Result<(), ExpectedFileError> {
    let file = std::fs::File::create(path).map_err(|e| ExpectedFileError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    write_expected_lines(file, records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::identity::PlayerIdentity;

    fn record(family: &str, given: &str, ppg: f64) -> ProjectionRecord {
        ProjectionRecord {
            identity: PlayerIdentity::new(family, given),
            points_per_game: ppg,
        }
    }

    fn render(records: &[ProjectionRecord]) -> String {
        let mut buf = Vec::new();
        write_expected_lines(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn rows_have_no_header_and_keep_order() {
        let out = render(&[record("Smith", "John", 0.875), record("Adams", "Craig", 0.5)]);
        assert_eq!(out, "Smith,John,0.875\nAdams,Craig,0.5\n");
    }

    #[test]
    fn names_written_verbatim() {
        let out = render(&[
            record("\"Smith\"", "John", 0.5),
            record("Smith", " John ", 0.25),
        ]);
        assert_eq!(out, "\"Smith\",John,0.5\nSmith, John ,0.25\n");
    }

    #[test]
    fn zero_projection_is_written() {
        let out = render(&[record("Old", "Timer", 0.0)]);
        assert_eq!(out, "Old,Timer,0.0\n");
    }

    #[test]
    fn no_records_writes_nothing() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn written_values_read_back() {
        let ppg = 0.8 / 0.85;
        let out = render(&[record("Smith", "John", ppg)]);

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(out.as_bytes());
        let row = rdr.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "Smith");
        assert_eq!(&row[1], "John");
        assert_eq!(row[2].parse::<f64>().unwrap(), ppg);
    }

    #[test]
    fn file_written_to_path() {
        let dir = std::env::temp_dir().join("expected_test_file_written");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(DEFAULT_OUTPUT);

        write_expected_file(&path, &[record("Smith", "John", 1.0)]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Smith,John,1.0\n");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
