// Batch driver: season files in, expected stats file out.
//
// Files are read strictly in the order given and folded into one history
// index. Any failure aborts the run before the output file is touched.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};

use crate::config::Config;
use crate::projection::assembler::{self, ProjectionRecord};
use crate::projection::history::{DuplicatePolicy, PlayerHistoryIndex};
use crate::projection::identity::PlayerIdentity;
use crate::stats::{expected, season, season_year};

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub player_seasons: usize,
    pub players: usize,
    pub output: PathBuf,
}

/// Read every season file and fold its stat lines into a new index.
pub fn build_index(
    files: &[PathBuf],
    policy: DuplicatePolicy,
) -> anyhow::Result<PlayerHistoryIndex> {
    let mut index = PlayerHistoryIndex::new(policy);
    for path in files {
        let lines = ingest_file(&mut index, path)?;
        info!("{}: {} stat lines", path.display(), lines);
    }
    Ok(index)
}

/// Fold one season file into `index`, returning the number of stat lines read.
fn ingest_file(index: &mut PlayerHistoryIndex, path: &Path) -> anyhow::Result<usize> {
    let year = season_year::season_year(path)
        .with_context(|| format!("cannot determine season year for {}", path.display()))?;
    let lines = season::load_season_file(path)
        .with_context(|| format!("failed to load season file {}", path.display()))?;

    let count = lines.len();
    for line in lines {
        index
            .record(PlayerIdentity::of(&line), year, line)
            .with_context(|| format!("in season file {}", path.display()))?;
    }
    Ok(count)
}

/// Project every player in `index` using the configured year and weights.
pub fn project(index: &PlayerHistoryIndex, config: &Config) -> Vec<ProjectionRecord> {
    assembler::project_all(
        index,
        config.projection.current_year,
        &config.projection.weights,
    )
}

/// Run the whole batch and write the expected stats file.
pub fn run(config: &Config, files: &[PathBuf]) -> anyhow::Result<RunSummary> {
    if files.is_empty() {
        warn!("no season files given; output will be empty");
    }

    let index = build_index(files, config.duplicate_seasons)?;
    let records = project(&index, config);

    let output = PathBuf::from(&config.output_path);
    expected::write_expected_file(&output, &records)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let summary = RunSummary {
        files: files.len(),
        player_seasons: index.season_count(),
        players: records.len(),
        output,
    };
    info!(
        "Projected {} players for {} from {} files ({} player-seasons) -> {}",
        summary.players,
        config.projection.current_year,
        summary.files,
        summary.player_seasons,
        summary.output.display()
    );
    Ok(summary)
}
