// Expected points-per-game projector entry point.
//
// 1. Initialize tracing (stderr)
// 2. Load config, apply command-line overrides
// 3. Read season files, project, write output

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use autodraft::app;
use autodraft::config;

#[derive(Parser)]
#[command(name = "autodraft")]
#[command(about = "Project per-game scoring from prior season stat files", long_about = None)]
struct Cli {
    /// Season stat files; the season year is taken from the digits in each file name
    files: Vec<PathBuf>,

    /// Config file (defaults to config/projection.toml, then built-in settings)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file (overrides output.path)
    #[arg(long)]
    output: Option<String>,

    /// Season to project (overrides projection.current_year)
    #[arg(long)]
    current_year: Option<i32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing()?;

    let mut config = match &cli.config {
        Some(path) => config::load_config_file(path),
        None => config::load_config(),
    }
    .context("failed to load configuration")?;

    if let Some(output) = cli.output {
        config.output_path = output;
    }
    if let Some(year) = cli.current_year {
        config.projection.current_year = year;
    }
    info!(
        "Projecting {} with weights {:?}",
        config.projection.current_year, config.projection.weights
    );

    app::run(&config, &cli.files)?;
    Ok(())
}

/// Initialize tracing to stderr; stdout is left free.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("autodraft=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
