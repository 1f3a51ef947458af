//! Main entry point for pointdiff.

use anyhow::{Context, Result};
use pointdiff::{serve, AppState, RankingPipeline};
use pointdiff_common::init_logging;
use pointdiff_config::ConfigLoader;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ConfigLoader::discover().context("Failed to load configuration")?;
    let _guard = init_logging(&config.logging).context("Failed to initialize logging")?;

    info!(
        season = %config.data.season,
        weeks = config.data.weeks.len(),
        path = %config.data.path.display(),
        "Starting pointdiff"
    );

    let pipeline = RankingPipeline::new(Arc::new(config));

    // A broken input file is fatal before anything is served.
    let check = pipeline.clone();
    if let Err(e) = tokio::task::spawn_blocking(move || check.build_table()).await? {
        error!(error = %e, "Initial pipeline run failed");
        return Err(e.into());
    }

    serve(AppState::new(pipeline)).await?;
    Ok(())
}
