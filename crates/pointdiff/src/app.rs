//! Pipeline orchestration: load, filter, build, render.

use pointdiff_common::Result;
use pointdiff_config::Config;
use pointdiff_data::{DifferentialBuilder, DifferentialTable, GameLoader, SeasonFilter};
use pointdiff_graphs::{render_frames, Dashboard, FrameSet, GraphConfig};
use std::sync::Arc;
use tracing::{info, instrument};

/// Runs the whole pipeline from the configured score file.
///
/// Holds no state between runs; every call rereads the file.
#[derive(Debug, Clone)]
pub struct RankingPipeline {
    config: Arc<Config>,
}

impl RankingPipeline {
    /// Creates a pipeline over an immutable configuration.
    pub const fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// The configuration the pipeline runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads, filters and transforms the score file.
    #[instrument(skip(self), fields(path = %self.config.data.path.display()))]
    pub fn build_table(&self) -> Result<DifferentialTable> {
        let data = &self.config.data;
        let games = GameLoader::new(&data.path).load()?;
        let filtered = SeasonFilter::new(data.season, &data.weeks).apply(&games);
        DifferentialBuilder::build(&filtered)
    }

    /// Lays out the animation frames of the current table.
    pub fn build_frames(&self) -> Result<FrameSet> {
        Ok(FrameSet::from_table(&self.build_table()?))
    }

    /// Produces the complete dashboard page.
    pub fn render_dashboard(&self) -> Result<String> {
        let frames = self.build_frames()?;
        let graph_config = GraphConfig::from(&self.config.chart);
        let rendered = render_frames(&graph_config, &frames)?;
        let page = Dashboard::from_config(&self.config).render_page(&rendered)?;
        info!(frames = rendered.len(), bytes = page.len(), "Dashboard ready");
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointdiff_common::test_utils::{opening_week_games, write_scores_file};
    use pointdiff_common::{PointDiffError, Week};

    fn pipeline_for(path: &std::path::Path) -> RankingPipeline {
        let mut config = Config::default();
        config.data.path = path.to_path_buf();
        RankingPipeline::new(Arc::new(config))
    }

    #[test]
    fn test_build_frames_from_file() {
        let file = write_scores_file(&opening_week_games(2024));
        let frames = pipeline_for(file.path()).build_frames().unwrap();

        assert_eq!(frames.weeks(), vec![Week(1)]);
        assert_eq!(frames.teams.len(), 4);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = pipeline_for(&dir.path().join("missing.csv"))
            .build_table()
            .unwrap_err();
        assert!(matches!(err, PointDiffError::File { .. }));
    }

    #[test]
    fn test_other_season_gives_empty_table() {
        let file = write_scores_file(&opening_week_games(2023));
        let table = pipeline_for(file.path()).build_table().unwrap();
        assert!(table.is_empty());
    }
}
