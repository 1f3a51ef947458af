//! Default values reproducing the 2024 weeks 1-11 ranking chart.

use crate::schema::*;
use pointdiff_common::{LoggingConfig, Season};
use std::path::PathBuf;

/// Default location of the score table.
pub const DEFAULT_SCORES_PATH: &str = "spreadspoke_scores.csv";

/// Default season.
pub const DEFAULT_SEASON: i32 = 2024;

/// Default number of leading regular-season weeks to rank.
pub const DEFAULT_WEEK_COUNT: u32 = 11;

/// Default time each frame is shown.
pub const DEFAULT_FRAME_DURATION_MS: u64 = 1500;

/// Default dashboard address.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8501";

const DEFAULT_TITLE: &str = "NFL 2024 Cumulative Point Differential Rankings";

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            chart: ChartConfig::default(),
            dashboard: DashboardConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SCORES_PATH),
            season: Season(DEFAULT_SEASON),
            weeks: (1..=DEFAULT_WEEK_COUNT).map(|w| w.to_string()).collect(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            x_label: "Cumulative Point Differential".to_string(),
            y_label: "Team".to_string(),
            width: 1000,
            height: 900,
            frame_duration_ms: DEFAULT_FRAME_DURATION_MS,
            color_scheme: ColorSchemeConfig::Default,
            background_color: "#FFFFFF".to_string(),
            font_family: "sans-serif".to_string(),
            title_font_size: 22,
            axis_font_size: 14,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_title: DEFAULT_TITLE.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}
