//! Configuration schema definitions using serde.

use pointdiff_common::{LoggingConfig, Result, Season};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for pointdiff.
///
/// Every section falls back to its defaults, so a partial file only needs
/// the values it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input table and row selection.
    pub data: DataConfig,
    /// Chart appearance and animation.
    pub chart: ChartConfig,
    /// Dashboard page and server.
    pub dashboard: DashboardConfig,
    /// Logging.
    pub logging: LoggingConfig,
}

/// Input table and row selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path of the score table, relative to the working directory.
    pub path: PathBuf,
    /// Season to rank.
    pub season: Season,
    /// Week identifiers to keep, compared as text against the table.
    pub weeks: Vec<String>,
}

/// Chart appearance and animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Chart caption.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Time each animation frame stays on screen.
    pub frame_duration_ms: u64,
    /// Bar colors, assigned to teams in alphabetical order.
    pub color_scheme: ColorSchemeConfig,
    /// Background color in `#RRGGBB` form.
    pub background_color: String,
    /// Font family for all chart text.
    pub font_family: String,
    /// Caption font size.
    pub title_font_size: u32,
    /// Axis label font size.
    pub axis_font_size: u32,
}

/// Named palettes, or an explicit list of `#RRGGBB` colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemeConfig {
    /// Ten-color categorical palette.
    Default,
    /// High-saturation palette.
    Vibrant,
    /// Grayscale.
    Monochrome,
    /// Explicit colors.
    Custom(Vec<String>),
}

/// Dashboard page and server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Heading and `<title>` of the page.
    pub page_title: String,
    /// Socket address the dashboard listens on.
    pub bind_address: String,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        crate::validator::ConfigValidator::validate(self)
    }
}
