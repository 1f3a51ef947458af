//! Graph types and styling configuration

use pointdiff_config::{ChartConfig, ColorSchemeConfig};
use serde::{Deserialize, Serialize};

/// Graph configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Time each animation frame stays on screen
    pub frame_duration_ms: u64,
    pub style: StyleConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            title: "Graph".to_string(),
            width: 800,
            height: 600,
            x_label: None,
            y_label: None,
            frame_duration_ms: 1500,
            style: StyleConfig::default(),
        }
    }
}

impl From<&ChartConfig> for GraphConfig {
    fn from(chart: &ChartConfig) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            title: chart.title.clone(),
            width: chart.width,
            height: chart.height,
            x_label: non_empty(&chart.x_label),
            y_label: non_empty(&chart.y_label),
            frame_duration_ms: chart.frame_duration_ms,
            style: StyleConfig {
                color_scheme: ColorScheme::from(&chart.color_scheme),
                background_color: Some(chart.background_color.clone()),
                title_font: FontConfig {
                    family: chart.font_family.clone(),
                    size: chart.title_font_size,
                },
                axis_font: FontConfig {
                    family: chart.font_family.clone(),
                    size: chart.axis_font_size,
                },
                ..StyleConfig::default()
            },
        }
    }
}

/// Color scheme for graphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    Default,
    Vibrant,
    Monochrome,
    Custom(Vec<String>),
}

impl From<&ColorSchemeConfig> for ColorScheme {
    fn from(config: &ColorSchemeConfig) -> Self {
        match config {
            ColorSchemeConfig::Default => Self::Default,
            ColorSchemeConfig::Vibrant => Self::Vibrant,
            ColorSchemeConfig::Monochrome => Self::Monochrome,
            ColorSchemeConfig::Custom(colors) => Self::Custom(colors.clone()),
        }
    }
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    pub family: String,
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 12,
        }
    }
}

/// Margin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginConfig {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        // Left side holds team names.
        Self {
            top: 20,
            right: 30,
            bottom: 50,
            left: 190,
        }
    }
}

/// Comprehensive styling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    pub color_scheme: ColorScheme,
    pub background_color: Option<String>,
    pub title_font: FontConfig,
    pub axis_font: FontConfig,
    pub margins: MarginConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Default,
            background_color: Some("#FFFFFF".to_string()),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 16,
            },
            axis_font: FontConfig::default(),
            margins: MarginConfig::default(),
        }
    }
}
