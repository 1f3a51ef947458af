//! Runtime validation of a loaded configuration.

use crate::schema::{ChartConfig, ColorSchemeConfig, Config, DashboardConfig, DataConfig};
use pointdiff_common::{PointDiffError, Result, Week};
use std::net::SocketAddr;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        Self::validate_data(&config.data)?;
        Self::validate_chart(&config.chart)?;
        Self::validate_dashboard(&config.dashboard)?;
        Ok(())
    }

    fn validate_data(data: &DataConfig) -> Result<()> {
        if data.path.as_os_str().is_empty() {
            return Err(PointDiffError::validation_field(
                "score table path cannot be empty",
                "data.path",
            ));
        }

        for week in &data.weeks {
            week.parse::<Week>().map_err(|_| {
                PointDiffError::validation_field(
                    format!("week '{week}' is not a regular-season week number"),
                    "data.weeks",
                )
            })?;
        }

        Ok(())
    }

    fn validate_chart(chart: &ChartConfig) -> Result<()> {
        if chart.width == 0 || chart.height == 0 {
            return Err(PointDiffError::validation_field(
                format!("chart size {}x{} must be positive", chart.width, chart.height),
                "chart.width",
            ));
        }

        if chart.frame_duration_ms == 0 {
            return Err(PointDiffError::validation_field(
                "frame duration must be positive",
                "chart.frame_duration_ms",
            ));
        }

        if !is_hex_color(&chart.background_color) {
            return Err(PointDiffError::validation_field(
                format!("'{}' is not a #RRGGBB color", chart.background_color),
                "chart.background_color",
            ));
        }

        if let ColorSchemeConfig::Custom(colors) = &chart.color_scheme {
            if colors.is_empty() {
                return Err(PointDiffError::validation_field(
                    "custom color scheme needs at least one color",
                    "chart.color_scheme",
                ));
            }
            if let Some(bad) = colors.iter().find(|c| !is_hex_color(c)) {
                return Err(PointDiffError::validation_field(
                    format!("'{bad}' is not a #RRGGBB color"),
                    "chart.color_scheme",
                ));
            }
        }

        Ok(())
    }

    fn validate_dashboard(dashboard: &DashboardConfig) -> Result<()> {
        dashboard.bind_address.parse::<SocketAddr>().map_err(|e| {
            PointDiffError::validation_field(
                format!("invalid bind address '{}': {e}", dashboard.bind_address),
                "dashboard.bind_address",
            )
        })?;
        Ok(())
    }
}

/// Returns true for strings of the form `#RRGGBB`.
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
