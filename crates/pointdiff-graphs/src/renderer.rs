//! Graph rendering trait and the ranking chart renderer

use crate::{AnimationFrame, ColorScheme, FrameSet, GraphConfig};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use pointdiff_common::{format_signed, truncate_string, Result, Week};
use tracing::{debug, info, instrument};

/// Longest team name drawn on the y axis.
const MAX_LABEL_CHARS: usize = 24;

/// One rendered animation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    /// `None` for the placeholder chart of an empty table.
    pub week: Option<Week>,
    pub svg: String,
}

/// Trait for rendering frames with different chart types and styling options
pub trait GraphRenderer {
    /// Render one frame to an SVG document. `None` draws the axes only.
    fn render_frame(
        &self,
        config: &GraphConfig,
        frames: &FrameSet,
        frame: Option<&AnimationFrame>,
    ) -> Result<String>;

    /// Render every frame in week order; an empty set yields one empty chart.
    fn render_all(&self, config: &GraphConfig, frames: &FrameSet) -> Result<Vec<RenderedFrame>> {
        if frames.is_empty() {
            let svg = self.render_frame(config, frames, None)?;
            return Ok(vec![RenderedFrame { week: None, svg }]);
        }
        frames
            .frames
            .iter()
            .map(|frame| {
                let svg = self.render_frame(config, frames, Some(frame))?;
                Ok(RenderedFrame {
                    week: Some(frame.week),
                    svg,
                })
            })
            .collect()
    }

    /// Get colors from color scheme
    fn get_colors(&self, scheme: &ColorScheme) -> Vec<RGBColor> {
        match scheme {
            ColorScheme::Default => vec![
                RGBColor(99, 110, 250),  // Blue
                RGBColor(239, 85, 59),   // Red
                RGBColor(0, 204, 150),   // Green
                RGBColor(171, 99, 250),  // Purple
                RGBColor(255, 161, 90),  // Orange
                RGBColor(25, 211, 243),  // Cyan
                RGBColor(255, 102, 146), // Pink
                RGBColor(182, 232, 128), // Light Green
                RGBColor(255, 151, 255), // Magenta
                RGBColor(254, 203, 82),  // Yellow
            ],
            ColorScheme::Vibrant => vec![
                RGBColor(230, 25, 75),   // Red
                RGBColor(60, 180, 75),   // Green
                RGBColor(255, 225, 25),  // Yellow
                RGBColor(0, 130, 200),   // Blue
                RGBColor(245, 130, 48),  // Orange
                RGBColor(145, 30, 180),  // Purple
                RGBColor(70, 240, 240),  // Cyan
                RGBColor(240, 50, 230),  // Magenta
            ],
            ColorScheme::Monochrome => vec![
                RGBColor(0, 0, 0),       // Black
                RGBColor(64, 64, 64),    // Dark Gray
                RGBColor(128, 128, 128), // Gray
                RGBColor(192, 192, 192), // Light Gray
            ],
            ColorScheme::Custom(colors) => {
                colors.iter().map(|color_str| self.parse_color(color_str)).collect()
            }
        }
    }

    /// Parse a color string (hex format) to RGBColor
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        // Default to black if parsing fails
        RGBColor(0, 0, 0)
    }

    /// Get background color from style config
    fn get_background_color(&self, config: &GraphConfig) -> RGBColor {
        config
            .style
            .background_color
            .as_ref()
            .map_or(RGBColor(255, 255, 255), |color| self.parse_color(color))
    }

    /// Color assigned to a palette slot, cycling when the palette is short
    fn slot_color(&self, scheme: &ColorScheme, slot: usize) -> RGBColor {
        let colors = self.get_colors(scheme);
        if colors.is_empty() {
            return RGBColor(0, 0, 0);
        }
        colors[slot % colors.len()]
    }
}

/// Caption of a frame: the chart title plus the frame's week.
pub fn frame_caption(title: &str, week: Option<Week>) -> String {
    match week {
        Some(week) => format!("{title} — Week {week}"),
        None => title.to_string(),
    }
}

/// Horizontal bar chart of cumulative differentials, one bar per team.
#[derive(Debug, Default)]
pub struct RankingChartRenderer;

impl RankingChartRenderer {
    pub const fn new() -> Self {
        Self
    }
}

impl GraphRenderer for RankingChartRenderer {
    #[instrument(skip_all, fields(week = ?frame.map(|f| f.week)))]
    fn render_frame(
        &self,
        config: &GraphConfig,
        frames: &FrameSet,
        frame: Option<&AnimationFrame>,
    ) -> Result<String> {
        let bars = frame.map_or(&[][..], |f| f.bars.as_slice());
        let caption = frame_caption(&config.title, frame.map(|f| f.week));
        let rows = bars.len().max(1);
        let (x_min, x_max) = frames.x_range;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
                .into_drawing_area();
            root.fill(&self.get_background_color(config))?;

            let title_font = (
                config.style.title_font.family.as_str(),
                config.style.title_font.size,
            );
            let axis_font = (
                config.style.axis_font.family.as_str(),
                config.style.axis_font.size,
            );
            let margins = &config.style.margins;

            let mut chart = ChartBuilder::on(&root)
                .caption(&caption, title_font)
                .margin_top(margins.top)
                .margin_right(margins.right)
                .x_label_area_size(margins.bottom)
                .y_label_area_size(margins.left)
                .build_cartesian_2d(x_min..x_max, (0..rows).into_segmented())?;

            let label_for = |y: &SegmentValue<usize>| match y {
                SegmentValue::CenterOf(i) => bars
                    .get(*i)
                    .map(|bar| truncate_string(&bar.team, MAX_LABEL_CHARS))
                    .unwrap_or_default(),
                _ => String::new(),
            };

            chart
                .configure_mesh()
                .disable_y_mesh()
                .y_labels(rows + 1)
                .x_desc(config.x_label.as_deref().unwrap_or(""))
                .y_desc(config.y_label.as_deref().unwrap_or(""))
                .x_label_formatter(&|x| format!("{x:.0}"))
                .y_label_formatter(&label_for)
                .label_style(axis_font)
                .axis_desc_style(axis_font)
                .draw()?;

            // One series per team in alphabetical order, so the legend lists
            // teams alphabetically whatever their rank.
            let mut positions: Vec<usize> = (0..bars.len()).collect();
            positions.sort_by_key(|&i| bars[i].color_slot);
            for i in positions {
                let bar = &bars[i];
                let color = self.slot_color(&config.style.color_scheme, bar.color_slot);
                #[allow(clippy::cast_precision_loss)]
                let value = bar.value as f64;
                let mut rect = Rectangle::new(
                    [
                        (0.0, SegmentValue::Exact(i)),
                        (value, SegmentValue::Exact(i + 1)),
                    ],
                    color.filled(),
                );
                rect.set_margin(2, 2, 0, 0);
                chart
                    .draw_series(std::iter::once(rect))?
                    .label(bar.team.as_str())
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                    });
            }

            // Value labels sit just outside the end of each bar.
            let offset = (x_max - x_min) * 0.005;
            chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
                #[allow(clippy::cast_precision_loss)]
                let value = bar.value as f64;
                let (x, anchor) = if bar.value < 0 {
                    (value - offset, HPos::Right)
                } else {
                    (value + offset, HPos::Left)
                };
                let style = axis_font
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(anchor, VPos::Center));
                Text::new(format_signed(bar.value), (x, SegmentValue::CenterOf(i)), style)
            }))?;

            if !bars.is_empty() {
                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::LowerRight)
                    .background_style(&WHITE.mix(0.8))
                    .border_style(&BLACK)
                    .label_font(axis_font)
                    .draw()?;
            }

            root.present()?;
        }

        debug!(bars = bars.len(), bytes = svg.len(), "Rendered frame");
        Ok(svg)
    }
}

/// Render every frame of the set with the ranking chart renderer.
#[instrument(skip_all, fields(frames = frames.len()))]
pub fn render_frames(config: &GraphConfig, frames: &FrameSet) -> Result<Vec<RenderedFrame>> {
    let rendered = RankingChartRenderer::new().render_all(config, frames)?;
    info!(frames = rendered.len(), "Rendered ranking chart frames");
    Ok(rendered)
}
