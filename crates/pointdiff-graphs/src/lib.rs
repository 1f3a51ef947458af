//! Animated ranking chart for pointdiff
//!
//! [`FrameSet`] lays out one frame per week, [`RankingChartRenderer`] draws
//! each frame to SVG with plotters, and [`Dashboard`] wraps the frames in a
//! self-contained HTML page with a week player.

pub mod dashboard;
pub mod frames;
pub mod renderer;
pub mod types;

pub use dashboard::Dashboard;
pub use frames::{padded_range, AnimationFrame, Bar, FrameSet, X_RANGE_PADDING};
pub use renderer::{frame_caption, render_frames, GraphRenderer, RankingChartRenderer, RenderedFrame};
pub use types::*;
