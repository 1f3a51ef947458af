//! Animation frame model.
//!
//! One frame per week of the cumulative table. Bars are stored bottom to
//! top: ascending cumulative value, so the leader is drawn last and sits on
//! top. Equal values put the alphabetically earlier team higher.

use pointdiff_common::Week;
use pointdiff_data::DifferentialTable;
use std::collections::BTreeMap;

/// Fraction of the value span added on each side of the x axis.
pub const X_RANGE_PADDING: f64 = 0.05;

/// One horizontal bar of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub team: String,
    pub value: i64,
    /// Alphabetical index of the team; selects the palette color.
    pub color_slot: usize,
}

/// Snapshot of the rankings after one week.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    pub week: Week,
    /// Bottom to top.
    pub bars: Vec<Bar>,
}

impl AnimationFrame {
    /// Teams from first place down.
    pub fn standings(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter().rev()
    }
}

/// Every frame of the animation plus the layout shared between them.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSet {
    pub frames: Vec<AnimationFrame>,
    /// Alphabetical; a team's position is its color slot.
    pub teams: Vec<String>,
    /// Fixed x range used by every frame.
    pub x_range: (f64, f64),
}

impl FrameSet {
    pub fn from_table(table: &DifferentialTable) -> Self {
        let teams: Vec<String> = table.teams().into_iter().map(str::to_string).collect();
        let slots: BTreeMap<&str, usize> = teams
            .iter()
            .enumerate()
            .map(|(slot, team)| (team.as_str(), slot))
            .collect();

        let frames = table
            .weeks()
            .into_iter()
            .map(|week| {
                let mut bars: Vec<Bar> = table
                    .week(week)
                    .map(|record| Bar {
                        team: record.team.clone(),
                        value: record.cumulative_differential,
                        color_slot: slots.get(record.team.as_str()).copied().unwrap_or(0),
                    })
                    .collect();
                bars.sort_by(|a, b| a.value.cmp(&b.value).then_with(|| b.team.cmp(&a.team)));
                AnimationFrame { week, bars }
            })
            .collect();

        let values = table.records().iter().map(|r| r.cumulative_differential);
        Self {
            frames,
            teams,
            x_range: padded_range(values),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn weeks(&self) -> Vec<Week> {
        self.frames.iter().map(|f| f.week).collect()
    }
}

/// Range covering zero and every value, widened by [`X_RANGE_PADDING`].
///
/// Never empty: an all-zero input yields `(-1.0, 1.0)`.
pub fn padded_range(values: impl IntoIterator<Item = i64>) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .fold((0i64, 0i64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo == hi {
        return (-1.0, 1.0);
    }
    #[allow(clippy::cast_precision_loss)]
    let (lo, hi) = (lo as f64, hi as f64);
    let pad = (hi - lo) * X_RANGE_PADDING;
    (lo - pad, hi + pad)
}
