//! Per-team weekly point differentials and their running totals.
//!
//! The builder turns filtered games into a dense (week × team) table:
//!
//! 1. every game yields one row per side, own score minus opponent score;
//! 2. week identifiers become integers;
//! 3. the team and week universes span the full cross product, with absent
//!    combinations filled with a zero differential;
//! 4. rows are sorted by team then week before the running sum, so the
//!    cumulative value never depends on input row order;
//! 5. the result is ordered for display: week ascending, cumulative
//!    descending, team name ascending.

use crate::filter::FilteredSeason;
use crate::record::GameRecord;
use pointdiff_common::{PointDiffError, Result, Week};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, instrument};

/// One team's point differential in one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamWeekDifferential {
    /// Week of the game.
    pub week: Week,
    /// Team the differential is computed for.
    pub team: String,
    /// Own score minus opponent score; zero for filled-in weeks.
    pub point_differential: i64,
}

/// One team's differential in one week together with its running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeRecord {
    /// Week of the row.
    pub week: Week,
    /// Team of the row.
    pub team: String,
    /// Differential earned in this week.
    pub point_differential: i64,
    /// Sum of the team's differentials for all weeks up to and including this one.
    pub cumulative_differential: i64,
}

/// Returns the home-side and away-side differential rows of one game.
///
/// Fails if the game has no final score or its week is not numeric.
pub fn game_differentials(game: &GameRecord) -> Result<[TeamWeekDifferential; 2]> {
    let (Some(home), Some(away)) = (game.home_score, game.away_score) else {
        return Err(PointDiffError::data(format!(
            "{} has no final score",
            game.describe()
        )));
    };
    let week: Week = game.week.parse()?;
    let margin = i64::from(home) - i64::from(away);

    Ok([
        TeamWeekDifferential {
            week,
            team: game.home_team.clone(),
            point_differential: margin,
        },
        TeamWeekDifferential {
            week,
            team: game.away_team.clone(),
            point_differential: -margin,
        },
    ])
}

/// Expands rows onto the full (week × team) grid.
///
/// The week universe is the set of weeks present in `rows`; the team
/// universe is `roster` plus any team present in `rows`. Missing
/// combinations get a zero differential and duplicate (week, team) rows are
/// summed. The output is ordered by team, then week.
pub fn densify(
    rows: Vec<TeamWeekDifferential>,
    roster: &BTreeSet<String>,
) -> Vec<TeamWeekDifferential> {
    let weeks: BTreeSet<Week> = rows.iter().map(|r| r.week).collect();
    let mut teams: BTreeSet<String> = roster.clone();
    teams.extend(rows.iter().map(|r| r.team.clone()));

    let mut observed: BTreeMap<(String, Week), i64> = BTreeMap::new();
    for row in rows {
        *observed.entry((row.team, row.week)).or_insert(0) += row.point_differential;
    }

    let mut dense = Vec::with_capacity(weeks.len() * teams.len());
    for team in &teams {
        for &week in &weeks {
            let point_differential = observed
                .get(&(team.clone(), week))
                .copied()
                .unwrap_or(0);
            dense.push(TeamWeekDifferential {
                week,
                team: team.clone(),
                point_differential,
            });
        }
    }
    dense
}

/// Computes each team's running total in ascending week order.
///
/// Rows are sorted by (team, week) first; input order is irrelevant.
pub fn accumulate(mut rows: Vec<TeamWeekDifferential>) -> Vec<CumulativeRecord> {
    rows.sort_by(|a, b| a.team.cmp(&b.team).then(a.week.cmp(&b.week)));

    let mut records = Vec::with_capacity(rows.len());
    let mut current_team: Option<String> = None;
    let mut running = 0i64;

    for row in rows {
        if current_team.as_deref() != Some(row.team.as_str()) {
            current_team = Some(row.team.clone());
            running = 0;
        }
        running += row.point_differential;
        records.push(CumulativeRecord {
            week: row.week,
            team: row.team,
            point_differential: row.point_differential,
            cumulative_differential: running,
        });
    }
    records
}

/// Orders rows for display: week ascending, cumulative descending, then team.
pub fn rank_order(records: &mut [CumulativeRecord]) {
    records.sort_by(|a, b| {
        a.week
            .cmp(&b.week)
            .then(b.cumulative_differential.cmp(&a.cumulative_differential))
            .then_with(|| a.team.cmp(&b.team))
    });
}

/// Dense, display-ordered cumulative differential table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DifferentialTable {
    records: Vec<CumulativeRecord>,
}

impl DifferentialTable {
    /// Wraps records, putting them in display order.
    pub fn from_records(mut records: Vec<CumulativeRecord>) -> Self {
        rank_order(&mut records);
        Self { records }
    }

    /// All rows in display order.
    pub fn records(&self) -> &[CumulativeRecord] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct weeks, ascending.
    pub fn weeks(&self) -> Vec<Week> {
        let weeks: BTreeSet<Week> = self.records.iter().map(|r| r.week).collect();
        weeks.into_iter().collect()
    }

    /// Distinct teams, alphabetical.
    pub fn teams(&self) -> Vec<&str> {
        let teams: BTreeSet<&str> = self.records.iter().map(|r| r.team.as_str()).collect();
        teams.into_iter().collect()
    }

    /// Rows of one week, in display order.
    pub fn week(&self, week: Week) -> impl Iterator<Item = &CumulativeRecord> {
        self.records.iter().filter(move |r| r.week == week)
    }

    /// Each team's cumulative differential after the last week.
    pub fn final_totals(&self) -> BTreeMap<&str, i64> {
        let mut totals = BTreeMap::new();
        if let Some(last) = self.weeks().last().copied() {
            for record in self.week(last) {
                totals.insert(record.team.as_str(), record.cumulative_differential);
            }
        }
        totals
    }
}

/// Builds the dense cumulative table from a filtered season.
pub struct DifferentialBuilder;

impl DifferentialBuilder {
    /// Runs every step of the transformation.
    #[instrument(skip_all, fields(season = %season.season, games = season.games.len()))]
    pub fn build(season: &FilteredSeason) -> Result<DifferentialTable> {
        let mut rows = Vec::with_capacity(season.games.len() * 2);
        for game in &season.games {
            rows.extend(game_differentials(game)?);
        }
        debug!(rows = rows.len(), "Computed per-game differentials");

        let dense = densify(rows, &season.roster);
        debug!(rows = dense.len(), "Filled team-week grid");

        let table = DifferentialTable::from_records(accumulate(dense));
        info!(
            rows = table.len(),
            weeks = table.weeks().len(),
            teams = table.teams().len(),
            "Built cumulative differential table"
        );
        Ok(table)
    }
}
