//! Season, regular-season and week selection.

use crate::record::GameRecord;
use pointdiff_common::Season;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info, instrument};

/// Keeps the regular-season games of one season whose week is whitelisted.
#[derive(Debug, Clone)]
pub struct SeasonFilter {
    season: Season,
    weeks: HashSet<String>,
}

/// The games that passed the filter, plus every team of the season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredSeason {
    /// Season the games belong to.
    pub season: Season,
    /// Selected games, in input order.
    pub games: Vec<GameRecord>,
    /// Teams with at least one regular-season game in the season, whether or
    /// not any of their games fall in a whitelisted week.
    pub roster: BTreeSet<String>,
}

impl FilteredSeason {
    /// True when no game was selected.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl SeasonFilter {
    /// Creates a filter for `season` and the given week identifiers.
    ///
    /// Identifiers are compared as trimmed text, so `"1"` matches a week
    /// written as `1` but not `01`.
    pub fn new<I, S>(season: Season, weeks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            season,
            weeks: weeks.into_iter().map(|w| w.as_ref().trim().to_string()).collect(),
        }
    }

    /// Whether a single game passes the filter.
    pub fn matches(&self, game: &GameRecord) -> bool {
        game.season == self.season && !game.playoff && self.weeks.contains(game.week.trim())
    }

    /// Selects games, preserving input order.
    ///
    /// Rows of other seasons, playoff rows and rows outside the whitelist are
    /// dropped without error; their counts are logged at debug level.
    #[instrument(skip_all, fields(season = %self.season))]
    pub fn apply(&self, games: &[GameRecord]) -> FilteredSeason {
        let mut selected = Vec::new();
        let mut roster = BTreeSet::new();
        let (mut other_season, mut playoff, mut outside_weeks) = (0usize, 0usize, 0usize);

        for game in games {
            if game.season != self.season {
                other_season += 1;
                continue;
            }
            if game.playoff {
                playoff += 1;
                continue;
            }

            roster.insert(game.home_team.clone());
            roster.insert(game.away_team.clone());

            if self.matches(game) {
                selected.push(game.clone());
            } else {
                outside_weeks += 1;
            }
        }

        debug!(other_season, playoff, outside_weeks, "Dropped rows");
        info!(games = selected.len(), teams = roster.len(), "Filtered season");

        FilteredSeason {
            season: self.season,
            games: selected,
            roster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(season: i32, week: &str, playoff: bool, home: &str, away: &str) -> GameRecord {
        GameRecord {
            season: Season(season),
            week: week.to_string(),
            playoff,
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: Some(10),
            away_score: Some(7),
        }
    }

    #[test]
    fn test_keeps_matching_rows_in_order() {
        let games = vec![
            game(2024, "2", false, "C", "D"),
            game(2023, "1", false, "A", "B"),
            game(2024, "1", false, "A", "B"),
            game(2024, "Wildcard", true, "A", "C"),
            game(2024, "12", false, "E", "F"),
        ];
        let filter = SeasonFilter::new(Season(2024), ["1", "2"]);
        let filtered = filter.apply(&games);

        assert_eq!(filtered.games, vec![games[0].clone(), games[2].clone()]);
        assert_eq!(filtered.season, Season(2024));
    }

    #[test]
    fn test_roster_includes_teams_outside_whitelist() {
        let games = vec![
            game(2024, "1", false, "A", "B"),
            game(2024, "12", false, "E", "F"),
            game(2024, "Division", true, "G", "H"),
        ];
        let filtered = SeasonFilter::new(Season(2024), ["1"]).apply(&games);

        let roster: Vec<&str> = filtered.roster.iter().map(String::as_str).collect();
        assert_eq!(roster, vec!["A", "B", "E", "F"]);
    }

    #[test]
    fn test_playoff_rows_dropped_even_when_week_matches() {
        let games = vec![game(2024, "1", true, "A", "B")];
        let filter = SeasonFilter::new(Season(2024), ["1"]);

        assert!(!filter.matches(&games[0]));
        assert!(filter.apply(&games).is_empty());
    }

    #[test]
    fn test_week_comparison_is_textual() {
        let filter = SeasonFilter::new(Season(2024), [" 1 "]);
        assert!(filter.matches(&game(2024, "1", false, "A", "B")));
        assert!(!filter.matches(&game(2024, "01", false, "A", "B")));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let filtered = SeasonFilter::new(Season(1999), ["1"]).apply(&[game(2024, "1", false, "A", "B")]);
        assert!(filtered.is_empty());
        assert!(filtered.roster.is_empty());
    }
}
