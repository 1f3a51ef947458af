//! Test utilities and shared fixtures for the pointdiff workspace.
//!
//! Builds score tables in the layout of the `spreadspoke_scores.csv`
//! export so loader, filter and pipeline tests share one source of truth.

/// Header of the score export, including columns the loader ignores.
pub const SCORES_HEADER: &str = "schedule_date,schedule_season,schedule_week,schedule_playoff,\
team_home,score_home,score_away,team_away,stadium";

/// One row of a fixture score table.
#[derive(Debug, Clone)]
pub struct FixtureGame {
    pub season: i32,
    pub week: String,
    pub playoff: bool,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

impl FixtureGame {
    /// A played regular-season game.
    pub fn regular(
        season: i32,
        week: impl Into<String>,
        home_team: &str,
        home_score: i32,
        away_team: &str,
        away_score: i32,
    ) -> Self {
        Self {
            season,
            week: week.into(),
            playoff: false,
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score: Some(home_score),
            away_score: Some(away_score),
        }
    }

    /// Marks the game as a playoff game.
    #[must_use]
    pub fn playoff(mut self) -> Self {
        self.playoff = true;
        self
    }

    /// Removes both scores, as for a fixture that has not been played yet.
    #[must_use]
    pub fn unplayed(mut self) -> Self {
        self.home_score = None;
        self.away_score = None;
        self
    }

    fn to_csv_line(&self) -> String {
        let score = |s: Option<i32>| s.map(|v| v.to_string()).unwrap_or_default();
        format!(
            "09/05/{season},{season},{week},{playoff},{home},{home_score},{away_score},{away},Test Stadium",
            season = self.season,
            week = self.week,
            playoff = if self.playoff { "TRUE" } else { "FALSE" },
            home = self.home_team,
            home_score = score(self.home_score),
            away_score = score(self.away_score),
            away = self.away_team,
        )
    }
}

/// Renders fixture games as CSV text with the export header.
pub fn scores_csv(games: &[FixtureGame]) -> String {
    let mut out = String::from(SCORES_HEADER);
    out.push('\n');
    for game in games {
        out.push_str(&game.to_csv_line());
        out.push('\n');
    }
    out
}

/// The two-game opening week used throughout the tests:
/// A 24 vs B 10 (A home), C 7 vs D 7 (C home).
pub fn opening_week_games(season: i32) -> Vec<FixtureGame> {
    vec![
        FixtureGame::regular(season, "1", "Team A", 24, "Team B", 10),
        FixtureGame::regular(season, "1", "Team C", 7, "Team D", 7),
    ]
}

/// Writes fixture games to a temporary CSV file that is removed on drop.
#[cfg(feature = "tempfile")]
pub fn write_scores_file(games: &[FixtureGame]) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temporary score file");
    file.write_all(scores_csv(games).as_bytes())
        .expect("Failed to write temporary score file");
    file.flush().expect("Failed to flush temporary score file");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_csv_layout() {
        let csv = scores_csv(&opening_week_games(2024));
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], SCORES_HEADER);
        assert_eq!(
            lines[1],
            "09/05/2024,2024,1,FALSE,Team A,24,10,Team B,Test Stadium"
        );
    }

    #[test]
    fn test_unplayed_and_playoff_rows() {
        let game = FixtureGame::regular(2024, "Wildcard", "X", 0, "Y", 0)
            .playoff()
            .unplayed();
        assert_eq!(
            game.to_csv_line(),
            "09/05/2024,2024,Wildcard,TRUE,X,,,Y,Test Stadium"
        );
    }
}
