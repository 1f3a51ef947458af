//! Typed game rows as they appear in the score table.

use pointdiff_common::Season;
use serde::{de::Error as _, Deserialize, Deserializer};

/// Columns the loader requires; any others are ignored.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "schedule_season",
    "schedule_week",
    "schedule_playoff",
    "team_home",
    "team_away",
    "score_home",
    "score_away",
];

/// One played (or scheduled) game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameRecord {
    /// Season the game belongs to.
    #[serde(rename = "schedule_season")]
    pub season: Season,
    /// Week identifier as written in the table: `"1"`, `"18"`, `"Wildcard"`...
    #[serde(rename = "schedule_week")]
    pub week: String,
    /// Whether the game is a playoff game.
    #[serde(rename = "schedule_playoff", deserialize_with = "deserialize_flag")]
    pub playoff: bool,
    /// Home team name.
    #[serde(rename = "team_home")]
    pub home_team: String,
    /// Away team name.
    #[serde(rename = "team_away")]
    pub away_team: String,
    /// Home score, absent for games not yet played.
    #[serde(rename = "score_home", deserialize_with = "deserialize_score")]
    pub home_score: Option<i32>,
    /// Away score, absent for games not yet played.
    #[serde(rename = "score_away", deserialize_with = "deserialize_score")]
    pub away_score: Option<i32>,
}

impl GameRecord {
    /// Short human description used in log lines and errors.
    pub fn describe(&self) -> String {
        format!(
            "{} week {}: {} vs {}",
            self.season, self.week, self.home_team, self.away_team
        )
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(D::Error::custom(format!("invalid playoff flag '{raw}'"))),
    }
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(points) = trimmed.parse::<i32>() {
        return Ok(Some(points));
    }

    // Exports written through a float column carry scores such as "24.0".
    match trimmed.parse::<f64>() {
        #[allow(clippy::cast_possible_truncation)]
        Ok(points)
            if points.is_finite()
                && points.fract() == 0.0
                && points.abs() <= f64::from(i32::MAX) =>
        {
            Ok(Some(points as i32))
        }
        _ => Err(D::Error::custom(format!("invalid score '{raw}'"))),
    }
}
