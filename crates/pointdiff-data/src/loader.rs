//! Score table loading.

use crate::record::{GameRecord, REQUIRED_COLUMNS};
use csv::{ReaderBuilder, StringRecord, Trim};
use pointdiff_common::{PointDiffError, Result};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Reads game records from a CSV score table.
#[derive(Debug, Clone)]
pub struct GameLoader {
    path: PathBuf,
}

impl GameLoader {
    /// Creates a loader for the given table.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the whole file, then decodes every row.
    ///
    /// The file is closed before decoding starts. A missing column or an
    /// undecodable row aborts the load.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Vec<GameRecord>> {
        let bytes = std::fs::read(&self.path).map_err(|e| PointDiffError::file(&self.path, e))?;
        debug!(bytes = bytes.len(), "Read score table");

        let games = Self::load_from_reader(bytes.as_slice())?;
        info!(rows = games.len(), "Loaded game records");
        Ok(games)
    }

    /// Decodes game records from any CSV source.
    pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<GameRecord>> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        check_columns(csv_reader.headers()?)?;

        csv_reader
            .deserialize::<GameRecord>()
            .map(|row| row.map_err(PointDiffError::from))
            .collect()
    }
}

fn check_columns(headers: &StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(PointDiffError::schema_column(
                format!("score table has no '{column}' column"),
                column,
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointdiff_common::test_utils::{opening_week_games, scores_csv, FixtureGame};
    use pointdiff_common::Season;

    #[test]
    fn test_loads_rows_in_file_order() {
        let mut games = opening_week_games(2024);
        games.push(FixtureGame::regular(2024, "2", "Team B", 3, "Team C", 0));
        let csv = scores_csv(&games);

        let loaded = GameLoader::load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].home_team, "Team A");
        assert_eq!(loaded[1].home_team, "Team C");
        assert_eq!(loaded[2].week, "2");
        assert_eq!(loaded[2].season, Season(2024));
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        let csv = scores_csv(&[]);
        assert!(GameLoader::load_from_reader(csv.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_column_is_reported_by_name() {
        let csv = "schedule_season,schedule_week,schedule_playoff,team_home,team_away,score_home\n\
                   2024,1,FALSE,A,B,3\n";
        let err = GameLoader::load_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            PointDiffError::Schema { column, .. } => {
                assert_eq!(column.as_deref(), Some("score_away"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_mistyped_cell_reports_line() {
        let csv = "schedule_season,schedule_week,schedule_playoff,team_home,team_away,score_home,score_away\n\
                   2024,1,FALSE,A,B,3,0\n\
                   twenty,1,FALSE,C,D,3,0\n";
        let err = GameLoader::load_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            PointDiffError::Schema { line, .. } => assert_eq!(line, Some(3)),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_padded_cells_are_trimmed() {
        let csv = "schedule_season, schedule_week ,schedule_playoff,team_home,team_away,score_home,score_away\n\
                   2024, 4 , FALSE ,Team A , Team B, 21 , 20\n";
        let loaded = GameLoader::load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(loaded[0].week, "4");
        assert_eq!(loaded[0].home_team, "Team A");
        assert_eq!(loaded[0].away_score, Some(20));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = GameLoader::new("no/such/scores.csv").load().unwrap_err();
        assert!(matches!(err, PointDiffError::File { .. }));
        assert!(err.to_string().contains("no/such/scores.csv"));
    }
}
