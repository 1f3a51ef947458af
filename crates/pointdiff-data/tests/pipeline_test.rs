//! End-to-end tests of load → filter → build on score files.

use pointdiff_common::test_utils::{opening_week_games, write_scores_file, FixtureGame};
use pointdiff_common::{PointDiffError, Season, Week};
use pointdiff_data::{CumulativeRecord, DifferentialBuilder, DifferentialTable, GameLoader, SeasonFilter};

fn build(games: &[FixtureGame], weeks: &[&str]) -> pointdiff_common::Result<DifferentialTable> {
    let file = write_scores_file(games);
    let loaded = GameLoader::new(file.path()).load()?;
    let filtered = SeasonFilter::new(Season(2024), weeks.iter().copied()).apply(&loaded);
    DifferentialBuilder::build(&filtered)
}

fn find<'a>(table: &'a DifferentialTable, week: u32, team: &str) -> &'a CumulativeRecord {
    table
        .records()
        .iter()
        .find(|r| r.week == Week(week) && r.team == team)
        .unwrap_or_else(|| panic!("no record for {team} in week {week}"))
}

#[test]
fn test_opening_week_scenario() {
    let table = build(&opening_week_games(2024), &["1"]).unwrap();

    assert_eq!(table.len(), 4);
    for (team, expected) in [("Team A", 14), ("Team B", -14), ("Team C", 0), ("Team D", 0)] {
        let record = find(&table, 1, team);
        assert_eq!(record.point_differential, expected, "{team}");
        assert_eq!(record.cumulative_differential, expected, "{team}");
    }

    let order: Vec<&str> = table.records().iter().map(|r| r.team.as_str()).collect();
    assert_eq!(order, vec!["Team A", "Team C", "Team D", "Team B"]);
}

#[test]
fn test_bye_week_keeps_cumulative() {
    let mut games = opening_week_games(2024);
    games.push(FixtureGame::regular(2024, "2", "Team B", 20, "Team C", 17));
    games.push(FixtureGame::regular(2024, "2", "Team D", 3, "Team E", 0));

    let table = build(&games, &["1", "2"]).unwrap();

    let a_week2 = find(&table, 2, "Team A");
    assert_eq!(a_week2.point_differential, 0);
    assert_eq!(a_week2.cumulative_differential, 14);

    assert_eq!(find(&table, 2, "Team B").cumulative_differential, -11);
    assert_eq!(find(&table, 2, "Team C").cumulative_differential, -3);
    assert_eq!(find(&table, 1, "Team E").cumulative_differential, 0);
    assert_eq!(table.len(), 2 * 5);
}

#[test]
fn test_team_excluded_by_whitelist_still_appears_with_zero() {
    let mut games = opening_week_games(2024);
    games.push(FixtureGame::regular(2024, "5", "Team E", 30, "Team F", 0));

    let table = build(&games, &["1"]).unwrap();

    let e = find(&table, 1, "Team E");
    assert_eq!(e.point_differential, 0);
    assert_eq!(e.cumulative_differential, 0);
    assert_eq!(find(&table, 1, "Team F").cumulative_differential, 0);
}

#[test]
fn test_playoffs_other_seasons_and_future_games_are_ignored() {
    let mut games = opening_week_games(2024);
    games.push(FixtureGame::regular(2024, "Wildcard", "Team A", 40, "Team B", 0).playoff());
    games.push(FixtureGame::regular(2023, "1", "Team A", 40, "Team B", 0));
    games.push(FixtureGame::regular(2024, "14", "Team A", 0, "Team B", 0).unplayed());

    let table = build(&games, &["1", "2", "3"]).unwrap();

    assert_eq!(table.weeks(), vec![Week(1)]);
    assert_eq!(table.final_totals()["Team A"], 14);
}

#[test]
fn test_unplayed_selected_game_fails() {
    let mut games = opening_week_games(2024);
    games.push(FixtureGame::regular(2024, "2", "Team A", 0, "Team B", 0).unplayed());

    let err = build(&games, &["1", "2"]).unwrap_err();
    assert!(matches!(err, PointDiffError::Data { .. }));
}

#[test]
fn test_empty_selection_builds_empty_table() {
    let table = build(&opening_week_games(2024), &["9"]).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_rerun_is_identical() {
    let mut games = opening_week_games(2024);
    games.push(FixtureGame::regular(2024, "2", "Team D", 10, "Team A", 13));
    games.push(FixtureGame::regular(2024, "2", "Team B", 6, "Team C", 6));
    let file = write_scores_file(&games);

    let run = || {
        let loaded = GameLoader::new(file.path()).load().unwrap();
        let filtered = SeasonFilter::new(Season(2024), ["1", "2"]).apply(&loaded);
        DifferentialBuilder::build(&filtered).unwrap()
    };

    assert_eq!(run(), run());
}
