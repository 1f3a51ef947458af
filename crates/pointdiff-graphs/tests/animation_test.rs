//! Frames built from score tables read through the data pipeline.

use pointdiff_common::test_utils::{opening_week_games, scores_csv, FixtureGame};
use pointdiff_common::{Season, Week};
use pointdiff_data::{DifferentialBuilder, GameLoader, SeasonFilter};
use pointdiff_graphs::{Dashboard, FrameSet, RenderedFrame};

fn frames_for(games: &[FixtureGame], weeks: &[&str]) -> FrameSet {
    let csv = scores_csv(games);
    let records = GameLoader::load_from_reader(csv.as_bytes()).unwrap();
    let filter = SeasonFilter::new(Season(2024), weeks.iter().map(|w| (*w).to_string()));
    let table = DifferentialBuilder::build(&filter.apply(&records)).unwrap();
    FrameSet::from_table(&table)
}

fn standings(frames: &FrameSet, index: usize) -> Vec<(&str, i64)> {
    frames.frames[index]
        .standings()
        .map(|bar| (bar.team.as_str(), bar.value))
        .collect()
}

#[test]
fn test_opening_week_frame() {
    let frames = frames_for(&opening_week_games(2024), &["1"]);

    assert_eq!(frames.weeks(), vec![Week(1)]);
    assert_eq!(
        standings(&frames, 0),
        vec![("Team A", 14), ("Team C", 0), ("Team D", 0), ("Team B", -14)]
    );
}

#[test]
fn test_bye_week_keeps_position() {
    let mut games = opening_week_games(2024);
    games.push(FixtureGame::regular(2024, "2", "Team B", 3, "Team C", 0));
    games.push(FixtureGame::regular(2024, "2", "Team D", 10, "Team E", 0));
    let frames = frames_for(&games, &["1", "2"]);

    let week_two = standings(&frames, 1);
    assert_eq!(week_two[0], ("Team A", 14));
    assert!(week_two.contains(&("Team E", -10)));
    assert_eq!(frames.frames[0].bars.len(), frames.frames[1].bars.len());
}

#[test]
fn test_team_outside_whitelist_stays_at_zero() {
    let mut games = opening_week_games(2024);
    games.push(FixtureGame::regular(2024, "5", "Team E", 35, "Team F", 0));
    let frames = frames_for(&games, &["1"]);

    for frame in &frames.frames {
        for team in ["Team E", "Team F"] {
            let bar = frame.bars.iter().find(|b| b.team == team).unwrap();
            assert_eq!(bar.value, 0);
        }
    }
}

#[test]
fn test_frames_are_reproducible() {
    let mut games = opening_week_games(2024);
    games.push(FixtureGame::regular(2024, "2", "Team D", 17, "Team A", 20));
    assert_eq!(frames_for(&games, &["1", "2"]), frames_for(&games, &["1", "2"]));
}

#[test]
fn test_colors_are_stable_across_frames() {
    let mut games = opening_week_games(2024);
    games.push(FixtureGame::regular(2024, "2", "Team B", 30, "Team A", 0));
    let frames = frames_for(&games, &["1", "2"]);

    for (slot, team) in frames.teams.iter().enumerate() {
        for frame in &frames.frames {
            let bar = frame.bars.iter().find(|b| &b.team == team).unwrap();
            assert_eq!(bar.color_slot, slot);
        }
    }
}

#[test]
fn test_dashboard_lists_every_week() {
    let mut games = opening_week_games(2024);
    games.push(FixtureGame::regular(2024, "3", "Team A", 1, "Team B", 0));
    let frames = frames_for(&games, &["1", "2", "3"]);

    // Week 2 had no games, so it has no frame.
    let rendered: Vec<RenderedFrame> = frames
        .weeks()
        .into_iter()
        .map(|week| RenderedFrame {
            week: Some(week),
            svg: format!("<svg data-test=\"{week}\"></svg>"),
        })
        .collect();
    let html = Dashboard::new("Rankings", 1500).render_page(&rendered).unwrap();

    assert!(html.contains("const WEEKS = [1,3];"));
    assert_eq!(html.matches("<div class=\"frame\"").count(), 2);
}
