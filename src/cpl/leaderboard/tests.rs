//! Unit tests for leaderboard computation

use super::*;
use crate::cpl::types::{StatEntry, TeamStatsEntry};
use serde_json::json;

fn stat(id: &str, value: f64) -> StatEntry {
    StatEntry {
        stats_id: id.to_string(),
        stats_label: id.to_string(),
        stats_value: Some(value),
        ..Default::default()
    }
}

fn player(id: &str, stats: Option<Vec<StatEntry>>) -> PlayerStatsEntry {
    PlayerStatsEntry {
        player_id: id.to_string(),
        media_first_name: format!("First{id}"),
        media_last_name: format!("Last{id}"),
        nationality: Some("Canada".to_string()),
        nationality_iso_code: Some("CA".to_string()),
        role_label: "Forward".to_string(),
        stats,
        team: Some(TeamStatsEntry {
            team_id: "t1".to_string(),
            acronym_name: "FCE".to_string(),
            official_name: "FC Edmonton".to_string(),
            short_name: "Edmonton".to_string(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn test_every_category_present_for_empty_input() {
    let boards = build_leaderboards(&[], 5);

    assert_eq!(boards.len(), LeaderboardCategory::ALL.len());
    for category in LeaderboardCategory::ALL {
        assert!(boards[&category].is_empty(), "{category} should be empty");
    }
}

#[test]
fn test_goals_two_players_ranked_by_value() {
    let players = vec![
        player("p1", Some(vec![stat("goals", 3.0)])),
        player("p2", Some(vec![stat("goals", 5.0)])),
    ];

    let boards = build_leaderboards(&players, 5);
    let goals = &boards[&LeaderboardCategory::Goals];

    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0].player_id, "p2");
    assert_eq!(goals[0].value, 5);
    assert_eq!(goals[0].ranking, 1);
    assert_eq!(goals[1].player_id, "p1");
    assert_eq!(goals[1].value, 3);
    assert_eq!(goals[1].ranking, 2);
}

#[test]
fn test_yellow_cards_truncated_to_top_five() {
    let players: Vec<_> = (1..=7)
        .map(|i| player(&format!("p{i}"), Some(vec![stat("yellow-cards", i as f64)])))
        .collect();

    let boards = build_leaderboards(&players, 5);
    let cards = &boards[&LeaderboardCategory::YellowCards];

    assert_eq!(cards.len(), 5);
    let values: Vec<i64> = cards.iter().map(|e| e.value).collect();
    assert_eq!(values, vec![7, 6, 5, 4, 3]);
    let ranks: Vec<u32> = cards.iter().map(|e| e.ranking).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_player_without_stats_contributes_nothing() {
    let players = vec![player("p1", None), player("p2", Some(vec![]))];

    let boards = build_leaderboards(&players, 5);
    assert!(boards.values().all(|entries| entries.is_empty()));
}

#[test]
fn test_unknown_stat_ids_are_ignored() {
    let players = vec![player("p1", Some(vec![stat("shots-on-target", 12.0)]))];

    let boards = build_leaderboards(&players, 5);
    assert!(boards.values().all(|entries| entries.is_empty()));
}

#[test]
fn test_ties_keep_encounter_order() {
    let players = vec![
        player("a", Some(vec![stat("tackles", 4.0)])),
        player("b", Some(vec![stat("tackles", 9.0)])),
        player("c", Some(vec![stat("tackles", 4.0)])),
    ];

    let boards = build_leaderboards(&players, 5);
    let ids: Vec<&str> = boards[&LeaderboardCategory::Tackles]
        .iter()
        .map(|e| e.player_id.as_str())
        .collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn test_one_player_feeds_several_categories() {
    let players = vec![player(
        "p1",
        Some(vec![stat("goals", 2.0), stat("assists", 4.0), stat("red-cards", 1.0)]),
    )];

    let boards = build_leaderboards(&players, 5);

    assert_eq!(boards[&LeaderboardCategory::Goals][0].value, 2);
    assert_eq!(boards[&LeaderboardCategory::Assists][0].value, 4);
    assert_eq!(boards[&LeaderboardCategory::RedCards][0].value, 1);
    assert!(boards[&LeaderboardCategory::Saves].is_empty());
}

#[test]
fn test_fractional_values_are_truncated() {
    let players = vec![player("p1", Some(vec![stat("passes", 412.9)]))];

    let boards = build_leaderboards(&players, 5);
    assert_eq!(boards[&LeaderboardCategory::Passes][0].value, 412);
}

#[test]
fn test_missing_value_counts_as_zero_but_creates_entry() {
    let raw = json!({
        "playerId": "p1",
        "mediaFirstName": "Ali",
        "mediaLastName": "Musse",
        "roleLabel": "Forward",
        "stats": [
            { "statsId": "saves", "statsLabel": "Saves" },
            { "statsId": "goals", "statsLabel": "Goals", "statsValue": "n/a" }
        ]
    });
    let parsed: PlayerStatsEntry = serde_json::from_value(raw).unwrap();

    let boards = build_leaderboards(&[parsed], 5);

    assert_eq!(boards[&LeaderboardCategory::Saves].len(), 1);
    assert_eq!(boards[&LeaderboardCategory::Saves][0].value, 0);
    assert_eq!(boards[&LeaderboardCategory::Goals][0].value, 0);
}

#[test]
fn test_entry_copies_identity_fields() {
    let players = vec![player("p9", Some(vec![stat("interceptions", 11.0)]))];

    let boards = build_leaderboards(&players, 5);
    let entry = &boards[&LeaderboardCategory::Interceptions][0];

    assert_eq!(entry.first_name, "Firstp9");
    assert_eq!(entry.last_name, "Lastp9");
    assert_eq!(entry.nationality, "Canada");
    assert_eq!(entry.nationality_iso_code, "CA");
    assert_eq!(entry.position, "Forward");
    assert_eq!(entry.team_acronym, "FCE");
    assert_eq!(entry.team_official_name, "FC Edmonton");
    assert_eq!(entry.team_short_name, "Edmonton");
}

#[test]
fn test_entry_without_team_has_blank_team_fields() {
    let mut p = player("p1", Some(vec![stat("goals", 1.0)]));
    p.team = None;

    let boards = build_leaderboards(&[p], 5);
    let entry = &boards[&LeaderboardCategory::Goals][0];
    assert_eq!(entry.team_acronym, "");
    assert_eq!(entry.team_official_name, "");
}

#[test]
fn test_no_category_exceeds_limit() {
    let players: Vec<_> = (0..40)
        .map(|i| {
            player(
                &format!("p{i}"),
                Some(
                    LeaderboardCategory::ALL
                        .iter()
                        .map(|c| stat(c.stat_id(), (i * 7 % 13) as f64))
                        .collect(),
                ),
            )
        })
        .collect();

    let boards = build_leaderboards(&players, 5);

    for (category, entries) in &boards {
        assert_eq!(entries.len(), 5, "{category}");
        assert!(entries.windows(2).all(|w| w[0].value >= w[1].value));
        let ranks: Vec<u32> = entries.iter().map(|e| e.ranking).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn test_category_parse_and_display() {
    assert_eq!("goals".parse::<LeaderboardCategory>().unwrap(), LeaderboardCategory::Goals);
    assert_eq!(
        "yellow-cards".parse::<LeaderboardCategory>().unwrap(),
        LeaderboardCategory::YellowCards
    );
    assert_eq!(LeaderboardCategory::RedCards.to_string(), "RED_CARDS");
    assert!("offsides".parse::<LeaderboardCategory>().is_err());
}

#[test]
fn test_leaderboard_set_serializes_with_category_names() {
    let boards = build_leaderboards(&[player("p1", Some(vec![stat("goals", 2.0)]))], 5);
    let json = serde_json::to_value(&boards).unwrap();

    assert_eq!(json["GOALS"][0]["firstName"], "Firstp1");
    assert_eq!(json["GOALS"][0]["ranking"], 1);
    assert_eq!(json["YELLOW_CARDS"], json!([]));
}
