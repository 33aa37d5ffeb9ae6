use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Competition, Country, Ruleset, Sport, Stage, TournamentCalendar, Venue};

/// Root of the `match` feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Schedule {
    #[serde(rename = "match", default)]
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub match_info: MatchInfo,
    #[serde(default)]
    pub live_data: LiveData,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub id: String,
    pub coverage_level: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub local_date: String,
    #[serde(default)]
    pub local_time: String,
    #[serde(default)]
    pub week: String,
    pub number_of_periods: Option<u32>,
    pub period_length: Option<u32>,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub description: String,
    pub sport: Option<Sport>,
    pub ruleset: Option<Ruleset>,
    pub competition: Option<Competition>,
    pub tournament_calendar: Option<TournamentCalendar>,
    pub stage: Option<Stage>,
    #[serde(default)]
    pub contestant: Vec<ScheduleContestant>,
    pub venue: Option<Venue>,
}

impl MatchInfo {
    /// Contestant listed with the given position (`"home"` / `"away"`).
    pub fn contestant_at(&self, position: &str) -> Option<&ScheduleContestant> {
        self.contestant.iter().find(|c| c.position == position)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleContestant {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub official_name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub position: String,
    pub country: Option<Country>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveData {
    pub match_details: Option<MatchDetails>,
    pub goal: Option<Vec<Goal>>,
    pub card: Option<Vec<Card>>,
    pub substitute: Option<Vec<Substitute>>,
    pub match_details_extra: Option<MatchDetailsExtra>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    pub period_id: Option<i64>,
    pub match_status: Option<String>,
    pub winner: Option<String>,
    pub match_length_min: Option<u32>,
    pub match_length_sec: Option<u32>,
    pub period: Option<Vec<Period>>,
    pub scores: Option<Scores>,
    pub attendance: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub id: i64,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub length_min: u32,
    #[serde(default)]
    pub length_sec: u32,
    pub announced_injury_time: Option<u32>,
}

/// Half-time, full-time and total scores keyed by `home` / `away`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Scores {
    #[serde(default)]
    pub ht: BTreeMap<String, u32>,
    #[serde(default)]
    pub ft: BTreeMap<String, u32>,
    #[serde(default)]
    pub total: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOfficial {
    pub id: String,
    #[serde(rename = "type", default)]
    pub official_type: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub short_first_name: String,
    #[serde(default)]
    pub short_last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetailsExtra {
    pub attendance: Option<String>,
    #[serde(default)]
    pub match_official: Vec<MatchOfficial>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(default)]
    pub contestant_id: String,
    pub period_id: Option<i64>,
    pub time_min: Option<u32>,
    pub time_min_sec: Option<String>,
    pub last_updated: Option<String>,
    pub timestamp: Option<String>,
    #[serde(rename = "type")]
    pub goal_type: Option<String>,
    pub scorer_id: Option<String>,
    pub scorer_name: Option<String>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub assist_player_id: Option<String>,
    pub assist_player_name: Option<String>,
    pub opta_event_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default)]
    pub contestant_id: String,
    pub period_id: Option<i64>,
    pub time_min: Option<u32>,
    pub time_min_sec: Option<String>,
    pub last_updated: Option<String>,
    pub timestamp: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub card_reason: Option<String>,
    pub player_id: Option<String>,
    pub player_name: Option<String>,
    pub opta_event_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Substitute {
    #[serde(default)]
    pub contestant_id: String,
    pub period_id: Option<i64>,
    pub time_min: Option<u32>,
    pub time_min_sec: Option<String>,
    pub last_updated: Option<String>,
    pub timestamp: Option<String>,
    pub player_on_id: Option<String>,
    pub player_on_name: Option<String>,
    pub player_off_id: Option<String>,
    pub player_off_name: Option<String>,
    pub sub_reason: Option<String>,
}
