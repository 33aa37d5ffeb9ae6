use serde::{Deserialize, Serialize};

use super::{Competition, Ruleset, Sport, TournamentCalendar};

/// Root of the `seasonstats` feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standings {
    pub sport: Option<Sport>,
    pub ruleset: Option<Ruleset>,
    pub competition: Option<Competition>,
    pub tournament_calendar: Option<TournamentCalendar>,
    #[serde(default)]
    pub stage: Vec<Stage>,
}

/// A competition stage. Standings stages carry divisions; match stages do not.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: String,
    #[serde(default)]
    pub format_id: String,
    #[serde(default)]
    pub name: String,
    pub vertical: Option<i64>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub division: Vec<Division>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DivisionType {
    Total,
    Home,
    Away,
    FormTotal,
    FormHome,
    FormAway,
    HalfTimeTotal,
    HalfTimeHome,
    HalfTimeAway,
    Attendance,
    OverUnder,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Division {
    #[serde(rename = "type")]
    pub division_type: DivisionType,
    #[serde(default)]
    pub ranking: Vec<Ranking>,
}

impl Stage {
    /// The division of the given type, if the feed returned one.
    pub fn division(&self, division_type: DivisionType) -> Option<&Division> {
        self.division
            .iter()
            .find(|d| d.division_type == division_type)
    }
}

/// One row of a division table.
///
/// Table, attendance and over/under rankings share the contestant columns;
/// the remaining columns are only present for the matching division type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ranking {
    pub contestant_id: String,
    #[serde(default)]
    pub contestant_name: String,
    #[serde(default)]
    pub contestant_short_name: String,
    #[serde(default)]
    pub contestant_club_name: String,
    #[serde(default)]
    pub contestant_code: String,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub matches_played: u32,

    // total / home / away / form / half-time
    pub points: Option<i64>,
    pub matches_won: Option<u32>,
    pub matches_lost: Option<u32>,
    pub matches_drawn: Option<u32>,
    pub goals_for: Option<u32>,
    pub goals_against: Option<u32>,
    #[serde(rename = "goaldifference")]
    pub goal_difference: Option<String>,
    pub rank_status: Option<String>,
    pub rank_id: Option<String>,
    pub last_six: Option<String>,

    // attendance
    pub venue_id: Option<String>,
    pub venue_name: Option<String>,
    pub minimum_attendance: Option<u32>,
    pub maximum_attendance: Option<u32>,
    pub total_attendance: Option<u32>,
    pub average_attendance: Option<u32>,
    pub capacity: Option<u32>,
    pub percent_sold: Option<String>,

    // over-under
    pub goals0: Option<u32>,
    pub goals1: Option<u32>,
    pub goals2: Option<u32>,
    pub goals3: Option<u32>,
    pub goals4: Option<u32>,
    pub goals5: Option<u32>,
    pub goals6: Option<u32>,
    pub goals7: Option<u32>,
    pub goals_more_than7: Option<u32>,
    pub goals_average: Option<String>,
}
