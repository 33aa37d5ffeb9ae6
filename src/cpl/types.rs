//! Typed shapes of the CPL feed payloads.
//!
//! One canonical set of entity types is shared across endpoints; feed
//! specific envelopes live in the submodules.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub mod people;
pub mod schedule;
pub mod standings;
pub mod stats;


pub use people::{
    CompetitionStat, Kit, Membership, Person, PlayerCareerStats, Squad, TeamKits, TeamRoster,
};
pub use schedule::{
    Card, Goal, LiveData, Match, MatchDetails, MatchDetailsExtra, MatchInfo, MatchOfficial,
    Period, Schedule, ScheduleContestant, Scores, Substitute,
};
pub use standings::{Division, DivisionType, Ranking, Stage, Standings};
pub use stats::{
    index_stats, EditorialInfo, PlayerStatsEntry, PlayerStatsResponse, StatEntry,
    TeamStatsEntry, TeamStatsResponse,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Sport {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Ruleset {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Country {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: String,
    pub name: String,
    pub known_name: Option<String>,
    pub competition_code: Option<String>,
    pub competition_format: Option<String>,
    pub country: Option<Country>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCalendar {
    pub id: String,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub neutral: Option<String>,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
}

/// A club as listed by the team info feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub official_name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    #[serde(default)]
    pub contestant: Vec<Team>,
    #[serde(default)]
    pub last_updated: String,
}

/// Height/weight come back either as numbers or as strings depending on the feed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Measurement {
    Number(f64),
    Text(String),
}

/// Accept a JSON number, a numeric string, or anything else (as `None`).
pub(crate) fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }))
}

/// Same as [`de_lenient_f64`] for integer shirt numbers sent as `"7"` or `7`.
pub(crate) fn de_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|v| match v {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }))
}
