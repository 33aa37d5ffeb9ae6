use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::de_lenient_f64;

/// One named statistic for a player or team.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatEntry {
    pub stats_id: String,
    #[serde(default)]
    pub stats_label: String,
    pub stats_label_abbreviation: Option<String>,
    pub stats_unit: Option<String>,
    pub stats_unit_abbreviation: Option<String>,
    /// `None` when the feed sent no value or a non-numeric one.
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub stats_value: Option<f64>,
}

impl StatEntry {
    /// Value truncated to an integer; absent or non-numeric counts as 0.
    pub fn int_value(&self) -> i64 {
        self.stats_value
            .filter(|v| v.is_finite())
            .map(|v| v.trunc() as i64)
            .unwrap_or(0)
    }
}

/// Index a stat list by `statsId`. Later duplicates win.
pub fn index_stats(stats: &[StatEntry]) -> HashMap<&str, &StatEntry> {
    stats.iter().map(|s| (s.stats_id.as_str(), s)).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsEntry {
    pub team_id: String,
    #[serde(default)]
    pub acronym_name: String,
    pub acronym_name_localized: Option<String>,
    pub country_code: Option<String>,
    pub is_team_fake: Option<bool>,
    pub media_name: Option<String>,
    pub media_short_name: Option<String>,
    #[serde(default)]
    pub official_name: String,
    pub provider_id: Option<String>,
    pub rank_label: Option<String>,
    #[serde(default)]
    pub short_name: String,
    pub stadium: Option<String>,
    pub team_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<StatEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorialInfo {
    #[serde(default)]
    pub player_role_within_team: String,
}

/// A player's season line from the stats feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsEntry {
    pub player_id: String,
    pub bib_number: Option<String>,
    pub editorial: Option<EditorialInfo>,
    #[serde(default)]
    pub media_first_name: String,
    #[serde(default)]
    pub media_last_name: String,
    pub nationality: Option<String>,
    pub nationality_iso_code: Option<String>,
    pub provider_id: Option<String>,
    pub rank_label: Option<String>,
    pub role: Option<i64>,
    #[serde(default)]
    pub role_label: String,
    pub shirt_name: Option<String>,
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<StatEntry>>,
    pub team: Option<TeamStatsEntry>,
}

/// Team stats feed narrowed to its payload list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TeamStatsResponse {
    pub teams: Vec<TeamStatsEntry>,
}

/// Player stats feed narrowed to its payload list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlayerStatsResponse {
    pub players: Vec<PlayerStatsEntry>,
}
