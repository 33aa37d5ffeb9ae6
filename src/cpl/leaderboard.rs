//! Per-category top-N leaderboards computed from the player stats feed.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::top_n_by;
use crate::cpl::types::{index_stats, PlayerStatsEntry};
use crate::error::CplError;

#[cfg(test)]
mod tests;

/// Ranked categories keyed by category, every category always present.
pub type LeaderboardSet = BTreeMap<LeaderboardCategory, Vec<LeaderboardEntry>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaderboardCategory {
    Goals,
    Assists,
    Saves,
    Passes,
    Interceptions,
    Tackles,
    RedCards,
    YellowCards,
}

impl LeaderboardCategory {
    pub const ALL: [LeaderboardCategory; 8] = [
        LeaderboardCategory::Goals,
        LeaderboardCategory::Assists,
        LeaderboardCategory::Saves,
        LeaderboardCategory::Passes,
        LeaderboardCategory::Interceptions,
        LeaderboardCategory::Tackles,
        LeaderboardCategory::RedCards,
        LeaderboardCategory::YellowCards,
    ];

    /// `statsId` in the stats feed that feeds this category.
    pub fn stat_id(self) -> &'static str {
        match self {
            LeaderboardCategory::Goals => "goals",
            LeaderboardCategory::Assists => "assists",
            LeaderboardCategory::Saves => "saves",
            LeaderboardCategory::Passes => "passes",
            LeaderboardCategory::Interceptions => "interceptions",
            LeaderboardCategory::Tackles => "tackles",
            LeaderboardCategory::RedCards => "red-cards",
            LeaderboardCategory::YellowCards => "yellow-cards",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LeaderboardCategory::Goals => "GOALS",
            LeaderboardCategory::Assists => "ASSISTS",
            LeaderboardCategory::Saves => "SAVES",
            LeaderboardCategory::Passes => "PASSES",
            LeaderboardCategory::Interceptions => "INTERCEPTIONS",
            LeaderboardCategory::Tackles => "TACKLES",
            LeaderboardCategory::RedCards => "RED_CARDS",
            LeaderboardCategory::YellowCards => "YELLOW_CARDS",
        }
    }
}

impl fmt::Display for LeaderboardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaderboardCategory {
    type Err = CplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace('-', "_");
        LeaderboardCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CplError::InvalidConfig {
                message: format!("unknown leaderboard category: {s}"),
            })
    }
}

/// One player's line in one category.
///
/// `ranking` is 0 until the category has been sorted and truncated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_id: String,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub nationality_iso_code: String,
    pub position: String,
    pub team_acronym: String,
    pub team_official_name: String,
    pub team_short_name: String,
    pub value: i64,
    pub ranking: u32,
}

impl LeaderboardEntry {
    fn from_player(player: &PlayerStatsEntry, value: i64) -> Self {
        let team = player.team.as_ref();
        Self {
            player_id: player.player_id.clone(),
            first_name: player.media_first_name.clone(),
            last_name: player.media_last_name.clone(),
            nationality: player.nationality.clone().unwrap_or_default(),
            nationality_iso_code: player.nationality_iso_code.clone().unwrap_or_default(),
            position: player.role_label.clone(),
            team_acronym: team.map(|t| t.acronym_name.clone()).unwrap_or_default(),
            team_official_name: team.map(|t| t.official_name.clone()).unwrap_or_default(),
            team_short_name: team.map(|t| t.short_name.clone()).unwrap_or_default(),
            value,
            ranking: 0,
        }
    }
}

/// Group player stats by category, keep the top `limit` per category and rank them.
pub fn build_leaderboards(players: &[PlayerStatsEntry], limit: usize) -> LeaderboardSet {
    let mut grouped: LeaderboardSet = LeaderboardCategory::ALL
        .into_iter()
        .map(|c| (c, Vec::new()))
        .collect();

    for player in players {
        let Some(stats) = player.stats.as_deref() else {
            continue;
        };
        let by_id = index_stats(stats);

        for (category, entries) in grouped.iter_mut() {
            if let Some(stat) = by_id.get(category.stat_id()) {
                entries.push(LeaderboardEntry::from_player(player, stat.int_value()));
            }
        }
    }

    grouped
        .into_iter()
        .map(|(category, entries)| (category, rank_category(entries, limit)))
        .collect()
}

fn rank_category(entries: Vec<LeaderboardEntry>, limit: usize) -> Vec<LeaderboardEntry> {
    let mut top = top_n_by(entries, limit, |e| e.value);
    for (i, entry) in top.iter_mut().enumerate() {
        entry.ranking = i as u32 + 1;
    }
    top
}
