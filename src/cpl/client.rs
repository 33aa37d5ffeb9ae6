//! `CplClient`: one method per CPL feed.

use log::warn;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::core::random_user_agent;
use crate::cpl::directory::PlayerDirectory;
use crate::cpl::http::HttpFetcher;
use crate::cpl::leaderboard::{build_leaderboards, LeaderboardSet};
use crate::cpl::types::{
    PlayerCareerStats, PlayerStatsEntry, PlayerStatsResponse, Schedule, Standings, TeamInfo,
    TeamRoster, TeamStatsResponse,
};
use crate::Result;


pub const DEFAULT_RT: &str = "c";
pub const DEFAULT_FMT: &str = "json";
pub const MATCH_PAGE_SIZE: &str = "200";
pub const PLAYER_STATS_PAGE_SIZE: &str = "500";

/// Player stats feed envelope; a missing `players` key reads as an empty list.
#[derive(Deserialize)]
struct PlayerStatsEnvelope {
    #[serde(default)]
    players: Option<Vec<PlayerStatsEntry>>,
}

pub struct CplClient {
    http: HttpFetcher,
    config: ClientConfig,
    directory: PlayerDirectory,
}

impl CplClient {
    /// Build the client and, unless disabled, load the player directory.
    ///
    /// The directory fetch is best-effort: a failure leaves it empty and
    /// the client is still returned.
    pub async fn new(config: ClientConfig) -> Result<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| random_user_agent().to_string());
        let http = HttpFetcher::new(config.timeout, &user_agent)?;

        let directory = if config.warm_player_directory {
            PlayerDirectory::initialize(&http, &config.endpoints.players()).await
        } else {
            PlayerDirectory::empty()
        };

        Ok(Self {
            http,
            config,
            directory,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn player_directory(&self) -> &PlayerDirectory {
        &self.directory
    }

    pub async fn get_standings(&self) -> Result<Standings> {
        let url = self.config.endpoints.standings(&self.config.competition_id);
        let params = [
            ("tmcl", self.config.season_id.as_str()),
            ("_rt", DEFAULT_RT),
            ("_fmt", DEFAULT_FMT),
            ("_ordSrt", "asc"),
        ];
        self.http.get_json(&url, &params).await
    }

    pub async fn get_schedule(&self) -> Result<Schedule> {
        let url = self.config.endpoints.matches(&self.config.competition_id);
        let params = [
            ("tmcl", self.config.season_id.as_str()),
            ("_rt", DEFAULT_RT),
            ("_pgSz", MATCH_PAGE_SIZE),
            ("_ordSrt", "asc"),
            ("live", "yes"),
            ("_fmt", DEFAULT_FMT),
        ];
        self.http.get_json(&url, &params).await
    }

    pub async fn get_team_info(&self) -> Result<TeamInfo> {
        let url = self.config.endpoints.teams(&self.config.competition_id);
        let params = [
            ("tmcl", self.config.season_id.as_str()),
            ("_rt", DEFAULT_RT),
            ("_fmt", DEFAULT_FMT),
        ];
        self.http.get_json(&url, &params).await
    }

    /// Squad for one team with directory fields merged in.
    ///
    /// A 404 yields an empty roster instead of an error.
    pub async fn get_roster(&self, team_id: &str) -> Result<TeamRoster> {
        let url = self.config.endpoints.squads(&self.config.competition_id);
        let params = [
            ("tmcl", self.config.season_id.as_str()),
            ("_rt", DEFAULT_RT),
            ("detailed", "yes"),
            ("_fmt", DEFAULT_FMT),
            ("ctst", team_id),
        ];

        let mut roster: TeamRoster = match self.http.get_json(&url, &params).await {
            Ok(roster) => roster,
            Err(e) if e.is_not_found() => {
                warn!("Roster not found (404) for team_id: {team_id}");
                return Ok(TeamRoster::default());
            }
            Err(e) => return Err(e),
        };

        for squad in roster.squad.iter_mut() {
            self.directory.enrich_people(&mut squad.person);
        }

        Ok(roster)
    }

    /// Team season stats, `season_id` defaulting to the configured stats season.
    pub async fn get_team_stats(&self, season_id: Option<&str>) -> Result<TeamStatsResponse> {
        let url = self.config.endpoints.team_stats();
        let season_id = season_id.unwrap_or(self.config.stats_season_id.as_str());
        self.http.get_json(&url, &[("seasonId", season_id)]).await
    }

    /// Player season stats in a single page of up to 500 players.
    pub async fn get_player_stats(&self, season_id: Option<&str>) -> Result<PlayerStatsResponse> {
        let url = self.config.endpoints.player_stats();
        let season_id = season_id.unwrap_or(self.config.stats_season_id.as_str());
        let params = [("seasonId", season_id), ("pageNumElement", PLAYER_STATS_PAGE_SIZE)];

        let envelope: PlayerStatsEnvelope = self.http.get_json(&url, &params).await?;
        let players = envelope.players.unwrap_or_else(|| {
            warn!("No players data found");
            Vec::new()
        });

        Ok(PlayerStatsResponse { players })
    }

    /// Career history for one player with directory fields merged in.
    ///
    /// A 404 yields an empty career instead of an error.
    pub async fn get_player_career(&self, player_id: &str) -> Result<PlayerCareerStats> {
        let url = self.config.endpoints.player_career(&self.config.competition_id);
        let params = [("prsn", player_id), ("_fmt", DEFAULT_FMT), ("_rt", DEFAULT_RT)];

        let mut career: PlayerCareerStats = match self.http.get_json(&url, &params).await {
            Ok(career) => career,
            Err(e) if e.is_not_found() => {
                warn!("Player career not found (404) for player_id: {player_id}");
                return Ok(PlayerCareerStats::default());
            }
            Err(e) => return Err(e),
        };

        self.directory.enrich_people(&mut career.person);

        Ok(career)
    }

    /// Top players per category for the configured stats season.
    pub async fn get_leaderboards(&self) -> Result<LeaderboardSet> {
        let stats = self.get_player_stats(None).await?;
        Ok(build_leaderboards(
            &stats.players,
            self.config.leaderboard_size,
        ))
    }
}
