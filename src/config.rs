//! Client configuration: endpoints, season identifiers and request tuning.

use std::time::Duration;

use crate::error::{CplError, Result};


pub const COMPETITION_ID: &str = "1ha7bnfgb89131ey8cpx5vvvpl";
pub const DEFAULT_SEASON_ID: &str = "110qulr80h8ail8rgwi0o7x0";
pub const DEFAULT_STATS_SEASON_ID: &str = "cpl::Football_Season::fd43e1d61dfe4396a7356bc432de0007";

pub const PERFORM_FEED_BASE_URL: &str = "https://api.performfeeds.com/soccerdata";
pub const CPL_FEEDS_BASE_URL: &str = "https://canpl.ca/feeds";
pub const CPL_API_BASE_URL: &str = "https://login.canpl.ca/api";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LEADERBOARD_SIZE: usize = 5;

pub const TIMEOUT_ENV_VAR: &str = "CPL_TIMEOUT_SECS";
pub const SEASON_ID_ENV_VAR: &str = "CPL_SEASON_ID";
pub const STATS_SEASON_ID_ENV_VAR: &str = "CPL_STATS_SEASON_ID";

/// Base URLs of the three upstream hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Perform soccer data feed (standings, matches, teams, squads, careers)
    pub perform_feed: String,
    /// canpl.ca stats feeds (team and player season stats)
    pub cpl_feeds: String,
    /// canpl.ca player directory API
    pub cpl_api: String,
}

impl Endpoints {
    /// Point every endpoint at the same host, e.g. a local mock server.
    pub fn single_host(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            perform_feed: format!("{base}/soccerdata"),
            cpl_feeds: format!("{base}/feeds"),
            cpl_api: format!("{base}/api"),
        }
    }

    pub fn standings(&self, competition_id: &str) -> String {
        format!("{}/seasonstats/{competition_id}", self.perform_feed)
    }

    pub fn matches(&self, competition_id: &str) -> String {
        format!("{}/match/{competition_id}", self.perform_feed)
    }

    pub fn teams(&self, competition_id: &str) -> String {
        format!("{}/team/{competition_id}", self.perform_feed)
    }

    pub fn squads(&self, competition_id: &str) -> String {
        format!("{}/squads/{competition_id}", self.perform_feed)
    }

    pub fn player_career(&self, competition_id: &str) -> String {
        format!("{}/playercareer/{competition_id}", self.perform_feed)
    }

    pub fn team_stats(&self) -> String {
        format!("{}/team-stats_feed.php", self.cpl_feeds)
    }

    pub fn player_stats(&self) -> String {
        format!("{}/stats_feed.php", self.cpl_feeds)
    }

    pub fn players(&self) -> String {
        format!("{}/players", self.cpl_api)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            perform_feed: PERFORM_FEED_BASE_URL.to_string(),
            cpl_feeds: CPL_FEEDS_BASE_URL.to_string(),
            cpl_api: CPL_API_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Applied uniformly to every GET.
    pub timeout: Duration,
    /// Perform tournament calendar id (`tmcl`).
    pub season_id: String,
    /// Season id understood by the canpl.ca stats feeds.
    pub stats_season_id: String,
    pub competition_id: String,
    pub endpoints: Endpoints,
    pub leaderboard_size: usize,
    /// Fetch the player directory while constructing the client.
    pub warm_player_directory: bool,
    /// Fixed User-Agent; `None` picks one from the browser pool.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            season_id: DEFAULT_SEASON_ID.to_string(),
            stats_season_id: DEFAULT_STATS_SEASON_ID.to_string(),
            competition_id: COMPETITION_ID.to_string(),
            endpoints: Endpoints::default(),
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
            warm_player_directory: true,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `CPL_TIMEOUT_SECS`, `CPL_SEASON_ID` and `CPL_STATS_SEASON_ID`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(TIMEOUT_ENV_VAR) {
            let secs = raw.trim().parse::<f64>().map_err(|_| CplError::InvalidConfig {
                message: format!("{TIMEOUT_ENV_VAR} must be a number of seconds, got {raw:?}"),
            })?;
            config.timeout = parse_timeout(secs)?;
        }
        if let Some(season) = lookup(SEASON_ID_ENV_VAR).filter(|s| !s.trim().is_empty()) {
            config.season_id = season.trim().to_string();
        }
        if let Some(season) = lookup(STATS_SEASON_ID_ENV_VAR).filter(|s| !s.trim().is_empty()) {
            config.stats_season_id = season.trim().to_string();
        }

        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn without_player_directory(mut self) -> Self {
        self.warm_player_directory = false;
        self
    }
}

/// Convert a timeout in (possibly fractional) seconds, rejecting non-positive values.
pub fn parse_timeout(secs: f64) -> Result<Duration> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(CplError::InvalidConfig {
            message: format!("timeout must be a positive number of seconds, got {secs}"),
        });
    }
    Ok(Duration::from_secs_f64(secs))
}
