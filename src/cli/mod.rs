//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand};

use crate::cpl::LeaderboardCategory;

/// Flags shared by every subcommand
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Per-request timeout in seconds (or set `CPL_TIMEOUT_SECS`).
    #[clap(long, global = true)]
    pub timeout: Option<f64>,

    /// Skip loading the player directory (no photo/bio enrichment).
    #[clap(long, global = true)]
    pub no_player_cache: bool,

    /// Log every request URL.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// League table for the configured season
    Standings,

    /// Full match list with live data
    Schedule,

    /// Clubs taking part in the season
    Teams,

    /// Squad for one club, enriched with player photos and bios
    Roster {
        /// Club (contestant) id.
        #[clap(long, short)]
        team_id: String,
    },

    /// Team season stats
    TeamStats {
        /// Stats feed season id (or set `CPL_STATS_SEASON_ID`).
        #[clap(long, short)]
        season: Option<String>,
    },

    /// Player season stats
    PlayerStats {
        /// Stats feed season id (or set `CPL_STATS_SEASON_ID`).
        #[clap(long, short)]
        season: Option<String>,
    },

    /// Career history for one player
    Career {
        /// Player (person) id.
        #[clap(long, short)]
        player_id: String,
    },

    /// Top players per stat category
    Leaderboards {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Only show these categories (repeatable): `-c goals -c assists`.
        #[clap(long = "category", short = 'c')]
        categories: Option<Vec<LeaderboardCategory>>,
    },

    /// Photo, bio and name from the player directory
    Player {
        /// Player id.
        #[clap(long, short)]
        player_id: String,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "cpl", about = "Canadian Premier League stats CLI")]
pub struct Cpl {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[clap(subcommand)]
    pub command: Commands,
}
