//! Canadian Premier League stats client
//!
//! A read-only client for the CPL's public JSON feeds: standings, match
//! schedule, clubs, rosters, team and player season stats, player careers,
//! and per-category leaderboards derived from the player stats feed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cpl_stats::{ClientConfig, CplClient, LeaderboardCategory};
//!
//! # async fn example() -> cpl_stats::Result<()> {
//! let client = CplClient::new(ClientConfig::from_env()?).await?;
//!
//! let boards = client.get_leaderboards().await?;
//! for entry in &boards[&LeaderboardCategory::Goals] {
//!     println!("{}. {} {} ({})", entry.ranking, entry.first_name, entry.last_name, entry.value);
//! }
//!
//! // 404s on rosters come back as an empty roster
//! let roster = client.get_roster("unknown-team").await?;
//! assert!(roster.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export CPL_TIMEOUT_SECS=10
//! export CPL_SEASON_ID=110qulr80h8ail8rgwi0o7x0
//! export CPL_STATS_SEASON_ID=cpl::Football_Season::fd43e1d61dfe4396a7356bc432de0007
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod cpl;
pub mod error;

// Re-export commonly used types
pub use config::{ClientConfig, Endpoints};
pub use cpl::{
    CplClient, LeaderboardCategory, LeaderboardEntry, LeaderboardSet, PlayerCacheEntry,
    PlayerDirectory,
};
pub use error::{CplError, Result};
