//! Canadian Premier League feeds: transport, typed payloads, player
//! directory and leaderboards.

pub mod client;
pub mod directory;
pub mod http;
pub mod leaderboard;
pub mod types;

pub use client::CplClient;
pub use directory::{Enrichable, PlayerCacheEntry, PlayerDirectory};
pub use leaderboard::{build_leaderboards, LeaderboardCategory, LeaderboardEntry, LeaderboardSet};
