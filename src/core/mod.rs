//! Core utilities for the CPL stats client
//!
//! - `http`: static request headers and User-Agent selection
//! - `rank`: generic stable top-N helper used by the leaderboard engine

pub mod http;
pub mod rank;

pub use http::{default_header_map, random_user_agent, USER_AGENTS};
pub use rank::top_n_by;
