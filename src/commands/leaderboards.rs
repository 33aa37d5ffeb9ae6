//! Leaderboards command implementation

use std::fmt::Write as _;

use crate::{
    commands::print_json,
    cpl::{CplClient, LeaderboardCategory, LeaderboardSet},
    Result,
};

/// Handle the leaderboards command
pub async fn handle_leaderboards(
    client: &CplClient,
    as_json: bool,
    categories: Option<Vec<LeaderboardCategory>>,
) -> Result<()> {
    let mut boards = client.get_leaderboards().await?;

    if let Some(wanted) = categories {
        boards.retain(|category, _| wanted.contains(category));
    }

    if as_json {
        print_json(&boards)?;
    } else {
        print!("{}", render_leaderboards(&boards));
    }

    Ok(())
}

/// Plain text rendering, one block per category.
pub fn render_leaderboards(boards: &LeaderboardSet) -> String {
    let mut out = String::new();

    for (category, entries) in boards {
        let _ = writeln!(out, "{category}");
        if entries.is_empty() {
            let _ = writeln!(out, "  (no players)");
        }
        for e in entries {
            let _ = writeln!(
                out,
                "  {:>2}. {:<28} {:<5} {:>5}",
                e.ranking,
                format!("{} {}", e.first_name, e.last_name),
                e.team_acronym,
                e.value
            );
        }
        out.push('\n');
    }

    out
}
