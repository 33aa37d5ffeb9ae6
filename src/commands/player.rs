//! Player directory lookup command

use crate::{commands::print_json, cpl::CplClient, Result};

/// Print the directory entry for `player_id`, if any.
pub fn handle_player_lookup(client: &CplClient, player_id: &str) -> Result<()> {
    match client.player_directory().get(player_id) {
        Some(entry) => print_json(entry),
        None => {
            if client.player_directory().is_empty() {
                eprintln!("Player directory is empty (disabled or failed to load)");
            } else {
                eprintln!("No directory entry for player {player_id}");
            }
            Ok(())
        }
    }
}
