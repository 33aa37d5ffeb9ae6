//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use cpl_stats::{
    cli::{Commands, Cpl},
    commands::{
        build_config, init_logging, leaderboards::handle_leaderboards,
        player::handle_player_lookup, print_json,
    },
    CplClient,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Cpl::parse();
    init_logging(app.global.verbose);

    let config = build_config(&app.global)?;
    let client = CplClient::new(config).await?;

    match app.command {
        Commands::Standings => print_json(&client.get_standings().await?)?,
        Commands::Schedule => print_json(&client.get_schedule().await?)?,
        Commands::Teams => print_json(&client.get_team_info().await?)?,
        Commands::Roster { team_id } => print_json(&client.get_roster(&team_id).await?)?,
        Commands::TeamStats { season } => {
            print_json(&client.get_team_stats(season.as_deref()).await?)?
        }
        Commands::PlayerStats { season } => {
            print_json(&client.get_player_stats(season.as_deref()).await?)?
        }
        Commands::Career { player_id } => {
            print_json(&client.get_player_career(&player_id).await?)?
        }
        Commands::Leaderboards { json, categories } => {
            handle_leaderboards(&client, json, categories).await?
        }
        Commands::Player { player_id } => handle_player_lookup(&client, &player_id)?,
    }

    Ok(())
}
