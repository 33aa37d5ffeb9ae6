//! Command implementations for the CPL stats CLI

pub mod leaderboards;
pub mod player;

use serde::Serialize;

use crate::{
    cli::GlobalArgs,
    config::{parse_timeout, ClientConfig},
    Result,
};

/// Environment config overlaid with the CLI flags.
pub fn build_config(global: &GlobalArgs) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env()?;
    if let Some(secs) = global.timeout {
        config.timeout = parse_timeout(secs)?;
    }
    if global.no_player_cache {
        config.warm_player_directory = false;
    }
    Ok(config)
}

/// `warn` by default, `debug` with `--verbose`; `RUST_LOG` wins when set.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
