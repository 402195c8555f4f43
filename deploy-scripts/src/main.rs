use std::path::Path;

use clap::Parser;
use eyre::eyre;
use galaxydata_deploy::{
    cli::Cli, client::GalaxyData, commands::run, config::load_env_file, constants::DOTENV_FILE,
};
use tracing::warn;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Loaded before parsing so the file can supply the CLI's env-backed arguments
    let env_file = load_env_file(Path::new(DOTENV_FILE));
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .pretty()
        .try_init()
        .map_err(|e| eyre!("failed to install tracing subscriber: {e}"))?;

    if let Err(e) = env_file {
        warn!("ignoring {}: {}", DOTENV_FILE, e);
    }

    run(cli, GalaxyData::connect).await;
    Ok(())
}
