//! Definitions of CLI arguments for the deploy script
//!
//! Every argument can also be provided through the environment (or a `.env` file),
//! which is the expected way to run the script.

use std::path::PathBuf;

use clap::Parser;

use crate::constants::{DEFAULT_GALAXYDATA_ARTIFACT, DEFAULT_PROXY_ARTIFACT};

/// Deploy the upgradeable GalaxyData contract
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the network to deploy to
    #[arg(long, env = "NETWORK")]
    pub network: Option<String>,

    /// Private key of the deployer
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Public address of the deployer, used as the owner of the deployed contract
    #[arg(long, env = "PUBLIC_KEY")]
    pub public_key: Option<String>,

    /// Network RPC URL, defaults to a local node for the `local` network
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    /// Path to the compiled GalaxyData implementation artifact
    #[arg(long, env = "GALAXYDATA_ARTIFACT", default_value = DEFAULT_GALAXYDATA_ARTIFACT)]
    pub galaxydata_artifact: PathBuf,

    /// Path to the compiled TransparentUpgradeableProxy artifact
    #[arg(long, env = "PROXY_ARTIFACT", default_value = DEFAULT_PROXY_ARTIFACT)]
    pub proxy_artifact: PathBuf,

    /// Optional JSON file in which to record the deployed address
    #[arg(long, env = "DEPLOYMENTS_PATH")]
    pub deployments_path: Option<PathBuf>,
}
