//! Deployment configuration, resolved once at startup

use std::{
    fmt::{self, Debug, Formatter},
    path::{Path, PathBuf},
};

use crate::{
    cli::Cli,
    constants::{
        ALLOWED_NETWORK, DEFAULT_GALAXYDATA_ARTIFACT, DEFAULT_LOCAL_RPC_URL,
        DEFAULT_PROXY_ARTIFACT, NETWORK_ENV_VAR, PRIVATE_KEY_ENV_VAR, PUBLIC_KEY_ENV_VAR,
    },
    errors::DeployError,
};

/// Paths of the compiled contract artifacts used for deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// The GalaxyData implementation contract
    pub implementation: PathBuf,
    /// The TransparentUpgradeableProxy contract
    pub proxy: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            implementation: PathBuf::from(DEFAULT_GALAXYDATA_ARTIFACT),
            proxy: PathBuf::from(DEFAULT_PROXY_ARTIFACT),
        }
    }
}

/// The full deployment configuration
///
/// Only the network is required up front, and any value it is set to (even an
/// empty one) is left for the network guard to reject. The keys are checked once
/// the guard has passed, see [`DeployConfig::client_config`].
#[derive(Clone)]
pub struct DeployConfig {
    /// The name of the target network
    pub network: String,
    /// The deployer's private key
    pub private_key: Option<String>,
    /// The deployer's public address
    pub public_key: Option<String>,
    /// An explicit RPC URL for the network
    pub rpc_url: Option<String>,
    /// The artifacts to deploy
    pub artifacts: ArtifactPaths,
    /// Where to record the deployed address, if anywhere
    pub deployments_path: Option<PathBuf>,
}

impl DeployConfig {
    /// Create a config for the given network with no credentials and default artifacts
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            private_key: None,
            public_key: None,
            rpc_url: None,
            artifacts: ArtifactPaths::default(),
            deployments_path: None,
        }
    }

    /// Set the deployer credentials
    pub fn with_keys(
        mut self,
        private_key: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        self.private_key = Some(private_key.into());
        self.public_key = Some(public_key.into());
        self
    }

    /// Whether the configured network is the one deployments are allowed on
    pub fn is_allowed_network(&self) -> bool {
        self.network == ALLOWED_NETWORK
    }

    /// Resolve the client binding, failing if either key is missing
    pub fn client_config(&self) -> Result<ClientConfig, DeployError> {
        let private_key = non_empty(self.private_key.as_deref())
            .ok_or(DeployError::MissingConfig(PRIVATE_KEY_ENV_VAR))?;
        let public_key = non_empty(self.public_key.as_deref())
            .ok_or(DeployError::MissingConfig(PUBLIC_KEY_ENV_VAR))?;
        let rpc_url = non_empty(self.rpc_url.as_deref()).unwrap_or(DEFAULT_LOCAL_RPC_URL);

        Ok(ClientConfig {
            network: self.network.clone(),
            private_key: private_key.to_string(),
            public_key: public_key.to_string(),
            rpc_url: rpc_url.to_string(),
        })
    }
}

impl TryFrom<Cli> for DeployConfig {
    type Error = DeployError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        // Kept verbatim, the network guard compares against the exact literal
        let network = cli
            .network
            .ok_or(DeployError::MissingConfig(NETWORK_ENV_VAR))?;

        Ok(Self {
            network,
            private_key: cli.private_key,
            public_key: cli.public_key,
            rpc_url: cli.rpc_url,
            artifacts: ArtifactPaths {
                implementation: cli.galaxydata_artifact,
                proxy: cli.proxy_artifact,
            },
            deployments_path: cli.deployments_path,
        })
    }
}

impl Debug for DeployConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployConfig")
            .field("network", &self.network)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("public_key", &self.public_key)
            .field("rpc_url", &self.rpc_url)
            .field("artifacts", &self.artifacts)
            .field("deployments_path", &self.deployments_path)
            .finish()
    }
}

/// The values a deployment client is bound to
#[derive(Clone)]
pub struct ClientConfig {
    /// The name of the target network
    pub network: String,
    /// The deployer's private key
    pub private_key: String,
    /// The deployer's public address
    pub public_key: String,
    /// The RPC URL of the network
    pub rpc_url: String,
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("network", &self.network)
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .field("rpc_url", &self.rpc_url)
            .finish()
    }
}

/// Load variables from a dotenv file into the process environment.
///
/// Variables already set in the environment win. Returns whether a file was
/// loaded; a missing file is not an error but a malformed one is.
pub fn load_env_file(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

/// Treat blank values the same as unset ones
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
