//! Definitions of errors that can occur during deployment of the GalaxyData contract

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur while configuring or running a deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployError {
    /// A required configuration value was not provided, holds the variable name
    MissingConfig(&'static str),
    /// Error initializing the RPC client or signer
    ClientInitialization(String),
    /// Error reading or parsing a compiled contract artifact
    ArtifactParsing(String),
    /// Error constructing calldata for a contract method
    CalldataConstruction(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error reading state from a deployed contract
    ContractInteraction(String),
    /// Error writing the deployments file
    WriteDeployments(String),
}

impl Display for DeployError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DeployError::MissingConfig(var) => write!(f, "missing configuration: {}", var),
            DeployError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            DeployError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            DeployError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            DeployError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            DeployError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            DeployError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
        }
    }
}

impl Error for DeployError {}
