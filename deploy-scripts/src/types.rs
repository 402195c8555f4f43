//! Type definitions used throughout the deploy script

use std::fmt::{self, Display};

use alloy::primitives::Address;

/// The result of a deployment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// The configured network is not the allowed one, nothing was done
    Skipped {
        /// The network that was rejected
        network: String,
    },
    /// The contract was deployed
    Deployed {
        /// The network deployed to
        network: String,
        /// The address of the deployed upgradeable contract
        address: Address,
    },
}

impl DeployOutcome {
    /// The deployed address, if any
    pub fn address(&self) -> Option<Address> {
        match self {
            DeployOutcome::Skipped { .. } => None,
            DeployOutcome::Deployed { address, .. } => Some(*address),
        }
    }
}

impl Display for DeployOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployOutcome::Skipped { .. } => write!(f, "wrong network"),
            DeployOutcome::Deployed { network, address } => {
                write!(f, "{} GalaxyData address: {}", network, address)
            }
        }
    }
}
