//! The seam between the deploy script and the client that talks to the chain

use alloy::primitives::Address;

use crate::errors::DeployError;

/// A client able to deploy the GalaxyData contract behind an upgradeable proxy
#[allow(async_fn_in_trait)]
pub trait UpgradeableDeployer {
    /// Deploy an upgradeable instance owned by `owner` and return the address
    /// callers should interact with.
    ///
    /// `auxiliary` is an opaque address required by the contract; it is passed
    /// through as-is.
    async fn deploy_upgradeable(
        &self,
        owner: &str,
        auxiliary: Address,
    ) -> Result<Address, DeployError>;
}
