//! The alloy-backed GalaxyData deployment client

use std::str::FromStr;

use alloy::{
    network::{Ethereum, ReceiptResponse, TransactionBuilder},
    primitives::{Address, Bytes, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use tracing::{info, warn};

use crate::{
    artifacts::ContractArtifact,
    config::{ArtifactPaths, ClientConfig},
    constants::PROXY_ADMIN_STORAGE_SLOT,
    deployer::UpgradeableDeployer,
    errors::DeployError,
    utils::{
        address_from_storage_slot, galaxydata_initialize_calldata, parse_address,
        proxy_constructor_args,
    },
};

/// The provider type used for deployments
pub type Wallet = DynProvider<Ethereum>;

/// A deployment client bound to a network, a signing key, and the deployer's address
pub struct GalaxyData {
    /// The network the client is bound to
    network: String,
    /// The signing provider
    provider: Wallet,
    /// The compiled contracts to deploy
    artifacts: ArtifactPaths,
}

impl GalaxyData {
    /// Sets up a signing client for the configured network
    pub async fn connect(
        config: ClientConfig,
        artifacts: ArtifactPaths,
    ) -> Result<Self, DeployError> {
        let signer = PrivateKeySigner::from_str(config.private_key.trim())
            .map_err(|e| DeployError::ClientInitialization(e.to_string()))?;
        let url = Url::parse(&config.rpc_url)
            .map_err(|e| DeployError::ClientInitialization(e.to_string()))?;

        match parse_address(&config.public_key) {
            Ok(addr) if addr == signer.address() => {}
            _ => warn!(
                "public key {} does not match the signer address {}",
                config.public_key,
                signer.address()
            ),
        }

        let provider = ProviderBuilder::new()
            .wallet(signer)
            .with_simple_nonce_management()
            .connect_http(url);
        let provider = DynProvider::new(provider);

        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|e| DeployError::ClientInitialization(e.to_string()))?;
        info!(
            "Connected to {} ({}), chain id {}",
            config.network, config.rpc_url, chain_id
        );

        Ok(Self {
            network: config.network,
            provider,
            artifacts,
        })
    }

    /// Send a contract creation transaction and return the new contract's address
    async fn deploy_contract(&self, name: &str, code: Bytes) -> Result<Address, DeployError> {
        info!("Deploying {} contract...", name);
        let tx = TransactionRequest::default().with_deploy_code(code);

        let receipt = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| DeployError::ContractDeployment(e.to_string()))?
            .get_receipt()
            .await
            .map_err(|e| DeployError::ContractDeployment(e.to_string()))?;

        if !receipt.status() {
            return Err(DeployError::ContractDeployment(format!(
                "{} deployment reverted in tx {:#x}",
                name,
                receipt.transaction_hash()
            )));
        }

        let address = receipt.contract_address().ok_or_else(|| {
            DeployError::ContractDeployment(format!("no contract address in receipt for {}", name))
        })?;
        info!("{} contract deployed at {:#x}", name, address);
        Ok(address)
    }

    /// Read the proxy admin address from the proxy's EIP-1967 admin slot
    async fn proxy_admin(&self, proxy: Address) -> Result<Address, DeployError> {
        // This is the recommended way to get the proxy admin address:
        // https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/ERC1967/ERC1967Utils.sol#L104-L106
        let slot = self
            .provider
            .get_storage_at(proxy, U256::from_be_bytes(PROXY_ADMIN_STORAGE_SLOT.0))
            .await
            .map_err(|e| DeployError::ContractInteraction(e.to_string()))?;

        Ok(address_from_storage_slot(slot.to_be_bytes()))
    }
}

impl UpgradeableDeployer for GalaxyData {
    async fn deploy_upgradeable(
        &self,
        owner: &str,
        auxiliary: Address,
    ) -> Result<Address, DeployError> {
        info!("Deploying upgradeable GalaxyData to {}", self.network);
        let owner = parse_address(owner)?;
        let implementation_artifact = ContractArtifact::load(&self.artifacts.implementation)?;
        let proxy_artifact = ContractArtifact::load(&self.artifacts.proxy)?;

        let implementation = self
            .deploy_contract("GalaxyData implementation", implementation_artifact.bytecode)
            .await?;

        let init_calldata = galaxydata_initialize_calldata(owner, auxiliary);
        let mut proxy_code = proxy_artifact.bytecode.to_vec();
        proxy_code.extend(proxy_constructor_args(implementation, owner, init_calldata));

        let proxy = self
            .deploy_contract("TransparentUpgradeableProxy", proxy_code.into())
            .await?;

        let proxy_admin = self.proxy_admin(proxy).await?;
        info!("Proxy admin contract deployed at {:#x}", proxy_admin);

        Ok(proxy)
    }
}
