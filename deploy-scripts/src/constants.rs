//! Constants used in the deploy scripts

use alloy::primitives::{address, b256, Address, B256};

/// The only network the GalaxyData deployment is allowed to target
pub const ALLOWED_NETWORK: &str = "local";

/// The second address passed to every upgradeable deployment.
///
/// Forwarded unchanged into the implementation's `initialize` call.
pub const FIXED_AUXILIARY_ADDRESS: Address =
    address!("0x46C02B9113DcA70a8C2e878Df0B24Dc895836b75");

/// The RPC URL used for the `local` network when none is configured
pub const DEFAULT_LOCAL_RPC_URL: &str = "http://127.0.0.1:8545";

/// Default path of the compiled GalaxyData implementation artifact
pub const DEFAULT_GALAXYDATA_ARTIFACT: &str = "artifacts/GalaxyData.json";

/// Default path of the compiled TransparentUpgradeableProxy artifact
///
/// Expected to be compiled from https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/transparent/TransparentUpgradeableProxy.sol
pub const DEFAULT_PROXY_ARTIFACT: &str = "artifacts/TransparentUpgradeableProxy.json";

/// The dotenv file read from the working directory at startup
pub const DOTENV_FILE: &str = ".env";

/// The deployments file key under which the proxy address is recorded
pub const GALAXYDATA_DEPLOYMENT_KEY: &str = "GalaxyData";

/// The storage slot containing the proxy admin contract address in the upgradeable proxy.
///
/// This is specified in EIP1967: https://eips.ethereum.org/EIPS/eip-1967#admin-address
pub const PROXY_ADMIN_STORAGE_SLOT: B256 =
    b256!("0xb53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103");

/// The number of bytes stored in a single storage slot
pub const NUM_BYTES_STORAGE_SLOT: usize = 32;

/// The number of bytes in an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

// Environment variable names, also used to report missing configuration
/// The target network name
pub const NETWORK_ENV_VAR: &str = "NETWORK";
/// The deployer's private key
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";
/// The deployer's public address, also the owner of the deployed contract
pub const PUBLIC_KEY_ENV_VAR: &str = "PUBLIC_KEY";
