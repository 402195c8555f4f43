//! Utilities for the deploy script.

use std::{fs, path::Path};

use alloy::{
    primitives::{Address, Bytes},
    sol_types::{SolCall, SolValue},
};
use serde_json::{Map, Value};

use crate::{
    constants::{NUM_BYTES_ADDRESS, NUM_BYTES_STORAGE_SLOT},
    errors::DeployError,
    solidity::initializeCall,
};

/// Parse a hex address, as read from the environment
pub fn parse_address(address: &str) -> Result<Address, DeployError> {
    address
        .trim()
        .parse::<Address>()
        .map_err(|e| DeployError::CalldataConstruction(format!("invalid address {address}: {e}")))
}

/// Prepare calldata for the GalaxyData contract's `initialize` method
pub fn galaxydata_initialize_calldata(owner: Address, auxiliary: Address) -> Bytes {
    initializeCall { owner, auxiliary }.abi_encode().into()
}

/// ABI-encode the `TransparentUpgradeableProxy(logic, initialOwner, data)` constructor arguments
pub fn proxy_constructor_args(implementation: Address, owner: Address, data: Bytes) -> Vec<u8> {
    (implementation, owner, data).abi_encode_params()
}

/// Extract an address stored right-aligned in a storage slot
pub fn address_from_storage_slot(slot: [u8; NUM_BYTES_STORAGE_SLOT]) -> Address {
    Address::from_slice(&slot[NUM_BYTES_STORAGE_SLOT - NUM_BYTES_ADDRESS..])
}

/// Record a deployed address under `contract_key` in a flat JSON deployments file,
/// creating the file if it does not exist and keeping any other entries
pub fn write_deployed_address(
    file_path: &Path,
    contract_key: &str,
    address: Address,
) -> Result<(), DeployError> {
    let mut deployments = if file_path.exists() {
        let contents =
            fs::read_to_string(file_path).map_err(|e| DeployError::WriteDeployments(e.to_string()))?;
        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                return Err(DeployError::WriteDeployments(format!(
                    "{} is not a JSON object",
                    file_path.display()
                )))
            }
            Err(e) => return Err(DeployError::WriteDeployments(e.to_string())),
        }
    } else {
        Map::new()
    };

    deployments.insert(contract_key.to_string(), Value::String(format!("{address:#x}")));

    let contents = serde_json::to_string_pretty(&Value::Object(deployments))
        .map_err(|e| DeployError::WriteDeployments(e.to_string()))?;
    fs::write(file_path, contents).map_err(|e| DeployError::WriteDeployments(e.to_string()))
}
