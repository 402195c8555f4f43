//! Loading of compiled contract artifacts
//!
//! Both Hardhat (`"bytecode": "0x.."`) and Foundry (`"bytecode": {"object": "0x.."}`)
//! artifact layouts are accepted.

use std::{fs, path::Path};

use alloy::primitives::{hex, Bytes};
use serde::Deserialize;

use crate::errors::DeployError;

/// The creation bytecode field of an artifact
#[derive(Deserialize)]
#[serde(untagged)]
enum ArtifactBytecode {
    /// Hardhat layout
    Hex(String),
    /// Foundry layout
    Object {
        /// The hex-encoded bytecode
        object: String,
    },
}

/// The subset of a compiled artifact needed for deployment
#[derive(Deserialize)]
struct RawArtifact {
    /// The contract creation bytecode
    bytecode: ArtifactBytecode,
}

/// A compiled contract ready for deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractArtifact {
    /// The contract creation bytecode
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON contents
    pub fn from_json(contents: &str) -> Result<Self, DeployError> {
        let raw: RawArtifact = serde_json::from_str(contents)
            .map_err(|e| DeployError::ArtifactParsing(e.to_string()))?;

        let bytecode_hex = match raw.bytecode {
            ArtifactBytecode::Hex(s) => s,
            ArtifactBytecode::Object { object } => object,
        };

        let bytecode =
            hex::decode(bytecode_hex.trim()).map_err(|e| DeployError::ArtifactParsing(e.to_string()))?;
        if bytecode.is_empty() {
            return Err(DeployError::ArtifactParsing(
                "artifact has no creation bytecode".to_string(),
            ));
        }

        Ok(Self {
            bytecode: Bytes::from(bytecode),
        })
    }

    /// Read and parse an artifact file
    pub fn load(path: &Path) -> Result<Self, DeployError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            DeployError::ArtifactParsing(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }
}
