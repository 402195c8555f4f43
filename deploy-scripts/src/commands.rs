//! Implementation of the GalaxyData deploy script

use std::future::Future;

use tracing::{error, info};

use crate::{
    cli::Cli,
    config::{ArtifactPaths, ClientConfig, DeployConfig},
    constants::{FIXED_AUXILIARY_ADDRESS, GALAXYDATA_DEPLOYMENT_KEY},
    deployer::UpgradeableDeployer,
    errors::DeployError,
    types::DeployOutcome,
    utils::write_deployed_address,
};

/// Entrypoint of the deploy script: resolve the configuration from the CLI and
/// run the deployment.
///
/// Failures are logged and swallowed, so a failed deployment still ends the
/// process normally. Returns the outcome if the run did not fail.
pub async fn run<D, F, Fut>(cli: Cli, connect: F) -> Option<DeployOutcome>
where
    D: UpgradeableDeployer,
    F: FnOnce(ClientConfig, ArtifactPaths) -> Fut,
    Fut: Future<Output = Result<D, DeployError>>,
{
    let result = match DeployConfig::try_from(cli) {
        Ok(config) => {
            let artifacts = config.artifacts.clone();
            run_deployment(&config, |client_config| connect(client_config, artifacts)).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            error!("{}", e);
            None
        }
    }
}

/// Deploy the upgradeable GalaxyData contract if the configured network allows it.
///
/// `connect` builds the deployment client and is only called once the network
/// guard has passed, so a skipped run never touches the chain or the keys.
pub async fn run_deployment<D, F, Fut>(
    config: &DeployConfig,
    connect: F,
) -> Result<DeployOutcome, DeployError>
where
    D: UpgradeableDeployer,
    F: FnOnce(ClientConfig) -> Fut,
    Fut: Future<Output = Result<D, DeployError>>,
{
    if !config.is_allowed_network() {
        let outcome = DeployOutcome::Skipped {
            network: config.network.clone(),
        };
        info!("{}", outcome);
        return Ok(outcome);
    }

    let client_config = config.client_config()?;
    let owner = client_config.public_key.clone();
    let deployer = connect(client_config).await?;

    let address = deployer
        .deploy_upgradeable(&owner, FIXED_AUXILIARY_ADDRESS)
        .await?;

    if let Some(path) = &config.deployments_path {
        write_deployed_address(path, GALAXYDATA_DEPLOYMENT_KEY, address)?;
        info!("Recorded deployment in {}", path.display());
    }

    let outcome = DeployOutcome::Deployed {
        network: config.network.clone(),
        address,
    };
    info!("{}", outcome);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        path::PathBuf,
        sync::{
            atomic::{AtomicBool, Ordering},
            Arc, Mutex,
        },
    };

    use alloy::primitives::{address, Address};
    use clap::Parser;
    use serde_json::Value;

    use super::{run, run_deployment};
    use crate::{
        cli::Cli,
        config::{ClientConfig, DeployConfig},
        constants::FIXED_AUXILIARY_ADDRESS,
        deployer::UpgradeableDeployer,
        errors::DeployError,
        types::DeployOutcome,
        utils::test_utils::TempPath,
    };

    const PKEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const OWNER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
    const DEPLOYED: Address = address!("0x0000000000000000000000000000000000000abc");

    /// A deployer that records its calls and returns a canned result
    #[derive(Clone)]
    struct MockDeployer {
        result: Result<Address, DeployError>,
        calls: Arc<Mutex<Vec<(String, Address)>>>,
    }

    impl MockDeployer {
        fn new(result: Result<Address, DeployError>) -> Self {
            Self {
                result,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn calls(&self) -> Vec<(String, Address)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl UpgradeableDeployer for MockDeployer {
        async fn deploy_upgradeable(
            &self,
            owner: &str,
            auxiliary: Address,
        ) -> Result<Address, DeployError> {
            self.calls.lock().unwrap().push((owner.to_string(), auxiliary));
            self.result.clone()
        }
    }

    fn local_config() -> DeployConfig {
        DeployConfig::new("local").with_keys(PKEY, OWNER)
    }

    #[tokio::test]
    async fn test_wrong_network_skips_deployment() {
        for network in ["mainnet", "Local", "testnet", ""] {
            let connected = Arc::new(AtomicBool::new(false));
            let deployer = MockDeployer::new(Ok(DEPLOYED));
            let config = DeployConfig::new(network).with_keys(PKEY, OWNER);

            let outcome = run_deployment(&config, |_| {
                connected.store(true, Ordering::SeqCst);
                let deployer = deployer.clone();
                async move { Ok(deployer) }
            })
            .await
            .unwrap();

            assert_eq!(
                outcome,
                DeployOutcome::Skipped {
                    network: network.to_string()
                }
            );
            assert_eq!(outcome.to_string(), "wrong network");
            assert!(!connected.load(Ordering::SeqCst));
            assert!(deployer.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_wrong_network_does_not_need_keys() {
        let deployer = MockDeployer::new(Ok(DEPLOYED));
        let outcome = run_deployment(&DeployConfig::new("mainnet"), |_| {
            let deployer = deployer.clone();
            async move { Ok(deployer) }
        })
        .await
        .unwrap();

        assert!(outcome.address().is_none());
    }

    #[tokio::test]
    async fn test_local_network_deploys() {
        let deployer = MockDeployer::new(Ok(DEPLOYED));
        let bound = Arc::new(Mutex::new(None::<ClientConfig>));

        let outcome = run_deployment(&local_config(), |client_config| {
            *bound.lock().unwrap() = Some(client_config);
            let deployer = deployer.clone();
            async move { Ok(deployer) }
        })
        .await
        .unwrap();

        assert_eq!(outcome.address(), Some(DEPLOYED));
        assert_eq!(
            outcome.to_string(),
            "local GalaxyData address: 0x0000000000000000000000000000000000000aBc"
        );

        assert_eq!(
            deployer.calls(),
            vec![(OWNER.to_string(), FIXED_AUXILIARY_ADDRESS)]
        );

        let bound = bound.lock().unwrap().clone().unwrap();
        assert_eq!(bound.network, "local");
        assert_eq!(bound.private_key, PKEY);
        assert_eq!(bound.public_key, OWNER);
    }

    #[tokio::test]
    async fn test_auxiliary_address_is_fixed() {
        let owners = [
            "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
            "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC",
        ];
        for owner in owners {
            let deployer = MockDeployer::new(Ok(DEPLOYED));
            let config = DeployConfig::new("local").with_keys(PKEY, owner);
            run_deployment(&config, |_| {
                let deployer = deployer.clone();
                async move { Ok(deployer) }
            })
            .await
            .unwrap();

            assert_eq!(deployer.calls(), vec![(owner.to_string(), FIXED_AUXILIARY_ADDRESS)]);
        }
    }

    #[tokio::test]
    async fn test_deployment_failure_is_returned() {
        let err = DeployError::ContractDeployment("RPC timeout".to_string());
        let deployer = MockDeployer::new(Err(err.clone()));

        let res = run_deployment(&local_config(), |_| {
            let deployer = deployer.clone();
            async move { Ok(deployer) }
        })
        .await;

        assert_eq!(res.unwrap_err(), err);
        assert_eq!(deployer.calls().len(), 1);
        assert!(err.to_string().contains("RPC timeout"));
    }

    #[tokio::test]
    async fn test_connect_failure_is_returned() {
        let res = run_deployment(&local_config(), |_| async {
            Err::<MockDeployer, _>(DeployError::ClientInitialization("refused".to_string()))
        })
        .await;

        assert_eq!(
            res.unwrap_err(),
            DeployError::ClientInitialization("refused".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_keys_on_local_network() {
        let deployer = MockDeployer::new(Ok(DEPLOYED));
        let res = run_deployment(&DeployConfig::new("local"), |_| {
            let deployer = deployer.clone();
            async move { Ok(deployer) }
        })
        .await;

        assert_eq!(res.unwrap_err(), DeployError::MissingConfig("PRIVATE_KEY"));
        assert!(deployer.calls().is_empty());
    }

    #[tokio::test]
    async fn test_deployment_is_recorded() {
        let path = TempPath::new("run-deployments.json");
        let mut config = local_config();
        config.deployments_path = Some(path.0.clone());

        let deployer = MockDeployer::new(Ok(DEPLOYED));
        run_deployment(&config, |_| {
            let deployer = deployer.clone();
            async move { Ok(deployer) }
        })
        .await
        .unwrap();

        let json: Value = serde_json::from_str(&fs::read_to_string(&path.0).unwrap()).unwrap();
        assert_eq!(
            json["GalaxyData"].as_str(),
            Some(format!("{DEPLOYED:#x}").as_str())
        );
    }

    #[tokio::test]
    async fn test_padded_local_network_is_skipped() {
        for network in [" local", "local\n", " local\n", "LOCAL"] {
            let connected = Arc::new(AtomicBool::new(false));
            let deployer = MockDeployer::new(Ok(DEPLOYED));
            let config = DeployConfig::new(network).with_keys(PKEY, OWNER);

            let outcome = run_deployment(&config, |_| {
                connected.store(true, Ordering::SeqCst);
                let deployer = deployer.clone();
                async move { Ok(deployer) }
            })
            .await
            .unwrap();

            assert_eq!(outcome.to_string(), "wrong network", "{network:?}");
            assert!(!connected.load(Ordering::SeqCst));
            assert!(deployer.calls().is_empty());
        }
    }

    /// Parse CLI flags for the local network with the default test keys
    fn cli(network: &str) -> Cli {
        Cli::try_parse_from([
            "deploy-galaxydata",
            "--network",
            network,
            "--private-key",
            PKEY,
            "--public-key",
            OWNER,
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_run_with_empty_network_is_skipped() {
        for network in ["", "  "] {
            let deployer = MockDeployer::new(Ok(DEPLOYED));
            let outcome = run(cli(network), |_, _| {
                let deployer = deployer.clone();
                async move { Ok(deployer) }
            })
            .await;

            assert_eq!(
                outcome,
                Some(DeployOutcome::Skipped {
                    network: network.to_string()
                })
            );
            assert!(deployer.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_run_swallows_deployment_failure() {
        let deployer =
            MockDeployer::new(Err(DeployError::ContractDeployment("RPC timeout".to_string())));

        let outcome = run(cli("local"), |_, _| {
            let deployer = deployer.clone();
            async move { Ok(deployer) }
        })
        .await;

        assert_eq!(outcome, None);
        assert_eq!(deployer.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_run_passes_artifacts_to_client() {
        let cli = Cli::try_parse_from([
            "deploy-galaxydata",
            "--network",
            "local",
            "--private-key",
            PKEY,
            "--public-key",
            OWNER,
            "--proxy-artifact",
            "out/Proxy.json",
        ])
        .unwrap();
        let deployer = MockDeployer::new(Ok(DEPLOYED));
        let seen = Arc::new(Mutex::new(None));

        let outcome = run(cli, |client_config, artifacts| {
            *seen.lock().unwrap() = Some((client_config.public_key, artifacts));
            let deployer = deployer.clone();
            async move { Ok(deployer) }
        })
        .await;

        assert_eq!(outcome.and_then(|o| o.address()), Some(DEPLOYED));
        let (public_key, artifacts) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(public_key, OWNER);
        assert_eq!(artifacts.proxy, PathBuf::from("out/Proxy.json"));
    }
}
