//! # Genesis Runtime
//!
//! Wires the genesis crates into one run:
//!
//! ```text
//! GenesisRuntimeConfig ──→ validator keys ──→ validators-only plan
//!                                                   │ build + seal
//!                                                   ↓
//!                                   genesis.json ──→ (optional) local network
//! ```
//!
//! With `GN_KEY_SEED` set, validator `i` uses the secrets `{seed}-val-{i}`
//! and `{seed}-del-{i}`, so the same configuration always writes the same
//! file.

pub mod config;

pub use config::{ConfigError, GenesisRuntimeConfig};

use anyhow::{anyhow, Context, Result};
use gn_01_validator_keys::{ProjectionConfig, ValidatorKeyPairs};
use gn_04_genesis_assembly::{genesis_only_validators, GenesisDocument};
use gn_05_testnet::{start_network, LocalNodeStarter, Network, NodeConfig, NodeStarter};
use shared_crypto::Bech32Prefixes;
use shared_types::{Coin, POWER_REDUCTION};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Keys for every configured validator.
pub fn validator_keys(config: &GenesisRuntimeConfig) -> Result<ValidatorKeyPairs> {
    match &config.key_seed {
        Some(seed) => {
            let secrets: Vec<(String, String)> = (0..config.validators)
                .map(|i| (format!("{seed}-val-{i}"), format!("{seed}-del-{i}")))
                .collect();
            ValidatorKeyPairs::from_secrets(&secrets).context("deriving validator keys")
        }
        None => Ok(ValidatorKeyPairs::generate(config.validators)),
    }
}

/// Build and seal a validators-only genesis for `keys`.
///
/// Each validator self-delegates one unit of voting power in the bond denom.
pub fn build_genesis(
    config: &GenesisRuntimeConfig,
    keys: &ValidatorKeyPairs,
) -> Result<GenesisDocument> {
    let prefixes = Bech32Prefixes::from_main(&config.bech32_prefix);
    let projection = ProjectionConfig {
        prefixes: prefixes.clone(),
        bond_denom: config.bond_denom.clone(),
        ..Default::default()
    };

    let (staking, supply) = keys
        .consensus_validators()
        .staking_validators(&projection)
        .context("projecting staking validators")?;
    info!(
        validators = staking.len(),
        bonded = %supply.amount_of(&config.bond_denom),
        "validators projected"
    );

    let amount = Coin::new(config.bond_denom.clone(), POWER_REDUCTION)
        .with_context(|| format!("invalid bond denom {:?}", config.bond_denom))?;

    let document = genesis_only_validators(&config.chain_id, &staking, amount, prefixes)?
        .build()?
        .seal()?;
    Ok(document)
}

/// Write `document` to `path`, creating parent directories.
pub fn write_genesis(path: &Path, document: &GenesisDocument) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, document.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    info!(
        path = %path.display(),
        chain_id = document.chain_id(),
        hash = %hex::encode(document.hash()),
        "genesis written"
    );
    Ok(())
}

/// Start one local node per validator under `config.home`.
///
/// Node 0 serves RPC. If any node fails, the ones that did start are stopped
/// before the error is returned.
pub async fn run_network(
    config: &GenesisRuntimeConfig,
    keys: &ValidatorKeyPairs,
    document: &GenesisDocument,
) -> Result<Network> {
    let genesis: Arc<[u8]> = document.as_bytes().into();
    let validators: Vec<_> = keys.iter().map(|k| k.consensus.public_key()).collect();

    let result = start_network(validators.len(), |i| -> Box<dyn NodeStarter> {
        let node_config = NodeConfig::new(&config.chain_id, config.home.join(format!("node{i}")));
        let starter = LocalNodeStarter::new(node_config, validators[i], Arc::clone(&genesis));
        if i == 0 {
            Box::new(starter.rpc_listen())
        } else {
            Box::new(starter)
        }
    })
    .await;

    match result {
        Ok(network) => {
            if let Some(addr) = network.rpc_node().and_then(|n| n.rpc_addr()) {
                info!(rpc = %addr, "status rpc listening");
            }
            Ok(network)
        }
        Err(e) => {
            let summary = e.to_string();
            let causes: Vec<String> = e.failures.iter().map(ToString::to_string).collect();
            warn!(failures = causes.len(), "stopping partially started network");
            e.network.stop();
            e.network.wait().await;
            Err(anyhow!("{summary}: {}", causes.join("; ")))
        }
    }
}
