//! # Genesis Runtime
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from `GN_*` variables and validate it
//! 2. Derive or generate validator keys
//! 3. Build, seal and write the genesis document
//! 4. If `GN_START_NETWORK` is set, run a local network until Ctrl+C

use anyhow::{Context, Result};
use genesis_runtime::{build_genesis, run_network, validator_keys, write_genesis, GenesisRuntimeConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let config = GenesisRuntimeConfig::from_env()?;

    // RUST_LOG wins over GN_LOG_LEVEL.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    config.validate()?;
    info!(
        chain_id = %config.chain_id,
        validators = config.validators,
        seeded = config.key_seed.is_some(),
        "building genesis"
    );

    let keys = validator_keys(&config)?;
    let document = build_genesis(&config, &keys)?;
    write_genesis(&config.output, &document)?;

    if !config.start_network {
        return Ok(());
    }

    let network = run_network(&config, &keys, &document).await?;
    info!(nodes = network.len(), "Network is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    network.stop();
    network.wait().await;
    Ok(())
}
