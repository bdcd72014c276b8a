//! # Runtime Configuration
//!
//! Read from `GN_*` environment variables. Unset variables take defaults;
//! set but unparsable ones are errors.
//!
//! | Variable            | Default          |
//! |---------------------|------------------|
//! | `GN_CHAIN_ID`       | `gn-devnet`      |
//! | `GN_VALIDATORS`     | `1`              |
//! | `GN_OUTPUT`         | `./genesis.json` |
//! | `GN_BOND_DENOM`     | `stake`          |
//! | `GN_BECH32_PREFIX`  | `cosmos`         |
//! | `GN_LOG_LEVEL`      | `info`           |
//! | `GN_KEY_SEED`       | unset (random)   |
//! | `GN_START_NETWORK`  | `false`          |
//! | `GN_HOME`           | `./gn-home`      |

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not valid: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error("Chain id must not be empty")]
    EmptyChainId,

    #[error("At least one validator is required")]
    NoValidators,

    #[error("Bech32 prefix must not be empty")]
    EmptyPrefix,
}

/// Genesis runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisRuntimeConfig {
    pub chain_id: String,
    /// Number of genesis validators.
    pub validators: usize,
    /// Where the sealed genesis is written.
    pub output: PathBuf,
    pub bond_denom: String,
    /// Main bech32 prefix; validator and consensus prefixes derive from it.
    pub bech32_prefix: String,
    pub log_level: String,
    /// Derive validator keys from this seed instead of at random.
    pub key_seed: Option<String>,
    /// Start a local network from the genesis after writing it.
    pub start_network: bool,
    /// Parent of the per-node home directories.
    pub home: PathBuf,
}

impl Default for GenesisRuntimeConfig {
    fn default() -> Self {
        Self {
            chain_id: "gn-devnet".to_string(),
            validators: 1,
            output: PathBuf::from("./genesis.json"),
            bond_denom: "stake".to_string(),
            bech32_prefix: "cosmos".to_string(),
            log_level: "info".to_string(),
            key_seed: None,
            start_network: false,
            home: PathBuf::from("./gn-home"),
        }
    }
}

impl GenesisRuntimeConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("GN_CHAIN_ID") {
            config.chain_id = v;
        }
        if let Some(v) = lookup("GN_VALIDATORS") {
            config.validators = v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: "GN_VALIDATORS",
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup("GN_OUTPUT") {
            config.output = PathBuf::from(v);
        }
        if let Some(v) = lookup("GN_BOND_DENOM") {
            config.bond_denom = v;
        }
        if let Some(v) = lookup("GN_BECH32_PREFIX") {
            config.bech32_prefix = v;
        }
        if let Some(v) = lookup("GN_LOG_LEVEL") {
            config.log_level = v;
        }
        config.key_seed = lookup("GN_KEY_SEED").filter(|s| !s.is_empty());
        if let Some(v) = lookup("GN_START_NETWORK") {
            config.start_network = parse_flag(&v).ok_or(ConfigError::InvalidValue {
                var: "GN_START_NETWORK",
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup("GN_HOME") {
            config.home = PathBuf::from(v);
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_id.trim().is_empty() {
            return Err(ConfigError::EmptyChainId);
        }
        if self.validators == 0 {
            return Err(ConfigError::NoValidators);
        }
        if self.bech32_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
