//! Genesis construction errors.

use gn_01_validator_keys::ProjectionError;
use gn_02_module_state::ModuleStateError;
use gn_03_tx_signing::SigningError;
use thiserror::Error;

/// Genesis construction errors.
///
/// Every variant aborts construction; nothing here is retried.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// A genesis transaction step appears before any chain id step.
    #[error("Genesis transaction at step {step} requested before the chain id was set")]
    ChainIdNotSet { step: usize },

    /// The document was sealed without a chain id.
    #[error("Cannot seal a genesis document without a chain id")]
    MissingChainId,

    /// Invalid plan configuration.
    #[error("Invalid genesis configuration: {0}")]
    InvalidConfig(String),

    /// A staking validator does not match its consensus key.
    #[error("Validator address mismatch: {0}")]
    Projection(#[from] ProjectionError),

    /// Module state could not be read, patched or written.
    #[error("Module state failure: {0}")]
    ModuleState(#[from] ModuleStateError),

    /// The genesis transaction of a validator could not be built or signed.
    #[error("Failed to sign genesis transaction for {validator}: {source}")]
    Signing {
        validator: String,
        #[source]
        source: SigningError,
    },

    /// A signed transaction could not be rendered as JSON.
    #[error("Failed to encode genesis transaction: {0}")]
    TxEncode(#[source] SigningError),

    /// Canonical encoding failed.
    #[error("Failed to encode genesis document: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type GenesisResult<T> = Result<T, GenesisError>;
