//! Steps of a genesis construction plan.

use gn_01_validator_keys::{
    Balance, BaseAccount, ConsensusValidatorRecord, ConsensusValidators, StakingValidatorRecord,
    StakingValidators,
};
use gn_02_module_state::{
    AuthParams, BankGenesis, BankParams, ConsensusParams, Delegation, DistributionGenesis,
    Metadata, MintGenesis, SendEnabled, SigningInfo, SlashingGenesis, SlashingParams,
    StakingParams, ValidatorMissedBlocks,
};
use shared_crypto::Secp256k1KeyPair;
use shared_types::{Coin, Coins};

/// One stage of genesis construction.
///
/// Steps run in list order. Each one takes the previous snapshot and
/// returns the next; a `GenTx` needs a `ChainId` somewhere before it.
#[derive(Debug)]
pub enum GenesisStep<'a> {
    ChainId(String),
    AuthParams(AuthParams),
    Consensus {
        params: Option<ConsensusParams>,
        validators: ConsensusValidators,
    },
    /// Merge accounts into auth and balances into bank.
    BaseAccounts {
        accounts: Vec<BaseAccount>,
        balances: Vec<Balance>,
    },
    /// Write staking state and recompute the bonded pool balance in bank.
    Staking {
        params: StakingParams,
        validators: Vec<StakingValidatorRecord>,
        delegations: Vec<Delegation>,
    },
    /// Overwrite bank state.
    Banking(BankGenesis),
    Distribution(DistributionGenesis),
    Mint(MintGenesis),
    Slashing(SlashingGenesis),
    /// Sign a self-delegation for `validator` with `account`.
    GenTx {
        account: &'a Secp256k1KeyPair,
        validator: ConsensusValidatorRecord,
        amount: Coin,
    },
}

impl<'a> GenesisStep<'a> {
    pub fn chain_id(id: impl Into<String>) -> Self {
        GenesisStep::ChainId(id.into())
    }

    pub fn default_auth_params() -> Self {
        GenesisStep::AuthParams(AuthParams::default())
    }

    pub fn consensus(params: Option<ConsensusParams>, validators: ConsensusValidators) -> Self {
        GenesisStep::Consensus { params, validators }
    }

    pub fn base_accounts(accounts: Vec<BaseAccount>, balances: Vec<Balance>) -> Self {
        GenesisStep::BaseAccounts { accounts, balances }
    }

    pub fn staking(
        params: StakingParams,
        validators: &StakingValidators,
        delegations: Vec<Delegation>,
    ) -> Self {
        GenesisStep::Staking {
            params,
            validators: validators.records(),
            delegations,
        }
    }

    pub fn staking_with_default_params(
        validators: &StakingValidators,
        delegations: Vec<Delegation>,
    ) -> Self {
        Self::staking(StakingParams::default(), validators, delegations)
    }

    pub fn banking(
        params: BankParams,
        balances: Vec<Balance>,
        supply: Coins,
        denom_metadata: Vec<Metadata>,
        send_enabled: Vec<SendEnabled>,
    ) -> Self {
        GenesisStep::Banking(BankGenesis::new(
            params,
            balances,
            supply,
            denom_metadata,
            send_enabled,
        ))
    }

    pub fn banking_with_default_params(
        balances: Vec<Balance>,
        supply: Coins,
        denom_metadata: Vec<Metadata>,
        send_enabled: Vec<SendEnabled>,
    ) -> Self {
        Self::banking(
            BankParams::default(),
            balances,
            supply,
            denom_metadata,
            send_enabled,
        )
    }

    pub fn default_distribution() -> Self {
        GenesisStep::Distribution(DistributionGenesis::default())
    }

    pub fn default_mint() -> Self {
        GenesisStep::Mint(MintGenesis::default())
    }

    pub fn slashing(
        params: SlashingParams,
        signing_infos: Vec<SigningInfo>,
        missed_blocks: Vec<ValidatorMissedBlocks>,
    ) -> Self {
        GenesisStep::Slashing(SlashingGenesis::new(params, signing_infos, missed_blocks))
    }

    pub fn gen_tx(
        account: &'a Secp256k1KeyPair,
        validator: ConsensusValidatorRecord,
        amount: Coin,
    ) -> Self {
        GenesisStep::GenTx {
            account,
            validator,
            amount,
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            GenesisStep::ChainId(_) => "chain_id",
            GenesisStep::AuthParams(_) => "auth_params",
            GenesisStep::Consensus { .. } => "consensus",
            GenesisStep::BaseAccounts { .. } => "base_accounts",
            GenesisStep::Staking { .. } => "staking",
            GenesisStep::Banking(_) => "banking",
            GenesisStep::Distribution(_) => "distribution",
            GenesisStep::Mint(_) => "mint",
            GenesisStep::Slashing(_) => "slashing",
            GenesisStep::GenTx { .. } => "gen_tx",
        }
    }
}
