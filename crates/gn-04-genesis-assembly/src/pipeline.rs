//! # Genesis Construction Pipeline
//!
//! A [`GenesisPlan`] is an ordered list of [`GenesisStep`]s. Building it
//! first checks the order of the whole list, then folds the steps over an
//! empty [`GenesisSnapshot`], each step consuming the previous snapshot and
//! returning the next one.
//!
//! ```text
//! validate order ──→ ChainId ──→ AuthParams ──→ Consensus ──→ BaseAccounts
//!                                                                  │
//!      seal() ←── GenTx* ←── Staking (+ bank bonded pool patch) ←──┘
//! ```
//!
//! Because the order check runs before any step, a plan that would sign
//! before the chain id is known fails without signing anything.

use crate::domain::{GenesisError, GenesisResult, GenesisSnapshot, GenesisStep};
use gn_01_validator_keys::StakingValidatorRecord;
use gn_02_module_state::{configure_staking, register_accounts, ConsensusGenesis, ModuleStateMap};
use gn_03_tx_signing::{sign_genesis_tx, GentxPolicy};
use shared_crypto::Bech32Prefixes;
use tracing::{debug, info};

/// Ordered genesis construction plan.
#[derive(Debug, Default)]
pub struct GenesisPlan<'a> {
    prefixes: Bech32Prefixes,
    policy: GentxPolicy,
    steps: Vec<GenesisStep<'a>>,
}

impl<'a> GenesisPlan<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan with the given steps and default prefixes and policy.
    pub fn from_steps(steps: Vec<GenesisStep<'a>>) -> Self {
        Self {
            steps,
            ..Default::default()
        }
    }

    pub fn with_prefixes(mut self, prefixes: Bech32Prefixes) -> Self {
        self.prefixes = prefixes;
        self
    }

    pub fn with_policy(mut self, policy: GentxPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Append a step.
    pub fn then(mut self, step: GenesisStep<'a>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn push(&mut self, step: GenesisStep<'a>) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[GenesisStep<'a>] {
        &self.steps
    }

    /// Check step order without running anything.
    pub fn validate(&self) -> GenesisResult<()> {
        let mut chain_id_seen = false;
        for (index, step) in self.steps.iter().enumerate() {
            match step {
                GenesisStep::ChainId(id) if id.is_empty() => {
                    return Err(GenesisError::InvalidConfig(format!(
                        "empty chain id at step {index}"
                    )));
                }
                GenesisStep::ChainId(_) => chain_id_seen = true,
                GenesisStep::GenTx { .. } if !chain_id_seen => {
                    return Err(GenesisError::ChainIdNotSet { step: index });
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Validate, then run every step in order.
    pub fn build(self) -> GenesisResult<GenesisSnapshot> {
        self.validate()?;
        info!(steps = self.steps.len(), "building genesis");

        let Self {
            prefixes,
            policy,
            steps,
        } = self;
        steps
            .into_iter()
            .enumerate()
            .try_fold(GenesisSnapshot::default(), |snapshot, (index, step)| {
                debug!(index, step = step.name(), "applying genesis step");
                apply(snapshot, step, index, &prefixes, &policy)
            })
    }
}

fn apply(
    mut snapshot: GenesisSnapshot,
    step: GenesisStep<'_>,
    index: usize,
    prefixes: &Bech32Prefixes,
    policy: &GentxPolicy,
) -> GenesisResult<GenesisSnapshot> {
    match step {
        GenesisStep::ChainId(id) => {
            snapshot.chain_id = Some(id);
        }
        GenesisStep::AuthParams(params) => {
            let mut auth: gn_02_module_state::AuthGenesis = snapshot.app_state.get()?;
            auth.params = params;
            snapshot.app_state.set(&auth)?;
        }
        GenesisStep::Consensus { params, validators } => {
            snapshot.consensus = Some(ConsensusGenesis::new(params, &validators));
        }
        GenesisStep::BaseAccounts { accounts, balances } => {
            snapshot.app_state = register_accounts(take_state(&mut snapshot), accounts, balances)?;
        }
        GenesisStep::Staking {
            params,
            validators,
            delegations,
        } => {
            check_operators(&validators, prefixes)?;
            snapshot.app_state = configure_staking(
                take_state(&mut snapshot),
                params,
                validators,
                delegations,
                prefixes,
            )?;
        }
        GenesisStep::Banking(bank) => snapshot.app_state.set(&bank)?,
        GenesisStep::Distribution(state) => snapshot.app_state.set(&state)?,
        GenesisStep::Mint(state) => snapshot.app_state.set(&state)?,
        GenesisStep::Slashing(state) => snapshot.app_state.set(&state)?,
        GenesisStep::GenTx {
            account,
            validator,
            amount,
        } => {
            let chain_id = snapshot
                .chain_id
                .as_deref()
                .ok_or(GenesisError::ChainIdNotSet { step: index })?;
            let tx = sign_genesis_tx(account, &validator, amount, chain_id, policy, prefixes)
                .map_err(|source| GenesisError::Signing {
                    validator: validator.name.clone(),
                    source,
                })?;
            snapshot.gen_txs.push(tx);
        }
    }
    Ok(snapshot)
}

fn take_state(snapshot: &mut GenesisSnapshot) -> ModuleStateMap {
    std::mem::take(&mut snapshot.app_state)
}

fn check_operators(
    validators: &[StakingValidatorRecord],
    prefixes: &Bech32Prefixes,
) -> GenesisResult<()> {
    for v in validators {
        v.check_operator_address(prefixes)?;
    }
    Ok(())
}
