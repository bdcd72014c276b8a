//! Staking-layer view of the validator set.
//!
//! A staking validator is bonded at genesis with one voting power worth of
//! tokens. Its operator address reuses the consensus address bytes under
//! the validator prefix, so both views name the same 20 bytes.

use super::accounts::{Balance, BaseAccount};
use super::errors::{ProjectionError, ProjectionResult};
use super::keys::ValidatorKeyPair;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use shared_crypto::{module_address, Address, Bech32Prefixes, Ed25519PublicKey};
use shared_types::{AnyPubKey, Coin, Coins, Dec, Int, DEFAULT_BOND_DENOM, POWER_REDUCTION, ZERO_TIMESTAMP};
use std::sync::Arc;

/// Module account holding all bonded stake.
pub const BONDED_POOL_NAME: &str = "bonded_tokens_pool";

/// Values shared by every staking projection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectionConfig {
    pub prefixes: Bech32Prefixes,
    pub bond_denom: String,
    /// Tokens per unit of voting power.
    pub power_reduction: Int,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            prefixes: Bech32Prefixes::default(),
            bond_denom: DEFAULT_BOND_DENOM.to_string(),
            power_reduction: POWER_REDUCTION,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BondStatus {
    #[serde(rename = "BOND_STATUS_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "BOND_STATUS_UNBONDED")]
    Unbonded,
    #[serde(rename = "BOND_STATUS_UNBONDING")]
    Unbonding,
    #[default]
    #[serde(rename = "BOND_STATUS_BONDED")]
    Bonded,
}

/// Human-readable validator metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub moniker: String,
    pub identity: String,
    pub website: String,
    pub security_contact: String,
    pub details: String,
}

impl Description {
    pub fn with_moniker(moniker: impl Into<String>) -> Self {
        Self {
            moniker: moniker.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRates {
    pub rate: Dec,
    pub max_rate: Dec,
    pub max_change_rate: Dec,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commission {
    pub commission_rates: CommissionRates,
    pub update_time: String,
}

impl Default for Commission {
    fn default() -> Self {
        Self {
            commission_rates: CommissionRates::default(),
            update_time: ZERO_TIMESTAMP.to_string(),
        }
    }
}

/// Validator entry of the staking module state.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingValidatorRecord {
    pub operator_address: String,
    pub consensus_pubkey: AnyPubKey,
    pub jailed: bool,
    pub status: BondStatus,
    pub tokens: Int,
    pub delegator_shares: Dec,
    pub description: Description,
    #[serde_as(as = "DisplayFromStr")]
    pub unbonding_height: i64,
    pub unbonding_time: String,
    pub commission: Commission,
    pub min_self_delegation: Int,
    #[serde_as(as = "DisplayFromStr")]
    pub unbonding_on_hold_ref_count: i64,
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub unbonding_ids: Vec<u64>,
}

impl StakingValidatorRecord {
    /// A freshly bonded genesis validator holding `tokens` with one share per token unit.
    pub fn bonded(operator_address: String, consensus_key: &Ed25519PublicKey, tokens: Int) -> Self {
        Self {
            operator_address,
            consensus_pubkey: AnyPubKey::ed25519(consensus_key),
            jailed: false,
            status: BondStatus::Bonded,
            tokens,
            delegator_shares: Dec::ONE,
            description: Description::default(),
            unbonding_height: 0,
            unbonding_time: ZERO_TIMESTAMP.to_string(),
            commission: Commission::default(),
            min_self_delegation: Int::ZERO,
            unbonding_on_hold_ref_count: 0,
            unbonding_ids: Vec::new(),
        }
    }

    /// The operator address must carry the bytes of this record's own consensus key address.
    pub fn check_operator_address(&self, prefixes: &Bech32Prefixes) -> ProjectionResult<()> {
        let operator = Address::from_bech32(&self.operator_address, &prefixes.validator)?;
        let expected = self.consensus_pubkey.address()?;
        if operator != expected {
            return Err(ProjectionError::AddressDivergence {
                operator: self.operator_address.clone(),
                expected: prefixes.validator_address(&expected)?,
            });
        }
        Ok(())
    }
}

/// Staking record linked to its key pair.
#[derive(Clone, Debug)]
pub struct StakingValidator {
    pub record: StakingValidatorRecord,
    pub keys: Arc<ValidatorKeyPair>,
}

impl StakingValidator {
    /// Delegator account address of this validator.
    pub fn account_address(&self) -> Address {
        Address::from(self.keys.account.public_key().address())
    }
}

/// Ordered staking validator set.
#[derive(Clone, Debug, Default)]
pub struct StakingValidators(Vec<StakingValidator>);

impl StakingValidators {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StakingValidator> {
        self.0.iter()
    }

    /// Records without key links, in set order.
    pub fn records(&self) -> Vec<StakingValidatorRecord> {
        self.0.iter().map(|v| v.record.clone()).collect()
    }

    /// Balance of the bonded pool module account: every validator's tokens.
    pub fn bonded_pool_balance(&self, config: &ProjectionConfig) -> ProjectionResult<Balance> {
        bonded_pool_balance(self.0.iter().map(|v| &v.record), config)
    }

    /// One base account per validator, owned by its delegator key.
    pub fn base_accounts(&self, prefixes: &Bech32Prefixes) -> ProjectionResult<Vec<BaseAccount>> {
        self.0
            .iter()
            .map(|v| {
                let address = prefixes.account_address(&v.account_address())?;
                Ok(BaseAccount::genesis(
                    address,
                    AnyPubKey::secp256k1(&v.keys.account.public_key()),
                ))
            })
            .collect()
    }

    /// Delegator balances, each holding that validator's token amount.
    pub fn balances(&self, config: &ProjectionConfig) -> ProjectionResult<Vec<Balance>> {
        self.0
            .iter()
            .map(|v| {
                let address = config.prefixes.account_address(&v.account_address())?;
                let coins = Coins::from(Coin::new(config.bond_denom.clone(), v.record.tokens)?);
                Ok(Balance { address, coins })
            })
            .collect()
    }
}

impl From<Vec<StakingValidator>> for StakingValidators {
    fn from(vals: Vec<StakingValidator>) -> Self {
        Self(vals)
    }
}

/// Sum `tokens` of the given records into a bonded pool balance.
pub fn bonded_pool_balance<'a>(
    records: impl IntoIterator<Item = &'a StakingValidatorRecord>,
    config: &ProjectionConfig,
) -> ProjectionResult<Balance> {
    let mut coins = Coins::new();
    for record in records {
        coins.add(Coin::new(config.bond_denom.clone(), record.tokens)?)?;
    }
    let pool = Address::from(module_address(BONDED_POOL_NAME));
    Ok(Balance {
        address: config.prefixes.account_address(&pool)?,
        coins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keys::ValidatorKeyPairs;

    fn staking(n: usize) -> StakingValidators {
        ValidatorKeyPairs::generate(n)
            .consensus_validators()
            .staking_validators(&ProjectionConfig::default())
            .unwrap()
            .0
    }

    #[test]
    fn test_bonded_pool_address() {
        let balance = staking(1)
            .bonded_pool_balance(&ProjectionConfig::default())
            .unwrap();
        assert_eq!(
            balance.address,
            "cosmos1fl48vsnmsdzcv85q5d2q4z5ajdha8yu34mf0eh"
        );
    }

    #[test]
    fn test_bonded_pool_conserves_tokens() {
        let vals = staking(4);
        let pool = vals
            .bonded_pool_balance(&ProjectionConfig::default())
            .unwrap();

        let total = vals
            .iter()
            .try_fold(Int::ZERO, |acc, v| acc.checked_add(v.record.tokens))
            .unwrap();
        assert_eq!(pool.coins.amount_of("stake"), total);
    }

    #[test]
    fn test_base_accounts_use_account_key() {
        let vals = staking(2);
        let accounts = vals.base_accounts(&Bech32Prefixes::default()).unwrap();

        for (account, val) in accounts.iter().zip(vals.iter()) {
            assert_eq!(account.account_number, 0);
            assert_eq!(account.sequence, 0);
            let key = account.pub_key.as_ref().unwrap();
            assert_eq!(key.key(), val.keys.account.public_key().as_bytes());
            assert_ne!(key.key(), val.keys.consensus.public_key().as_bytes());
        }
    }

    #[test]
    fn test_balances_match_tokens() {
        let vals = staking(2);
        let balances = vals.balances(&ProjectionConfig::default()).unwrap();
        assert_eq!(balances.len(), 2);
        assert!(balances
            .iter()
            .all(|b| b.coins.amount_of("stake") == POWER_REDUCTION));
    }

    #[test]
    fn test_divergent_operator_detected() {
        let vals = staking(2);
        let mut record = vals.iter().next().unwrap().record.clone();
        record.operator_address = vals.iter().nth(1).unwrap().record.operator_address.clone();

        let err = record
            .check_operator_address(&Bech32Prefixes::default())
            .unwrap_err();
        assert!(matches!(err, ProjectionError::AddressDivergence { .. }));
    }

    #[test]
    fn test_record_json_roundtrip_fields() {
        let vals = staking(1);
        let json = serde_json::to_value(&vals.records()[0]).unwrap();

        assert_eq!(json["status"], "BOND_STATUS_BONDED");
        assert_eq!(json["tokens"], "1000000");
        assert_eq!(json["delegator_shares"], "1.000000000000000000");
        assert_eq!(json["min_self_delegation"], "0");
        assert_eq!(json["consensus_pubkey"]["@type"], "/cosmos.crypto.ed25519.PubKey");

        let back: StakingValidatorRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, vals.records()[0]);
    }
}
