//! # Genesis Properties
//!
//! Properties that must hold for any validator set:
//!
//! 1. **Determinism**: same inputs, same bytes
//! 2. **Conservation**: bonded pool balance equals total bonded tokens
//! 3. **Key separation**: gentx signer key is never the consensus key
//! 4. **Idempotent registration**: an account registered twice appears once
//! 5. **Ordering**: signing without a chain id fails before any step runs

#[cfg(test)]
mod tests {
    use super::super::{one_power, sealed, seeded_keys, staking};
    use gn_01_validator_keys::{ValidatorKeyPairs, BONDED_POOL_NAME};
    use gn_02_module_state::{AuthGenesis, BankGenesis, StakingGenesis, StakingParams};
    use gn_04_genesis_assembly::{
        default_genesis_only_validators, GenesisError, GenesisPlan, GenesisStep,
    };
    use shared_crypto::{bech32_decode, module_address, Address, Bech32Prefixes};
    use shared_types::{Coins, Int};

    // =========================================================================
    // DETERMINISM
    // =========================================================================

    #[test]
    fn test_same_secrets_same_document() {
        let first = sealed("prop-chain", &seeded_keys(3));
        let second = sealed("prop-chain", &seeded_keys(3));
        assert_eq!(first.as_bytes(), second.as_bytes());
        assert_eq!(first.hash(), second.hash());
    }

    #[test]
    fn test_random_keys_change_document() {
        let a = sealed("prop-chain", &ValidatorKeyPairs::generate(1));
        let b = sealed("prop-chain", &ValidatorKeyPairs::generate(1));
        assert_ne!(a.hash(), b.hash());
    }

    // =========================================================================
    // CONSERVATION
    // =========================================================================

    #[test]
    fn test_bonded_pool_holds_all_bonded_tokens() {
        let keys = seeded_keys(4);
        let vals = staking(&keys);
        let snapshot = default_genesis_only_validators("conserve", &vals, one_power())
            .unwrap()
            .build()
            .unwrap();

        let staking: StakingGenesis = snapshot.app_state().get().unwrap();
        let bonded = staking
            .validators
            .iter()
            .try_fold(Int::ZERO, |sum, v| sum.checked_add(v.tokens))
            .unwrap();
        assert!(!bonded.is_zero());

        let pool = Address::from(module_address(BONDED_POOL_NAME))
            .to_bech32(&Bech32Prefixes::default().account)
            .unwrap();
        let bank: BankGenesis = snapshot.app_state().get().unwrap();
        let pool_coins = bank
            .balances
            .iter()
            .find(|b| b.address == pool)
            .map(|b| b.coins.clone())
            .unwrap_or_else(Coins::new);

        assert_eq!(pool_coins.amount_of(&staking.params.bond_denom), bonded);
    }

    #[test]
    fn test_later_banking_overwrites_pool() {
        let keys = seeded_keys(2);
        let vals = staking(&keys);
        let snapshot = GenesisPlan::new()
            .then(GenesisStep::chain_id("overwrite"))
            .then(GenesisStep::staking(StakingParams::default(), &vals, vec![]))
            .then(GenesisStep::banking_with_default_params(
                vec![],
                Coins::new(),
                vec![],
                vec![],
            ))
            .build()
            .unwrap();

        let bank: BankGenesis = snapshot.app_state().get().unwrap();
        assert!(bank.balances.is_empty());
    }

    // =========================================================================
    // KEY SEPARATION
    // =========================================================================

    #[test]
    fn test_gentx_signer_differs_from_consensus_key() {
        let doc = sealed("separation", &seeded_keys(3)).to_value().unwrap();
        let gen_txs = doc["app_state"]["genutil"]["gen_txs"].as_array().unwrap();
        assert_eq!(gen_txs.len(), 3);

        for gentx in gen_txs {
            let msg = &gentx["body"]["messages"][0];
            let signer = &gentx["auth_info"]["signer_infos"][0]["public_key"];
            assert_ne!(signer["key"], msg["pubkey"]["key"]);
            assert_eq!(signer["@type"], "/cosmos.crypto.secp256k1.PubKey");

            // The delegator decodes to a different address than the operator.
            let (_, delegator) = bech32_decode(msg["delegator_address"].as_str().unwrap()).unwrap();
            let (_, operator) = bech32_decode(msg["validator_address"].as_str().unwrap()).unwrap();
            assert_ne!(delegator, operator);
        }
    }

    #[test]
    fn test_operator_addresses_follow_consensus_keys() {
        let keys = seeded_keys(3);
        let vals = staking(&keys);
        let prefixes = Bech32Prefixes::default();

        for (v, pair) in vals.iter().zip(keys.iter()) {
            let expected = Address::from(pair.consensus.public_key().address())
                .to_bech32(&prefixes.validator)
                .unwrap();
            assert_eq!(v.record.operator_address, expected);
            assert!(v.record.check_operator_address(&prefixes).is_ok());
        }
    }

    // =========================================================================
    // REGISTRATION
    // =========================================================================

    #[test]
    fn test_registering_account_twice_keeps_one() {
        let keys = seeded_keys(1);
        let vals = staking(&keys);
        let accounts = vals.base_accounts(&Bech32Prefixes::default()).unwrap();

        let snapshot = GenesisPlan::new()
            .then(GenesisStep::chain_id("dedup"))
            .then(GenesisStep::base_accounts(accounts.clone(), vec![]))
            .then(GenesisStep::base_accounts(accounts.clone(), vec![]))
            .build()
            .unwrap();

        let auth: AuthGenesis = snapshot.app_state().get().unwrap();
        assert_eq!(auth.accounts, accounts);
    }

    // =========================================================================
    // ORDERING
    // =========================================================================

    #[test]
    fn test_gentx_without_chain_id_fails_before_signing() {
        let keys = seeded_keys(1);
        let vals = keys.consensus_validators();
        let record = vals.records().remove(0);
        let pair = keys.get(0).unwrap();

        let plan = GenesisPlan::new()
            .then(GenesisStep::default_auth_params())
            .then(GenesisStep::gen_tx(&pair.account, record, one_power()));

        assert!(matches!(
            plan.validate(),
            Err(GenesisError::ChainIdNotSet { step: 1 })
        ));
        assert!(matches!(
            plan.build(),
            Err(GenesisError::ChainIdNotSet { step: 1 })
        ));
    }

    #[test]
    fn test_chain_id_after_gentx_is_still_rejected() {
        let keys = seeded_keys(1);
        let record = keys.consensus_validators().records().remove(0);
        let pair = keys.get(0).unwrap();

        let result = GenesisPlan::new()
            .then(GenesisStep::gen_tx(&pair.account, record, one_power()))
            .then(GenesisStep::chain_id("too-late"))
            .build();

        assert!(matches!(result, Err(GenesisError::ChainIdNotSet { step: 0 })));
    }

    #[test]
    fn test_seal_requires_chain_id() {
        let snapshot = GenesisPlan::new()
            .then(GenesisStep::default_auth_params())
            .build()
            .unwrap();
        assert!(matches!(snapshot.seal(), Err(GenesisError::MissingChainId)));
    }
}
