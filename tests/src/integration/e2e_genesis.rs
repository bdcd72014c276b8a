//! # End-to-End Genesis Vector
//!
//! One validator seeded with `val-secret-0` / `del-secret-0`. Every derived
//! key and address is fixed, so the sealed document can be checked field by
//! field.

#[cfg(test)]
mod tests {
    use super::super::{one_power, seeded_keys, staking};
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use gn_03_tx_signing::verify_genesis_tx;
    use gn_04_genesis_assembly::default_genesis_only_validators;
    use serde_json::Value;
    use shared_crypto::{bech32_decode, Bech32Prefixes};

    const CHAIN_ID: &str = "e2e-chain";
    const CONSENSUS_ADDRESS: &str = "3F3B076353767F046477A6E0982F808C24D1870A";
    const CONSENSUS_PUBKEY: &str = "ZhVhrOUHnUwYw/GlBSBrw/0X6A261gchCRYkAxGF2jk=";
    const ACCOUNT_PUBKEY: &str = "Aol+ZF9xBuZmYJrT1QFLpZBvSfr/zEKifWyg0Xi1tsFV";
    const DELEGATOR: &str = "cosmos1xrt7qndrz0p3kkdyvsyyjj6zwtc2ngjky8dcpe";
    const DELEGATOR_HEX: &str = "30D7E04DA313C31B59A46408494B4272F0A9A256";

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn genesis() -> Value {
        let keys = seeded_keys(1);
        let vals = staking(&keys);
        default_genesis_only_validators(CHAIN_ID, &vals, one_power())
            .unwrap()
            .build()
            .unwrap()
            .seal()
            .unwrap()
            .to_value()
            .unwrap()
    }

    fn gentx_msg(doc: &Value) -> &Value {
        &doc["app_state"]["genutil"]["gen_txs"][0]["body"]["messages"][0]
    }

    // =========================================================================
    // VECTOR TESTS
    // =========================================================================

    #[test]
    fn test_consensus_section_matches_vector() {
        let doc = genesis();
        let validators = doc["consensus"]["validators"].as_array().unwrap();
        assert_eq!(validators.len(), 1);
        assert_eq!(validators[0]["address"], CONSENSUS_ADDRESS);
        assert_eq!(validators[0]["pub_key"]["value"], CONSENSUS_PUBKEY);
        assert_eq!(validators[0]["name"], "val-0");
    }

    #[test]
    fn test_staking_operator_is_consensus_address() {
        let doc = genesis();
        let record = &doc["app_state"]["staking"]["validators"][0];
        let (hrp, bytes) = bech32_decode(record["operator_address"].as_str().unwrap()).unwrap();

        assert_eq!(hrp, Bech32Prefixes::default().validator);
        assert_eq!(hex::encode_upper(bytes), CONSENSUS_ADDRESS);
        assert_eq!(record["consensus_pubkey"]["key"], CONSENSUS_PUBKEY);
    }

    #[test]
    fn test_gentx_delegator_is_account_address() {
        let doc = genesis();
        let msg = gentx_msg(&doc);

        assert_eq!(msg["delegator_address"], DELEGATOR);
        let (_, delegator) = bech32_decode(DELEGATOR).unwrap();
        assert_eq!(hex::encode_upper(delegator), DELEGATOR_HEX);

        // validator_address decodes to the consensus address bytes.
        let (_, validator) = bech32_decode(msg["validator_address"].as_str().unwrap()).unwrap();
        assert_eq!(hex::encode_upper(validator), CONSENSUS_ADDRESS);

        // The delegator holds a funded base account.
        let accounts = doc["app_state"]["auth"]["accounts"].as_array().unwrap();
        assert!(accounts.iter().any(|a| a["address"] == DELEGATOR));
    }

    #[test]
    fn test_gentx_signer_is_account_key() {
        let doc = genesis();
        let gentx = &doc["app_state"]["genutil"]["gen_txs"][0];
        let signer_key = &gentx["auth_info"]["signer_infos"][0]["public_key"]["key"];
        let msg_key = &gentx_msg(&doc)["pubkey"]["key"];

        assert_eq!(signer_key, ACCOUNT_PUBKEY);
        assert_eq!(msg_key, CONSENSUS_PUBKEY);
        assert_ne!(signer_key, msg_key);

        let signatures = gentx["signatures"].as_array().unwrap();
        assert_eq!(signatures.len(), 1);
        let signature = STANDARD.decode(signatures[0].as_str().unwrap()).unwrap();
        assert_eq!(signature.len(), 64);
    }

    #[test]
    fn test_gentx_signature_verifies_for_chain() {
        let keys = seeded_keys(1);
        let vals = staking(&keys);
        let snapshot = default_genesis_only_validators(CHAIN_ID, &vals, one_power())
            .unwrap()
            .build()
            .unwrap();

        let prefixes = Bech32Prefixes::default();
        assert_eq!(snapshot.gen_txs().len(), 1);
        let gentx = &snapshot.gen_txs()[0];
        assert!(verify_genesis_tx(gentx, CHAIN_ID, &prefixes).is_ok());
        assert!(verify_genesis_tx(gentx, "other-chain", &prefixes).is_err());
    }
}
