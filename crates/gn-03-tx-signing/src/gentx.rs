//! Genesis self-delegation transactions.
//!
//! ```text
//! account key ──→ delegator_address ─┐
//! consensus record ──→ validator_address, pubkey ─┼─→ MsgCreateValidator
//! policy ──→ description, commission ─┘          │ validate_basic
//!                                                ↓
//!                       TxBuilder + signer info (Direct, sequence 0)
//!                                                ↓
//!                 SignDoc { body, auth_info, chain_id, account_number: 0 }
//!                                                ↓
//!                               secp256k1 signature attached
//! ```

use crate::builder::TxBuilder;
use crate::domain::{
    GentxPolicy, MsgCreateValidator, SignMode, SignerData, SigningError, SigningResult, Tx,
    TxMessage, TxSignature,
};
use crate::sign_bytes::sign_bytes;
use gn_01_validator_keys::ConsensusValidatorRecord;
use shared_crypto::{
    Address, Bech32Prefixes, CryptoError, Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1Signature,
};
use shared_types::{AnyPubKey, Coin, SECP256K1_PUBKEY_TYPE_URL};
use tracing::debug;

/// Sign mode of every genesis transaction.
pub const GENTX_SIGN_MODE: SignMode = SignMode::Direct;

/// Build and sign the create-validator transaction of one genesis validator.
///
/// The delegator is always the address of `account_key`, so the signer
/// delegates to itself. The validator address and consensus key come from
/// `validator`. Fails without signing if the message is invalid.
pub fn sign_genesis_tx(
    account_key: &Secp256k1KeyPair,
    validator: &ConsensusValidatorRecord,
    amount: Coin,
    chain_id: &str,
    policy: &GentxPolicy,
    prefixes: &Bech32Prefixes,
) -> SigningResult<Tx> {
    if chain_id.is_empty() {
        return Err(SigningError::MissingChainId);
    }

    let account_pub = account_key.public_key();
    let delegator_address = encode_address(
        "delegator_address",
        &prefixes.account,
        &Address::from(account_pub.address()),
    )?;
    let validator_address =
        encode_address("validator_address", &prefixes.validator, &validator.address)?;

    let msg = MsgCreateValidator {
        description: policy.description.clone(),
        commission: policy.commission,
        min_self_delegation: policy.min_self_delegation,
        delegator_address: delegator_address.clone(),
        validator_address,
        pubkey: AnyPubKey::ed25519(&validator.pub_key),
        value: amount,
    };
    msg.validate_basic(prefixes)?;

    let mut builder = TxBuilder::new();
    builder.set_msgs(&[msg])?;

    let pub_key = AnyPubKey::secp256k1(&account_pub);
    let signer = SignerData::genesis(chain_id, pub_key.clone(), delegator_address);

    // Signer info is part of the signed auth info, so it goes in before signing.
    builder.set_signatures(vec![TxSignature {
        pub_key: pub_key.clone(),
        mode: GENTX_SIGN_MODE,
        sequence: 0,
        signature: Vec::new(),
    }]);
    let bytes = sign_bytes(GENTX_SIGN_MODE, &signer, builder.get_tx())?;
    let signature = account_key.sign(&bytes);

    builder.set_signatures(vec![TxSignature {
        pub_key,
        mode: GENTX_SIGN_MODE,
        sequence: 0,
        signature: signature.as_bytes().to_vec(),
    }]);

    debug!(
        validator = %validator.name,
        delegator = %signer.address,
        "signed genesis transaction"
    );
    Ok(builder.into_tx())
}

/// Check every signature of a genesis transaction against `chain_id`.
///
/// Signer addresses are rebuilt from the signer keys with `prefixes`, the
/// same way [`sign_genesis_tx`] derives the delegator.
pub fn verify_genesis_tx(tx: &Tx, chain_id: &str, prefixes: &Bech32Prefixes) -> SigningResult<()> {
    let infos = &tx.auth_info.signer_infos;
    if infos.len() != tx.signatures.len() {
        return Err(SigningError::SignatureCount {
            expected: infos.len(),
            actual: tx.signatures.len(),
        });
    }

    for (info, raw) in infos.iter().zip(&tx.signatures) {
        if info.public_key.type_url() != SECP256K1_PUBKEY_TYPE_URL {
            return Err(SigningError::UnsupportedSignerKey(
                info.public_key.type_url().to_string(),
            ));
        }
        let key = Secp256k1PublicKey::from_slice(info.public_key.key())?;
        let address =
            encode_address("signer_address", &prefixes.account, &Address::from(key.address()))?;
        let signer = SignerData::genesis(chain_id, info.public_key.clone(), address);

        let bytes = sign_bytes(info.mode, &signer, tx)?;
        let sig: [u8; 64] = raw
            .as_slice()
            .try_into()
            .map_err(|_| CryptoError::InvalidSignature)?;
        key.verify(&bytes, &Secp256k1Signature::from_bytes(sig))?;
    }
    Ok(())
}

fn encode_address(field: &'static str, hrp: &str, address: &Address) -> SigningResult<String> {
    address
        .to_bech32(hrp)
        .map_err(|source| SigningError::InvalidAddress {
            field,
            address: address.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::tx_to_json;
    use gn_01_validator_keys::ValidatorKeyPairs;
    use shared_types::{Int, POWER_REDUCTION};

    const CHAIN_ID: &str = "simapp-chain";

    fn signed() -> (Tx, ValidatorKeyPairs) {
        let keys = ValidatorKeyPairs::from_secrets(&[("val-secret-0", "del-secret-0")]).unwrap();
        let vals = keys.consensus_validators();
        let record = &vals.iter().next().unwrap().record;
        let tx = sign_genesis_tx(
            &keys.get(0).unwrap().account,
            record,
            Coin::new("stake", POWER_REDUCTION).unwrap(),
            CHAIN_ID,
            &GentxPolicy::default(),
            &Bech32Prefixes::default(),
        )
        .unwrap();
        (tx, keys)
    }

    #[test]
    fn test_gentx_json_addresses_and_keys() {
        let (tx, _) = signed();
        let json = tx_to_json(&tx).unwrap();
        let msg = &json["body"]["messages"][0];

        assert_eq!(msg["@type"], "/cosmos.staking.v1beta1.MsgCreateValidator");
        assert_eq!(
            msg["delegator_address"],
            "cosmos1xrt7qndrz0p3kkdyvsyyjj6zwtc2ngjky8dcpe"
        );
        assert_eq!(
            msg["validator_address"],
            "cosmosvaloper18uaswc6nwelsgerh5msfstuq3sjdrpc2k6ly5u"
        );
        assert_eq!(msg["pubkey"]["key"], "ZhVhrOUHnUwYw/GlBSBrw/0X6A261gchCRYkAxGF2jk=");
        assert_eq!(msg["description"]["moniker"], "TODO");
        assert_eq!(
            json["auth_info"]["signer_infos"][0]["public_key"]["key"],
            "Aol+ZF9xBuZmYJrT1QFLpZBvSfr/zEKifWyg0Xi1tsFV"
        );
        assert_eq!(
            json["auth_info"]["signer_infos"][0]["mode_info"]["single"]["mode"],
            "SIGN_MODE_DIRECT"
        );
    }

    #[test]
    fn test_gentx_signature_verifies() {
        let (tx, _) = signed();
        assert_eq!(tx.signatures.len(), 1);
        assert_eq!(tx.signatures[0].len(), 64);
        assert!(verify_genesis_tx(&tx, CHAIN_ID, &Bech32Prefixes::default()).is_ok());
    }

    #[test]
    fn test_signature_bound_to_chain_id() {
        let (tx, _) = signed();
        assert!(verify_genesis_tx(&tx, "other-chain", &Bech32Prefixes::default()).is_err());
    }

    #[test]
    fn test_verify_rebuilds_signer_address_with_prefixes() {
        let keys = ValidatorKeyPairs::from_secrets(&[("val-secret-0", "del-secret-0")]).unwrap();
        let vals = keys.consensus_validators();
        let prefixes = Bech32Prefixes::from_main("gn");
        let tx = sign_genesis_tx(
            &keys.get(0).unwrap().account,
            &vals.iter().next().unwrap().record,
            Coin::new("stake", POWER_REDUCTION).unwrap(),
            CHAIN_ID,
            &GentxPolicy::default(),
            &prefixes,
        )
        .unwrap();
        assert!(verify_genesis_tx(&tx, CHAIN_ID, &prefixes).is_ok());

        let broken = Bech32Prefixes {
            account: String::new(),
            ..prefixes
        };
        assert!(matches!(
            verify_genesis_tx(&tx, CHAIN_ID, &broken),
            Err(SigningError::InvalidAddress {
                field: "signer_address",
                ..
            })
        ));
    }

    #[test]
    fn test_signing_is_deterministic() {
        let (a, _) = signed();
        let (b, _) = signed();
        assert_eq!(a.encode(), b.encode());
    }

    #[test]
    fn test_empty_chain_id_fails_before_signing() {
        let keys = ValidatorKeyPairs::generate(1);
        let vals = keys.consensus_validators();
        let err = sign_genesis_tx(
            &keys.get(0).unwrap().account,
            &vals.iter().next().unwrap().record,
            Coin::new("stake", Int::ONE).unwrap(),
            "",
            &GentxPolicy::default(),
            &Bech32Prefixes::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SigningError::MissingChainId));
    }

    #[test]
    fn test_zero_amount_rejected() {
        let keys = ValidatorKeyPairs::generate(1);
        let vals = keys.consensus_validators();
        let result = sign_genesis_tx(
            &keys.get(0).unwrap().account,
            &vals.iter().next().unwrap().record,
            Coin::new("stake", Int::ZERO).unwrap(),
            CHAIN_ID,
            &GentxPolicy::default(),
            &Bech32Prefixes::default(),
        );
        assert!(matches!(result, Err(SigningError::InvalidAmount(_))));
    }
}
