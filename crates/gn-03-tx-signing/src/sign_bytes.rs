//! Sign bytes derivation.
//!
//! Genesis transactions sign with account number and sequence zero; the
//! signer data leaves both unset rather than inventing values. Any other
//! signer must carry both.

use crate::domain::{SignMode, SignerData, SigningError, SigningResult, Tx};
use crate::proto;
use prost::Message;
use serde_json::{json, Value};

/// Bytes a signer must sign for `tx` under `mode`.
pub fn sign_bytes(mode: SignMode, signer: &SignerData, tx: &Tx) -> SigningResult<Vec<u8>> {
    if signer.chain_id.is_empty() {
        return Err(SigningError::MissingChainId);
    }
    if tx.body.messages.is_empty() {
        return Err(SigningError::NoMessages);
    }
    let (account_number, sequence) = signer.numbers()?;

    match mode {
        SignMode::Direct => Ok(direct_sign_bytes(signer, account_number, tx)),
        SignMode::LegacyAminoJson => amino_json_sign_bytes(signer, account_number, sequence, tx),
    }
}

fn direct_sign_bytes(signer: &SignerData, account_number: u64, tx: &Tx) -> Vec<u8> {
    proto::SignDoc {
        body_bytes: tx.body.encode(),
        auth_info_bytes: tx.auth_info.encode(),
        chain_id: signer.chain_id.clone(),
        account_number,
    }
    .encode_to_vec()
}

/// Compact JSON `StdSignDoc` with keys sorted at every level.
fn amino_json_sign_bytes(
    signer: &SignerData,
    account_number: u64,
    sequence: u64,
    tx: &Tx,
) -> SigningResult<Vec<u8>> {
    let msgs: Vec<Value> = tx.body.messages.iter().map(|m| m.amino.clone()).collect();
    let mut doc = json!({
        "account_number": account_number.to_string(),
        "chain_id": signer.chain_id,
        "fee": {
            "amount": tx.auth_info.fee.amount,
            "gas": tx.auth_info.fee.gas_limit.to_string(),
        },
        "memo": tx.body.memo,
        "msgs": msgs,
        "sequence": sequence.to_string(),
    });
    if tx.body.timeout_height != 0 {
        doc["timeout_height"] = Value::String(tx.body.timeout_height.to_string());
    }
    Ok(serde_json::to_vec(&doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TxBuilder;
    use crate::domain::{Fee, GentxPolicy, MsgCreateValidator};
    use shared_crypto::Ed25519KeyPair;
    use shared_types::{AnyPubKey, Coin, Coins, Int};

    fn builder() -> TxBuilder {
        let policy = GentxPolicy::default();
        let consensus = Ed25519KeyPair::from_secret(b"val-secret-0").public_key();
        let msg = MsgCreateValidator {
            description: policy.description,
            commission: policy.commission,
            min_self_delegation: policy.min_self_delegation,
            delegator_address: "cosmos1xrt7qndrz0p3kkdyvsyyjj6zwtc2ngjky8dcpe".into(),
            validator_address: "cosmosvaloper18uaswc6nwelsgerh5msfstuq3sjdrpc2k6ly5u".into(),
            pubkey: AnyPubKey::ed25519(&consensus),
            value: Coin::new("stake", Int::new(1_000_000)).unwrap(),
        };
        let mut builder = TxBuilder::new();
        builder.set_msgs(&[msg]).unwrap();
        builder
    }

    fn tx() -> Tx {
        builder().into_tx()
    }

    /// A transaction with memo, fee and timeout, as an existing account sends it.
    fn account_tx() -> Tx {
        let mut builder = builder();
        builder.set_memo("rotate keys");
        builder.set_timeout_height(42);
        builder.set_fee(Fee {
            amount: Coins::from(Coin::new("stake", Int::new(500)).unwrap()),
            gas_limit: 200_000,
            ..Default::default()
        });
        builder.into_tx()
    }

    fn account_signer(chain_id: &str) -> SignerData {
        let genesis = signer(chain_id);
        SignerData::for_account(chain_id, genesis.pub_key, genesis.address, 7, 3)
    }

    fn signer(chain_id: &str) -> SignerData {
        let key = shared_crypto::Secp256k1KeyPair::from_secret(b"del-secret-0")
            .unwrap()
            .public_key();
        SignerData::genesis(
            chain_id,
            AnyPubKey::secp256k1(&key),
            "cosmos1xrt7qndrz0p3kkdyvsyyjj6zwtc2ngjky8dcpe".into(),
        )
    }

    #[test]
    fn test_missing_chain_id() {
        assert!(matches!(
            sign_bytes(SignMode::Direct, &signer(""), &tx()),
            Err(SigningError::MissingChainId)
        ));
    }

    #[test]
    fn test_direct_sign_doc_has_zero_account_number() {
        let bytes = sign_bytes(SignMode::Direct, &signer("test-chain"), &tx()).unwrap();
        let doc = proto::SignDoc::decode(bytes.as_slice()).unwrap();

        assert_eq!(doc.chain_id, "test-chain");
        assert_eq!(doc.account_number, 0);
        assert_eq!(doc.body_bytes, tx().body.encode());
    }

    #[test]
    fn test_direct_depends_on_chain_id() {
        let a = sign_bytes(SignMode::Direct, &signer("chain-a"), &tx()).unwrap();
        let b = sign_bytes(SignMode::Direct, &signer("chain-b"), &tx()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_amino_json_sorted_and_compact() {
        let bytes = sign_bytes(SignMode::LegacyAminoJson, &signer("c"), &tx()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with(r#"{"account_number":"0","chain_id":"c","fee":{"amount":[],"gas":"0"},"memo":"","msgs":[{"type":"cosmos-sdk/MsgCreateValidator""#));
        assert!(text.ends_with(r#""sequence":"0"}"#));
        assert!(!text.contains(' '));
    }

    #[test]
    fn test_direct_uses_account_number() {
        let tx = account_tx();
        let bytes = sign_bytes(SignMode::Direct, &account_signer("live-chain"), &tx).unwrap();
        let doc = proto::SignDoc::decode(bytes.as_slice()).unwrap();

        assert_eq!(doc.account_number, 7);
        assert_eq!(doc.body_bytes, tx.body.encode());
        assert_eq!(doc.auth_info_bytes, tx.auth_info.encode());
    }

    #[test]
    fn test_amino_json_carries_account_fields() {
        let bytes =
            sign_bytes(SignMode::LegacyAminoJson, &account_signer("live-chain"), &account_tx())
                .unwrap();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(doc["account_number"], "7");
        assert_eq!(doc["sequence"], "3");
        assert_eq!(doc["memo"], "rotate keys");
        assert_eq!(doc["timeout_height"], "42");
        assert_eq!(doc["fee"]["gas"], "200000");
        assert_eq!(doc["fee"]["amount"][0]["amount"], "500");
    }

    #[test]
    fn test_genesis_amino_json_omits_timeout() {
        let bytes = sign_bytes(SignMode::LegacyAminoJson, &signer("c"), &tx()).unwrap();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(doc.get("timeout_height").is_none());
    }

    #[test]
    fn test_half_set_signer_rejected() {
        let mut half = signer("c");
        half.account_number = Some(7);

        for mode in [SignMode::Direct, SignMode::LegacyAminoJson] {
            assert!(matches!(
                sign_bytes(mode, &half, &tx()),
                Err(SigningError::IncompleteSigner {
                    account_number: Some(7),
                    sequence: None
                })
            ));
        }
    }
}
