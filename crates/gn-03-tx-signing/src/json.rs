//! Protobuf JSON rendering of finalized transactions.

use crate::domain::{SigningResult, Tx};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};

/// JSON object of a signed transaction, as stored in `genutil.gen_txs`.
pub fn tx_to_json(tx: &Tx) -> SigningResult<Value> {
    let messages: Vec<Value> = tx.body.messages.iter().map(|m| m.json.clone()).collect();

    let signer_infos = tx
        .auth_info
        .signer_infos
        .iter()
        .map(|s| -> SigningResult<Value> {
            Ok(json!({
                "public_key": serde_json::to_value(&s.public_key)?,
                "mode_info": { "single": { "mode": s.mode } },
                "sequence": s.sequence.to_string(),
            }))
        })
        .collect::<SigningResult<Vec<Value>>>()?;

    let fee = &tx.auth_info.fee;
    let signatures: Vec<String> = tx.signatures.iter().map(|s| STANDARD.encode(s)).collect();

    Ok(json!({
        "body": {
            "messages": messages,
            "memo": tx.body.memo,
            "timeout_height": tx.body.timeout_height.to_string(),
            "extension_options": [],
            "non_critical_extension_options": [],
        },
        "auth_info": {
            "signer_infos": signer_infos,
            "fee": {
                "amount": serde_json::to_value(&fee.amount)?,
                "gas_limit": fee.gas_limit.to_string(),
                "payer": fee.payer,
                "granter": fee.granter,
            },
            "tip": null,
        },
        "signatures": signatures,
    }))
}

/// Compact JSON bytes of a signed transaction.
pub fn encode_tx_json(tx: &Tx) -> SigningResult<Vec<u8>> {
    Ok(serde_json::to_vec(&tx_to_json(tx)?)?)
}
