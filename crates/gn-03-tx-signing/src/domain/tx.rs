//! Transaction model.

use super::msg::{coin_proto, pubkey_any, EncodedMsg};
use super::sign_mode::SignMode;
use crate::proto;
use prost::Message;
use shared_types::{AnyPubKey, Coins};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TxBody {
    pub messages: Vec<EncodedMsg>,
    pub memo: String,
    pub timeout_height: u64,
}

impl TxBody {
    pub fn to_proto(&self) -> proto::TxBody {
        proto::TxBody {
            messages: self.messages.iter().map(EncodedMsg::to_any).collect(),
            memo: self.memo.clone(),
            timeout_height: self.timeout_height,
            extension_options: Vec::new(),
            non_critical_extension_options: Vec::new(),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        self.to_proto().encode_to_vec()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fee {
    pub amount: Coins,
    pub gas_limit: u64,
    pub payer: String,
    pub granter: String,
}

/// Public key, sign mode and sequence of one signer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignerInfo {
    pub public_key: AnyPubKey,
    pub mode: SignMode,
    pub sequence: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthInfo {
    pub signer_infos: Vec<SignerInfo>,
    pub fee: Fee,
}

impl AuthInfo {
    pub fn to_proto(&self) -> proto::AuthInfo {
        proto::AuthInfo {
            signer_infos: self
                .signer_infos
                .iter()
                .map(|s| proto::SignerInfo {
                    public_key: Some(pubkey_any(&s.public_key)),
                    mode_info: Some(proto::ModeInfo {
                        single: Some(proto::Single {
                            mode: s.mode.as_i32(),
                        }),
                    }),
                    sequence: s.sequence,
                })
                .collect(),
            fee: Some(proto::Fee {
                amount: self.fee.amount.iter().map(coin_proto).collect(),
                gas_limit: self.fee.gas_limit,
                payer: self.fee.payer.clone(),
                granter: self.fee.granter.clone(),
            }),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        self.to_proto().encode_to_vec()
    }
}

/// A signature together with the signer information it was produced under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxSignature {
    pub pub_key: AnyPubKey,
    pub mode: SignMode,
    pub sequence: u64,
    pub signature: Vec<u8>,
}

/// A transaction: body, signer information and one signature per signer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tx {
    pub body: TxBody,
    pub auth_info: AuthInfo,
    pub signatures: Vec<Vec<u8>>,
}

impl Tx {
    /// Protobuf `TxRaw` encoding, the form broadcast to nodes.
    pub fn encode(&self) -> Vec<u8> {
        proto::TxRaw {
            body_bytes: self.body.encode(),
            auth_info_bytes: self.auth_info.encode(),
            signatures: self.signatures.clone(),
        }
        .encode_to_vec()
    }
}
