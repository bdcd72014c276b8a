//! Incremental transaction construction.

use crate::domain::{
    AuthInfo, EncodedMsg, Fee, SignerInfo, SigningError, SigningResult, Tx, TxMessage, TxSignature,
};

/// Assembles a [`Tx`] from messages and signatures.
///
/// Setting signatures rewrites the signer infos as well, so the auth info
/// always describes exactly the signatures attached.
#[derive(Clone, Debug, Default)]
pub struct TxBuilder {
    tx: Tx,
}

impl TxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the body messages.
    pub fn set_msgs<M: TxMessage>(&mut self, msgs: &[M]) -> SigningResult<()> {
        if msgs.is_empty() {
            return Err(SigningError::NoMessages);
        }
        self.tx.body.messages = msgs
            .iter()
            .map(EncodedMsg::encode)
            .collect::<SigningResult<Vec<_>>>()?;
        Ok(())
    }

    pub fn set_memo(&mut self, memo: impl Into<String>) {
        self.tx.body.memo = memo.into();
    }

    pub fn set_timeout_height(&mut self, height: u64) {
        self.tx.body.timeout_height = height;
    }

    pub fn set_fee(&mut self, fee: Fee) {
        self.tx.auth_info.fee = fee;
    }

    /// Replace signer infos and signatures, one entry per signature.
    pub fn set_signatures(&mut self, signatures: Vec<TxSignature>) {
        let (infos, sigs) = signatures
            .into_iter()
            .map(|s| {
                (
                    SignerInfo {
                        public_key: s.pub_key,
                        mode: s.mode,
                        sequence: s.sequence,
                    },
                    s.signature,
                )
            })
            .unzip();
        self.tx.auth_info = AuthInfo {
            signer_infos: infos,
            fee: std::mem::take(&mut self.tx.auth_info.fee),
        };
        self.tx.signatures = sigs;
    }

    pub fn get_tx(&self) -> &Tx {
        &self.tx
    }

    pub fn into_tx(self) -> Tx {
        self.tx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MsgCreateValidator, SignMode};
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::AnyPubKey;

    #[test]
    fn test_empty_messages_rejected() {
        let mut builder = TxBuilder::new();
        let msgs: Vec<MsgCreateValidator> = Vec::new();
        assert!(matches!(
            builder.set_msgs(&msgs),
            Err(SigningError::NoMessages)
        ));
    }

    #[test]
    fn test_signatures_rewrite_signer_infos() {
        let key = Secp256k1KeyPair::from_secret(b"del-secret-0").unwrap();
        let pub_key = AnyPubKey::secp256k1(&key.public_key());

        let mut builder = TxBuilder::new();
        builder.set_signatures(vec![TxSignature {
            pub_key: pub_key.clone(),
            mode: SignMode::Direct,
            sequence: 0,
            signature: vec![],
        }]);
        builder.set_signatures(vec![TxSignature {
            pub_key,
            mode: SignMode::Direct,
            sequence: 0,
            signature: vec![1, 2, 3],
        }]);

        let tx = builder.get_tx();
        assert_eq!(tx.auth_info.signer_infos.len(), 1);
        assert_eq!(tx.signatures, vec![vec![1, 2, 3]]);
    }
}
