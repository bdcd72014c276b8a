//! Domain layer for transaction signing.

pub mod errors;
pub mod msg;
pub mod policy;
pub mod sign_mode;
pub mod tx;

pub use errors::{SigningError, SigningResult};
pub use msg::{EncodedMsg, MsgCreateValidator, TxMessage};
pub use policy::GentxPolicy;
pub use sign_mode::{SignMode, SignerData};
pub use tx::{AuthInfo, Fee, SignerInfo, Tx, TxBody, TxSignature};
