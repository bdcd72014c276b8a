//! Genesis assembly domain types.

pub mod document;
pub mod errors;
pub mod step;

pub use document::{GenesisDocument, GenesisSnapshot};
pub use errors::{GenesisError, GenesisResult};
pub use step::GenesisStep;
