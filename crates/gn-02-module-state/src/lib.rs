//! # gn-02-module-state
//!
//! Genesis state owned by each application module, and the map that holds
//! them side by side until the document is assembled.
//!
//! ## Architecture
//!
//! ```text
//! ModuleStateMap: name ──→ serde_json::Value
//!      │
//!      ├── get::<BankGenesis>()   typed read, zero value if never written
//!      └── set(&BankGenesis)      overwrite unconditionally
//! ```
//!
//! Every module state implements [`ModuleGenesis`], which names its key in
//! `app_state`. A blob that no longer parses as its module's schema is a
//! fatal [`ModuleStateError::Malformed`]; there is no partial recovery.
//!
//! Accounts and balances registered from several sources go through
//! [`sanitize_accounts`] and [`sanitize_balances`] so the resulting lists
//! have a canonical order regardless of how they were assembled.

pub mod domain;

pub use domain::*;
