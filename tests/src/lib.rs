//! # Genesis Test Suite
//!
//! Scenarios that cross crate boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── e2e_genesis.rs   # Secret-seeded single validator, known vectors
//!     ├── properties.rs    # Determinism, conservation, key separation, ordering
//!     └── network.rs       # Local network start and RPC conflict
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gn-tests
//! cargo test -p gn-tests integration::network::
//! ```

#![allow(dead_code)]

pub mod integration;
