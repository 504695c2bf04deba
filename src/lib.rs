//! # safe-tx
//!
//! Offline hashing and signing of Safe multisig transactions, v0.1.0 through v1.4.1.
//!
//! ## Features
//!
//! - EIP-712 safeTxHash for every Safe version (legacy and chain-bound domains)
//! - Transactions whose cached hash follows every field change
//! - Deterministic ECDSA signatures in the layout the Safe contract verifies
//! - Typed-data JSON for hardware wallets and other external signers
//! - `execTransaction` calldata with owner-sorted signatures
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use safe_tx::{sign_transaction, Operation, Safe, SafeTxParams, SafeVersion};
//! use alloy::primitives::{address, U256};
//!
//! let safe = Safe::new(safe_address, SafeVersion::new(1, 3, 0), 1u64);
//!
//! let mut tx = safe.transaction(SafeTxParams::new(
//!     address!("0x1111111111111111111111111111111111111111"),
//!     U256::ZERO,
//!     calldata,
//!     Operation::Call,
//! ));
//! tx.set_nonce(U256::from(7));
//!
//! let signature = sign_transaction(&tx, &private_key)?;
//! println!("{} signed by {}", tx.safe_tx_hash(), signature);
//! ```
//!
//! ## Collecting confirmations
//!
//! ```rust,ignore
//! let mut confirmations = Confirmations::new(tx.safe_tx_hash());
//! confirmations.add(signature)?;
//! confirmations.add_approved_hash(contract_owner);
//!
//! if confirmations.meets_threshold(2) {
//!     let calldata = encode_exec_transaction(&tx, /* ... */);
//! }
//! ```

pub mod chain;
pub mod contracts;
pub mod encoding;
pub mod error;
pub mod safe;
pub mod signing;
pub mod transaction;
pub mod types;

// Re-export main types at crate root
pub use contracts::ISafe;
pub use encoding::{
    compute_domain_separator, compute_safe_tx_hash, compute_struct_hash, compute_transaction_hash,
    encode_exec_transaction, encode_signatures, typed_data_json, SafeTxParams, SafeTypedData,
};
pub use error::{Error, Result};
pub use safe::{parse_uint, Safe};
pub use signing::{
    address_of_key, eth_sign_hash, recover_address, recover_eth_sign_address, sign_hash,
    sign_hash_with_key, sign_transaction, Confirmations,
};
pub use transaction::SafeTransaction;
pub use types::{Operation, SafeSignature, SafeVersion, SignatureKind};

// Re-export alloy types that are commonly used
pub use alloy::primitives::{Address, Bytes, B256, U256};
