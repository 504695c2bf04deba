//! Encoding for Safe transactions: EIP-712 hashing, typed-data export and
//! `execTransaction` calldata

mod eip712;
mod exec;
mod typed_data;
pub mod words;

pub use alloy::primitives::keccak256;
pub use eip712::{
    compute_domain_separator, compute_safe_tx_hash, compute_struct_hash, compute_transaction_hash,
    DomainSchema, SafeTxParams, EIP191_PREFIX,
};
pub use exec::{encode_exec_transaction, encode_signatures};
pub use typed_data::{
    typed_data_json, SafeTxMessage, SafeTxSchema, SafeTypedData, TypedDataDomain, TypedDataTypes,
    TypedField,
};
