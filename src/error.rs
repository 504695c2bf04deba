//! Error types for safe-tx

use alloy::primitives::B256;
use thiserror::Error;

/// Result type alias for safe-tx operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, hashing or signing Safe transactions
#[derive(Debug, Error)]
pub enum Error {
    /// Address text or bytes of the wrong shape, or a failed EIP-55 check
    #[error("Malformed address {input:?}: {reason}")]
    MalformedAddress { input: String, reason: &'static str },

    /// Hash input is not exactly 32 bytes
    #[error("Invalid hash length: expected 32, got {0}")]
    WrongHashLength(usize),

    /// Signature input is not exactly 65 bytes
    #[error("Invalid signature length: expected 65, got {0}")]
    WrongSignatureLength(usize),

    /// Hex text that does not decode
    #[error("Invalid hex for {what}: {reason}")]
    InvalidHex { what: &'static str, reason: String },

    /// Integer-as-string that does not fit a uint256
    #[error("Invalid number for {field}: {input:?}")]
    InvalidNumber { field: &'static str, input: String },

    /// Operation byte outside {0, 1}
    #[error("Invalid operation value: {0}")]
    InvalidOperation(u8),

    /// Private key is zero or not below the curve order
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// The cached safeTxHash does not match the one recomputed from the fields
    #[error("Safe transaction hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch { expected: B256, computed: B256 },

    /// Signature recovery failed or `v` is not accepted
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Unparseable Safe contract version
    #[error("Invalid Safe version {input:?}: {reason}")]
    VersionParse { input: String, reason: String },

    /// A raw transaction payload lacks a required section
    #[error("Missing field in transaction payload: {0}")]
    MissingField(&'static str),

    /// ABI decoding error
    #[error("ABI error: {0}")]
    Abi(String),

    /// Signature generation failed
    #[error("Failed to sign: {0}")]
    Signing(String),
}

impl From<alloy::signers::Error> for Error {
    fn from(err: alloy::signers::Error) -> Self {
        Error::Signing(err.to_string())
    }
}

impl From<alloy::sol_types::Error> for Error {
    fn from(err: alloy::sol_types::Error) -> Self {
        Error::Abi(err.to_string())
    }
}
