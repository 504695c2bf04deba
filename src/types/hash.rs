//! Length-checked construction of 32-byte hashes

use alloy::hex;
use alloy::primitives::B256;

use crate::error::{Error, Result};

/// Builds a hash from exactly 32 bytes.
pub fn hash_from_slice(bytes: &[u8]) -> Result<B256> {
    let raw: [u8; 32] = bytes
        .try_into()
        .map_err(|_| Error::WrongHashLength(bytes.len()))?;
    Ok(B256::from(raw))
}

/// Parses a `0x`-prefixed (or bare) hex hash.
pub fn parse_hash(input: &str) -> Result<B256> {
    let bytes = hex::decode(input.trim()).map_err(|e| Error::InvalidHex {
        what: "hash",
        reason: e.to_string(),
    })?;
    hash_from_slice(&bytes)
}
