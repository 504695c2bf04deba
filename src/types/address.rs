//! Address parsing and EIP-55 checksum rendering
//!
//! Parsing is case-insensitive unless the strict form is requested, in which
//! case the input must be exactly the EIP-55 mixed-case encoding.

use alloy::hex;
use alloy::primitives::{Address, B256, U256};

use crate::error::{Error, Result};

/// Parses a `0x`-prefixed (or bare) 40 character hex address, ignoring case.
pub fn parse_address(input: &str) -> Result<Address> {
    let digits = strip_hex_prefix(input.trim());
    if digits.len() != 40 {
        return Err(malformed(input, "expected 40 hex characters"));
    }

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(digits, &mut bytes)
        .map_err(|_| malformed(input, "invalid hex character"))?;

    Ok(Address::from(bytes))
}

/// Parses an address and requires the EIP-55 checksum to match exactly.
pub fn parse_checksummed_address(input: &str) -> Result<Address> {
    let address = parse_address(input)?;
    let expected = checksummed(&address);

    if strip_hex_prefix(input.trim()) != &expected[2..] {
        return Err(malformed(input, "checksum mismatch"));
    }

    Ok(address)
}

/// Builds an address from exactly 20 raw bytes.
pub fn address_from_slice(bytes: &[u8]) -> Result<Address> {
    let raw: [u8; 20] = bytes.try_into().map_err(|_| Error::MalformedAddress {
        input: hex::encode_prefixed(bytes),
        reason: "expected 20 bytes",
    })?;
    Ok(Address::from(raw))
}

/// Takes the low 20 bytes of the big-endian word form of `value`.
pub fn address_from_u256(value: U256) -> Address {
    Address::from_word(B256::from(value.to_be_bytes::<32>()))
}

/// EIP-55 mixed-case text form, `0x` prefixed.
pub fn checksummed(address: &Address) -> String {
    address.to_checksum(None)
}

fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

fn malformed(input: &str, reason: &'static str) -> Error {
    Error::MalformedAddress {
        input: input.to_string(),
        reason,
    }
}
