//! Owner signatures in the 65-byte `r || s || v` layout the Safe contract reads

use std::fmt;
use std::str::FromStr;

use alloy::hex;
use alloy::primitives::{Address, Signature, B256, U256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// How the Safe contract interprets a signature, keyed on `v`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureKind {
    /// `v = 0`: EIP-1271 contract signature
    Contract,
    /// `v = 1`: owner approved the hash on chain, `r` holds the owner
    ApprovedHash,
    /// `v ∈ {27, 28}`: ECDSA over the safeTxHash itself
    Ecdsa,
    /// `v ∈ {31, 32}`: ECDSA over the EIP-191 personal-message hash
    EthSign,
}

/// A 65-byte owner signature: 32-byte `r`, 32-byte `s`, 1-byte `v`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SafeSignature {
    r: B256,
    s: B256,
    v: u8,
}

impl SafeSignature {
    /// Encoded length in bytes
    pub const LEN: usize = 65;

    /// Creates a signature from its parts
    pub fn new(r: B256, s: B256, v: u8) -> Self {
        Self { r, s, v }
    }

    /// Parses exactly 65 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::LEN {
            return Err(Error::WrongSignatureLength(bytes.len()));
        }
        Ok(Self {
            r: B256::from_slice(&bytes[..32]),
            s: B256::from_slice(&bytes[32..64]),
            v: bytes[64],
        })
    }

    /// Converts an ECDSA signature, adding `v_offset` (27 or 31) to the recovery id.
    pub(crate) fn from_ecdsa(signature: &Signature, v_offset: u8) -> Self {
        Self {
            r: B256::from(signature.r().to_be_bytes::<32>()),
            s: B256::from(signature.s().to_be_bytes::<32>()),
            v: v_offset + u8::from(signature.v()),
        }
    }

    /// Pre-validated signature for an owner that approved the hash on chain.
    pub fn approved_hash(owner: Address) -> Self {
        Self {
            r: owner.into_word(),
            s: B256::ZERO,
            v: 1,
        }
    }

    pub fn r(&self) -> B256 {
        self.r
    }

    pub fn s(&self) -> B256 {
        self.s
    }

    pub fn v(&self) -> u8 {
        self.v
    }

    /// Classifies the signature by its `v` byte
    pub fn kind(&self) -> Result<SignatureKind> {
        match self.v {
            0 => Ok(SignatureKind::Contract),
            1 => Ok(SignatureKind::ApprovedHash),
            27 | 28 => Ok(SignatureKind::Ecdsa),
            31 | 32 => Ok(SignatureKind::EthSign),
            v => Err(Error::InvalidSignature(format!("unsupported v value {v}"))),
        }
    }

    /// The `r || s || v` byte layout
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(self.r.as_slice());
        out[32..64].copy_from_slice(self.s.as_slice());
        out[64] = self.v;
        out
    }

    /// Converts back into a recoverable ECDSA signature. `v_offset` is the
    /// value the recovery id was shifted by; any other `v` is rejected.
    pub(crate) fn to_ecdsa(&self, v_offset: u8) -> Result<Signature> {
        let parity = match self.v.checked_sub(v_offset) {
            Some(0) => false,
            Some(1) => true,
            _ => {
                return Err(Error::InvalidSignature(format!(
                    "v must be {} or {}, got {}",
                    v_offset,
                    v_offset + 1,
                    self.v
                )))
            }
        };
        Ok(Signature::new(
            U256::from_be_bytes(self.r.0),
            U256::from_be_bytes(self.s.0),
            parity,
        ))
    }
}

impl fmt::Display for SafeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_prefixed(self.to_bytes()))
    }
}

impl FromStr for SafeSignature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim()).map_err(|e| Error::InvalidHex {
            what: "signature",
            reason: e.to_string(),
        })?;
        Self::from_slice(&bytes)
    }
}

impl Serialize for SafeSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SafeSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
