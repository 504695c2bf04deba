//! Safe account metadata needed to hash its transactions

use alloy::primitives::ruint::UintTryFrom;
use alloy::primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::chain;
use crate::encoding::{compute_domain_separator, SafeTxParams};
use crate::error::{Error, Result};
use crate::transaction::SafeTransaction;
use crate::types::{parse_address, SafeVersion};

/// A Safe account as seen by the hashing core: where it lives, which
/// singleton version it runs, and on which chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Safe {
    /// The Safe proxy address (EIP-712 `verifyingContract`)
    pub address: Address,
    /// Singleton contract version
    pub version: SafeVersion,
    /// Chain ID
    pub chain_id: U256,
}

impl Safe {
    /// Creates a new Safe description. `chain_id` is any integer type
    /// `U256::from` accepts.
    pub fn new<T>(address: Address, version: SafeVersion, chain_id: T) -> Self
    where
        U256: UintTryFrom<T>,
    {
        Self {
            address,
            version,
            chain_id: U256::from(chain_id),
        }
    }

    /// Parses the textual forms handed over by an API or a user.
    ///
    /// `chain_id` is a decimal (or `0x` hex) integer string.
    pub fn parse(address: &str, version: &str, chain_id: &str) -> Result<Self> {
        Ok(Self {
            address: parse_address(address)?,
            version: version.parse()?,
            chain_id: parse_uint("chainId", chain_id)?,
        })
    }

    /// Shorthand for a Safe on Ethereum mainnet
    pub fn mainnet(address: Address, version: SafeVersion) -> Self {
        Self::new(address, version, chain::chain_ids::MAINNET)
    }

    /// The EIP-712 domain separator of this Safe
    pub fn domain_separator(&self) -> B256 {
        compute_domain_separator(self.address, &self.version, self.chain_id)
    }

    /// Builds a transaction for this Safe, computing its safeTxHash
    pub fn transaction(&self, params: SafeTxParams) -> SafeTransaction {
        SafeTransaction::new(self.clone(), params)
    }
}

/// Parses an integer-as-string field: decimal, or hex with a `0x` prefix.
pub fn parse_uint(field: &'static str, input: &str) -> Result<U256> {
    let trimmed = input.trim();
    let (digits, radix) = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };

    let parsed = if digits.is_empty() {
        None
    } else {
        U256::from_str_radix(digits, radix).ok()
    };

    parsed.ok_or_else(|| Error::InvalidNumber {
        field,
        input: input.to_string(),
    })
}
