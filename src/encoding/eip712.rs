//! EIP-712 hashing of Safe transactions
//!
//! safeTxHash = keccak256(0x19 || 0x01 || domainSeparator || structHash)

use alloy::primitives::{keccak256, Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::words::WordEncoder;
use crate::contracts::{DOMAIN_SEPARATOR_TYPEHASH, LEGACY_DOMAIN_SEPARATOR_TYPEHASH, SAFE_TX_TYPEHASH};
use crate::safe::Safe;
use crate::types::{Operation, SafeVersion};

/// EIP-191 version byte prefix for structured data
pub const EIP191_PREFIX: [u8; 2] = [0x19, 0x01];

/// Safe transaction parameters for hashing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeTxParams {
    /// Target address
    pub to: Address,
    /// Value to send
    pub value: U256,
    /// Calldata
    pub data: Bytes,
    /// Operation type
    pub operation: Operation,
    /// Gas limit for the Safe transaction
    pub safe_tx_gas: U256,
    /// Base gas (overhead); `dataGas` before v1.0.0
    pub base_gas: U256,
    /// Gas price for refund calculation
    pub gas_price: U256,
    /// Token used for gas refund (address(0) for the native coin)
    pub gas_token: Address,
    /// Address to receive gas refund (address(0) for tx.origin)
    pub refund_receiver: Address,
    /// Safe nonce
    pub nonce: U256,
}

impl SafeTxParams {
    /// Creates new SafeTxParams with minimal parameters
    pub fn new(to: Address, value: U256, data: impl Into<Bytes>, operation: Operation) -> Self {
        Self {
            to,
            value,
            data: data.into(),
            operation,
            safe_tx_gas: U256::ZERO,
            base_gas: U256::ZERO,
            gas_price: U256::ZERO,
            gas_token: Address::ZERO,
            refund_receiver: Address::ZERO,
            nonce: U256::ZERO,
        }
    }

    /// Sets the safe transaction gas
    pub fn with_safe_tx_gas(mut self, gas: U256) -> Self {
        self.safe_tx_gas = gas;
        self
    }

    /// Sets the base gas
    pub fn with_base_gas(mut self, gas: U256) -> Self {
        self.base_gas = gas;
        self
    }

    /// Sets the refund gas price
    pub fn with_gas_price(mut self, price: U256) -> Self {
        self.gas_price = price;
        self
    }

    /// Sets the refund token
    pub fn with_gas_token(mut self, token: Address) -> Self {
        self.gas_token = token;
        self
    }

    /// Sets the refund receiver
    pub fn with_refund_receiver(mut self, receiver: Address) -> Self {
        self.refund_receiver = receiver;
        self
    }

    /// Sets the nonce
    pub fn with_nonce(mut self, nonce: U256) -> Self {
        self.nonce = nonce;
        self
    }
}

/// Shape of the EIP712Domain struct for a given Safe version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainSchema {
    /// `EIP712Domain(address verifyingContract)`, Safe < 1.3.0
    VerifyingContract,
    /// `EIP712Domain(uint256 chainId,address verifyingContract)`, Safe >= 1.3.0
    ChainIdAndVerifyingContract,
}

impl DomainSchema {
    pub fn for_version(version: &SafeVersion) -> Self {
        if version.has_chain_id_domain() {
            DomainSchema::ChainIdAndVerifyingContract
        } else {
            DomainSchema::VerifyingContract
        }
    }

    pub fn type_hash(&self) -> B256 {
        match self {
            DomainSchema::VerifyingContract => LEGACY_DOMAIN_SEPARATOR_TYPEHASH,
            DomainSchema::ChainIdAndVerifyingContract => DOMAIN_SEPARATOR_TYPEHASH,
        }
    }
}

/// Computes the domain separator for a Safe
///
/// >= 1.3.0: keccak256(abi.encode(DOMAIN_SEPARATOR_TYPEHASH, chainId, safeAddress))
/// <  1.3.0: keccak256(abi.encode(LEGACY_DOMAIN_SEPARATOR_TYPEHASH, safeAddress))
pub fn compute_domain_separator(
    safe_address: Address,
    version: &SafeVersion,
    chain_id: U256,
) -> B256 {
    let schema = DomainSchema::for_version(version);
    trace!(%version, ?schema, "selected domain schema");

    let mut encoder = WordEncoder::with_words(3);
    encoder.push_word(&schema.type_hash());
    if schema == DomainSchema::ChainIdAndVerifyingContract {
        encoder.push_uint(chain_id);
    }
    encoder.push_address(safe_address);

    encoder.hash()
}

/// Computes the struct hash for SafeTx
///
/// keccak256(abi.encode(
///     SAFE_TX_TYPEHASH,
///     to, value, keccak256(data), operation,
///     safeTxGas, baseGas, gasPrice, gasToken, refundReceiver, nonce
/// ))
///
/// The type hash is the same for every Safe version: pre-1.0.0 contracts call
/// the sixth member `dataGas`, but the slot layout never changed.
pub fn compute_struct_hash(params: &SafeTxParams) -> B256 {
    let mut encoder = WordEncoder::with_words(11);
    encoder
        .push_word(&SAFE_TX_TYPEHASH)
        .push_address(params.to)
        .push_uint(params.value)
        .push_bytes_hash(&params.data)
        .push_operation(params.operation)
        .push_uint(params.safe_tx_gas)
        .push_uint(params.base_gas)
        .push_uint(params.gas_price)
        .push_address(params.gas_token)
        .push_address(params.refund_receiver)
        .push_uint(params.nonce);

    encoder.hash()
}

/// Computes the final EIP-712 hash to sign
///
/// hash = keccak256("\x19\x01" || domainSeparator || structHash)
pub fn compute_transaction_hash(domain_separator: B256, struct_hash: B256) -> B256 {
    let mut encoded = Vec::with_capacity(66);

    encoded.extend_from_slice(&EIP191_PREFIX);
    encoded.extend_from_slice(domain_separator.as_slice());
    encoded.extend_from_slice(struct_hash.as_slice());

    keccak256(&encoded)
}

/// Computes the complete safeTxHash for signing
pub fn compute_safe_tx_hash(safe: &Safe, params: &SafeTxParams) -> B256 {
    let domain_separator = compute_domain_separator(safe.address, &safe.version, safe.chain_id);
    let struct_hash = compute_struct_hash(params);
    let hash = compute_transaction_hash(domain_separator, struct_hash);

    debug!(
        safe = %safe.address,
        nonce = %params.nonce,
        safe_tx_hash = %hash,
        "computed safe transaction hash"
    );

    hash
}
