//! Safe transactions with an always-current safeTxHash
//!
//! The hash is computed on construction and recomputed by the only two
//! mutators, [`SafeTransaction::set_nonce`] and [`SafeTransaction::set_safe_tx_gas`].
//! It is never settable from outside.

mod sources;

use alloy::primitives::{B256, U256};
use serde::Serialize;
use tracing::{debug, warn};

pub use sources::{
    AddressInfo, DetailedExecutionInfo, MultisigExecutionInfo, TransactionDetails, TxData,
    WcSendTransactionRequest,
};

use crate::encoding::{compute_safe_tx_hash, compute_struct_hash, SafeTxParams};
use crate::error::{Error, Result};
use crate::safe::Safe;

/// A Safe transaction bound to its Safe, with the cached EIP-712 hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeTransaction {
    safe: Safe,
    #[serde(flatten)]
    params: SafeTxParams,
    safe_tx_hash: B256,
}

impl SafeTransaction {
    /// Creates a transaction from an explicit field list
    pub fn new(safe: Safe, params: SafeTxParams) -> Self {
        let safe_tx_hash = compute_safe_tx_hash(&safe, &params);
        Self {
            safe,
            params,
            safe_tx_hash,
        }
    }

    pub fn safe(&self) -> &Safe {
        &self.safe
    }

    pub fn params(&self) -> &SafeTxParams {
        &self.params
    }

    /// The cached safeTxHash
    pub fn safe_tx_hash(&self) -> B256 {
        self.safe_tx_hash
    }

    /// The EIP-712 struct hash of the transaction fields alone
    pub fn struct_hash(&self) -> B256 {
        compute_struct_hash(&self.params)
    }

    pub fn domain_separator(&self) -> B256 {
        self.safe.domain_separator()
    }

    /// Replaces the nonce and refreshes the hash
    pub fn set_nonce(&mut self, nonce: U256) {
        self.params.nonce = nonce;
        self.refresh_hash();
    }

    /// Replaces safeTxGas and refreshes the hash
    pub fn set_safe_tx_gas(&mut self, safe_tx_gas: U256) {
        self.params.safe_tx_gas = safe_tx_gas;
        self.refresh_hash();
    }

    /// Checks the cached hash against a fresh computation over the fields.
    pub fn verify_hash(&self) -> Result<()> {
        self.verify_expected_hash(self.safe_tx_hash)
    }

    /// Checks that `expected` (e.g. a hash reported by a transaction service or
    /// shown to a user) is the hash of these fields.
    pub fn verify_expected_hash(&self, expected: B256) -> Result<()> {
        let computed = compute_safe_tx_hash(&self.safe, &self.params);
        if computed != expected {
            warn!(%expected, %computed, "safe transaction hash mismatch");
            return Err(Error::HashMismatch { expected, computed });
        }
        Ok(())
    }

    pub fn into_parts(self) -> (Safe, SafeTxParams) {
        (self.safe, self.params)
    }

    fn refresh_hash(&mut self) {
        self.safe_tx_hash = compute_safe_tx_hash(&self.safe, &self.params);
        debug!(safe_tx_hash = %self.safe_tx_hash, "refreshed safe transaction hash");
    }

    /// Builds a value whose cached hash is whatever the caller says.
    #[cfg(test)]
    pub(crate) fn with_cached_hash(safe: Safe, params: SafeTxParams, safe_tx_hash: B256) -> Self {
        Self {
            safe,
            params,
            safe_tx_hash,
        }
    }
}
