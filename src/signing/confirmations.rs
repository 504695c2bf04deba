//! Owner confirmations collected for one safeTxHash

use std::collections::BTreeMap;

use alloy::primitives::{Address, Bytes, B256};
use tracing::{debug, warn};

use super::ecdsa::{recover_address, recover_eth_sign_address};
use crate::encoding::encode_signatures;
use crate::error::{Error, Result};
use crate::types::{SafeSignature, SignatureKind};

/// Signatures keyed by owner, kept in the ascending order the Safe
/// contract checks them in. A second signature from the same owner
/// replaces the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmations {
    safe_tx_hash: B256,
    signatures: BTreeMap<Address, SafeSignature>,
}

impl Confirmations {
    pub fn new(safe_tx_hash: B256) -> Self {
        Self {
            safe_tx_hash,
            signatures: BTreeMap::new(),
        }
    }

    pub fn safe_tx_hash(&self) -> B256 {
        self.safe_tx_hash
    }

    /// Adds an ECDSA or `eth_sign` signature, returning the recovered owner.
    ///
    /// Contract and approved-hash signatures carry no recoverable key; use
    /// [`Confirmations::add_approved_hash`] for the latter.
    pub fn add(&mut self, signature: SafeSignature) -> Result<Address> {
        let owner = match signature.kind()? {
            SignatureKind::Ecdsa => recover_address(self.safe_tx_hash, &signature)?,
            SignatureKind::EthSign => recover_eth_sign_address(self.safe_tx_hash, &signature)?,
            kind => {
                warn!(?kind, "signature has no recoverable owner");
                return Err(Error::InvalidSignature(format!(
                    "cannot recover an owner from a {kind:?} signature"
                )));
            }
        };
        self.insert(owner, signature);
        Ok(owner)
    }

    /// Records that `owner` approved the hash on chain
    pub fn add_approved_hash(&mut self, owner: Address) {
        self.insert(owner, SafeSignature::approved_hash(owner));
    }

    pub fn get(&self, owner: &Address) -> Option<&SafeSignature> {
        self.signatures.get(owner)
    }

    /// Owners in ascending order
    pub fn owners(&self) -> impl Iterator<Item = &Address> {
        self.signatures.keys()
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn meets_threshold(&self, threshold: usize) -> bool {
        threshold > 0 && self.signatures.len() >= threshold
    }

    /// The packed `signatures` argument of `execTransaction`
    pub fn encode(&self) -> Bytes {
        encode_signatures(self.signatures.iter().map(|(owner, sig)| (*owner, *sig)))
    }

    fn insert(&mut self, owner: Address, signature: SafeSignature) {
        if self.signatures.insert(owner, signature).is_some() {
            debug!(%owner, "replaced existing confirmation");
        }
    }
}
