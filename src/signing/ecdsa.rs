//! ECDSA signing and recovery for Safe transactions
//!
//! Signatures are deterministic (RFC 6979) over the 32-byte hash with no
//! further prefixing. The Safe contract reads `v` as the recovery id plus 27;
//! `eth_sign` signatures are made over the EIP-191 message hash of the
//! safeTxHash and carry `v + 4` so the contract knows to re-apply the prefix.

use alloy::primitives::{eip191_hash_message, Address, B256};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::SignerSync;
use tracing::debug;

use crate::error::{Error, Result};
use crate::transaction::SafeTransaction;
use crate::types::SafeSignature;

/// `v` offset for signatures over the safeTxHash
pub const ECDSA_V_OFFSET: u8 = 27;

/// `v` offset for `eth_sign` signatures
pub const ETH_SIGN_V_OFFSET: u8 = 31;

/// Signs a hash with any synchronous alloy signer
pub fn sign_hash<S: SignerSync>(signer: &S, hash: B256) -> Result<SafeSignature> {
    let signature = signer.sign_hash_sync(&hash)?;
    Ok(SafeSignature::from_ecdsa(&signature, ECDSA_V_OFFSET))
}

/// Signs a hash with a raw secp256k1 private key
pub fn sign_hash_with_key(hash: B256, private_key: &B256) -> Result<SafeSignature> {
    let signer = signer_from_key(private_key)?;
    sign_hash(&signer, hash)
}

/// Signs the transaction's safeTxHash.
///
/// The cached hash is checked against the fields first; a stale hash is
/// never signed.
pub fn sign_transaction(tx: &SafeTransaction, private_key: &B256) -> Result<SafeSignature> {
    tx.verify_hash()?;

    let signer = signer_from_key(private_key)?;
    let signature = sign_hash(&signer, tx.safe_tx_hash())?;
    debug!(
        owner = %signer.address(),
        safe_tx_hash = %tx.safe_tx_hash(),
        "signed safe transaction"
    );
    Ok(signature)
}

/// Signs the EIP-191 personal-message hash of `hash` (`eth_sign` flavour)
pub fn eth_sign_hash<S: SignerSync>(signer: &S, hash: B256) -> Result<SafeSignature> {
    let signature = signer.sign_hash_sync(&eip191_hash_message(hash))?;
    Ok(SafeSignature::from_ecdsa(&signature, ETH_SIGN_V_OFFSET))
}

/// Recovers the signer of a hash. Only `v` of 27 or 28 is accepted.
pub fn recover_address(hash: B256, signature: &SafeSignature) -> Result<Address> {
    recover(hash, signature, ECDSA_V_OFFSET)
}

/// Recovers the signer of an `eth_sign` signature over `hash`.
/// Only `v` of 31 or 32 is accepted.
pub fn recover_eth_sign_address(hash: B256, signature: &SafeSignature) -> Result<Address> {
    recover(eip191_hash_message(hash), signature, ETH_SIGN_V_OFFSET)
}

/// The address controlled by a private key
pub fn address_of_key(private_key: &B256) -> Result<Address> {
    Ok(signer_from_key(private_key)?.address())
}

fn signer_from_key(private_key: &B256) -> Result<PrivateKeySigner> {
    PrivateKeySigner::from_bytes(private_key).map_err(|_| Error::InvalidPrivateKey)
}

fn recover(prehash: B256, signature: &SafeSignature, v_offset: u8) -> Result<Address> {
    let ecdsa = signature.to_ecdsa(v_offset)?;
    let address = ecdsa
        .recover_address_from_prehash(&prehash)
        .map_err(|e| Error::InvalidSignature(e.to_string()))?;
    debug!(%address, "recovered signer");
    Ok(address)
}
