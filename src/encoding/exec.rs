//! `execTransaction` calldata
//!
//! The Safe contract walks the packed signatures and requires the recovered
//! owners in strictly ascending order, so signatures are sorted by owner
//! before packing.

use alloy::primitives::{Address, Bytes};
use alloy::sol_types::SolCall;

use crate::contracts::ISafe;
use crate::transaction::SafeTransaction;
use crate::types::SafeSignature;

/// Packs `r || s || v` signatures, ordered by owner address
pub fn encode_signatures<I>(signatures: I) -> Bytes
where
    I: IntoIterator<Item = (Address, SafeSignature)>,
{
    let mut signatures: Vec<_> = signatures.into_iter().collect();
    signatures.sort_by_key(|(owner, _)| *owner);

    let mut packed = Vec::with_capacity(signatures.len() * SafeSignature::LEN);
    for (_, signature) in &signatures {
        packed.extend_from_slice(&signature.to_bytes());
    }
    Bytes::from(packed)
}

/// ABI-encodes the `execTransaction` call for `tx` with the given signatures
pub fn encode_exec_transaction<I>(tx: &SafeTransaction, signatures: I) -> Bytes
where
    I: IntoIterator<Item = (Address, SafeSignature)>,
{
    let params = tx.params();
    let call = ISafe::execTransactionCall {
        to: params.to,
        value: params.value,
        data: params.data.clone(),
        operation: params.operation.as_u8(),
        safeTxGas: params.safe_tx_gas,
        baseGas: params.base_gas,
        gasPrice: params.gas_price,
        gasToken: params.gas_token,
        refundReceiver: params.refund_receiver,
        signatures: encode_signatures(signatures),
    };
    Bytes::from(call.abi_encode())
}
