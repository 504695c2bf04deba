//! Building transactions from service payloads, WalletConnect and calldata

use alloy::primitives::{b256, hex, Address, U256};
use safe_tx::transaction::{TransactionDetails, WcSendTransactionRequest};
use safe_tx::{encode_exec_transaction, Error, Operation, SafeTransaction};
use serde_json::json;

use crate::common::{full_params, safe, TO};

const FULL_HASH: &str = "0x60d0040a7e1dcbdbfade0b0f06b5f5243d32c25b388772dad6d282495857ed96";

fn details(safe_tx_hash: &str) -> TransactionDetails {
    serde_json::from_value(json!({
        "safeAddress": "0xABcdEFABcdEFabcdEfAbCdefabcdeFABcDEFabCD",
        "txId": "multisig_0xABcdEFABcdEFabcdEfAbCdefabcdeFABcDEFabCD_0x60d0",
        "txStatus": "AWAITING_CONFIRMATIONS",
        "txData": {
            "hexData": "0xa9059cbb",
            "to": { "value": "0x1111111111111111111111111111111111111111", "name": null },
            "value": "1000000000000000000",
            "operation": 1
        },
        "detailedExecutionInfo": {
            "type": "MULTISIG",
            "submittedAt": 1700000000000u64,
            "nonce": 42,
            "safeTxGas": "50000",
            "baseGas": "21000",
            "gasPrice": "1000000000",
            "gasToken": "0x2222222222222222222222222222222222222222",
            "refundReceiver": { "value": "0x3333333333333333333333333333333333333333" },
            "safeTxHash": safe_tx_hash,
            "confirmationsRequired": 2,
            "confirmations": []
        }
    }))
    .unwrap()
}

#[test]
fn test_transaction_details() {
    let tx = SafeTransaction::from_transaction_details(safe("1.4.1", 100), &details(FULL_HASH))
        .unwrap();

    assert_eq!(tx.params(), &full_params());
    assert_eq!(tx.safe_tx_hash().to_string(), FULL_HASH);
}

#[test]
fn test_transaction_details_hash_mismatch() {
    let wrong = "0x0000000000000000000000000000000000000000000000000000000000000001";
    let err = SafeTransaction::from_transaction_details(safe("1.4.1", 100), &details(wrong))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::HashMismatch { expected, computed }
            if expected == b256!("0x0000000000000000000000000000000000000000000000000000000000000001")
                && computed.to_string() == FULL_HASH
    ));
}

#[test]
fn test_transaction_details_on_wrong_chain() {
    // Same payload, but the Safe is described on another chain
    let err = SafeTransaction::from_transaction_details(safe("1.4.1", 1), &details(FULL_HASH))
        .unwrap_err();
    assert!(matches!(err, Error::HashMismatch { .. }));
}

#[test]
fn test_transaction_details_missing_tx_data() {
    let details: TransactionDetails = serde_json::from_value(json!({})).unwrap();
    assert!(matches!(
        SafeTransaction::from_transaction_details(safe("1.3.0", 1), &details),
        Err(Error::MissingField("txData"))
    ));
}

#[test]
fn test_wallet_connect_request() {
    let request: WcSendTransactionRequest = serde_json::from_value(json!({
        "from": "0xABcdEFABcdEFabcdEfAbCdefabcdeFABcDEFabCD",
        "to": "0x1111111111111111111111111111111111111111",
        "value": "0xde0b6b3a7640000",
        "data": "0xa9059cbb",
        "gas": "0x5208",
        "gasPrice": "0x3b9aca00",
        "nonce": "0x1"
    }))
    .unwrap();

    let mut tx =
        SafeTransaction::from_wallet_connect(safe("1.3.0", 1), &request, U256::from(5)).unwrap();

    let params = tx.params();
    assert_eq!(params.to, TO);
    assert_eq!(params.value, U256::from(1_000_000_000_000_000_000u64));
    assert_eq!(params.data.as_ref(), hex!("a9059cbb"));
    assert_eq!(params.operation, Operation::Call);
    assert_eq!(params.nonce, U256::from(5));
    assert_eq!(params.safe_tx_gas, U256::ZERO);
    assert_eq!(params.base_gas, U256::ZERO);
    assert_eq!(params.gas_price, U256::ZERO);

    let before = tx.safe_tx_hash();
    tx.set_safe_tx_gas(U256::from(60_000));
    assert_ne!(tx.safe_tx_hash(), before);
    assert!(tx.verify_hash().is_ok());
}

#[test]
fn test_wallet_connect_defaults() {
    let request = WcSendTransactionRequest::default();
    let tx = SafeTransaction::from_wallet_connect(safe("1.3.0", 1), &request, U256::ZERO).unwrap();

    assert_eq!(tx.params().to, Address::ZERO);
    assert_eq!(tx.params().value, U256::ZERO);
    assert!(tx.params().data.is_empty());
}

#[test]
fn test_exec_transaction_calldata() {
    let original = SafeTransaction::new(safe("1.4.1", 100), full_params());
    let calldata = encode_exec_transaction(&original, std::iter::empty());

    let (tx, signatures) =
        SafeTransaction::from_exec_transaction(safe("1.4.1", 100), &calldata, U256::from(42))
            .unwrap();
    assert_eq!(tx.safe_tx_hash().to_string(), FULL_HASH);
    assert!(signatures.is_empty());

    assert!(matches!(
        SafeTransaction::from_exec_transaction(safe("1.4.1", 100), &calldata[..40], U256::ZERO),
        Err(Error::Abi(_))
    ));
}
