//! Typed-data export as an external signer sees it

use alloy::primitives::keccak256;
use safe_tx::contracts::{LEGACY_SAFE_TX_TYPEHASH, SAFE_TX_TYPEHASH};
use safe_tx::{typed_data_json, SafeTransaction};
use serde_json::Value;

use crate::common::{full_params, safe};

fn export(version: &str, chain_id: u64) -> Value {
    let tx = SafeTransaction::new(safe(version, chain_id), full_params());
    serde_json::from_str(&typed_data_json(&tx)).unwrap()
}

fn encode_type(json: &Value) -> String {
    let members: Vec<String> = json["types"]["SafeTx"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| format!("{} {}", f["type"].as_str().unwrap(), f["name"].as_str().unwrap()))
        .collect();
    format!("SafeTx({})", members.join(","))
}

#[test]
fn test_signer_type_hash_per_version() {
    assert_eq!(keccak256(encode_type(&export("0.1.0", 1))), LEGACY_SAFE_TX_TYPEHASH);
    assert_eq!(keccak256(encode_type(&export("1.0.0", 1))), SAFE_TX_TYPEHASH);
    assert_eq!(keccak256(encode_type(&export("1.4.1", 1))), SAFE_TX_TYPEHASH);
}

#[test]
fn test_full_message() {
    let json = export("1.4.1", 100);

    assert_eq!(json["primaryType"], "SafeTx");
    assert_eq!(json["domain"]["chainId"], 100);
    assert_eq!(
        json["domain"]["verifyingContract"],
        "0xABcdEFABcdEFabcdEfAbCdefabcdeFABcDEFabCD"
    );

    let message = &json["message"];
    assert_eq!(message["value"], "1000000000000000000");
    assert_eq!(message["data"], "0xa9059cbb");
    assert_eq!(message["operation"], 1);
    assert_eq!(message["safeTxGas"], "50000");
    assert_eq!(message["baseGas"], "21000");
    assert_eq!(message["gasPrice"], "1000000000");
    assert_eq!(message["gasToken"], "0x2222222222222222222222222222222222222222");
    assert_eq!(message["refundReceiver"], "0x3333333333333333333333333333333333333333");
    assert_eq!(message["nonce"], "42");
}

#[test]
fn test_legacy_message() {
    let json = export("0.1.0", 100);

    assert_eq!(json["message"]["dataGas"], "21000");
    assert!(json["message"].get("baseGas").is_none());
    assert!(json["domain"].get("chainId").is_none());
    assert_eq!(json["types"]["EIP712Domain"].as_array().unwrap().len(), 1);
}
