//! Hashes checked against independently computed values

use alloy::primitives::{address, b256, keccak256, Address, Bytes, B256, U256};
use proptest::prelude::*;
use safe_tx::contracts::{DOMAIN_SEPARATOR_TYPEHASH, SAFE_TX_TYPEHASH};
use safe_tx::{
    compute_struct_hash, compute_transaction_hash, Operation, SafeTransaction, SafeTxParams,
};

use crate::common::{full_params, safe, zero_params, zero_transaction, SAFE};

#[test]
fn test_keccak_of_empty_input() {
    assert_eq!(
        keccak256(b""),
        b256!("0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
    );
}

#[test]
fn test_zero_transaction_v1_3_0() {
    let tx = zero_transaction("1.3.0", 1);

    assert_eq!(
        tx.struct_hash(),
        b256!("0x352963d197e18b77ef6b7bbb3b6d30760ece9467eefd2a7943da631e00bfcdc3")
    );
    assert_eq!(
        tx.domain_separator(),
        b256!("0xd88b6f029cc910a3f891fabc64e380094e5f39c9ba10c8ca9fed033aeab7e232")
    );
    assert_eq!(
        tx.safe_tx_hash(),
        b256!("0x364ba72d53ffabcb0ef6277e45da300724d1e5266cdd6b8e019e40e666d087df")
    );
}

#[test]
fn test_zero_transaction_legacy_domain() {
    let tx = zero_transaction("1.1.1", 1);

    assert_eq!(
        tx.domain_separator(),
        b256!("0xa4d80d75d526bf9108b70fb9c1c2b644ad20aff1fdcad15da8940ec123b822f5")
    );
    assert_eq!(
        tx.safe_tx_hash(),
        b256!("0x46fd1a8378b6a48057253a4bb0f08d5c5e003aeb12296c1fb53b6a60601c95e9")
    );
}

#[test]
fn test_legacy_hash_ignores_chain() {
    assert_eq!(
        zero_transaction("1.2.0", 1).safe_tx_hash(),
        zero_transaction("1.2.0", 137).safe_tx_hash()
    );
    assert_ne!(
        zero_transaction("1.3.0", 1).safe_tx_hash(),
        zero_transaction("1.3.0", 137).safe_tx_hash()
    );
}

#[test]
fn test_pre_base_gas_versions_share_the_binary_hash() {
    // dataGas and baseGas occupy the same slot and share one type hash
    assert_eq!(
        zero_transaction("0.1.0", 1).safe_tx_hash(),
        zero_transaction("1.1.1", 1).safe_tx_hash()
    );
}

#[test]
fn test_full_transaction_on_gnosis_chain() {
    let tx = SafeTransaction::new(safe("1.4.1", 100), full_params());

    assert_eq!(
        tx.struct_hash(),
        b256!("0x82a0b2f4f33cf0e0655ed8ece52ef560cf50c72c174aa6701e8cf56fdecff551")
    );
    assert_eq!(
        tx.safe_tx_hash(),
        b256!("0x60d0040a7e1dcbdbfade0b0f06b5f5243d32c25b388772dad6d282495857ed96")
    );
}

#[test]
fn test_hash_assembly_by_hand() {
    let mut domain_input = Vec::new();
    domain_input.extend_from_slice(DOMAIN_SEPARATOR_TYPEHASH.as_slice());
    domain_input.extend_from_slice(&U256::from(1).to_be_bytes::<32>());
    domain_input.extend_from_slice(SAFE.into_word().as_slice());
    let domain = keccak256(&domain_input);

    let mut struct_input = SAFE_TX_TYPEHASH.to_vec();
    struct_input.extend_from_slice(crate::common::TO.into_word().as_slice());
    struct_input.extend_from_slice(&[0u8; 32]);
    struct_input.extend_from_slice(keccak256(b"").as_slice());
    struct_input.extend_from_slice(&[0u8; 32 * 7]);
    let struct_hash = keccak256(&struct_input);

    assert_eq!(compute_struct_hash(&zero_params()), struct_hash);
    assert_eq!(
        compute_transaction_hash(domain, struct_hash),
        zero_transaction("1.3.0", 1).safe_tx_hash()
    );
}

#[test]
fn test_every_field_changes_the_hash() {
    let base = zero_params();
    let other = address!("0x4444444444444444444444444444444444444444");

    let edits: [(&str, fn(&mut SafeTxParams, Address)); 10] = [
        ("to", |p, a| p.to = a),
        ("value", |p, _| p.value = U256::from(1)),
        ("data", |p, _| p.data = Bytes::from_static(&[0x00])),
        ("operation", |p, _| p.operation = Operation::DelegateCall),
        ("safeTxGas", |p, _| p.safe_tx_gas = U256::from(1)),
        ("baseGas", |p, _| p.base_gas = U256::from(1)),
        ("gasPrice", |p, _| p.gas_price = U256::from(1)),
        ("gasToken", |p, a| p.gas_token = a),
        ("refundReceiver", |p, a| p.refund_receiver = a),
        ("nonce", |p, _| p.nonce = U256::from(1)),
    ];

    for version in ["1.1.1", "1.3.0"] {
        let original = safe(version, 1).transaction(base.clone());
        for (field, edit) in &edits {
            let mut params = base.clone();
            edit(&mut params, other);
            let changed = safe(version, 1).transaction(params);

            assert_ne!(changed.struct_hash(), original.struct_hash(), "{field} on {version}");
            assert_ne!(changed.safe_tx_hash(), original.safe_tx_hash(), "{field} on {version}");
        }
    }
}

#[test]
fn test_version_strings_normalize() {
    let plain = zero_transaction("1.3.0", 1).safe_tx_hash();
    assert_eq!(zero_transaction("v1.3.0", 1).safe_tx_hash(), plain);
    assert_eq!(zero_transaction("1.3.0+L2", 1).safe_tx_hash(), plain);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_nonce_changes_hash(a in any::<u64>(), b in any::<u64>()) {
        prop_assume!(a != b);
        let safe = safe("1.3.0", 1);
        let first = safe.transaction(zero_params().with_nonce(U256::from(a)));
        let second = safe.transaction(zero_params().with_nonce(U256::from(b)));
        prop_assert_ne!(first.safe_tx_hash(), second.safe_tx_hash());
    }

    #[test]
    fn prop_set_nonce_matches_fresh_construction(nonce in any::<u64>(), gas in any::<u64>()) {
        let mut tx = zero_transaction("1.4.1", 10);
        tx.set_nonce(U256::from(nonce));
        tx.set_safe_tx_gas(U256::from(gas));

        let fresh = safe("1.4.1", 10).transaction(
            zero_params()
                .with_nonce(U256::from(nonce))
                .with_safe_tx_gas(U256::from(gas)),
        );
        prop_assert_eq!(tx.safe_tx_hash(), fresh.safe_tx_hash());
        prop_assert_ne!(tx.safe_tx_hash(), B256::ZERO);
    }
}
