//! The hand-rolled encoder against alloy's own EIP-712 implementation

use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::sol;
use alloy::sol_types::{eip712_domain, SolStruct};
use proptest::prelude::*;
use safe_tx::{Operation, SafeTxParams};

use crate::common::{full_params, safe, zero_params, SAFE};

sol! {
    struct SafeTx {
        address to;
        uint256 value;
        bytes data;
        uint8 operation;
        uint256 safeTxGas;
        uint256 baseGas;
        uint256 gasPrice;
        address gasToken;
        address refundReceiver;
        uint256 nonce;
    }
}

fn to_sol(params: &SafeTxParams) -> SafeTx {
    SafeTx {
        to: params.to,
        value: params.value,
        data: params.data.clone(),
        operation: params.operation.as_u8(),
        safeTxGas: params.safe_tx_gas,
        baseGas: params.base_gas,
        gasPrice: params.gas_price,
        gasToken: params.gas_token,
        refundReceiver: params.refund_receiver,
        nonce: params.nonce,
    }
}

#[test]
fn test_struct_hash_matches_alloy() {
    for params in [zero_params(), full_params()] {
        let tx = safe("1.3.0", 1).transaction(params.clone());
        assert_eq!(tx.struct_hash(), to_sol(&params).eip712_hash_struct());
    }
}

#[test]
fn test_chain_id_domain_matches_alloy() {
    let domain = eip712_domain! {
        chain_id: 100,
        verifying_contract: SAFE,
    };
    let tx = safe("1.4.1", 100).transaction(full_params());

    assert_eq!(tx.domain_separator(), domain.hash_struct());
    assert_eq!(tx.safe_tx_hash(), to_sol(&full_params()).eip712_signing_hash(&domain));
}

#[test]
fn test_legacy_domain_matches_alloy() {
    let domain = eip712_domain! {
        verifying_contract: SAFE,
    };
    let tx = safe("1.2.0", 1).transaction(full_params());

    assert_eq!(tx.domain_separator(), domain.hash_struct());
    assert_eq!(tx.safe_tx_hash(), to_sol(&full_params()).eip712_signing_hash(&domain));
}

fn arb_params() -> impl Strategy<Value = SafeTxParams> {
    (
        any::<[u8; 20]>(),
        any::<[u64; 4]>(),
        proptest::collection::vec(any::<u8>(), 0..200),
        any::<bool>(),
        any::<u64>(),
        any::<u64>(),
        any::<u64>(),
        any::<[u8; 20]>(),
        any::<[u8; 20]>(),
        any::<u64>(),
    )
        .prop_map(|(to, value, data, delegate, safe_tx_gas, base_gas, gas_price, token, refund, nonce)| {
            let operation = if delegate { Operation::DelegateCall } else { Operation::Call };
            SafeTxParams::new(Address::from(to), U256::from_limbs(value), Bytes::from(data), operation)
                .with_safe_tx_gas(U256::from(safe_tx_gas))
                .with_base_gas(U256::from(base_gas))
                .with_gas_price(U256::from(gas_price))
                .with_gas_token(Address::from(token))
                .with_refund_receiver(Address::from(refund))
                .with_nonce(U256::from(nonce))
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_safe_tx_hash_matches_alloy(params in arb_params(), chain_id in 1u64..1_000_000) {
        let domain = eip712_domain! {
            chain_id: chain_id,
            verifying_contract: SAFE,
        };
        let tx = safe("1.3.0", chain_id).transaction(params.clone());
        prop_assert_eq!(tx.safe_tx_hash(), to_sol(&params).eip712_signing_hash(&domain));
        prop_assert_ne!(tx.safe_tx_hash(), B256::ZERO);
    }
}
