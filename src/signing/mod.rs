//! Signature generation and recovery for Safe transactions

mod confirmations;
mod ecdsa;

pub use confirmations::Confirmations;
pub use ecdsa::{
    address_of_key, eth_sign_hash, recover_address, recover_eth_sign_address, sign_hash,
    sign_hash_with_key, sign_transaction, ECDSA_V_OFFSET, ETH_SIGN_V_OFFSET,
};
