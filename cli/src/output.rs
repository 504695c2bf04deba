use alloy::primitives::{Address, B256, U256};
use safe_tx::{SafeSignature, SafeVersion};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashOutput {
    pub safe: Address,
    pub version: SafeVersion,
    pub chain_id: U256,
    pub nonce: U256,
    pub domain_separator: B256,
    pub struct_hash: B256,
    pub safe_tx_hash: B256,
}

impl HashOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Safe: {} (v{}, chain {})", self.safe, self.version, self.chain_id);
            println!("Nonce: {}", self.nonce);
            println!("Domain separator: {}", self.domain_separator);
            println!("Struct hash: {}", self.struct_hash);
            println!("safeTxHash: {}", self.safe_tx_hash);
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOutput {
    pub owner: Address,
    pub safe_tx_hash: B256,
    pub signature: SafeSignature,
}

impl SignOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Owner: {}", self.owner);
            println!("safeTxHash: {}", self.safe_tx_hash);
            println!("Signature: {}", self.signature);
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoverOutput {
    pub hash: B256,
    pub owner: Address,
    pub eth_sign: bool,
}

impl RecoverOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("{}", self.owner);
        }
    }
}
