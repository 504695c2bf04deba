//! EIP-712 typed-data export for external signers (hardware wallets, dapps)
//!
//! The schema follows the Safe version: `dataGas` before 1.0.0, `baseGas`
//! after, and a `chainId` domain member from 1.3.0. The binary safeTxHash
//! does not depend on the member naming.

use alloy::hex;
use alloy::primitives::{keccak256, B256, U256};
use serde::{Serialize, Serializer};

use super::eip712::DomainSchema;
use crate::contracts::{LEGACY_SAFE_TX_TYPEHASH, SAFE_TX_TYPEHASH};
use crate::transaction::SafeTransaction;
use crate::types::{checksummed, SafeVersion};

/// Naming of the SafeTx struct members for a given Safe version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafeTxSchema {
    /// Safe < 1.0.0
    DataGas,
    /// Safe >= 1.0.0
    BaseGas,
}

impl SafeTxSchema {
    pub fn for_version(version: &SafeVersion) -> Self {
        if version.has_base_gas() {
            SafeTxSchema::BaseGas
        } else {
            SafeTxSchema::DataGas
        }
    }

    /// Name of the sixth member
    pub fn gas_field(&self) -> &'static str {
        match self {
            SafeTxSchema::DataGas => "dataGas",
            SafeTxSchema::BaseGas => "baseGas",
        }
    }

    /// The type hash a signer derives from this schema's encodeType
    pub fn type_hash(&self) -> B256 {
        match self {
            SafeTxSchema::DataGas => LEGACY_SAFE_TX_TYPEHASH,
            SafeTxSchema::BaseGas => SAFE_TX_TYPEHASH,
        }
    }

    fn fields(&self) -> Vec<TypedField> {
        vec![
            TypedField::new("to", "address"),
            TypedField::new("value", "uint256"),
            TypedField::new("data", "bytes"),
            TypedField::new("operation", "uint8"),
            TypedField::new("safeTxGas", "uint256"),
            TypedField::new(self.gas_field(), "uint256"),
            TypedField::new("gasPrice", "uint256"),
            TypedField::new("gasToken", "address"),
            TypedField::new("refundReceiver", "address"),
            TypedField::new("nonce", "uint256"),
        ]
    }
}

impl DomainSchema {
    fn fields(&self) -> Vec<TypedField> {
        match self {
            DomainSchema::VerifyingContract => {
                vec![TypedField::new("verifyingContract", "address")]
            }
            DomainSchema::ChainIdAndVerifyingContract => vec![
                TypedField::new("chainId", "uint256"),
                TypedField::new("verifyingContract", "address"),
            ],
        }
    }
}

/// One member of an EIP-712 struct type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypedField {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl TypedField {
    fn new(name: &'static str, kind: &'static str) -> Self {
        Self { name, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypedDataTypes {
    #[serde(rename = "EIP712Domain")]
    pub eip712_domain: Vec<TypedField>,
    #[serde(rename = "SafeTx")]
    pub safe_tx: Vec<TypedField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataDomain {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_chain_id"
    )]
    pub chain_id: Option<U256>,
    pub verifying_contract: String,
}

/// The `message` section. Exactly one of `base_gas` / `data_gas` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeTxMessage {
    pub to: String,
    pub value: String,
    pub data: String,
    pub operation: u8,
    pub safe_tx_gas: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_gas: Option<String>,
    pub gas_price: String,
    pub gas_token: String,
    pub refund_receiver: String,
    pub nonce: String,
}

/// EIP-712 `TypedData` document for a Safe transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeTypedData {
    pub types: TypedDataTypes,
    pub primary_type: &'static str,
    pub domain: TypedDataDomain,
    pub message: SafeTxMessage,
}

impl SafeTypedData {
    pub fn new(tx: &SafeTransaction) -> Self {
        let safe = tx.safe();
        let params = tx.params();
        let tx_schema = SafeTxSchema::for_version(&safe.version);
        let domain_schema = DomainSchema::for_version(&safe.version);

        let chain_id = match domain_schema {
            DomainSchema::VerifyingContract => None,
            DomainSchema::ChainIdAndVerifyingContract => Some(safe.chain_id),
        };

        let gas = params.base_gas.to_string();
        let (base_gas, data_gas) = match tx_schema {
            SafeTxSchema::BaseGas => (Some(gas), None),
            SafeTxSchema::DataGas => (None, Some(gas)),
        };

        Self {
            types: TypedDataTypes {
                eip712_domain: domain_schema.fields(),
                safe_tx: tx_schema.fields(),
            },
            primary_type: "SafeTx",
            domain: TypedDataDomain {
                chain_id,
                verifying_contract: checksummed(&safe.address),
            },
            message: SafeTxMessage {
                to: checksummed(&params.to),
                value: params.value.to_string(),
                data: hex::encode_prefixed(&params.data),
                operation: params.operation.as_u8(),
                safe_tx_gas: params.safe_tx_gas.to_string(),
                base_gas,
                data_gas,
                gas_price: params.gas_price.to_string(),
                gas_token: checksummed(&params.gas_token),
                refund_receiver: checksummed(&params.refund_receiver),
                nonce: params.nonce.to_string(),
            },
        }
    }

    /// `encodeType` of the primary type, e.g. `SafeTx(address to,...)`
    pub fn encode_type(&self) -> String {
        let members = self
            .types
            .safe_tx
            .iter()
            .map(|field| format!("{} {}", field.kind, field.name))
            .collect::<Vec<_>>()
            .join(",");
        format!("{}({})", self.primary_type, members)
    }

    /// keccak256 of [`Self::encode_type`]
    pub fn type_hash(&self) -> B256 {
        keccak256(self.encode_type())
    }

    /// Compact JSON text
    pub fn to_json(&self) -> String {
        // Every member is a string, an integer or a sequence of those.
        serde_json::to_string(self).expect("typed data is always serializable")
    }

    /// Indented JSON text
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).expect("typed data is always serializable")
    }
}

/// Typed-data JSON for `tx`
pub fn typed_data_json(tx: &SafeTransaction) -> String {
    SafeTypedData::new(tx).to_json()
}

impl SafeTransaction {
    /// The EIP-712 typed-data document for external signers
    pub fn typed_data(&self) -> SafeTypedData {
        SafeTypedData::new(self)
    }
}

/// A JSON number when it fits in u64, otherwise a decimal string
fn serialize_chain_id<S: Serializer>(
    chain_id: &Option<U256>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match chain_id {
        Some(id) => match u64::try_from(*id) {
            Ok(small) => serializer.serialize_u64(small),
            Err(_) => serializer.collect_str(id),
        },
        None => serializer.serialize_none(),
    }
}
