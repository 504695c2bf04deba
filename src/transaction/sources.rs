//! Building [`SafeTransaction`]s from the raw shapes they arrive in

use alloy::hex;
use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use serde::Deserialize;
use tracing::debug;

use super::SafeTransaction;
use crate::contracts::ISafe;
use crate::encoding::SafeTxParams;
use crate::error::{Error, Result};
use crate::safe::{parse_uint, Safe};
use crate::types::{parse_address, parse_hash, Operation};

/// Transaction details as served by the Safe client gateway, reduced to the
/// parts that feed the hash.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    #[serde(default)]
    pub tx_data: Option<TxData>,
    #[serde(default)]
    pub detailed_execution_info: Option<DetailedExecutionInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxData {
    #[serde(default)]
    pub hex_data: Option<String>,
    pub to: AddressInfo,
    pub value: String,
    pub operation: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressInfo {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetailedExecutionInfo {
    Multisig(MultisigExecutionInfo),
    Module {
        #[serde(default)]
        address: Option<AddressInfo>,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisigExecutionInfo {
    pub safe_tx_gas: String,
    pub base_gas: String,
    pub gas_price: String,
    pub gas_token: String,
    pub refund_receiver: AddressInfo,
    pub nonce: u64,
    #[serde(default)]
    pub safe_tx_hash: Option<String>,
}

/// `eth_sendTransaction` parameters received over WalletConnect.
/// Quantities are hex strings; gas and nonce fields of the request are not
/// Safe fields and are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WcSendTransactionRequest {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

impl SafeTransaction {
    /// Builds a transaction from client-gateway details. When the payload
    /// reports a `safeTxHash`, it must match the recomputed one.
    pub fn from_transaction_details(safe: Safe, details: &TransactionDetails) -> Result<Self> {
        let tx_data = details
            .tx_data
            .as_ref()
            .ok_or(Error::MissingField("txData"))?;

        let info = match &details.detailed_execution_info {
            Some(DetailedExecutionInfo::Multisig(info)) => info,
            _ => return Err(Error::MissingField("detailedExecutionInfo (MULTISIG)")),
        };

        let params = SafeTxParams {
            to: parse_address(&tx_data.to.value)?,
            value: parse_uint("value", &tx_data.value)?,
            data: decode_data("hexData", tx_data.hex_data.as_deref())?,
            operation: Operation::try_from(tx_data.operation)?,
            safe_tx_gas: parse_uint("safeTxGas", &info.safe_tx_gas)?,
            base_gas: parse_uint("baseGas", &info.base_gas)?,
            gas_price: parse_uint("gasPrice", &info.gas_price)?,
            gas_token: parse_address(&info.gas_token)?,
            refund_receiver: parse_address(&info.refund_receiver.value)?,
            nonce: U256::from(info.nonce),
        };

        let tx = Self::new(safe, params);
        if let Some(reported) = info.safe_tx_hash.as_deref() {
            tx.verify_expected_hash(parse_hash(reported)?)?;
        }
        Ok(tx)
    }

    /// Builds a `Call` from a WalletConnect request at the given Safe nonce.
    /// Gas and refund fields start at zero; `safeTxGas` may be set later with
    /// [`SafeTransaction::set_safe_tx_gas`].
    pub fn from_wallet_connect(
        safe: Safe,
        request: &WcSendTransactionRequest,
        nonce: U256,
    ) -> Result<Self> {
        let to = match request.to.as_deref() {
            Some(to) => parse_address(to)?,
            None => Address::ZERO,
        };
        let value = match request.value.as_deref() {
            Some(value) => parse_uint("value", value)?,
            None => U256::ZERO,
        };
        let data = decode_data("data", request.data.as_deref())?;

        let params = SafeTxParams::new(to, value, data, Operation::Call).with_nonce(nonce);
        Ok(Self::new(safe, params))
    }

    /// Decodes `execTransaction` calldata of an on-chain transaction executed
    /// at `nonce`. Returns the transaction and the packed signatures it carried.
    pub fn from_exec_transaction(safe: Safe, calldata: &[u8], nonce: U256) -> Result<(Self, Bytes)> {
        let call = ISafe::execTransactionCall::abi_decode(calldata)?;
        debug!(to = %call.to, %nonce, "decoded execTransaction calldata");

        let params = SafeTxParams {
            to: call.to,
            value: call.value,
            data: call.data,
            operation: Operation::try_from(call.operation)?,
            safe_tx_gas: call.safeTxGas,
            base_gas: call.baseGas,
            gas_price: call.gasPrice,
            gas_token: call.gasToken,
            refund_receiver: call.refundReceiver,
            nonce,
        };

        Ok((Self::new(safe, params), call.signatures))
    }
}

fn decode_data(what: &'static str, input: Option<&str>) -> Result<Bytes> {
    match input.map(str::trim) {
        None | Some("") | Some("0x") => Ok(Bytes::new()),
        Some(text) => hex::decode(text)
            .map(Bytes::from)
            .map_err(|e| Error::InvalidHex {
                what,
                reason: e.to_string(),
            }),
    }
}
