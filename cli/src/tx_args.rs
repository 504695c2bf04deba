//! Turns command-line arguments into library values

use alloy::primitives::{Address, U256};
use color_eyre::eyre::{Result, WrapErr};
use safe_tx::chain::chain_id_from_name;
use safe_tx::transaction::TransactionDetails;
use safe_tx::types::parse_address;
use safe_tx::{parse_uint, Operation, Safe, SafeTransaction, SafeTxParams};
use tracing::debug;

use crate::cli::{SafeArgs, TxArgs};

pub fn safe_from_args(args: &SafeArgs) -> Result<Safe> {
    let chain_id = match chain_id_from_name(&args.chain) {
        Some(id) => U256::from(id),
        None => parse_uint("chainId", &args.chain)?,
    };
    Ok(Safe::new(
        parse_address(&args.safe)?,
        args.safe_version.parse()?,
        chain_id,
    ))
}

pub fn transaction_from_args(args: &TxArgs) -> Result<SafeTransaction> {
    let safe = safe_from_args(&args.safe)?;

    if let Some(path) = &args.details {
        debug!(%path, "loading transaction details");
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read transaction details from {path}"))?;
        let details: TransactionDetails =
            serde_json::from_str(&text).wrap_err("Malformed transaction details")?;
        return Ok(SafeTransaction::from_transaction_details(safe, &details)?);
    }

    let to = match &args.to {
        Some(to) => parse_address(to)?,
        None => Address::ZERO,
    };
    let data = alloy::hex::decode(args.data.trim()).wrap_err("Invalid --data hex")?;

    let params = SafeTxParams::new(
        to,
        parse_uint("value", &args.value)?,
        data,
        Operation::try_from(args.operation)?,
    )
    .with_safe_tx_gas(parse_uint("safeTxGas", &args.safe_tx_gas)?)
    .with_base_gas(parse_uint("baseGas", &args.base_gas)?)
    .with_gas_price(parse_uint("gasPrice", &args.gas_price)?)
    .with_gas_token(optional_address(args.gas_token.as_deref())?)
    .with_refund_receiver(optional_address(args.refund_receiver.as_deref())?)
    .with_nonce(parse_uint("nonce", &args.nonce)?);

    Ok(safe.transaction(params))
}

fn optional_address(input: Option<&str>) -> Result<Address> {
    Ok(match input {
        Some(text) => parse_address(text)?,
        None => Address::ZERO,
    })
}
