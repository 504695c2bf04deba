use alloy::signers::local::PrivateKeySigner;
use color_eyre::eyre::{eyre, Result};
use safe_tx::types::parse_hash;
use safe_tx::{address_of_key, eth_sign_hash, sign_transaction};

use crate::cli::SignArgs;
use crate::output::SignOutput;
use crate::tx_args::transaction_from_args;
use crate::wallet::private_key;

pub fn run(args: SignArgs, json: bool) -> Result<()> {
    let tx = transaction_from_args(&args.tx)?;

    if let Some(expected) = &args.expected_hash {
        tx.verify_expected_hash(parse_hash(expected)?)?;
    }

    let key = private_key(&args.wallet)?;
    let signature = if args.eth_sign {
        tx.verify_hash()?;
        let signer = PrivateKeySigner::from_bytes(&key)
            .map_err(|e| eyre!("Invalid private key: {e}"))?;
        eth_sign_hash(&signer, tx.safe_tx_hash())?
    } else {
        sign_transaction(&tx, &key)?
    };

    let output = SignOutput {
        owner: address_of_key(&key)?,
        safe_tx_hash: tx.safe_tx_hash(),
        signature,
    };

    output.print(json);

    Ok(())
}
