use color_eyre::eyre::Result;

use crate::cli::TxArgs;
use crate::output::HashOutput;
use crate::tx_args::transaction_from_args;

pub fn run(args: TxArgs, json: bool) -> Result<()> {
    let tx = transaction_from_args(&args)?;
    let safe = tx.safe();

    let output = HashOutput {
        safe: safe.address,
        version: safe.version.clone(),
        chain_id: safe.chain_id,
        nonce: tx.params().nonce,
        domain_separator: tx.domain_separator(),
        struct_hash: tx.struct_hash(),
        safe_tx_hash: tx.safe_tx_hash(),
    };

    output.print(json);

    Ok(())
}
