use color_eyre::eyre::Result;

use crate::cli::TxArgs;
use crate::tx_args::transaction_from_args;

/// Typed data is JSON either way
pub fn run(args: TxArgs) -> Result<()> {
    let tx = transaction_from_args(&args)?;
    println!("{}", tx.typed_data().to_json_pretty());
    Ok(())
}
