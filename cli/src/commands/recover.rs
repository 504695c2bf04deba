use color_eyre::eyre::Result;
use safe_tx::types::parse_hash;
use safe_tx::{recover_address, recover_eth_sign_address, SafeSignature, SignatureKind};

use crate::cli::RecoverArgs;
use crate::output::RecoverOutput;

pub fn run(args: RecoverArgs, json: bool) -> Result<()> {
    let hash = parse_hash(&args.hash)?;
    let signature: SafeSignature = args.signature.parse()?;

    let eth_sign = signature.kind()? == SignatureKind::EthSign;
    let owner = if eth_sign {
        recover_eth_sign_address(hash, &signature)?
    } else {
        recover_address(hash, &signature)?
    };

    let output = RecoverOutput {
        hash,
        owner,
        eth_sign,
    };

    output.print(json);

    Ok(())
}
